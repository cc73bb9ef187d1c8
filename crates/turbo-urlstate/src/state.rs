//! Decoded search state: filters, sort and pagination.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A numeric range with optional bounds (price slider, rating).
///
/// Bounds parsed from a malformed URL value are `NaN`, not `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl RangeValue {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Range with only a lower bound.
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Range with only an upper bound.
    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// True when neither bound is set.
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// A filter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// One value (radio, dropdown).
    Single(String),
    /// Several values (checkboxes).
    Multiple(Vec<String>),
    /// Numeric range.
    Range(RangeValue),
}

impl FilterValue {
    pub fn single(value: impl Into<String>) -> Self {
        FilterValue::Single(value.into())
    }

    pub fn multiple<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterValue::Multiple(values.into_iter().map(Into::into).collect())
    }

    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        FilterValue::Range(RangeValue::new(min, max))
    }

    pub fn as_single(&self) -> Option<&str> {
        match self {
            FilterValue::Single(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            FilterValue::Multiple(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeValue> {
        match self {
            FilterValue::Range(range) => Some(range),
            _ => None,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Single(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Single(s)
    }
}

impl From<Vec<String>> for FilterValue {
    fn from(values: Vec<String>) -> Self {
        FilterValue::Multiple(values)
    }
}

impl From<RangeValue> for FilterValue {
    fn from(range: RangeValue) -> Self {
        FilterValue::Range(range)
    }
}

/// Current filters, sort and pagination of a search page.
///
/// A missing filter key means "no value". All update functions return a new
/// state and leave the input untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    /// Filter key -> value.
    #[serde(default)]
    pub filters: BTreeMap<String, FilterValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Current page (1-indexed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl SearchState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a filter value by key.
    pub fn filter(&self, key: &str) -> Option<&FilterValue> {
        self.filters.get(key)
    }

    /// Builder-style filter setter.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.filters.insert(key.into(), value.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    /// True when no filter, sort, page or cursor is set.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.sort.is_none() && self.page.is_none() && self.cursor.is_none()
    }
}
