//! Search schema: which filters, sort and pagination a page understands,
//! and the URL param each one lives under.
//!
//! A schema is declared once per page, either in code:
//!
//! ```rust
//! use turbo_urlstate::prelude::*;
//!
//! let schema = define_search_schema(
//!     SearchSchema::new()
//!         .filter("category", FilterFieldConfig::single("category"))
//!         .filter("color", FilterFieldConfig::multiple("color"))
//!         .filter("price", FilterFieldConfig::range("price"))
//!         .sort(SortFieldConfig::new("sort").with_default("relevance"))
//!         .pagination(PaginationConfig::page("page").with_default_page(1)),
//! );
//! assert_eq!(schema.filters.len(), 3);
//! ```
//!
//! or loaded from JSON / TOML configuration with [`SearchSchema::from_json_str`]
//! and [`SearchSchema::from_toml_str`].

use crate::error::SchemaError;
use crate::state::FilterValue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Shape of a filter's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Single value (radio, dropdown).
    Single,
    /// Multiple values (checkboxes).
    Multiple,
    /// Numeric range (price, rating).
    Range,
}

impl FilterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterType::Single => "single",
            FilterType::Multiple => "multiple",
            FilterType::Range => "range",
        }
    }
}

/// Configuration of one filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterFieldConfig {
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    /// URL param name.
    pub param: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FilterValue>,
}

impl FilterFieldConfig {
    pub fn new(filter_type: FilterType, param: impl Into<String>) -> Self {
        Self {
            filter_type,
            param: param.into(),
            default: None,
        }
    }

    pub fn single(param: impl Into<String>) -> Self {
        Self::new(FilterType::Single, param)
    }

    pub fn multiple(param: impl Into<String>) -> Self {
        Self::new(FilterType::Multiple, param)
    }

    pub fn range(param: impl Into<String>) -> Self {
        Self::new(FilterType::Range, param)
    }

    pub fn with_default(mut self, default: impl Into<FilterValue>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A filter declaration: logical key plus its configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterField {
    /// Logical filter key used in [`SearchState::filters`](crate::SearchState).
    pub key: String,
    #[serde(flatten)]
    pub config: FilterFieldConfig,
}

/// Sort configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortFieldConfig {
    pub param: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Accepted sort values. Anything else in the URL is dropped on parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_values: Option<Vec<String>>,
}

impl SortFieldConfig {
    pub fn new(param: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            default: None,
            valid_values: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_valid_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Whether `value` passes the `valid_values` list (always true without one).
    pub fn accepts(&self, value: &str) -> bool {
        self.valid_values
            .as_ref()
            .map(|valid| valid.iter().any(|v| v == value))
            .unwrap_or(true)
    }
}

/// Pagination style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaginationType {
    /// Page numbers.
    Page,
    /// Opaque cursors (infinite scroll, "load more").
    Cursor,
}

/// Pagination configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(rename = "type")]
    pub pagination_type: PaginationType,
    pub param: String,
    /// Default page number (page pagination only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page: Option<u64>,
}

impl PaginationConfig {
    pub fn page(param: impl Into<String>) -> Self {
        Self {
            pagination_type: PaginationType::Page,
            param: param.into(),
            default_page: None,
        }
    }

    pub fn cursor(param: impl Into<String>) -> Self {
        Self {
            pagination_type: PaginationType::Cursor,
            param: param.into(),
            default_page: None,
        }
    }

    pub fn with_default_page(mut self, page: u64) -> Self {
        self.default_page = Some(page);
        self
    }
}

/// Complete search schema.
///
/// Filters keep their declaration order. Two filters sharing a `param` are
/// allowed but will not round-trip cleanly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSchema {
    #[serde(default)]
    pub filters: Vec<FilterField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortFieldConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationConfig>,
}

impl SearchSchema {
    /// Create a schema with no filters, sort or pagination.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a filter.
    pub fn filter(mut self, key: impl Into<String>, config: FilterFieldConfig) -> Self {
        self.filters.push(FilterField {
            key: key.into(),
            config,
        });
        self
    }

    pub fn sort(mut self, sort: SortFieldConfig) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Look up a filter's configuration by key.
    pub fn filter_config(&self, key: &str) -> Option<&FilterFieldConfig> {
        self.filters
            .iter()
            .find(|field| field.key == key)
            .map(|field| &field.config)
    }

    /// Every URL param the schema declares (filters, sort, pagination).
    pub fn param_names(&self) -> HashSet<&str> {
        let mut names: HashSet<&str> = self
            .filters
            .iter()
            .map(|field| field.config.param.as_str())
            .collect();
        if let Some(sort) = &self.sort {
            names.insert(sort.param.as_str());
        }
        if let Some(pagination) = &self.pagination {
            names.insert(pagination.param.as_str());
        }
        names
    }

    /// Load a schema from JSON.
    pub fn from_json_str(input: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(input)?;
        tracing::debug!(filters = schema.filters.len(), "loaded search schema from json");
        Ok(schema)
    }

    /// Load a schema from TOML.
    pub fn from_toml_str(input: &str) -> Result<Self, SchemaError> {
        let schema: Self = toml::from_str(input)?;
        tracing::debug!(filters = schema.filters.len(), "loaded search schema from toml");
        Ok(schema)
    }

    /// Render the schema as JSON.
    pub fn to_json_string(&self) -> Result<String, SchemaError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Declare a search schema.
///
/// Returns its input unchanged; it exists so schema declarations read the
/// same everywhere.
pub fn define_search_schema(schema: SearchSchema) -> SearchSchema {
    schema
}
