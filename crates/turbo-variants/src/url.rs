//! Selected options <-> URL params.
//!
//! Option names are used directly as param keys (`?Color=Red&Size=Large`).
//! Merchants can rename options, so passing an allowlist of known names is
//! recommended on both sides.

use crate::types::SelectedOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use turbo_urlstate::SearchParams;

/// A record entry: one value or a list where the last one counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    One(String),
    Many(Vec<String>),
}

impl RecordValue {
    /// The value that wins for this entry, if any.
    pub fn last(&self) -> Option<&str> {
        match self {
            RecordValue::One(value) => Some(value),
            RecordValue::Many(values) => values.last().map(String::as_str),
        }
    }
}

impl From<&str> for RecordValue {
    fn from(value: &str) -> Self {
        RecordValue::One(value.to_string())
    }
}

impl From<String> for RecordValue {
    fn from(value: String) -> Self {
        RecordValue::One(value)
    }
}

impl From<Vec<String>> for RecordValue {
    fn from(values: Vec<String>) -> Self {
        RecordValue::Many(values)
    }
}

/// Something selected options can be read from.
pub trait OptionSource {
    /// Each distinct key once, in first-appearance order, with the value that
    /// wins for it. Keys with no value at all are left out.
    fn option_entries(&self) -> Vec<(&str, &str)>;
}

impl OptionSource for SearchParams {
    // The last value wins, even when it is blank.
    fn option_entries(&self) -> Vec<(&str, &str)> {
        self.keys()
            .into_iter()
            .filter_map(|key| self.get_all(key).last().map(|value| (key, *value)))
            .collect()
    }
}

impl OptionSource for [(String, RecordValue)] {
    // A blank or empty entry never overrides an earlier usable one.
    fn option_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = Vec::new();
        for (key, value) in self {
            let Some(value) = value.last().filter(|v| !is_blank(v)) else {
                continue;
            };
            match entries.iter_mut().find(|entry| entry.0 == key.as_str()) {
                Some(existing) => existing.1 = value,
                None => entries.push((key.as_str(), value)),
            }
        }
        entries
    }
}

impl OptionSource for Vec<(String, RecordValue)> {
    fn option_entries(&self) -> Vec<(&str, &str)> {
        self.as_slice().option_entries()
    }
}

impl OptionSource for BTreeMap<String, RecordValue> {
    fn option_entries(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter_map(|(key, value)| value.last().map(|v| (key.as_str(), v)))
            .collect()
    }
}

/// Read a selection from URL params or a record.
///
/// When a name repeats, the last value wins. Blank values are skipped. With
/// `option_keys`, only those names are read; output order still follows the
/// source.
///
/// ```rust
/// use turbo_variants::prelude::*;
/// use turbo_urlstate::SearchParams;
///
/// let params = SearchParams::parse("?Color=Red&utm=x&Size=Large&Color=Blue");
/// let selected = get_selected_options_from_url(&params, Some(&["Color", "Size"]));
/// assert_eq!(
///     selected,
///     vec![SelectedOption::new("Color", "Blue"), SelectedOption::new("Size", "Large")]
/// );
/// ```
pub fn get_selected_options_from_url<S: OptionSource + ?Sized>(
    source: &S,
    option_keys: Option<&[&str]>,
) -> Vec<SelectedOption> {
    source
        .option_entries()
        .into_iter()
        .filter(|(key, _)| option_keys.map_or(true, |keys| keys.contains(key)))
        .filter(|(key, value)| {
            let keep = !is_blank(value);
            if !keep {
                tracing::trace!(option = *key, "skipping blank option value");
            }
            keep
        })
        .map(|(key, value)| SelectedOption::new(key, value))
        .collect()
}

/// Write a selection as URL params.
///
/// With `option_keys`, params follow that order and only listed names are
/// written (the first selected option with each name). Blank values are
/// skipped; a repeated name overwrites the earlier value in place.
///
/// ```rust
/// use turbo_variants::prelude::*;
///
/// let selected = [SelectedOption::new("Size", "Large"), SelectedOption::new("Color", "Red")];
/// let params = selected_options_to_url_params(&selected, Some(&["Color", "Size"]));
/// assert_eq!(params.to_string(), "Color=Red&Size=Large");
/// ```
pub fn selected_options_to_url_params(
    selected_options: &[SelectedOption],
    option_keys: Option<&[&str]>,
) -> SearchParams {
    let ordered: Vec<&SelectedOption> = match option_keys {
        Some(keys) => keys
            .iter()
            .filter_map(|key| selected_options.iter().find(|opt| opt.name == *key))
            .collect(),
        None => selected_options.iter().collect(),
    };

    let mut params = SearchParams::new();
    for option in ordered {
        if is_blank(&option.value) {
            continue;
        }
        params.set(option.name.as_str(), option.value.as_str());
    }
    params
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
