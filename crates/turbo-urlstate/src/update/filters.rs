//! Filter updates.

use crate::state::{FilterValue, RangeValue, SearchState};

/// Toggle `value` in a filter.
///
/// - list: add `value` if missing, remove it if present; the key is dropped
///   once the list is empty.
/// - single value: cleared when equal to `value`, replaced otherwise.
/// - missing (or a range): becomes the one-element list `[value]`.
///
/// ```rust
/// use turbo_urlstate::prelude::*;
///
/// let state = toggle_filter(&SearchState::new(), "color", "red");
/// assert_eq!(state.filter("color"), Some(&FilterValue::multiple(["red"])));
///
/// let state = toggle_filter(&state, "color", "red");
/// assert!(state.filter("color").is_none());
/// ```
pub fn toggle_filter(state: &SearchState, filter_key: &str, value: &str) -> SearchState {
    let mut next = state.clone();

    match state.filters.get(filter_key) {
        Some(FilterValue::Multiple(current)) => {
            let values: Vec<String> = if current.iter().any(|v| v == value) {
                current.iter().filter(|v| *v != value).cloned().collect()
            } else {
                current.iter().cloned().chain([value.to_string()]).collect()
            };

            if values.is_empty() {
                next.filters.remove(filter_key);
            } else {
                next.filters
                    .insert(filter_key.to_string(), FilterValue::Multiple(values));
            }
        }
        Some(FilterValue::Single(current)) if current == value => {
            next.filters.remove(filter_key);
        }
        Some(FilterValue::Single(_)) => {
            next.filters
                .insert(filter_key.to_string(), FilterValue::single(value));
        }
        Some(FilterValue::Range(_)) | None => {
            next.filters.insert(
                filter_key.to_string(),
                FilterValue::Multiple(vec![value.to_string()]),
            );
        }
    }

    next
}

/// Set a range filter. A range with neither bound clears the filter.
pub fn set_range_filter(state: &SearchState, filter_key: &str, range: RangeValue) -> SearchState {
    let mut next = state.clone();
    if range.is_unbounded() {
        next.filters.remove(filter_key);
    } else {
        next.filters
            .insert(filter_key.to_string(), FilterValue::Range(range));
    }
    next
}

/// Remove one filter.
pub fn clear_filter(state: &SearchState, filter_key: &str) -> SearchState {
    let mut next = state.clone();
    next.filters.remove(filter_key);
    next
}

/// Remove every filter; sort and pagination are kept.
pub fn clear_all_filters(state: &SearchState) -> SearchState {
    SearchState {
        filters: Default::default(),
        ..state.clone()
    }
}
