//! Read helpers for rendering filter controls.

use crate::state::{FilterValue, RangeValue, SearchState};

/// Selected values of a filter as a list.
///
/// A single value becomes a one-element list; missing filters and ranges give
/// an empty list.
pub fn get_filter_values(state: &SearchState, filter_key: &str) -> Vec<String> {
    match state.filters.get(filter_key) {
        Some(FilterValue::Multiple(values)) => values.clone(),
        Some(FilterValue::Single(value)) => vec![value.clone()],
        Some(FilterValue::Range(_)) | None => Vec::new(),
    }
}

/// Bounds of a range filter; both `None` when the filter is missing or not a
/// range.
pub fn get_range_filter(state: &SearchState, filter_key: &str) -> RangeValue {
    state
        .filters
        .get(filter_key)
        .and_then(FilterValue::as_range)
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SearchState {
        SearchState::new()
            .with_filter("availability", FilterValue::multiple(["in-stock", "pre-order"]))
            .with_filter("category", "shoes")
            .with_filter("price", RangeValue::between(10.0, 50.0))
    }

    #[test]
    fn test_filter_values() {
        assert_eq!(get_filter_values(&state(), "availability"), vec!["in-stock", "pre-order"]);
        assert_eq!(get_filter_values(&state(), "category"), vec!["shoes"]);
        assert!(get_filter_values(&state(), "price").is_empty());
        assert!(get_filter_values(&state(), "missing").is_empty());
    }

    #[test]
    fn test_range_filter() {
        assert_eq!(get_range_filter(&state(), "price"), RangeValue::between(10.0, 50.0));
        assert_eq!(get_range_filter(&state(), "category"), RangeValue::default());
        assert_eq!(get_range_filter(&state(), "missing"), RangeValue::default());
    }

    #[test]
    fn test_range_filter_partial() {
        let state = SearchState::new().with_filter("price", RangeValue::at_most(20.0));
        let range = get_range_filter(&state, "price");
        assert_eq!(range.min, None);
        assert_eq!(range.max, Some(20.0));
    }
}
