//! Search state -> URL params.

use crate::number::{format_number, locale_compare};
use crate::options::SerializeOptions;
use crate::params::SearchParams;
use crate::schema::{FilterType, PaginationType, SearchSchema};
use crate::state::{FilterValue, SearchState};

/// Serialize a search state into URL params using `schema`.
///
/// Filters not declared in the schema, and values whose shape does not match
/// the declared filter type, are not written.
///
/// ```rust
/// use turbo_urlstate::prelude::*;
///
/// let schema = SearchSchema::new()
///     .filter("color", FilterFieldConfig::multiple("color"))
///     .filter("price", FilterFieldConfig::range("price"));
/// let state = SearchState::new()
///     .with_filter("color", FilterValue::multiple(["red", "blue"]))
///     .with_filter("price", RangeValue::between(10.0, 50.0));
///
/// let params = serialize_search_state(&state, &schema, SerializeOptions::default());
/// assert_eq!(params.to_string(), "color=red&color=blue&price=10-50");
/// ```
pub fn serialize_search_state(
    state: &SearchState,
    schema: &SearchSchema,
    options: SerializeOptions,
) -> SearchParams {
    let SerializeOptions {
        exclude_defaults,
        sort_params,
    } = options;
    let mut pairs: Vec<(String, String)> = Vec::new();

    for field in &schema.filters {
        let config = &field.config;
        let Some(value) = state.filters.get(&field.key) else {
            continue;
        };
        let is_default = exclude_defaults && config.default.as_ref() == Some(value);

        match (config.filter_type, value) {
            (FilterType::Single, FilterValue::Single(v)) => {
                if v.is_empty() || is_default {
                    continue;
                }
                pairs.push((config.param.clone(), v.clone()));
            }
            (FilterType::Multiple, FilterValue::Multiple(values)) => {
                if values.is_empty() || is_default {
                    continue;
                }
                pairs.extend(values.iter().map(|v| (config.param.clone(), v.clone())));
            }
            (FilterType::Range, FilterValue::Range(range)) => {
                if range.is_unbounded() || is_default {
                    continue;
                }
                let min = range.min.map(format_number).unwrap_or_default();
                let max = range.max.map(format_number).unwrap_or_default();
                pairs.push((config.param.clone(), format!("{}-{}", min, max)));
            }
            (expected, _) => {
                tracing::trace!(
                    key = %field.key,
                    expected = expected.as_str(),
                    "skipping filter value with mismatched shape"
                );
            }
        }
    }

    if let (Some(sort), Some(value)) = (&schema.sort, &state.sort) {
        if !exclude_defaults || sort.default.as_ref() != Some(value) {
            pairs.push((sort.param.clone(), value.clone()));
        }
    }

    if let Some(pagination) = &schema.pagination {
        match pagination.pagination_type {
            PaginationType::Page => {
                if let Some(page) = state.page {
                    if !exclude_defaults || pagination.default_page != Some(page) {
                        pairs.push((pagination.param.clone(), page.to_string()));
                    }
                }
            }
            PaginationType::Cursor => {
                if let Some(cursor) = &state.cursor {
                    pairs.push((pagination.param.clone(), cursor.clone()));
                }
            }
        }
    }

    if sort_params {
        // stable: repeated keys keep their order
        pairs.sort_by(|(a, _), (b, _)| locale_compare(a, b));
    }

    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FilterFieldConfig, PaginationConfig, SortFieldConfig};
    use crate::state::RangeValue;

    fn base_schema() -> SearchSchema {
        SearchSchema::new()
            .filter("category", FilterFieldConfig::single("cat"))
            .filter("color", FilterFieldConfig::multiple("color"))
            .filter("price", FilterFieldConfig::range("price"))
            .sort(SortFieldConfig::new("sort"))
            .pagination(PaginationConfig::page("page"))
    }

    fn defaults_schema() -> SearchSchema {
        SearchSchema::new()
            .filter("category", FilterFieldConfig::single("cat").with_default("all"))
            .filter(
                "color",
                FilterFieldConfig::multiple("color").with_default(vec!["black".to_string()]),
            )
            .filter(
                "price",
                FilterFieldConfig::range("price").with_default(RangeValue::between(0.0, 100.0)),
            )
            .sort(SortFieldConfig::new("sort").with_default("relevance"))
            .pagination(PaginationConfig::page("page").with_default_page(1))
    }

    fn defaults_state() -> SearchState {
        SearchState::new()
            .with_filter("category", "all")
            .with_filter("color", FilterValue::multiple(["black"]))
            .with_filter("price", RangeValue::between(0.0, 100.0))
            .with_sort("relevance")
            .with_page(1)
    }

    fn serialize(state: &SearchState) -> String {
        serialize_search_state(state, &base_schema(), SerializeOptions::default()).to_string()
    }

    #[test]
    fn test_single_filter() {
        let state = SearchState::new().with_filter("category", "electronics");
        assert_eq!(serialize(&state), "cat=electronics");
    }

    #[test]
    fn test_multiple_filter() {
        let state = SearchState::new().with_filter("color", FilterValue::multiple(["red", "blue"]));
        assert_eq!(serialize(&state), "color=red&color=blue");
    }

    #[test]
    fn test_range_filter() {
        let both = SearchState::new().with_filter("price", RangeValue::between(10.0, 50.0));
        assert_eq!(serialize(&both), "price=10-50");

        let min_only = SearchState::new().with_filter("price", RangeValue::at_least(10.0));
        assert_eq!(serialize(&min_only), "price=10-");

        let max_only = SearchState::new().with_filter("price", RangeValue::at_most(50.0));
        assert_eq!(serialize(&max_only), "price=-50");

        let fractional = SearchState::new().with_filter("price", RangeValue::between(9.99, 19.5));
        assert_eq!(serialize(&fractional), "price=9.99-19.5");
    }

    #[test]
    fn test_removal_semantics() {
        let state = SearchState::new()
            .with_filter("category", "")
            .with_filter("color", FilterValue::Multiple(vec![]))
            .with_filter("price", RangeValue::default());
        assert_eq!(serialize(&state), "");
    }

    #[test]
    fn test_mismatched_shape_skipped() {
        let state = SearchState::new()
            .with_filter("category", FilterValue::multiple(["a"]))
            .with_filter("color", "red");
        assert_eq!(serialize(&state), "");
    }

    #[test]
    fn test_unknown_filter_keys_ignored() {
        let state = SearchState::new().with_filter("brand", "acme");
        assert_eq!(serialize(&state), "");
    }

    #[test]
    fn test_sort_and_page() {
        let state = SearchState::new().with_sort("price-asc").with_page(2);
        assert_eq!(serialize(&state), "page=2&sort=price-asc");
    }

    #[test]
    fn test_cursor() {
        let schema = SearchSchema::new().pagination(PaginationConfig::cursor("cursor"));
        let state = SearchState::new().with_cursor("abc123").with_page(4);
        let params = serialize_search_state(&state, &schema, SerializeOptions::default());
        assert_eq!(params.to_string(), "cursor=abc123");
    }

    #[test]
    fn test_excludes_defaults() {
        let params = serialize_search_state(&defaults_state(), &defaults_schema(), SerializeOptions::default());
        assert!(params.is_empty());
    }

    #[test]
    fn test_includes_defaults_when_asked() {
        let params = serialize_search_state(
            &defaults_state(),
            &defaults_schema(),
            SerializeOptions::default().with_defaults(),
        );
        assert_eq!(params.to_string(), "cat=all&color=black&page=1&price=0-100&sort=relevance");
    }

    #[test]
    fn test_non_default_values_written() {
        let state = defaults_state()
            .with_filter("color", FilterValue::multiple(["black", "white"]))
            .with_page(3);
        let params = serialize_search_state(&state, &defaults_schema(), SerializeOptions::default());
        assert_eq!(params.to_string(), "color=black&color=white&page=3");
    }

    #[test]
    fn test_sorted_by_key() {
        let schema = SearchSchema::new()
            .filter("zeta", FilterFieldConfig::single("z"))
            .filter("alpha", FilterFieldConfig::multiple("a"))
            .sort(SortFieldConfig::new("Sort"));
        let state = SearchState::new()
            .with_filter("zeta", "last")
            .with_filter("alpha", FilterValue::multiple(["2", "1"]))
            .with_sort("new");

        let sorted = serialize_search_state(&state, &schema, SerializeOptions::default());
        assert_eq!(sorted.to_string(), "a=2&a=1&Sort=new&z=last");

        let unsorted = serialize_search_state(&state, &schema, SerializeOptions::default().unsorted());
        assert_eq!(unsorted.to_string(), "z=last&a=2&a=1&Sort=new");
    }

    #[test]
    fn test_does_not_mutate_state() {
        let state = SearchState::new().with_filter("color", FilterValue::multiple(["red"]));
        let before = state.clone();
        serialize(&state);
        assert_eq!(state, before);
    }
}
