//! URL params -> search state.

use crate::number::{parse_leading_float, parse_leading_int};
use crate::options::ParseOptions;
use crate::params::SearchParams;
use crate::schema::{FilterType, PaginationType, SearchSchema};
use crate::state::{FilterValue, RangeValue, SearchState};

/// Parse URL params into a search state using `schema`.
///
/// Parsing is best effort: values that cannot be understood are dropped
/// (or replaced by defaults) rather than reported. Range bounds that are not
/// numbers become `NaN`.
///
/// ```rust
/// use turbo_urlstate::prelude::*;
///
/// let schema = SearchSchema::new()
///     .filter("color", FilterFieldConfig::multiple("color"))
///     .filter("price", FilterFieldConfig::range("price"));
/// let params = SearchParams::parse("?color=red&color=blue&price=10-50");
///
/// let state = parse_search_state(&params, &schema, ParseOptions::default());
/// assert_eq!(state.filter("color"), Some(&FilterValue::multiple(["red", "blue"])));
/// assert_eq!(state.filter("price"), Some(&FilterValue::range(Some(10.0), Some(50.0))));
/// ```
pub fn parse_search_state(
    params: &SearchParams,
    schema: &SearchSchema,
    options: ParseOptions,
) -> SearchState {
    let mut state = SearchState::new();

    for field in &schema.filters {
        let config = &field.config;
        let parsed = match config.filter_type {
            FilterType::Single => params
                .get(&config.param)
                .filter(|v| !v.is_empty())
                .map(FilterValue::single),
            FilterType::Multiple => {
                let values = params.get_all(&config.param);
                if values.is_empty() {
                    None
                } else {
                    Some(FilterValue::multiple(values))
                }
            }
            FilterType::Range => params
                .get(&config.param)
                .filter(|v| !v.is_empty())
                .and_then(parse_range)
                .map(FilterValue::Range),
        };

        match parsed {
            Some(value) => {
                state.filters.insert(field.key.clone(), value);
            }
            None => {
                if let (true, Some(default)) = (options.include_defaults, &config.default) {
                    state.filters.insert(field.key.clone(), default.clone());
                }
            }
        }
    }

    if let Some(sort) = &schema.sort {
        match params.get(&sort.param).filter(|v| !v.is_empty()) {
            Some(value) if sort.accepts(value) => state.sort = Some(value.to_string()),
            Some(value) => {
                tracing::debug!(param = %sort.param, value, "dropping sort value not in valid_values");
            }
            None => {
                if options.include_defaults {
                    state.sort = sort.default.clone().filter(|d| !d.is_empty());
                }
            }
        }
    }

    if let Some(pagination) = &schema.pagination {
        match pagination.pagination_type {
            PaginationType::Page => {
                let page = params
                    .get(&pagination.param)
                    .filter(|v| !v.is_empty())
                    .and_then(parse_leading_int);
                match page {
                    Some(page) if page > 0 => state.page = Some(page as u64),
                    _ => {
                        if page.is_some() {
                            tracing::debug!(param = %pagination.param, ?page, "ignoring non-positive page");
                        }
                        if options.include_defaults {
                            state.page = pagination.default_page.filter(|p| *p > 0);
                        }
                    }
                }
            }
            PaginationType::Cursor => {
                state.cursor = params
                    .get(&pagination.param)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string);
            }
        }
    }

    state
}

/// Parse `"min-max"`; either side may be empty.
///
/// Only the first two `-`-separated pieces are read, so negative bounds are
/// not expressible. Returns `None` when both sides are empty.
fn parse_range(raw: &str) -> Option<RangeValue> {
    let mut pieces = raw.split('-');
    let min_str = pieces.next().unwrap_or("");
    let max_str = pieces.next().unwrap_or("");

    let min = (!min_str.is_empty()).then(|| parse_leading_float(min_str));
    let max = (!max_str.is_empty()).then(|| parse_leading_float(max_str));

    if min.is_none() && max.is_none() {
        return None;
    }
    if min.is_some_and(f64::is_nan) || max.is_some_and(f64::is_nan) {
        tracing::debug!(raw, "range bound is not a number");
    }

    Some(RangeValue::new(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FilterFieldConfig, PaginationConfig, SortFieldConfig};

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
            .sort(SortFieldConfig::new("sort").with_default("relevance"))
            .pagination(PaginationConfig::page("page").with_default_page(1))
    }

    fn parse(query: &str) -> SearchState {
        parse_search_state(&SearchParams::parse(query), &base_schema(), ParseOptions::default())
    }

    #[test]
    fn test_single_filter() {
        let state = parse("?cat=electronics");
        assert_eq!(state.filter("category"), Some(&FilterValue::single("electronics")));
        assert!(state.filter("color").is_none());
    }

    #[test]
    fn test_single_filter_takes_first_value() {
        let state = parse("?cat=a&cat=b");
        assert_eq!(state.filter("category"), Some(&FilterValue::single("a")));
    }

    #[test]
    fn test_empty_single_is_absent() {
        assert!(parse("?cat=").filter("category").is_none());
    }

    #[test]
    fn test_multiple_filter() {
        let state = parse("?color=red&color=blue");
        assert_eq!(state.filter("color"), Some(&FilterValue::multiple(["red", "blue"])));
    }

    #[test]
    fn test_range_filter() {
        assert_eq!(
            parse("?price=10-50").filter("price"),
            Some(&FilterValue::range(Some(10.0), Some(50.0)))
        );
        assert_eq!(
            parse("?price=10-").filter("price"),
            Some(&FilterValue::range(Some(10.0), None))
        );
        assert_eq!(
            parse("?price=-50").filter("price"),
            Some(&FilterValue::range(None, Some(50.0)))
        );
        assert_eq!(
            parse("?price=10.5-20.25").filter("price"),
            Some(&FilterValue::range(Some(10.5), Some(20.25)))
        );
    }

    #[test]
    fn test_range_with_extra_dash_uses_first_two_pieces() {
        assert_eq!(
            parse("?price=10-50-60").filter("price"),
            Some(&FilterValue::range(Some(10.0), Some(50.0)))
        );
    }

    #[test]
    fn test_range_of_only_dash_is_absent() {
        assert!(parse("?price=-").filter("price").is_none());
    }

    #[test]
    fn test_malformed_range_is_nan() {
        let state = parse("?price=invalid");
        let range = state.filter("price").and_then(FilterValue::as_range).unwrap();
        assert!(range.min.unwrap().is_nan());
        assert!(range.max.is_none());
    }

    #[test]
    fn test_sort() {
        assert_eq!(parse("?sort=price-asc").sort.as_deref(), Some("price-asc"));
    }

    #[test]
    fn test_sort_valid_values() {
        let schema = SearchSchema::new()
            .sort(SortFieldConfig::new("sort").with_valid_values(["relevance", "price"]));

        let valid = parse_search_state(&SearchParams::parse("?sort=relevance"), &schema, ParseOptions::default());
        let invalid = parse_search_state(&SearchParams::parse("?sort=invalid"), &schema, ParseOptions::default());

        assert_eq!(valid.sort.as_deref(), Some("relevance"));
        assert!(invalid.sort.is_none());
    }

    #[test]
    fn test_rejected_sort_does_not_fall_back_to_default() {
        let schema = SearchSchema::new().sort(
            SortFieldConfig::new("sort")
                .with_default("relevance")
                .with_valid_values(["relevance", "price"]),
        );
        let state = parse_search_state(&SearchParams::parse("?sort=bogus"), &schema, ParseOptions::default());
        assert!(state.sort.is_none());
    }

    #[test]
    fn test_page() {
        assert_eq!(parse("?page=2").page, Some(2));
        assert_eq!(parse("?page=3abc").page, Some(3));
    }

    #[test]
    fn test_oversized_page_saturates() {
        assert_eq!(parse("?page=99999999999999999999").page, Some(i64::MAX as u64));
    }

    #[test]
    fn test_non_positive_page_ignored() {
        assert!(parse("?page=0").page.is_none());
        assert!(parse("?page=-1").page.is_none());
        assert!(parse("?page=abc").page.is_none());
    }

    #[test]
    fn test_cursor() {
        let schema = SearchSchema::new().pagination(PaginationConfig::cursor("cursor"));
        let state = parse_search_state(&SearchParams::parse("?cursor=abc123"), &schema, ParseOptions::default());
        assert_eq!(state.cursor.as_deref(), Some("abc123"));
        assert!(state.page.is_none());
    }

    #[test]
    fn test_includes_defaults() {
        let state = parse_search_state(&SearchParams::new(), &defaults_schema(), ParseOptions::default());
        assert_eq!(state.filter("category"), Some(&FilterValue::single("all")));
        assert_eq!(state.sort.as_deref(), Some("relevance"));
        assert_eq!(state.page, Some(1));
    }

    #[test]
    fn test_excludes_defaults() {
        let state = parse_search_state(
            &SearchParams::new(),
            &defaults_schema(),
            ParseOptions::without_defaults(),
        );
        assert!(state.filter("category").is_none());
        assert!(state.sort.is_none());
        assert!(state.page.is_none());
    }

    #[test]
    fn test_invalid_page_falls_back_to_default() {
        let state = parse_search_state(
            &SearchParams::parse("?page=0"),
            &defaults_schema(),
            ParseOptions::default(),
        );
        assert_eq!(state.page, Some(1));
    }

    #[test]
    fn test_multiple_default_only_when_no_values() {
        let schema = SearchSchema::new()
            .filter("color", FilterFieldConfig::multiple("color").with_default(vec!["black".to_string()]));

        let absent = parse_search_state(&SearchParams::new(), &schema, ParseOptions::default());
        assert_eq!(absent.filter("color"), Some(&FilterValue::multiple(["black"])));

        let present = parse_search_state(&SearchParams::parse("color=red"), &schema, ParseOptions::default());
        assert_eq!(present.filter("color"), Some(&FilterValue::multiple(["red"])));
    }

    #[test]
    fn test_empty_params() {
        let state = parse_search_state(&SearchParams::new(), &base_schema(), ParseOptions::without_defaults());
        assert!(state.is_empty());
    }

    #[test]
    fn test_unknown_params_ignored() {
        let state = parse("?utm_source=mail&cat=shoes");
        assert_eq!(state.filters.len(), 1);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let params = SearchParams::parse("?cat=electronics&color=red");
        let before = params.clone();
        parse_search_state(&params, &base_schema(), ParseOptions::default());
        assert_eq!(params, before);
    }
}
