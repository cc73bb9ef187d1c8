//! Schema-driven search state for TurboCommerce storefronts.
//!
//! Keeps a listing page's filters, sort and pagination in the URL:
//!
//! - **Schema**: declare which filters exist and the param each one uses
//! - **Codec**: parse params into a [`SearchState`], serialize it back,
//!   patch the current URL
//! - **Updates**: pure helpers to toggle/set/clear filters, sort and page
//!
//! Everything here is synchronous and side-effect free; every update returns
//! a new value.
//!
//! # Example
//!
//! ```rust
//! use turbo_urlstate::prelude::*;
//!
//! let schema = define_search_schema(
//!     SearchSchema::new()
//!         .filter("category", FilterFieldConfig::single("cat"))
//!         .filter("color", FilterFieldConfig::multiple("color"))
//!         .filter("price", FilterFieldConfig::range("price"))
//!         .sort(SortFieldConfig::new("sort").with_default("relevance"))
//!         .pagination(PaginationConfig::page("page").with_default_page(1)),
//! );
//!
//! let current = SearchParams::parse("?cat=shoes&color=red&utm_source=mail");
//! let state = parse_search_state(&current, &schema, ParseOptions::default());
//!
//! let state = toggle_filter(&state, "color", "blue");
//! let state = set_page(&state, 2);
//!
//! let next = patch_search_params(&current, &state, &schema, PatchOptions::preserving_unknown());
//! assert_eq!(next.to_string(), "cat=shoes&color=red&color=blue&page=2&utm_source=mail");
//! ```

pub mod error;
pub mod number;
pub mod options;
pub mod params;
pub mod schema;
pub mod selectors;
pub mod state;

pub mod codec;
pub mod update;

pub use codec::{parse_search_state, patch_search_params, serialize_search_state};
pub use error::SchemaError;
pub use options::{ParseOptions, PatchOptions, SerializeOptions};
pub use params::SearchParams;
pub use schema::{
    define_search_schema, FilterField, FilterFieldConfig, FilterType, PaginationConfig,
    PaginationType, SearchSchema, SortFieldConfig,
};
pub use selectors::{get_filter_values, get_range_filter};
pub use state::{FilterValue, RangeValue, SearchState};
pub use update::{
    clear_all_filters, clear_filter, set_cursor, set_page, set_range_filter, set_sort,
    toggle_filter,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::SchemaError;
    pub use crate::options::{ParseOptions, PatchOptions, SerializeOptions};
    pub use crate::params::SearchParams;
    pub use crate::schema::{
        define_search_schema, FilterField, FilterFieldConfig, FilterType, PaginationConfig,
        PaginationType, SearchSchema, SortFieldConfig,
    };
    pub use crate::state::{FilterValue, RangeValue, SearchState};

    // Codec
    pub use crate::codec::{parse_search_state, patch_search_params, serialize_search_state};

    // Updates and selectors
    pub use crate::selectors::{get_filter_values, get_range_filter};
    pub use crate::update::{
        clear_all_filters, clear_filter, set_cursor, set_page, set_range_filter, set_sort,
        toggle_filter,
    };
}
