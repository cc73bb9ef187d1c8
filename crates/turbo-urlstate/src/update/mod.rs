//! Pure search-state updates. None of these need the schema.

mod filters;
mod pagination;
mod sort;

pub use filters::{clear_all_filters, clear_filter, set_range_filter, toggle_filter};
pub use pagination::{set_cursor, set_page};
pub use sort::set_sort;
