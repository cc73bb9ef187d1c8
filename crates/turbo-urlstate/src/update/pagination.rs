//! Page and cursor updates.

use crate::state::SearchState;

/// Set the page number (1-indexed). Zero or negative pages clear it.
pub fn set_page(state: &SearchState, page: i64) -> SearchState {
    SearchState {
        page: u64::try_from(page).ok().filter(|p| *p > 0),
        ..state.clone()
    }
}

/// Set the pagination cursor; `None` clears it.
pub fn set_cursor(state: &SearchState, cursor: Option<&str>) -> SearchState {
    SearchState {
        cursor: cursor.map(str::to_string),
        ..state.clone()
    }
}
