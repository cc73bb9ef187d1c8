//! Sort updates.

use crate::state::SearchState;

/// Set the sort value; `None` clears it.
pub fn set_sort(state: &SearchState, sort: Option<&str>) -> SearchState {
    SearchState {
        sort: sort.map(str::to_string),
        ..state.clone()
    }
}
