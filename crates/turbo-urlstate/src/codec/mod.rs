//! Schema-driven conversion between URL params and search state.

mod parse;
mod patch;
mod serialize;

pub use parse::parse_search_state;
pub use patch::patch_search_params;
pub use serialize::serialize_search_state;
