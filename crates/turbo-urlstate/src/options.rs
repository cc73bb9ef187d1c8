//! Options for parse, serialize and patch.

use serde::{Deserialize, Serialize};

/// Options for [`parse_search_state`](crate::parse_search_state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Fill missing values from schema defaults.
    pub include_defaults: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            include_defaults: true,
        }
    }
}

impl ParseOptions {
    /// Parse only what is in the URL.
    pub fn without_defaults() -> Self {
        Self {
            include_defaults: false,
        }
    }
}

/// Options for [`serialize_search_state`](crate::serialize_search_state).
///
/// Removal semantics: a single filter set to `""`, a multiple filter set to
/// `[]` and a range with neither bound all produce no param.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SerializeOptions {
    /// Leave out values equal to their schema default.
    pub exclude_defaults: bool,
    /// Sort params by key for stable, cache-friendly URLs. Repeated keys keep
    /// their relative order.
    pub sort_params: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            exclude_defaults: true,
            sort_params: true,
        }
    }
}

impl SerializeOptions {
    /// Write every value explicitly, defaults included.
    pub fn with_defaults(mut self) -> Self {
        self.exclude_defaults = false;
        self
    }

    /// Keep schema order instead of sorting by key.
    pub fn unsorted(mut self) -> Self {
        self.sort_params = false;
        self
    }
}

/// Options for [`patch_search_params`](crate::patch_search_params).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchOptions {
    /// Keep params the schema does not declare (tracking ids, campaign tags).
    pub preserve_unknown_params: bool,
    pub serialize: SerializeOptions,
}

impl PatchOptions {
    pub fn preserving_unknown() -> Self {
        Self {
            preserve_unknown_params: true,
            serialize: SerializeOptions::default(),
        }
    }
}
