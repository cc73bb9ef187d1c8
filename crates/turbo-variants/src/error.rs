//! Variant engine error types.

use thiserror::Error;

/// Errors from the variant engine's fallible edges.
///
/// Selection itself never fails: a miss is reported through
/// [`FindVariantReason`](crate::FindVariantReason).
#[derive(Error, Debug)]
pub enum VariantsError {
    /// Unrecognised default-variant policy name.
    #[error("Unknown default variant policy: {0}")]
    UnknownPolicy(String),

    /// Malformed product JSON.
    #[error("Invalid product JSON: {0}")]
    Json(#[from] serde_json::Error),
}
