//! Schema loading errors.

use thiserror::Error;

/// Errors that can occur when loading a [`SearchSchema`](crate::SearchSchema)
/// from configuration text.
///
/// Parsing and serializing search state never fails; only configuration
/// loading does.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Malformed JSON schema.
    #[error("Invalid JSON schema: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML schema.
    #[error("Invalid TOML schema: {0}")]
    Toml(#[from] toml::de::Error),
}
