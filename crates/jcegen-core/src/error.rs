//! Error types for schema loading and validation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Error type for schema loading and validation
///
/// Generation itself never fails; these errors come from the loader and the
/// validation pass that run before it.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Schema file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Schema document is not valid TOML/JSON or has the wrong shape
    #[error("parse error: {0}")]
    Parse(String),

    /// File extension is neither `.toml` nor `.json`
    #[error("unsupported schema format: {0}")]
    UnsupportedFormat(String),

    /// Structure name is empty or not a Rust identifier
    #[error("invalid structure name: {0:?}")]
    InvalidName(String),

    /// Field name is empty or not a Rust identifier
    #[error("{structure}: invalid field name {field:?}")]
    InvalidFieldName { structure: String, field: String },

    /// Field has no type name
    #[error("{structure}.{field}: type name cannot be empty")]
    EmptyType { structure: String, field: String },

    /// Two fields share a name
    #[error("{structure}: duplicate field {field}")]
    DuplicateField { structure: String, field: String },

    /// Positional default tag does not fit in a JCE head
    #[error("{structure}.{field}: positional tag {tag} exceeds 255")]
    TagOverflow {
        structure: String,
        field: String,
        tag: u32,
    },

    /// Two fields resolve to the same wire tag
    #[error("{structure}: fields {first} and {second} both use tag {tag}")]
    DuplicateTag {
        structure: String,
        tag: u32,
        first: String,
        second: String,
    },

    /// An earlier `set_tag` moved the counter away from this field's tag
    #[error("{structure}.{field}: tag {tag} would be written as {written}; give it an explicit tag")]
    TagDrift {
        structure: String,
        field: String,
        tag: u32,
        written: u32,
    },
}

impl From<toml::de::Error> for SchemaError {
    fn from(err: toml::de::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Parse(err.to_string())
    }
}
