//! Error types for schema-to-ontology conversion

use thiserror::Error;

/// Main error type for conversion operations
#[derive(Error, Debug)]
pub enum SchemaOwlError {
    /// The input document does not conform to the meta-schema
    #[error("Schema validation failed: {message}")]
    MetaValidation {
        /// Error message
        message: String,
        /// Location in the schema if available
        location: Option<String>,
    },

    /// A construct the converter does not support
    #[error("Unsupported construct at '{path}': {construct}")]
    UnsupportedConstruct {
        /// Description of the offending construct
        construct: String,
        /// Path from the schema root to the construct
        path: String,
    },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, SchemaOwlError>;

impl SchemaOwlError {
    /// Create a new meta-validation error
    #[must_use]
    pub fn meta_validation(message: impl Into<String>) -> Self {
        Self::MetaValidation {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new meta-validation error with a location
    #[must_use]
    pub fn meta_validation_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::MetaValidation {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new unsupported-construct error
    #[must_use]
    pub fn unsupported(construct: impl Into<String>, path: &[String]) -> Self {
        Self::UnsupportedConstruct {
            construct: construct.into(),
            path: path.join("/"),
        }
    }

    /// Create a new serialization error
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }
}

impl From<serde_json::Error> for SchemaOwlError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::fmt::Error> for SchemaOwlError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
