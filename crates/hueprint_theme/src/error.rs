//! Theme customization errors

use thiserror::Error;

/// Errors raised while editing a [`ThemeCustomization`](crate::ThemeCustomization)
#[derive(Error, Debug)]
pub enum ThemeError {
    /// Value did not fit the namespace's field types
    #[error("invalid customization value: {0}")]
    Json(#[from] serde_json::Error),

    /// Field name not part of the namespace
    #[error("unknown field '{field}' in namespace '{namespace}'")]
    UnknownField {
        namespace: &'static str,
        field: String,
    },

    /// Namespace key not recognized
    #[error("unknown customization namespace: {0}")]
    UnknownNamespace(String),

    /// A namespace (or the customization root) was not a JSON object
    #[error("expected an object for '{0}'")]
    NotAnObject(&'static str),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
