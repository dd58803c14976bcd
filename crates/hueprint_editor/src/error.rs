//! Editor error types

use hueprint_theme::ThemeError;
use thiserror::Error;

/// Share-link encoding and decoding errors
#[derive(Error, Debug)]
pub enum ShareError {
    /// Compression or decompression failed
    #[error("compression failed: {0}")]
    Compression(#[from] std::io::Error),

    /// Parameter was not valid base64
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decompressed bytes were not UTF-8
    #[error("payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Payload JSON did not describe a theme state
    #[error("invalid state JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Base or shared URL could not be parsed
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Font loading errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    /// Stylesheet for the family could not be loaded
    #[error("failed to load font '{family}': {reason}")]
    Load { family: String, reason: String },
}

/// Theme generation errors, one per cause shown to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("invalid API key")]
    Unauthorized,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("no API key saved")]
    MissingApiKey,

    #[error("generation service unavailable")]
    Unavailable,

    #[error("model not available: {0}")]
    ModelUnavailable(String),

    /// A request is already running for this editor
    #[error("a generation request is already in progress")]
    InFlight,

    /// The service answered with something that is not a customization
    #[error("invalid generated theme: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}

impl GenerateError {
    /// Message suitable for a toast or status line
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Invalid API key. Please check your API key.".to_string(),
            Self::RateLimited => "Rate limit exceeded. Please wait a moment and try again.".to_string(),
            Self::MissingApiKey => "Add an API key before generating a theme.".to_string(),
            Self::Unavailable => {
                "The generation service is temporarily unavailable. Please try again later.".to_string()
            }
            Self::ModelUnavailable(model) => {
                format!("Model not available. Please check if you have access to {model}.")
            }
            Self::InFlight => "A theme is already being generated.".to_string(),
            Self::InvalidResponse(_) => "The generated theme could not be read. Please try again.".to_string(),
            Self::Other(message) if !message.is_empty() => message.clone(),
            Self::Other(_) => "Failed to generate theme. Please try again.".to_string(),
        }
    }

    /// Classify an HTTP status from the generation service
    pub fn from_status(status: u16, message: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            429 => Self::RateLimited,
            500 | 503 => Self::Unavailable,
            _ if message.contains("model") => Self::ModelUnavailable(message.to_string()),
            _ => Self::Other(message.to_string()),
        }
    }
}

/// Preference storage errors
#[derive(Error, Debug)]
pub enum PreferenceError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse preferences: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors surfaced by the [`ThemeEditor`](crate::ThemeEditor) session
#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Share(#[from] ShareError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Font(#[from] FontError),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("unknown theme preset: {0}")]
    UnknownPreset(String),
}

/// Result type for editor operations
pub type Result<T> = std::result::Result<T, EditorError>;
