//! Color parsing errors

use thiserror::Error;

/// Errors produced while reading a CSS color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input was empty or whitespace only
    #[error("empty color string")]
    Empty,

    /// Input did not match any supported color syntax
    #[error("unrecognized color syntax: {0}")]
    Syntax(String),

    /// A color function was called with the wrong arguments
    #[error("invalid arguments for {function}(): {reason}")]
    Arguments {
        function: String,
        reason: &'static str,
    },

    /// Function name is not a supported color space
    #[error("unsupported color function: {0}")]
    UnsupportedFunction(String),
}

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ColorParseError>;
