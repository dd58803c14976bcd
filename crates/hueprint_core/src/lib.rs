//! Hueprint Core
//!
//! Foundational value types shared by the theme pipeline:
//!
//! - **Colors**: [`Rgba`] channel values and their canonical CSS rendering
//! - **Parsing**: [`parse_color`] accepts any CSS color syntax the editor
//!   supports (hex, `rgb()`, `hsl()`, `oklch()`, `oklab()`, named colors)
//! - **Schemes**: [`ColorScheme`], the light/dark mode every token map is
//!   generated for
//!
//! # Example
//!
//! ```rust
//! use hueprint_core::{parse_or_black, ColorScheme};
//!
//! let accent = parse_or_black("#5861CB");
//! assert_eq!(accent.to_css(), "rgba(88,97,203,1)");
//! assert_eq!(ColorScheme::Dark.to_string(), "dark");
//! ```

pub mod color;
pub mod error;
pub mod format;
mod named;
pub mod parse;
pub mod scheme;

pub use color::Rgba;
pub use error::{ColorParseError, Result};
pub use format::{fmt_num, round_half_up};
pub use parse::{parse_color, parse_or_black};
pub use scheme::ColorScheme;
