//! Hueprint Theme
//!
//! Turns a sparse [`ThemeCustomization`] into the flat design-token map a
//! chat widget library consumes, once per color scheme.
//!
//! # Overview
//!
//! - **Engines**: [`ColorEngine`] strategies derive hover, pressed,
//!   disabled, emphasis, and subtle variants from one base color
//! - **Customization**: the editable data model, with one generic
//!   namespace patch operation ([`ThemeCustomization::set_field`])
//! - **Tokens**: one generator per token category, see [`tokens`]
//! - **Assembly**: [`assemble`] merges every generator into a [`TokenMap`]
//! - **Export**: [`export_code`] renders both schemes as pasteable code
//! - **Presets**: bundled [`ThemePreset`] configurations
//!
//! # Example
//!
//! ```rust
//! use hueprint_core::ColorScheme;
//! use hueprint_theme::{assemble, EngineRegistry, ThemeCustomization};
//!
//! let mut custom = ThemeCustomization::empty();
//! custom.colors.primary = Some("#5861CB".into());
//!
//! let engines = EngineRegistry::with_defaults();
//! let tokens = assemble(&custom, ColorScheme::Light, &engines);
//! assert_eq!(tokens["interactiveAccent"].as_str(), Some("#5861CB"));
//! assert!(tokens.contains_key("interactiveAccentHover"));
//! ```

pub mod assemble;
pub mod customization;
pub mod engine;
pub mod error;
pub mod export;
pub mod presets;
pub mod tokens;

pub use assemble::{assemble, assemble_dual};
pub use customization::{DualModeThemeCustomization, Namespace, ThemeCustomization};
pub use engine::{ColorEngine, DefaultEngine, EngineRegistry};
pub use error::{Result, ThemeError};
pub use export::export_code;
pub use presets::ThemePreset;
pub use tokens::{TokenMap, TokenValue};
