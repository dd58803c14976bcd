//! Hueprint Editor
//!
//! Session state for editing a dual-mode theme customization.
//!
//! # Overview
//!
//! - **History**: bounded undo/redo over whole snapshots, see [`History`]
//! - **Reducer**: pure update operations producing new snapshots, see [`reducer`]
//! - **Share links**: the full state packed into one URL parameter, see [`ShareCodec`]
//! - **Fonts**: weight catalog and per-session loading through a [`FontLoader`]
//! - **Generation**: the [`ThemeGenerator`] seam and its single-flight guard
//! - **Preferences**: the persisted preset selection, see [`PreferenceStore`]
//! - **Session**: [`ThemeEditor`] ties the pieces together
//!
//! # Example
//!
//! ```rust
//! use hueprint_core::ColorScheme;
//! use hueprint_editor::ThemeEditor;
//! use hueprint_theme::Namespace;
//! use serde_json::json;
//!
//! let mut editor = ThemeEditor::new();
//! editor.set_mode(ColorScheme::Dark);
//! editor.update_field(Namespace::Colors, "primary", json!("#5861CB")).unwrap();
//!
//! let url = editor.share_url().unwrap();
//! let mut other = ThemeEditor::new();
//! other.load_from_url(&url).unwrap();
//! assert_eq!(other.state(), editor.state());
//! assert_eq!(other.mode(), ColorScheme::Dark);
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod fonts;
pub mod generate;
pub mod history;
pub mod prefs;
pub mod reducer;
pub mod share;

pub use config::EditorConfig;
pub use editor::ThemeEditor;
pub use error::{EditorError, FontError, GenerateError, PreferenceError, Result, ShareError};
pub use fonts::{
    all_popular_fonts, common_weights, font_weights, popular_fonts, FontCategory, FontLoad, FontLoader,
    FontRegistry,
};
pub use generate::{
    parse_response, GenerateRequest, PromptMessage, PromptRole, SingleFlight, ThemeGenerator, SYSTEM_PROMPT,
};
pub use history::History;
pub use prefs::{
    FilePreferences, MemoryPreferences, PreferenceStore, API_KEY_PREFERENCE, SELECTED_THEME_KEY,
};
pub use share::{Compressor, GzipCompressor, ShareCodec, SharedState};
