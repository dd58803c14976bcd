//! Built-in theme presets.
//!
//! A preset is a complete light/dark customization bundled as static data.
//! Loading one replaces the customization of the targeted scheme.

mod chatgpt;
mod claude;
mod perplexity;
mod t3chat;
mod twitter;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::customization::{DualModeThemeCustomization, ScaleCustomization};

/// Built-in preset catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// No customization; the widget library's own theme.
    #[default]
    Default,
    /// Neutral monochrome chat look.
    ChatGpt,
    /// Warm paper tones with a serif face.
    Claude,
    /// Paper surfaces with a teal accent.
    Perplexity,
    /// Monochrome with a pill-shaped composer.
    Twitter,
    /// Pink-tinted surfaces with a magenta accent.
    T3Chat,
}

/// Ids that were once selectable but ship no preset data; stored
/// selections using them load the default theme.
const RETIRED_IDS: &[&str] = &["vercel"];

impl ThemePreset {
    /// Id stored under `selected-theme` and accepted by the CLI
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::ChatGpt => "chatgpt",
            Self::Claude => "claude",
            Self::Perplexity => "perplexity",
            Self::Twitter => "twitter",
            Self::T3Chat => "t3chat",
        }
    }

    /// Name shown in the preset picker
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::ChatGpt => "ChatGPT",
            Self::Claude => "Claude",
            Self::Perplexity => "Perplexity",
            Self::Twitter => "Twitter",
            Self::T3Chat => "T3 Chat",
        }
    }

    /// Picker order, default first
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 6] = [
            ThemePreset::Default,
            ThemePreset::ChatGpt,
            ThemePreset::Claude,
            ThemePreset::Perplexity,
            ThemePreset::Twitter,
            ThemePreset::T3Chat,
        ];
        &PRESETS
    }

    /// Resolve preset by id (case-insensitive).
    ///
    /// Retired ids resolve to [`ThemePreset::Default`] with a warning.
    pub fn from_id(id: &str) -> Option<Self> {
        let normalized = id.trim().to_ascii_lowercase();
        if RETIRED_IDS.contains(&normalized.as_str()) {
            tracing::warn!(id = normalized.as_str(), "preset was retired, using default");
            return Some(Self::Default);
        }
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id() == normalized)
    }

    /// Light and dark customization for this preset.
    pub fn config(self) -> DualModeThemeCustomization {
        match self {
            Self::Default => DualModeThemeCustomization::default(),
            Self::ChatGpt => chatgpt::config(),
            Self::Claude => claude::config(),
            Self::Perplexity => perplexity::config(),
            Self::Twitter => twitter::config(),
            Self::T3Chat => t3chat::config(),
        }
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| format!("unknown theme preset: {s}"))
    }
}

// Shared building blocks for preset data

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// 2px spacing grid used by the chat presets
fn chat_spacing() -> ScaleCustomization {
    ScaleCustomization::with_base(2.0)
}

const RADIUS_STEP_KEYS: [&str; 12] = [
    "rounded0",
    "rounded3xs",
    "rounded2xs",
    "roundedXs",
    "roundedS",
    "roundedM",
    "roundedL",
    "roundedXl",
    "rounded2xl",
    "rounded3xl",
    "rounded4xl",
    "roundedClickable",
];

/// Explicit pixel radii, smallest step first and `roundedClickable` last
fn radius_scale(values: [f64; 12]) -> ScaleCustomization {
    ScaleCustomization {
        base: None,
        custom_values: RADIUS_STEP_KEYS
            .into_iter()
            .zip(values)
            .map(|(step, value)| (step.to_string(), value))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// Hand-tuned radii shared by the ChatGPT and Claude presets
fn chat_radius() -> ScaleCustomization {
    radius_scale([0.0, 1.5, 3.0, 6.0, 8.0, 10.0, 14.0, 17.0, 20.0, 26.0, 32.0, 10.0])
}
