//! Shadow tokens
//!
//! One stored shadow drives four sizes. Geometry scales with the size
//! factor, color and opacity never do.

use hueprint_core::{parse_or_black, round_half_up};

use super::{px, put, TokenMap};
use crate::customization::ShadowConfig;

pub const DEFAULT_SHADOW_COLOR: &str = "rgba(0,0,0,1)";
pub const DEFAULT_SHADOW_OPACITY: f64 = 0.1;
pub const DEFAULT_SHADOW_BLUR: f64 = 4.0;
pub const DEFAULT_SHADOW_SPREAD: f64 = 0.0;
pub const DEFAULT_SHADOW_OFFSET_X: f64 = 0.0;
pub const DEFAULT_SHADOW_OFFSET_Y: f64 = 1.0;

/// Shadow sizes and their scale factors, in emission order
pub const SHADOW_LEVELS: &[(&str, f64)] = &[
    ("shadowS", 0.5),
    ("shadowM", 1.0),
    ("shadowL", 2.0),
    ("shadowXl", 3.0),
];

/// A fully resolved shadow, geometry in px
#[derive(Clone, Debug, PartialEq)]
pub struct BoxShadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

impl BoxShadow {
    /// Fill missing fields with defaults and fold opacity into the color
    pub fn resolve(config: &ShadowConfig) -> Self {
        let color = config.color.as_deref().unwrap_or(DEFAULT_SHADOW_COLOR);
        let opacity = config.opacity.unwrap_or(DEFAULT_SHADOW_OPACITY);
        Self {
            offset_x: config.offset_x.unwrap_or(DEFAULT_SHADOW_OFFSET_X),
            offset_y: config.offset_y.unwrap_or(DEFAULT_SHADOW_OFFSET_Y),
            blur: config.blur.unwrap_or(DEFAULT_SHADOW_BLUR),
            spread: config.spread.unwrap_or(DEFAULT_SHADOW_SPREAD),
            color: parse_or_black(color).with_alpha(opacity).to_css(),
        }
    }

    /// Scale geometry by `factor`, rounding each length to whole px
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            offset_x: round_half_up(self.offset_x * factor),
            offset_y: round_half_up(self.offset_y * factor),
            blur: round_half_up(self.blur * factor),
            spread: round_half_up(self.spread * factor),
            color: self.color.clone(),
        }
    }

    /// CSS `box-shadow` value; a zero spread uses the 4-value form
    pub fn to_css(&self) -> String {
        if self.spread == 0.0 {
            format!(
                "{} {} {} {}",
                px(self.offset_x),
                px(self.offset_y),
                px(self.blur),
                self.color
            )
        } else {
            format!(
                "{} {} {} {} {}",
                px(self.offset_x),
                px(self.offset_y),
                px(self.blur),
                px(self.spread),
                self.color
            )
        }
    }
}

/// Generate `shadowS`..`shadowXl` from the stored shadow, if any
pub fn generate_shadows(shadow: Option<&ShadowConfig>) -> TokenMap {
    let mut tokens = TokenMap::new();
    let Some(config) = shadow else {
        return tokens;
    };

    let base = BoxShadow::resolve(config);
    for (token, factor) in SHADOW_LEVELS {
        put(&mut tokens, *token, base.scaled(*factor).to_css());
    }
    tokens
}
