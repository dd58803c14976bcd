//! Stroke (border) color tokens

use super::color::capitalize;
use super::{put, TokenMap};
use crate::customization::StrokeColors;
use crate::engine::with_opacity;

pub const DEFAULT_STROKE_OPACITY: f64 = 0.2;

/// Status and accent colors that tint the derived strokes
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusColors {
    pub danger: Option<String>,
    pub success: Option<String>,
    pub info: Option<String>,
    pub alert: Option<String>,
    pub accent: Option<String>,
}

/// Generate stroke tokens.
///
/// A `base` color expands into every stroke state at multiples of
/// `opacity`. Explicit slots are then applied on top, unchanged, as
/// `stroke<Slot>`.
pub fn generate_stroke_colors(strokes: &StrokeColors, status: &StatusColors) -> TokenMap {
    let mut tokens = TokenMap::new();

    if let Some(base) = strokes.base.as_deref() {
        let opacity = strokes.opacity.unwrap_or(DEFAULT_STROKE_OPACITY);

        put(&mut tokens, "strokeDefault", with_opacity(base, opacity));
        put(&mut tokens, "strokeInteractiveEl", with_opacity(base, opacity * 2.0));
        put(&mut tokens, "strokeInteractiveElHover", with_opacity(base, opacity * 2.5));
        put(&mut tokens, "strokeInteractiveElSelected", with_opacity(base, opacity * 3.5));
        put(&mut tokens, "strokeEmphasis", with_opacity(base, opacity * 2.0));

        match status.accent.as_deref() {
            Some(accent) => {
                put(&mut tokens, "strokeAccent", with_opacity(accent, opacity));
                put(&mut tokens, "strokeAccentEmphasis", with_opacity(accent, opacity * 2.0));
            }
            None => {
                put(&mut tokens, "strokeAccent", with_opacity(base, opacity * 0.6));
                put(&mut tokens, "strokeAccentEmphasis", with_opacity(base, opacity * 2.0));
            }
        }

        let statuses = [
            ("Info", &status.info),
            ("Alert", &status.alert),
            ("Success", &status.success),
            ("Danger", &status.danger),
        ];
        for (name, color) in statuses {
            if let Some(color) = color.as_deref() {
                put(&mut tokens, format!("stroke{name}"), with_opacity(color, opacity));
                put(&mut tokens, format!("stroke{name}Emphasis"), color);
            }
        }
    }

    for (slot, value) in strokes.slots.entries() {
        put(&mut tokens, format!("stroke{}", capitalize(slot)), value);
    }

    tokens
}
