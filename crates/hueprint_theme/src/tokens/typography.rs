//! Typography tokens
//!
//! Every font token is a CSS `font` shorthand, `"<weight> <size>px/<line-height> <family>"`,
//! built from a fixed slot table. Sizes shift uniformly with `fontSize.base`.

use hueprint_core::fmt_num;

use super::{put, TokenMap};
use crate::customization::{FontSize, FontWeight, Fonts, LetterSpacing};

pub const DEFAULT_BODY_FONT: &str = "Inter";
pub const DEFAULT_HEADING_FONT: &str = "Inter";
pub const DEFAULT_MONO_FONT: &str = "Menlo";

pub const DEFAULT_REGULAR_WEIGHT: u16 = 400;
pub const DEFAULT_MEDIUM_WEIGHT: u16 = 500;
pub const DEFAULT_BOLD_WEIGHT: u16 = 600;

/// Size every slot table entry is expressed against
pub const REFERENCE_FONT_SIZE: f64 = 16.0;

/// Font category a slot belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontCategory {
    Body,
    Heading,
    Numbers,
}

/// Which configured weight a slot uses
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeightRole {
    Regular,
    Medium,
    Bold,
}

/// One entry of the font slot table
#[derive(Clone, Copy, Debug)]
pub struct FontSlot {
    pub token: &'static str,
    pub category: FontCategory,
    pub weight: WeightRole,
    pub size: f64,
    pub line_height: &'static str,
}

const fn slot(
    token: &'static str,
    category: FontCategory,
    weight: WeightRole,
    size: f64,
    line_height: &'static str,
) -> FontSlot {
    FontSlot {
        token,
        category,
        weight,
        size,
        line_height,
    }
}

use FontCategory::{Body, Heading, Numbers};
use WeightRole::{Bold, Medium, Regular};

/// Every font slot, in emission order
pub const FONT_SLOTS: &[FontSlot] = &[
    slot("fontBody", Body, Regular, 16.0, "1.5"),
    slot("fontBodyLink", Body, Regular, 16.0, "1.5"),
    slot("fontBodyHeavy", Body, Medium, 16.0, "1.5"),
    slot("fontBodyMedium", Body, Regular, 16.0, "1.5"),
    slot("fontBodySmall", Body, Regular, 14.0, "1.5"),
    slot("fontBodySmallHeavy", Body, Medium, 14.0, "1.5"),
    slot("fontBodyLarge", Body, Regular, 18.0, "1.5"),
    slot("fontBodyLargeHeavy", Body, Medium, 18.0, "1.5"),
    slot("fontLabel", Body, Regular, 16.0, "1.2"),
    slot("fontLabelHeavy", Body, Medium, 16.0, "1.2"),
    slot("fontLabelSmall", Body, Regular, 14.0, "1.2"),
    slot("fontLabelSmallHeavy", Body, Medium, 14.0, "1.2"),
    slot("fontLabelExtraSmall", Body, Regular, 12.0, "1.2"),
    slot("fontLabelExtraSmallHeavy", Body, Medium, 12.0, "1.2"),
    slot("fontLabelLarge", Body, Regular, 18.0, "1.2"),
    slot("fontLabelLargeHeavy", Body, Medium, 18.0, "1.2"),
    slot("fontLabelMedium", Body, Regular, 16.0, "1.2"),
    slot("fontLabelMediumHeavy", Body, Medium, 16.0, "1.2"),
    slot("fontLabel2ExtraSmall", Body, Regular, 12.0, "1.2"),
    slot("fontLabel2ExtraSmallHeavy", Body, Medium, 12.0, "1.2"),
    slot("fontHeadingLarge", Heading, Bold, 28.0, "1.15"),
    slot("fontHeadingMedium", Heading, Bold, 24.0, "1.15"),
    slot("fontHeadingSmall", Heading, Bold, 18.0, "1.25"),
    slot("fontHeadingExtraSmall", Heading, Bold, 16.0, "1.25"),
    slot("fontNumber", Numbers, Regular, 16.0, "1.5"),
    slot("fontNumberHeavy", Numbers, Medium, 16.0, "1.5"),
    slot("fontNumberSmall", Numbers, Regular, 14.0, "1.5"),
    slot("fontNumberSmallHeavy", Numbers, Medium, 14.0, "1.5"),
    slot("fontNumberExtraSmall", Numbers, Regular, 12.0, "1.5"),
    slot("fontNumberExtraSmallHeavy", Numbers, Medium, 12.0, "1.5"),
    slot("fontNumberLarge", Numbers, Regular, 18.0, "1.5"),
    slot("fontNumberLargeHeavy", Numbers, Medium, 18.0, "1.5"),
    slot("fontNumberTitle", Numbers, Bold, 28.0, "1.5"),
    slot("fontNumberTitleMedium", Numbers, Bold, 24.0, "1.5"),
];

/// Generate font shorthand and letter-spacing tokens.
///
/// A category is emitted when its family or the base size is set; the
/// base size shifts every slot, so unset families then fall back to
/// Inter/Inter/Menlo. Weight overrides and letter spacing only restyle
/// categories that are already emitted.
pub fn generate_font_variables(
    fonts: &Fonts,
    letter_spacing: &LetterSpacing,
    weights: &FontWeight,
    size: &FontSize,
) -> TokenMap {
    let mut tokens = TokenMap::new();
    let delta = size.base.map_or(0.0, |base| base - REFERENCE_FONT_SIZE);

    for category in [Body, Heading, Numbers] {
        let (family, spacing) = match category {
            Body => (&fonts.body, letter_spacing.body),
            Heading => (&fonts.heading, letter_spacing.heading),
            Numbers => (&fonts.mono, letter_spacing.numbers),
        };

        if family.is_none() && size.base.is_none() {
            continue;
        }
        let slots = FONT_SLOTS.iter().filter(|s| s.category == category);

        let family = family.as_deref().unwrap_or(match category {
            Body => DEFAULT_BODY_FONT,
            Heading => DEFAULT_HEADING_FONT,
            Numbers => DEFAULT_MONO_FONT,
        });
        let spacing = spacing.map(px_to_em);

        for slot in slots {
            let weight = weight_override(weights, slot.weight).unwrap_or(match slot.weight {
                Regular => DEFAULT_REGULAR_WEIGHT,
                Medium => DEFAULT_MEDIUM_WEIGHT,
                Bold => DEFAULT_BOLD_WEIGHT,
            });
            let value = format!(
                "{weight} {}px/{} {family}",
                fmt_num(slot.size + delta),
                slot.line_height
            );
            put(&mut tokens, slot.token, value);
            if let Some(spacing) = &spacing {
                put(&mut tokens, format!("{}LetterSpacing", slot.token), spacing.as_str());
            }
        }
    }

    tokens
}

fn weight_override(weights: &FontWeight, role: WeightRole) -> Option<u16> {
    match role {
        Regular => weights.regular,
        Medium => weights.medium,
        Bold => weights.bold,
    }
}

/// Letter spacing is stored in px and emitted in em against a 16px font
fn px_to_em(value: f64) -> String {
    format!("{}em", fmt_num(value / REFERENCE_FONT_SIZE))
}
