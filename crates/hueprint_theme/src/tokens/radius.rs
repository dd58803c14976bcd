//! Border radius scale tokens

use super::spacing::{expand_scale, ScaleStep, StepValue};
use super::TokenMap;
use crate::customization::ScaleCustomization;

/// Pill radius, large enough for any widget
pub const ROUNDED_FULL_PX: f64 = 999.0;

const fn step(token: &'static str, multiple: f64) -> ScaleStep {
    ScaleStep {
        token,
        value: StepValue::Multiple(multiple),
    }
}

/// Radius steps, in emission order
pub const RADIUS_STEPS: &[ScaleStep] = &[
    ScaleStep {
        token: "rounded0",
        value: StepValue::Fixed(0.0),
    },
    step("rounded3xs", 1.0),
    step("rounded2xs", 2.0),
    step("roundedXs", 3.0),
    step("roundedS", 4.0),
    step("roundedM", 5.0),
    step("roundedL", 6.0),
    step("roundedXl", 8.0),
    step("rounded2xl", 10.0),
    step("rounded3xl", 12.0),
    step("rounded4xl", 14.0),
    ScaleStep {
        token: "roundedFull",
        value: StepValue::Fixed(ROUNDED_FULL_PX),
    },
    step("roundedClickable", 5.0),
];

/// Generate the border radius scale; same override rules as spacing
pub fn generate_border_radius_scale(radius: &ScaleCustomization) -> TokenMap {
    expand_scale(radius, RADIUS_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_expands_full_scale() {
        let tokens = generate_border_radius_scale(&ScaleCustomization::with_base(2.0));
        assert_eq!(tokens.len(), RADIUS_STEPS.len());
        assert_eq!(tokens["rounded0"].as_str(), Some("0px"));
        assert_eq!(tokens["roundedM"].as_str(), Some("10px"));
        assert_eq!(tokens["rounded4xl"].as_str(), Some("28px"));
        assert_eq!(tokens["roundedFull"].as_str(), Some("999px"));
        assert_eq!(tokens["roundedClickable"].as_str(), Some("10px"));
    }

    #[test]
    fn zero_base_squares_everything_but_full() {
        let tokens = generate_border_radius_scale(&ScaleCustomization::with_base(0.0));
        assert_eq!(tokens["roundedL"].as_str(), Some("0px"));
        assert_eq!(tokens["roundedFull"].as_str(), Some("999px"));
    }

    #[test]
    fn full_only_when_base_or_customized() {
        let mut radius = ScaleCustomization::default();
        radius.custom_values.insert("roundedS".into(), 6.0);
        let tokens = generate_border_radius_scale(&radius);
        assert!(!tokens.contains_key("roundedFull"));

        radius.custom_values.insert("roundedFull".into(), 100.0);
        let tokens = generate_border_radius_scale(&radius);
        assert_eq!(tokens["roundedFull"].as_str(), Some("100px"));
    }
}
