//! Spacing scale tokens

use super::{px, put, TokenMap};
use crate::customization::ScaleCustomization;

/// How a scale step gets its value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepValue {
    /// `base * n`
    Multiple(f64),
    /// Constant, independent of base
    Fixed(f64),
}

/// One named step of a multiplier scale
#[derive(Clone, Copy, Debug)]
pub struct ScaleStep {
    pub token: &'static str,
    pub value: StepValue,
}

const fn step(token: &'static str, multiple: f64) -> ScaleStep {
    ScaleStep {
        token,
        value: StepValue::Multiple(multiple),
    }
}

const fn fixed(token: &'static str, value: f64) -> ScaleStep {
    ScaleStep {
        token,
        value: StepValue::Fixed(value),
    }
}

/// Spacing steps, in emission order
pub const SPACING_STEPS: &[ScaleStep] = &[
    fixed("spacing0", 0.0),
    step("spacing3xs", 1.0),
    step("spacing2xs", 2.0),
    step("spacingXs", 3.0),
    step("spacingS", 4.0),
    step("spacingM", 6.0),
    step("spacingL", 9.0),
    step("spacingXl", 12.0),
    step("spacing2xl", 18.0),
    step("spacing3xl", 24.0),
];

/// Generate the spacing scale.
///
/// With a base, every step is emitted and `customValues` override single
/// steps. Without one, only the customized steps are emitted.
pub fn generate_spacing_scale(spacing: &ScaleCustomization) -> TokenMap {
    expand_scale(spacing, SPACING_STEPS)
}

pub(crate) fn expand_scale(scale: &ScaleCustomization, steps: &[ScaleStep]) -> TokenMap {
    let mut tokens = TokenMap::new();

    for key in scale.custom_values.keys() {
        if !steps.iter().any(|s| s.token == key.as_str()) {
            tracing::debug!(step = key.as_str(), "ignoring unknown scale step");
        }
    }

    for step in steps {
        let value = match (scale.custom_values.get(step.token), scale.base, step.value) {
            (Some(custom), _, _) => *custom,
            (None, Some(base), StepValue::Multiple(n)) => base * n,
            (None, Some(_), StepValue::Fixed(value)) => value,
            (None, None, _) => continue,
        };
        put(&mut tokens, step.token, px(value));
    }

    tokens
}
