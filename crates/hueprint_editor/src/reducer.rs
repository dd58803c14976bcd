//! Customization update operations
//!
//! Each operation takes the current dual-mode state and returns a new one;
//! nothing is mutated in place. Operations that target a scheme never touch
//! the other scheme's customization.

use hueprint_core::ColorScheme;
use hueprint_theme::customization::ShadowConfig;
use hueprint_theme::{DualModeThemeCustomization, Namespace, ThemeCustomization, ThemePreset};
use serde_json::{Map, Value};

use crate::error::Result;

/// Empty customization for both schemes
pub fn empty_state() -> DualModeThemeCustomization {
    DualModeThemeCustomization::default()
}

/// Set one field of one namespace for `scheme`; `Value::Null` clears it
pub fn update_field(
    state: &DualModeThemeCustomization,
    scheme: ColorScheme,
    namespace: Namespace,
    field: &str,
    value: Value,
) -> Result<DualModeThemeCustomization> {
    let next = state.get(scheme).set_field(namespace, field, value)?;
    Ok(state.with(scheme, next))
}

/// Merge several fields into one namespace for `scheme`
pub fn patch_namespace(
    state: &DualModeThemeCustomization,
    scheme: ColorScheme,
    namespace: Namespace,
    patch: &Map<String, Value>,
) -> Result<DualModeThemeCustomization> {
    let next = state.get(scheme).patch_namespace(namespace, patch)?;
    Ok(state.with(scheme, next))
}

/// Replace a whole namespace for `scheme` (preset sliders, bulk edits)
pub fn replace_namespace(
    state: &DualModeThemeCustomization,
    scheme: ColorScheme,
    namespace: Namespace,
    value: Value,
) -> Result<DualModeThemeCustomization> {
    let next = state.get(scheme).replace_namespace(namespace, value)?;
    Ok(state.with(scheme, next))
}

/// Replace (or remove) the stored shadow for `scheme`
pub fn replace_shadow(
    state: &DualModeThemeCustomization,
    scheme: ColorScheme,
    shadow: Option<ShadowConfig>,
) -> DualModeThemeCustomization {
    let mut next = state.get(scheme).clone();
    next.shadow = shadow;
    state.with(scheme, next)
}

/// Replace (or remove) the raw CSS for `scheme`
pub fn replace_custom_css(
    state: &DualModeThemeCustomization,
    scheme: ColorScheme,
    css: Option<String>,
) -> DualModeThemeCustomization {
    let mut next = state.get(scheme).clone();
    next.custom_css = css;
    state.with(scheme, next)
}

/// Replace the entire customization of `scheme`
pub fn replace_mode(
    state: &DualModeThemeCustomization,
    scheme: ColorScheme,
    customization: ThemeCustomization,
) -> DualModeThemeCustomization {
    state.with(scheme, customization)
}

/// Deep-merge a partial customization into `scheme`, namespace by namespace
pub fn merge_into_mode(
    state: &DualModeThemeCustomization,
    scheme: ColorScheme,
    partial: &Map<String, Value>,
) -> Result<DualModeThemeCustomization> {
    let next = state.get(scheme).merge(partial)?;
    Ok(state.with(scheme, next))
}

/// Load a preset's customization for `scheme` only
pub fn apply_preset(
    state: &DualModeThemeCustomization,
    scheme: ColorScheme,
    preset: ThemePreset,
) -> DualModeThemeCustomization {
    let config = preset.config();
    state.with(scheme, config.get(scheme).clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn with_dark_font() -> DualModeThemeCustomization {
        let mut state = empty_state();
        state.dark.fonts.body = Some("Lora".into());
        state
    }

    #[test]
    fn update_field_only_touches_target_scheme() {
        let state = with_dark_font();
        let next = update_field(&state, ColorScheme::Light, Namespace::Fonts, "body", json!("Inter")).unwrap();
        assert_eq!(next.light.fonts.body.as_deref(), Some("Inter"));
        assert_eq!(next.dark, state.dark);
        // Input snapshot is unchanged
        assert!(state.light.fonts.body.is_none());
    }

    #[test]
    fn update_field_keeps_siblings() {
        let state = update_field(&empty_state(), ColorScheme::Dark, Namespace::Colors, "primary", json!("#f00")).unwrap();
        let next = update_field(&state, ColorScheme::Dark, Namespace::Colors, "danger", json!("#0f0")).unwrap();
        assert_eq!(next.dark.colors.primary.as_deref(), Some("#f00"));
        assert_eq!(next.dark.colors.danger.as_deref(), Some("#0f0"));
    }

    #[test]
    fn update_field_propagates_unknown_fields() {
        let result = update_field(&empty_state(), ColorScheme::Light, Namespace::Fonts, "display", json!("x"));
        assert!(result.is_err());
    }

    #[test]
    fn replace_namespace_is_wholesale() {
        let state = patch_namespace(
            &empty_state(),
            ColorScheme::Light,
            Namespace::BorderRadius,
            json!({"base": 4, "customValues": {"roundedS": 9}}).as_object().unwrap(),
        )
        .unwrap();
        let next = replace_namespace(&state, ColorScheme::Light, Namespace::BorderRadius, json!({"base": 2})).unwrap();
        assert_eq!(next.light.border_radius.base, Some(2.0));
        assert!(next.light.border_radius.custom_values.is_empty());
    }

    #[test]
    fn shadow_and_css_replacement() {
        let state = replace_shadow(&empty_state(), ColorScheme::Dark, Some(ShadowConfig::default()));
        assert!(state.dark.shadow.is_some());
        assert!(state.light.shadow.is_none());
        let state = replace_shadow(&state, ColorScheme::Dark, None);
        assert!(state.dark.shadow.is_none());

        let state = replace_custom_css(&state, ColorScheme::Light, Some(".a{}".into()));
        assert_eq!(state.light.custom_css.as_deref(), Some(".a{}"));
    }

    #[test]
    fn preset_replaces_only_target_scheme() {
        let state = with_dark_font();
        let next = apply_preset(&state, ColorScheme::Light, ThemePreset::Claude);
        assert_eq!(next.light, ThemePreset::Claude.config().light);
        assert_eq!(next.dark, state.dark);
    }

    #[test]
    fn merge_keeps_unreturned_fields() {
        let state = with_dark_font();
        let partial = json!({"fonts": {"heading": "Lora"}, "spacing": {"base": 3}});
        let next = merge_into_mode(&state, ColorScheme::Dark, partial.as_object().unwrap()).unwrap();
        assert_eq!(next.dark.fonts.body.as_deref(), Some("Lora"));
        assert_eq!(next.dark.fonts.heading.as_deref(), Some("Lora"));
        assert_eq!(next.dark.spacing.base, Some(3.0));
        assert_eq!(next.light, state.light);
    }

    #[test]
    fn replace_mode_swaps_whole_customization() {
        let state = with_dark_font();
        let next = replace_mode(&state, ColorScheme::Dark, ThemeCustomization::empty());
        assert_eq!(next, empty_state());
    }
}
