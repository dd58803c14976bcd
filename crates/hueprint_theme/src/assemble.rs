//! Theme assembly
//!
//! Runs every token generator for one color scheme and merges their output
//! into a single flat [`TokenMap`]. Later generators overwrite earlier
//! ones, which is how the newer `fills`/`text`/`interactive` namespaces
//! take priority over the legacy `colors` expansion.

use hueprint_core::ColorScheme;

use crate::customization::{DualModeThemeCustomization, ThemeCustomization};
use crate::engine::EngineRegistry;
use crate::tokens::*;

/// Assemble the complete token map for one scheme.
///
/// Pure and deterministic: identical inputs give identical maps, key
/// order included.
pub fn assemble(
    customization: &ThemeCustomization,
    scheme: ColorScheme,
    engines: &EngineRegistry,
) -> TokenMap {
    let engine = engines.resolve(&customization.color_engine);
    let mut tokens = TokenMap::new();

    let layers = [
        generate_semantic_colors(&customization.colors, engine, scheme),
        generate_fill_tokens(&customization.fills),
        generate_text_tokens(&customization.text),
        generate_interactive_tokens(&customization.interactive),
        generate_font_variables(
            &customization.fonts,
            &customization.letter_spacing,
            &customization.font_weight,
            &customization.font_size,
        ),
        generate_spacing_scale(&customization.spacing),
        generate_border_radius_scale(&customization.border_radius),
    ];
    for layer in layers {
        tokens.extend(layer);
    }

    let palette = generate_chart_palette(&customization.chart_colors, scheme);
    if !palette.is_empty() {
        tokens.insert(CHART_PALETTE_TOKEN.to_string(), TokenValue::List(palette));
    }

    tokens.extend(generate_shadows(customization.shadow.as_ref()));
    tokens.extend(generate_stroke_colors(
        &customization.stroke_colors,
        &status_colors(customization),
    ));
    tokens.extend(generate_chat_colors(&customization.chat_colors));

    tracing::trace!(scheme = %scheme, tokens = tokens.len(), "assembled theme");
    tokens
}

/// Assemble both schemes, each from its own customization
pub fn assemble_dual(
    customization: &DualModeThemeCustomization,
    engines: &EngineRegistry,
) -> (TokenMap, TokenMap) {
    (
        assemble(&customization.light, ColorScheme::Light, engines),
        assemble(&customization.dark, ColorScheme::Dark, engines),
    )
}

/// Stroke tints: newer text/interactive colors win over legacy ones
fn status_colors(customization: &ThemeCustomization) -> StatusColors {
    let text = &customization.text;
    let legacy = &customization.colors;
    let pick = |preferred: &Option<String>, fallback: &Option<String>| {
        preferred.clone().or_else(|| fallback.clone())
    };

    StatusColors {
        danger: pick(&text.danger_text, &legacy.danger),
        success: pick(&text.success_text, &legacy.success),
        info: pick(&text.info_text, &legacy.info),
        alert: pick(&text.alert_text, &legacy.alert),
        accent: pick(&customization.interactive.interactive_accent, &legacy.primary),
    }
}
