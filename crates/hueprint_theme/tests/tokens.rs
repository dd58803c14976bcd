//! Behavioural checks across the token generators

use hueprint_core::ColorScheme;
use hueprint_theme::customization::{
    ChartColors, FontSize, FontWeight, Fonts, LetterSpacing, ScaleCustomization, ShadowConfig,
    StrokeColors,
};
use hueprint_theme::tokens::*;
use hueprint_theme::{assemble, ColorEngine, DefaultEngine, EngineRegistry, ThemeCustomization};
use pretty_assertions::assert_eq;

#[test]
fn stroke_opacity_scales_from_base() {
    let strokes = StrokeColors {
        base: Some("rgba(0,0,0,1)".into()),
        opacity: Some(0.2),
        ..Default::default()
    };
    let tokens = generate_stroke_colors(&strokes, &StatusColors::default());
    assert_eq!(tokens["strokeDefault"].as_str(), Some("rgba(0,0,0,0.2)"));
    assert_eq!(tokens["strokeInteractiveEl"].as_str(), Some("rgba(0,0,0,0.4)"));
}

#[test]
fn regular_weight_override_keeps_heavy_at_medium() {
    let fonts = Fonts {
        body: Some("Inter".into()),
        ..Default::default()
    };
    let weights = FontWeight {
        regular: Some(300),
        ..Default::default()
    };
    let tokens = generate_font_variables(&fonts, &LetterSpacing::default(), &weights, &FontSize::default());
    assert_eq!(tokens["fontBody"].as_str(), Some("300 16px/1.5 Inter"));
    assert_eq!(tokens["fontBodyHeavy"].as_str(), Some("500 16px/1.5 Inter"));
}

#[test]
fn body_letter_spacing_is_exact_px_over_sixteen() {
    let fonts = Fonts {
        body: Some("Inter".into()),
        ..Default::default()
    };
    let spacing = LetterSpacing {
        body: Some(-0.5),
        ..Default::default()
    };
    let tokens = generate_font_variables(&fonts, &spacing, &FontWeight::default(), &FontSize::default());
    assert_eq!(tokens["fontBodyLetterSpacing"].as_str(), Some("-0.03125em"));
    assert_eq!(tokens["fontLabelSmallLetterSpacing"].as_str(), Some("-0.03125em"));
}

#[test]
fn weight_override_without_mono_family_emits_no_number_slots() {
    let fonts = Fonts {
        body: Some("Inter".into()),
        ..Default::default()
    };
    let weights = FontWeight {
        regular: Some(300),
        ..Default::default()
    };
    let tokens = generate_font_variables(&fonts, &LetterSpacing::default(), &weights, &FontSize::default());
    assert!(!tokens.contains_key("fontNumber"));
    assert!(tokens.values().all(|v| !v.as_str().unwrap_or_default().contains("Menlo")));
}

#[test]
fn single_color_palette_ignores_extra_seed() {
    let chart = ChartColors {
        primary: Some("#ff8800".into()),
        secondary: Some("#0088ff".into()),
        use_dual_mode: None,
    };
    assert_eq!(generate_chart_palette(&chart, ColorScheme::Light).len(), 10);
}

#[test]
fn dual_palette_sixth_entry_is_opaque_secondary() {
    let chart = ChartColors {
        primary: Some("#ff8800".into()),
        secondary: Some("#0088ff".into()),
        use_dual_mode: Some(true),
    };
    let palette = generate_chart_palette(&chart, ColorScheme::Light);
    assert_eq!(palette.len(), 10);
    assert_eq!(palette[5], "rgba(0,136,255,1)");
}

#[test]
fn large_shadow_doubles_and_omits_zero_spread() {
    let shadow = ShadowConfig {
        blur: Some(4.0),
        spread: Some(0.0),
        offset_x: Some(0.0),
        offset_y: Some(1.0),
        ..Default::default()
    };
    let tokens = generate_shadows(Some(&shadow));
    assert_eq!(tokens["shadowL"].as_str(), Some("0px 2px 8px rgba(0,0,0,0.1)"));
}

#[test]
fn empty_inputs_fabricate_nothing() {
    let engine = DefaultEngine;
    let custom = ThemeCustomization::empty();
    for scheme in ColorScheme::ALL {
        assert!(generate_semantic_colors(&custom.colors, &engine, scheme).is_empty());
        assert!(generate_chart_palette(&custom.chart_colors, scheme).is_empty());
    }
    assert!(generate_fill_tokens(&custom.fills).is_empty());
    assert!(generate_text_tokens(&custom.text).is_empty());
    assert!(generate_interactive_tokens(&custom.interactive).is_empty());
    assert!(generate_chat_colors(&custom.chat_colors).is_empty());
    assert!(generate_spacing_scale(&ScaleCustomization::default()).is_empty());
    assert!(generate_border_radius_scale(&ScaleCustomization::default()).is_empty());
    assert!(generate_shadows(None).is_empty());
    assert!(generate_stroke_colors(&custom.stroke_colors, &StatusColors::default()).is_empty());
    assert!(generate_font_variables(
        &custom.fonts,
        &custom.letter_spacing,
        &custom.font_weight,
        &custom.font_size
    )
    .is_empty());
}

#[test]
fn hover_is_deterministic_across_syntaxes() {
    let engine = DefaultEngine;
    for scheme in ColorScheme::ALL {
        let a = engine.hover("#5861CB", scheme);
        let b = engine.hover("rgb(88 97 203)", scheme);
        assert_eq!(a, b);
        assert_eq!(a, engine.hover("#5861CB", scheme));
    }
}

#[test]
fn schemes_are_assembled_independently() {
    let mut custom = ThemeCustomization::empty();
    custom.colors.container = Some("#808080".into());
    let engines = EngineRegistry::with_defaults();
    let light = assemble(&custom, ColorScheme::Light, &engines);
    let dark = assemble(&custom, ColorScheme::Dark, &engines);
    assert_eq!(light["containerHoverFills"].as_str(), Some("rgba(120,120,120,1)"));
    assert_eq!(dark["containerHoverFills"].as_str(), Some("rgba(138,138,138,1)"));
}

#[test]
fn token_map_serializes_flat() {
    let mut custom = ThemeCustomization::empty();
    custom.spacing.base = Some(1.0);
    let tokens = assemble(&custom, ColorScheme::Light, &EngineRegistry::with_defaults());
    let json = serde_json::to_value(&tokens).unwrap();
    assert_eq!(json["spacingM"], "6px");
    assert!(json.as_object().unwrap().values().all(|v| v.is_string()));
}
