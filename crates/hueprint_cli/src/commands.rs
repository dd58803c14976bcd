//! Subcommand implementations
//!
//! Each command returns the text to print so it can be tested without a
//! process.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use hueprint_core::ColorScheme;
use hueprint_editor::fonts::stylesheet_url;
use hueprint_editor::{
    common_weights, font_weights, popular_fonts, EditorConfig, FontCategory, ShareCodec, SharedState,
    ThemeEditor,
};
use hueprint_theme::{assemble, export_code, ColorEngine, EngineRegistry, ThemePreset};

/// Read a state file; a `currentMode` tag is accepted and kept
fn read_state(path: &Path) -> Result<SharedState> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Write `text` to `out`, or hand it back for printing
pub fn emit(text: String, out: Option<&Path>) -> Result<Option<String>> {
    match out {
        Some(path) => {
            fs::write(path, &text).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
            Ok(None)
        }
        None => Ok(Some(text)),
    }
}

pub fn export(state: &Path) -> Result<String> {
    let state = read_state(state)?;
    Ok(export_code(&state.light, &state.dark, &EngineRegistry::with_defaults()))
}

pub fn tokens(state: &Path, mode: ColorScheme) -> Result<String> {
    let state = read_state(state)?;
    let (state, _) = state.into_parts();
    let tokens = assemble(state.get(mode), mode, &EngineRegistry::with_defaults());
    serde_json::to_string_pretty(&tokens).context("Failed to serialize tokens")
}

pub fn derive(color: &str, mode: ColorScheme, engine: &str) -> String {
    let engines = EngineRegistry::with_defaults();
    let engine = engines.resolve(engine);
    let rows: [(&str, fn(&dyn ColorEngine, &str, ColorScheme) -> String); 5] = [
        ("hover", |e, c, m| e.hover(c, m)),
        ("pressed", |e, c, m| e.pressed(c, m)),
        ("disabled", |e, c, m| e.disabled(c, m)),
        ("emphasis", |e, c, m| e.emphasis(c, m)),
        ("subtle", |e, c, m| e.subtle(c, m)),
    ];
    rows.iter()
        .map(|(name, derive)| format!("{name:<9}{}", derive(engine, color, mode)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn presets() -> String {
    ThemePreset::all()
        .iter()
        .map(|preset| format!("{:<10}{}", preset.id(), preset.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn preset(id: &str) -> Result<String> {
    let Some(preset) = ThemePreset::from_id(id) else {
        bail!("Unknown preset '{id}'. Run `hueprint presets` to list them.");
    };
    serde_json::to_string_pretty(&preset.config()).context("Failed to serialize preset")
}

pub fn share(
    state: &Path,
    mode: Option<ColorScheme>,
    base_url: Option<&str>,
    config: &EditorConfig,
) -> Result<String> {
    let mut state = read_state(state)?;
    if mode.is_some() {
        state.current_mode = mode;
    }
    let codec = ShareCodec::with_param(config.editor.share_param.as_str());
    let base_url = base_url.unwrap_or(&config.editor.base_url);
    codec
        .encode(&state, base_url)
        .with_context(|| format!("Failed to build share link on {base_url}"))
}

pub fn decode(url: &str, config: &EditorConfig) -> Result<String> {
    let codec = ShareCodec::with_param(config.editor.share_param.as_str());
    let Some(state) = codec.decode(url) else {
        bail!("No shared theme found in the link");
    };
    serde_json::to_string_pretty(&state).context("Failed to serialize shared state")
}

pub fn fonts(families: &[String]) -> String {
    let selected: Vec<Option<&str>> = families.iter().map(|f| Some(f.as_str())).collect();
    let mut lines = vec![format!("common weights: {}", weight_list(&common_weights(&selected)))];
    for family in families {
        let weights = font_weights(family);
        lines.push(format!("{family}: {}", stylesheet_url(family, weights)));
    }
    lines.join("\n")
}

pub fn font_catalog(category: FontCategory) -> String {
    popular_fonts(category)
        .iter()
        .map(|family| format!("{family:<22}{}", weight_list(font_weights(family))))
        .collect::<Vec<_>>()
        .join("\n")
}

fn weight_list(weights: &[u16]) -> String {
    weights.iter().map(u16::to_string).collect::<Vec<_>>().join(" ")
}

pub fn select(id: &str, config: &EditorConfig) -> Result<String> {
    let mut editor = ThemeEditor::from_config(config);
    let preset = editor
        .select_preset_id(id)
        .with_context(|| format!("Failed to select preset '{id}'"))?;
    Ok(format!("Selected {}", preset.display_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_preset_state(dir: &Path, preset: ThemePreset) -> PathBuf {
        let path = dir.join("state.json");
        fs::write(&path, serde_json::to_string(&preset.config()).unwrap()).unwrap();
        path
    }

    #[test]
    fn export_starts_with_theme_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_preset_state(dir.path(), ThemePreset::Claude);
        let code = export(&path).unwrap();
        assert!(code.starts_with("export const customTheme = {\n  theme: {"));
        assert!(code.contains("export const lightCustomCss"));
    }

    #[test]
    fn tokens_are_json_for_requested_mode() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_preset_state(dir.path(), ThemePreset::ChatGpt);
        let json: serde_json::Value = serde_json::from_str(&tokens(&path, ColorScheme::Dark).unwrap()).unwrap();
        assert_eq!(json["fontBody"], "400 15px/1.5 Inter");
    }

    #[test]
    fn derive_lists_every_variant() {
        let out = derive("rgb(100, 150, 200)", ColorScheme::Light, "default");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "hover    rgba(94,141,188,1)");
        assert_eq!(lines[4], "subtle   rgba(100,150,200,0.04)");
    }

    #[test]
    fn share_then_decode() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_preset_state(dir.path(), ThemePreset::Claude);
        let config = EditorConfig::default();
        let url = share(&path, Some(ColorScheme::Dark), Some("https://example.com/"), &config).unwrap();
        let decoded: SharedState = serde_json::from_str(&decode(&url, &config).unwrap()).unwrap();
        assert_eq!(decoded.current_mode, Some(ColorScheme::Dark));
        assert_eq!(decoded.into_parts().0, ThemePreset::Claude.config());
    }

    #[test]
    fn decode_without_payload_fails() {
        assert!(decode("https://example.com/", &EditorConfig::default()).is_err());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert!(preset("vaporwave").is_err());
        assert!(preset("claude").unwrap().contains("\"light\""));
    }

    #[test]
    fn select_persists_to_configured_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = EditorConfig::default();
        config.preferences.path = Some(dir.path().join("prefs.toml"));
        assert_eq!(select("claude", &config).unwrap(), "Selected Claude");
        let saved = fs::read_to_string(dir.path().join("prefs.toml")).unwrap();
        assert!(saved.contains("claude"));
    }

    #[test]
    fn font_catalog_lists_category_with_weights() {
        let out = font_catalog(FontCategory::Monospace);
        assert!(out.starts_with("Geist Mono"));
        assert!(out.lines().any(|line| line.starts_with("Space Mono") && line.ends_with("400 700")));
    }

    #[test]
    fn fonts_reports_common_weights() {
        let out = fonts(&["Inter".to_string(), "DM Sans".to_string()]);
        assert!(out.starts_with("common weights: 400 500 700"));
        assert!(out.contains("DM+Sans:wght@400;500;700"));
    }
}
