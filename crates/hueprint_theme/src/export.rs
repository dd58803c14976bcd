//! Code export
//!
//! Renders both assembled token maps as a JavaScript module the user can
//! paste into their own app, followed by any custom CSS and a usage hint.

use std::fmt::Write;

use crate::assemble::assemble_dual;
use crate::customization::{DualModeThemeCustomization, ThemeCustomization};
use crate::engine::EngineRegistry;
use crate::tokens::{TokenMap, TokenValue};

const USAGE: &str = "// Usage:
// <ThemeProvider theme={customTheme.theme} darkTheme={customTheme.darkTheme}>
//   <C1Chat ... />
// </ThemeProvider>";

/// Export code for a light/dark customization pair
pub fn export_code(
    light: &ThemeCustomization,
    dark: &ThemeCustomization,
    engines: &EngineRegistry,
) -> String {
    let state = DualModeThemeCustomization::new(light.clone(), dark.clone());
    let (light_tokens, dark_tokens) = assemble_dual(&state, engines);

    let mut out = String::new();
    out.push_str("export const customTheme = {\n");
    out.push_str("  theme: ");
    write_object(&mut out, &light_tokens);
    out.push_str(",\n  darkTheme: ");
    write_object(&mut out, &dark_tokens);
    out.push_str("\n};\n");

    for (name, css) in [("lightCustomCss", &light.custom_css), ("darkCustomCss", &dark.custom_css)] {
        let Some(css) = css.as_deref().filter(|css| !css.trim().is_empty()) else {
            continue;
        };
        let _ = write!(out, "\nexport const {name} = `{}`;\n", escape_template(css));
    }

    out.push('\n');
    out.push_str(USAGE);
    out.push('\n');
    out
}

fn write_object(out: &mut String, tokens: &TokenMap) {
    if tokens.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{\n");
    let entries: Vec<String> = tokens
        .iter()
        .map(|(key, value)| format!("    {key}: {}", format_value(value)))
        .collect();
    out.push_str(&entries.join(",\n"));
    out.push_str("\n  }");
}

fn format_value(value: &TokenValue) -> String {
    match value {
        TokenValue::Scalar(value) => quote(value),
        TokenValue::List(values) => {
            let items: Vec<String> = values.iter().map(|v| format!("      {}", quote(v))).collect();
            format!("[\n{}\n    ]", items.join(",\n"))
        }
    }
}

fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn escape_template(css: &str) -> String {
    css.replace('\\', "\\\\").replace('`', "\\`").replace("${", "\\${")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_maps_render_as_empty_objects() {
        let code = export_code(
            &ThemeCustomization::empty(),
            &ThemeCustomization::empty(),
            &EngineRegistry::with_defaults(),
        );
        assert_eq!(
            code,
            "export const customTheme = {\n  theme: {},\n  darkTheme: {}\n};\n\n".to_string() + USAGE + "\n"
        );
    }

    #[test]
    fn scalars_and_lists_are_quoted() {
        let mut light = ThemeCustomization::empty();
        light.fills.background_fills = Some("#fff".into());
        light.chart_colors.primary = Some("#000".into());
        light.chart_colors.secondary = Some("#fff".into());
        light.chart_colors.use_dual_mode = Some(true);
        let code = export_code(&light, &ThemeCustomization::empty(), &EngineRegistry::with_defaults());

        assert!(code.contains("  theme: {\n    backgroundFills: \"#fff\",\n    defaultChartPalette: [\n      \"rgba(0,0,0,0.2)\",\n"));
        assert!(code.contains("      \"rgba(255,255,255,0.2)\"\n    ]\n  },\n  darkTheme: {}\n};"));
    }

    #[test]
    fn custom_css_blocks_only_when_present() {
        let mut dark = ThemeCustomization::empty();
        dark.custom_css = Some(".x { content: `${y}`; }".into());
        let mut light = ThemeCustomization::empty();
        light.custom_css = Some("   ".into());
        let code = export_code(&light, &dark, &EngineRegistry::with_defaults());

        assert!(!code.contains("lightCustomCss"));
        assert!(code.contains("export const darkCustomCss = `.x { content: \\`\\${y}\\`; }`;\n"));
        assert!(code.ends_with("</ThemeProvider>\n"));
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote(r#"a"b\c"#), r#""a\"b\\c""#);
    }
}
