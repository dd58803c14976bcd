//! Chart palette
//!
//! The palette is consumed positionally by chart widgets, so both the
//! length and the order of entries are fixed.

use hueprint_core::{parse_or_black, ColorScheme};

use crate::customization::ChartColors;

/// Token the palette is emitted under
pub const CHART_PALETTE_TOKEN: &str = "defaultChartPalette";

/// Opacity ramp for a single seed color; index 5 is the opaque anchor
pub const SINGLE_COLOR_OPACITIES: [f64; 10] = [0.5, 0.57, 0.65, 0.72, 0.85, 1.0, 0.4, 0.3, 0.2, 0.1];

/// Ramp for the primary half of a dual palette
pub const DUAL_PRIMARY_OPACITIES: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Ramp for the secondary half of a dual palette
pub const DUAL_SECONDARY_OPACITIES: [f64; 5] = [1.0, 0.8, 0.6, 0.4, 0.2];

/// Flat per-channel lift applied to seeds in dark mode
pub const DARK_MODE_BRIGHTEN: f64 = 20.0;

/// Generate the chart palette, or an empty list when no seed is set.
///
/// Dual mode needs `useDualMode` and both seeds; otherwise the first set
/// seed (primary, then secondary) drives a single-color ramp.
pub fn generate_chart_palette(chart: &ChartColors, scheme: ColorScheme) -> Vec<String> {
    let primary = chart.primary.as_deref();
    let secondary = chart.secondary.as_deref();

    match (chart.use_dual_mode.unwrap_or(false), primary, secondary) {
        (true, Some(primary), Some(secondary)) => {
            let mut palette = ramp(primary, &DUAL_PRIMARY_OPACITIES, scheme);
            palette.extend(ramp(secondary, &DUAL_SECONDARY_OPACITIES, scheme));
            palette
        }
        (_, Some(seed), _) | (_, None, Some(seed)) => ramp(seed, &SINGLE_COLOR_OPACITIES, scheme),
        (_, None, None) => Vec::new(),
    }
}

fn ramp(seed: &str, opacities: &[f64], scheme: ColorScheme) -> Vec<String> {
    let mut color = parse_or_black(seed);
    if scheme.is_dark() {
        color = color.brighten(DARK_MODE_BRIGHTEN);
    }
    opacities
        .iter()
        .map(|opacity| color.with_alpha(*opacity).to_css())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chart(primary: Option<&str>, secondary: Option<&str>, dual: bool) -> ChartColors {
        ChartColors {
            primary: primary.map(Into::into),
            secondary: secondary.map(Into::into),
            use_dual_mode: Some(dual),
        }
    }

    #[test]
    fn no_seed_no_palette() {
        assert!(generate_chart_palette(&ChartColors::default(), ColorScheme::Light).is_empty());
    }

    #[test]
    fn single_color_has_ten_entries() {
        let palette = generate_chart_palette(&chart(Some("#0000ff"), None, false), ColorScheme::Light);
        assert_eq!(palette.len(), 10);
        assert_eq!(palette[0], "rgba(0,0,255,0.5)");
        assert_eq!(palette[5], "rgba(0,0,255,1)");
        assert_eq!(palette[9], "rgba(0,0,255,0.1)");
    }

    #[test]
    fn second_seed_ignored_outside_dual_mode() {
        let palette = generate_chart_palette(&chart(Some("#0000ff"), Some("#ff0000"), false), ColorScheme::Light);
        assert_eq!(palette.len(), 10);
        assert!(palette.iter().all(|c| c.starts_with("rgba(0,0,255,")));
    }

    #[test]
    fn secondary_alone_drives_single_ramp() {
        let palette = generate_chart_palette(&chart(None, Some("#ff0000"), true), ColorScheme::Light);
        assert_eq!(palette.len(), 10);
        assert_eq!(palette[5], "rgba(255,0,0,1)");
    }

    #[test]
    fn dual_mode_steps_up_then_down() {
        let palette = generate_chart_palette(&chart(Some("#0000ff"), Some("#ff0000"), true), ColorScheme::Light);
        assert_eq!(
            palette,
            vec![
                "rgba(0,0,255,0.2)",
                "rgba(0,0,255,0.4)",
                "rgba(0,0,255,0.6)",
                "rgba(0,0,255,0.8)",
                "rgba(0,0,255,1)",
                "rgba(255,0,0,1)",
                "rgba(255,0,0,0.8)",
                "rgba(255,0,0,0.6)",
                "rgba(255,0,0,0.4)",
                "rgba(255,0,0,0.2)",
            ]
        );
    }

    #[test]
    fn dark_mode_brightens_and_clamps() {
        let palette = generate_chart_palette(&chart(Some("rgb(10,240,100)"), None, false), ColorScheme::Dark);
        assert_eq!(palette[5], "rgba(30,255,120,1)");
    }
}
