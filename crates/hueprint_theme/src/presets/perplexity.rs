//! Perplexity preset: paper surfaces with a teal accent, DM Sans throughout

use super::{chat_spacing, radius_scale, some};
use crate::customization::*;

const COMMON_CSS: &str = "
.crayon-shell-thread-composer__input {
  width: 100%;
}

.crayon-card {
  border: none;
  background: transparent;
}

.crayon-shell-thread-message-assistant__logo {
  opacity: 0;
}

.crayon-shell-thread-message-user__content {
  border-radius: 16px 16px 16px 16px;
}

.crayon-shell-thread-composer__input-wrapper .crayon-icon-button {
  width: 40px;
}

.crayon-table child {
  border-radius: 0px;
}

.crayon-table-row:nth-child(even) {
  background-color: transparent;
}

.crayon-table thead {
  background-color: var(--crayon-highlight-subtle);
}

.c1-mini-card {
  padding: 10px;
}
";

const LIGHT_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  display: flex;
  flex-direction: column;
  background-color: rgba(0,0,0,0.0);
  border: 1px solid rgba(0,0,0,0.2);
  box-shadow: 0px 0px 8px -3px rgba(0,0,0,0.25);
}
";

const DARK_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  display: flex;
  flex-direction: column;
  background-color: rgba(255,255,255,0.03);
  border: 1px solid rgba(255,255,255,0.16);
}
";

fn dm_sans() -> Fonts {
    Fonts {
        body: some("DM Sans"),
        heading: some("DM Sans"),
        mono: some("DM Sans"),
    }
}

pub(super) fn config() -> DualModeThemeCustomization {
    DualModeThemeCustomization::new(light(), dark())
}

fn light() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#FCFCF9"),
            container_fills: some("#FCFCF9"),
            container_hover_fills: some("rgba(240,240,240,1)"),
            danger_fills: some("rgba(216,-35,-14,0.04)"),
            success_fills: some("rgba(-20,133,72,0.04)"),
            info_fills: some("rgba(-61,142,200,0.04)"),
            alert_fills: some("rgba(215,151,0,0.04)"),
            ..Default::default()
        },
        text: TextColors {
            primary_text: some("rgba(0,0,0)"),
            secondary_text: some("rgba(0,0,0,0.5)"),
            link_text: some("rgba(56,117,214,1)"),
            danger_text: some("oklch(0.54 0.24 28)"),
            success_text: some("oklch(0.54 0.14 155)"),
            info_text: some("rgba(56,117,214,1)"),
            accent_primary_text: some("rgba(255,255,255,1)"),
            accent_secondary_text: some("rgba(255,255,255,0.5)"),
            brand_text: some("rgba(255,255,255,1)"),
            brand_secondary_text: some("rgba(255,255,255,0.5)"),
            disabled_text: some("rgba(0,0,0,0.3)"),
            accent_disabled_text: some("rgba(255,255,255,0.3)"),
            ..Default::default()
        },
        interactive: InteractiveColors {
            interactive_accent: some("#00828F"),
            interactive_accent_hover: some("rgba(0,89,97,1)"),
            interactive_accent_pressed: some("rgba(0,89,97,1)"),
            interactive_accent_disabled: some("rgba(0,89,97,0.4)"),
            interactive_destructive: some("rgba(216,-35,-14,0.04)"),
            interactive_destructive_hover: some("rgba(203,-33,-13,1)"),
            interactive_destructive_pressed: some("rgba(194,-31,-13,1)"),
            ..Default::default()
        },
        colors: LegacyColors {
            background: some("#FCFCF9"),
            container: some("#FCFCF9"),
            primary: some("#00828F"),
            text_primary: some("rgba(0,0,0)"),
            text_secondary: some("rgba(0,0,0,0.5)"),
            link_text: some("rgba(56,117,214,1)"),
            danger: some("oklch(0.54 0.24 28)"),
            success: some("oklch(0.54 0.14 155)"),
            info: some("rgba(56,117,214,1)"),
            alert: some("oklch(0.72 0.15 78)"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(0,130,143,1)"),
            ..Default::default()
        },
        stroke_colors: StrokeColors {
            slots: StrokeSlots {
                default: some("rgba(0,0,0,0.06)"),
                interactive_el: some("rgba(0,0,0,0.12)"),
                interactive_el_hover: some("rgba(0,0,0,0.2)"),
                interactive_el_selected: some("rgba(0,0,0,1)"),
                emphasis: some("rgba(0,0,0,0.32)"),
                accent: some("rgba(255,255,255,0.2)"),
                accent_emphasis: some("rgba(59,130,246,0.4)"),
                info: some("#eff6ff"),
                info_emphasis: some("#3b82f6"),
                alert: some("#fffbeb"),
                alert_emphasis: some("#f59e0b"),
                success: some("#ecfdf5"),
                success_emphasis: some("#10b981"),
                danger: some("#fef2f2"),
                danger_emphasis: some("#ef4444"),
            },
            ..Default::default()
        },
        chat_colors: ChatColors {
            container_bg: some("#FCFCF9"),
            assistant_bg: some("#FCFCF9"),
            assistant_text: some("#000000"),
            user_bg: some("rgba(239,239,235,1)"),
            user_text: some("oklch(0.18 0.01 230)"),
        },
        shadow: Some(ShadowConfig {
            color: some("rgba(14,18,22,1)"),
            opacity: Some(0.04),
            blur: Some(6.0),
            spread: Some(0.0),
            offset_x: Some(0.0),
            offset_y: Some(1.0),
        }),
        fonts: dm_sans(),
        spacing: chat_spacing(),
        border_radius: radius_scale([0.0, 1.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 18.0, 24.0, 810.0]),
        custom_css: Some(format!("{COMMON_CSS}{LIGHT_CSS}")),
        ..Default::default()
    }
}

fn dark() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#191A1A"),
            container_fills: some("#191A1A"),
            overlay_fills: some("rgba(0, 0, 0, 0.7)"),
            sunk_fills: some("rgba(255,255,255,0.06)"),
            container_hover_fills: some("rgba(255, 255, 255, 0.06)"),
            danger_fills: some("#2d1410"),
            success_fills: some("#0d2818"),
            info_fills: some("#1a1a2e"),
            elevated_fills: some("rgba(255, 255, 255, 0.1)"),
            alert_fills: some("#2d2610"),
            sunk_bg_fills: some("rgba(255,255,255,0.06)"),
            inverted_fills: some("#f1f1f1"),
            highlight_subtle: some("rgba(255,255,255,0.03)"),
        },
        text: TextColors {
            brand_text: some("rgba(0, 0, 0, 1)"),
            brand_secondary_text: some("rgba(0, 0, 0, 0.7)"),
            primary_text: some("#f5f5f5"),
            secondary_text: some("#8c8c8c"),
            disabled_text: some("#525252"),
            danger_text: some("#f87171"),
            success_text: some("#4ade80"),
            link_text: some("#818cf8"),
            info_text: some("#60a5fa"),
            alert_text: some("#fbbf24"),
            accent_primary_text: some("rgba(0, 0, 0, 1)"),
            accent_secondary_text: some("rgba(0, 0, 0, 0.7)"),
            accent_disabled_text: some("rgba(0, 0, 0, 0.4)"),
        },
        interactive: InteractiveColors {
            interactive_default: some("rgba(255, 255, 255, 0.02)"),
            interactive_hover: some("rgba(255, 255, 255, 0.06)"),
            interactive_pressed: some("rgba(255, 255, 255, 0.1)"),
            interactive_disabled: some("rgba(255, 255, 255, 0.02)"),
            interactive_accent: some("#00BCC9"),
            interactive_accent_hover: some("rgba(0,167,179,1)"),
            interactive_accent_pressed: some("rgba(0,167,179,1)"),
            interactive_accent_disabled: some("rgba(0,167,179,0.5)"),
            interactive_destructive: some("#2d1410"),
            interactive_destructive_hover: some("#3d1a15"),
            interactive_destructive_pressed: some("#4d201a"),
            interactive_destructive_disabled: some("#1d0d0a"),
        },
        colors: LegacyColors {
            background: some("#191A1A"),
            container: some("#191A1A"),
            primary: some("#00BCC9"),
            text_primary: some("#f5f5f5"),
            text_secondary: some("#8c8c8c"),
            link_text: some("#818cf8"),
            danger: some("#f87171"),
            success: some("#4ade80"),
            info: some("#60a5fa"),
            alert: some("#fbbf24"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(20,244,255,1)"),
            ..Default::default()
        },
        stroke_colors: StrokeColors {
            slots: StrokeSlots {
                default: some("rgba(255,255,255,0.1)"),
                interactive_el: some("rgba(255,255,255,0.2)"),
                interactive_el_hover: some("rgba(255,255,255,0.4)"),
                interactive_el_selected: some("rgba(255,255,255,1)"),
                emphasis: some("rgba(255,255,255,0.3)"),
                accent: some("rgba(255,255,255,0.06)"),
                accent_emphasis: some("rgba(255,255,255,0.2)"),
                info: some("#1a1a2e"),
                info_emphasis: some("rgba(128,185,255,1)"),
                alert: some("#2d2610"),
                alert_emphasis: some("#fbbf24"),
                success: some("#0d2818"),
                success_emphasis: some("#4ade80"),
                danger: some("#2d1410"),
                danger_emphasis: some("#f87171"),
            },
            ..Default::default()
        },
        chat_colors: ChatColors {
            container_bg: some("#191A1A"),
            assistant_bg: some("#191A1A"),
            assistant_text: some("#f5f5f5"),
            user_bg: some("rgba(51,51,51,1)"),
            user_text: some("#f5f5f5"),
        },
        shadow: Some(ShadowConfig {
            color: some("rgba(0,0,0,1)"),
            opacity: Some(0.5),
            blur: Some(6.0),
            spread: Some(0.0),
            offset_x: Some(0.0),
            offset_y: Some(1.0),
        }),
        fonts: dm_sans(),
        font_weight: FontWeight {
            regular: Some(400),
            medium: Some(500),
            bold: Some(500),
        },
        spacing: chat_spacing(),
        border_radius: radius_scale([0.0, 1.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 18.0, 24.0, 810.0]),
        custom_css: Some(format!("{COMMON_CSS}{DARK_CSS}")),
        ..Default::default()
    }
}
