//! Claude preset: warm paper background, terracotta accent, Bitter throughout

use super::{chat_radius, chat_spacing, some};
use crate::customization::*;

const COMMON_CSS: &str = "
.crayon-shell-thread-message-assistant__logo {
  visibility: hidden;
}

.crayon-card {
  background: none;
  border: none;
}

.crayon-shell-thread-message-user__content {
  border-radius: 14px;
}

.crayon-shell-thread-composer__input {
  height: 60px !important;
}
";

const LIGHT_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  background: white;
  border-radius: 20px;
  border: 1px solid transparent;
  box-shadow: 0px 0px 6px -3px rgba(0,0,0,0.25);
}
";

const DARK_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  background: rgba(255,255,255,0.05);
  border-radius: 20px;
  border: 1px solid rgba(255,255,255,0.15);
  box-shadow: 0px 0px 8px -3px #000000;
}
";

fn bitter() -> Fonts {
    Fonts {
        body: some("Bitter"),
        heading: some("Bitter"),
        mono: some("Bitter"),
    }
}

pub(super) fn config() -> DualModeThemeCustomization {
    DualModeThemeCustomization::new(light(), dark())
}

fn light() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#FAF9F5"),
            container_fills: some("#FAF9F5"),
            container_hover_fills: some("rgba(242,237,236,1)"),
            danger_fills: some("rgba(212,14,20,0.04)"),
            success_fills: some("rgba(-5,126,70,0.04)"),
            info_fills: some("rgba(-77,134,212,0.04)"),
            alert_fills: some("rgba(208,144,30,0.04)"),
            ..Default::default()
        },
        text: TextColors {
            primary_text: some("rgba(5,5,5,1)"),
            secondary_text: some("rgba(5,5,5,0.5)"),
            link_text: some("oklch(0.60 0.11 40)"),
            danger_text: some("oklch(0.55 0.22 28)"),
            success_text: some("oklch(0.52 0.13 155)"),
            info_text: some("rgba(61,133,209,1)"),
            disabled_text: some("rgba(5,5,5,0.3)"),
            accent_primary_text: some("rgba(255,255,255,1)"),
            accent_secondary_text: some("rgba(255,255,255,0.5)"),
            accent_disabled_text: some("rgba(255,255,255,0.3)"),
            brand_text: some("rgba(255,255,255,1)"),
            brand_secondary_text: some("rgba(255,255,255,0.5)"),
            ..Default::default()
        },
        interactive: InteractiveColors {
            interactive_accent: some("oklch(0.60 0.11 40)"),
            interactive_accent_hover: some("rgba(162,93,68,1)"),
            interactive_accent_pressed: some("rgba(165,94,68,1)"),
            interactive_accent_disabled: some("rgba(183,104,76,0.21)"),
            interactive_destructive: some("rgba(212,14,20,0.04)"),
            interactive_destructive_hover: some("rgba(199,13,19,1)"),
            interactive_destructive_pressed: some("rgba(191,13,18,1)"),
            ..Default::default()
        },
        colors: LegacyColors {
            background: some("#FAF9F5"),
            container: some("#FAF9F5"),
            primary: some("oklch(0.60 0.11 40)"),
            text_primary: some("rgba(5,5,5,1)"),
            text_secondary: some("rgba(5,5,5,0.5)"),
            link_text: some("oklch(0.60 0.11 40)"),
            danger: some("oklch(0.55 0.22 28)"),
            success: some("oklch(0.52 0.13 155)"),
            info: some("rgba(61,133,209,1)"),
            alert: some("oklch(0.70 0.14 75)"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(183,104,76,1)"),
            ..Default::default()
        },
        stroke_colors: StrokeColors {
            slots: StrokeSlots {
                default: some("rgba(0,0,0,0.06)"),
                interactive_el: some("rgba(0,0,0,0.12)"),
                interactive_el_hover: some("rgba(0,0,0,0.20)"),
                interactive_el_selected: some("rgba(0,0,0,1)"),
                emphasis: some("rgba(0,0,0,0.32)"),
                accent: some("rgba(255,255,255,0.06)"),
                accent_emphasis: some("rgba(255,255,255,0.3)"),
                info: some("rgba(232,240,253,1)"),
                info_emphasis: some("rgba(77,163,255,1)"),
                alert: some("#fff8e6"),
                alert_emphasis: some("#cc8800"),
                success: some("#e6f7ed"),
                success_emphasis: some("#10a37f"),
                danger: some("#fef2f2"),
                danger_emphasis: some("#dc2626"),
            },
            ..Default::default()
        },
        chat_colors: ChatColors {
            container_bg: some("#FAF9F5"),
            assistant_bg: some("#FAF9F5"),
            assistant_text: some("rgb(20, 20, 19)"),
            user_bg: some("rgb(240, 238, 230)"),
            user_text: some("rgb(20, 20, 19)"),
        },
        shadow: Some(ShadowConfig {
            color: some("rgba(183,104,76,1)"),
            opacity: Some(0.06),
            blur: Some(4.0),
            spread: Some(0.0),
            offset_x: Some(0.0),
            offset_y: Some(1.0),
        }),
        fonts: bitter(),
        spacing: chat_spacing(),
        border_radius: chat_radius(),
        custom_css: Some(format!("{COMMON_CSS}{LIGHT_CSS}")),
        ..Default::default()
    }
}

fn dark() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#262624"),
            container_fills: some("#262624"),
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
            brand_text: some("rgba(255,255,255,1)"),
            brand_secondary_text: some("rgba(255,255,255,0.6)"),
            primary_text: some("#f5f5f5"),
            secondary_text: some("#8c8c8c"),
            disabled_text: some("#525252"),
            danger_text: some("#f87171"),
            success_text: some("#4ade80"),
            link_text: some("#818cf8"),
            info_text: some("#60a5fa"),
            alert_text: some("#fbbf24"),
            accent_primary_text: some("rgba(255,255,255,1)"),
            accent_secondary_text: some("rgba(255,255,255,0.6)"),
            accent_disabled_text: some("rgba(255,255,255,0.4)"),
        },
        interactive: InteractiveColors {
            interactive_default: some("rgba(255, 255, 255, 0.02)"),
            interactive_hover: some("rgba(255, 255, 255, 0.06)"),
            interactive_pressed: some("rgba(255, 255, 255, 0.1)"),
            interactive_disabled: some("rgba(255, 255, 255, 0.02)"),
            interactive_accent: some("#CC6F4B"),
            interactive_accent_hover: some("rgba(210,121,86,1)"),
            interactive_accent_pressed: some("rgba(210,121,86,1)"),
            interactive_accent_disabled: some("rgba(210,121,86,0.5)"),
            interactive_destructive: some("#2d1410"),
            interactive_destructive_hover: some("#3d1a15"),
            interactive_destructive_pressed: some("#4d201a"),
            interactive_destructive_disabled: some("#1d0d0a"),
        },
        colors: LegacyColors {
            background: some("#262624"),
            container: some("#262624"),
            primary: some("#CC6F4B"),
            text_primary: some("#f5f5f5"),
            text_secondary: some("#8c8c8c"),
            link_text: some("#818cf8"),
            danger: some("#f87171"),
            success: some("#4ade80"),
            info: some("#60a5fa"),
            alert: some("#fbbf24"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(255,167,121,1)"),
            ..Default::default()
        },
        stroke_colors: StrokeColors {
            slots: StrokeSlots {
                default: some("rgba(255,255,255,0.08)"),
                interactive_el: some("rgba(255,255,255,0.2)"),
                interactive_el_hover: some("rgba(255,255,255,0.32)"),
                interactive_el_selected: some("rgba(255,255,255,1)"),
                emphasis: some("rgba(255,255,255,0.32)"),
                accent: some("rgba(255,255,255,0.06)"),
                accent_emphasis: some("rgba(255,255,255,0.15)"),
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
            container_bg: some("#262624"),
            assistant_bg: some("#262624"),
            assistant_text: some("#f5f5f5"),
            user_bg: some("rgba(13,13,13,1)"),
            user_text: some("#f5f5f5"),
        },
        shadow: Some(ShadowConfig {
            color: some("rgba(0,0,0,1)"),
            opacity: Some(0.5),
            blur: Some(3.0),
            spread: Some(0.0),
            offset_x: Some(0.0),
            offset_y: Some(1.0),
        }),
        fonts: bitter(),
        spacing: chat_spacing(),
        border_radius: chat_radius(),
        custom_css: Some(format!("{COMMON_CSS}{DARK_CSS}")),
        ..Default::default()
    }
}
