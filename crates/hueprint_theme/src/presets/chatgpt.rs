//! ChatGPT preset: near-white surfaces, monochrome accent, Inter throughout

use super::{chat_radius, chat_spacing, some};
use crate::customization::*;

const COMMON_CSS: &str = "
.crayon-shell-thread-message-assistant__logo {
  opacity: 0;
}

.crayon-card {
  background: transparent;
  border: none;
}

.crayon-shell-thread-message-user__content {
  border-radius: 24px;
}
";

const LIGHT_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  padding: 10px;
  border-radius: 999px;
  padding-left: 16px;
  background-color: rgba(0,0,0,0.03);
}

.crayon-shell-thread-composer__input-wrapper .crayon-icon-button {
  height: 36px;
  width: 36px;
  border-radius: 999px;
}
";

const DARK_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  padding: 10px;
  border-radius: 999px;
  padding-left: 16px;
}

.crayon-shell-thread-composer__input-wrapper .crayon-icon-button {
  height: 36px;
  width: 36px;
  border-radius: 999px;
}
";

fn inter() -> Fonts {
    Fonts {
        body: some("Inter"),
        heading: some("Inter"),
        mono: some("Inter"),
    }
}

pub(super) fn config() -> DualModeThemeCustomization {
    DualModeThemeCustomization::new(light(), dark())
}

fn light() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("oklch(0.995 0 0)"),
            container_fills: some("oklch(1 0 0)"),
            container_hover_fills: some("rgba(240,240,240,1)"),
            danger_fills: some("rgba(212,-23,11,0.04)"),
            success_fills: some("rgba(-46,147,101,0.04)"),
            info_fills: some("rgba(-77,140,218,0.04)"),
            alert_fills: some("rgba(215,151,0,0.04)"),
            ..Default::default()
        },
        text: TextColors {
            primary_text: some("rgba(0,0,0,1)"),
            secondary_text: some("rgba(0,0,0,0.5)"),
            link_text: some("rgba(84,71,255,1)"),
            danger_text: some("oklch(0.54 0.23 27)"),
            success_text: some("oklch(0.58 0.14 165)"),
            info_text: some("rgba(84,71,255,1)"),
            disabled_text: some("rgba(0,0,0,0.3)"),
            accent_primary_text: some("rgba(255, 255, 255, 1)"),
            accent_secondary_text: some("rgba(255,255,255,0.5)"),
            accent_disabled_text: some("rgba(255,255,255,0.3)"),
            brand_text: some("rgba(255, 255, 255, 1)"),
            brand_secondary_text: some("rgba(255,255,255,0.5)"),
            ..Default::default()
        },
        interactive: InteractiveColors {
            interactive_accent: some("rgba(0,0,0,1)"),
            interactive_accent_hover: some("rgba(0,0,0,0.7)"),
            interactive_accent_pressed: some("rgba(0,0,0,0.7)"),
            interactive_accent_disabled: some("rgba(0,0,0,0.4)"),
            interactive_destructive: some("rgba(212,-23,11,0.04)"),
            interactive_destructive_hover: some("rgba(199,-22,10,1)"),
            interactive_destructive_pressed: some("rgba(191,-21,10,1)"),
            ..Default::default()
        },
        colors: LegacyColors {
            background: some("oklch(0.995 0 0)"),
            container: some("oklch(1 0 0)"),
            primary: some("rgba(0,0,0,1)"),
            text_primary: some("rgba(0,0,0,1)"),
            text_secondary: some("rgba(0,0,0,0.5)"),
            link_text: some("rgba(84,71,255,1)"),
            danger: some("oklch(0.54 0.23 27)"),
            success: some("oklch(0.58 0.14 165)"),
            info: some("rgba(84,71,255,1)"),
            alert: some("oklch(0.72 0.15 78)"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(77,145,255,1)"),
            ..Default::default()
        },
        stroke_colors: StrokeColors {
            slots: StrokeSlots {
                default: some("rgba(51,51,51,0.08)"),
                interactive_el: some("rgba(51,51,51,0.16)"),
                interactive_el_hover: some("rgba(51,51,51,0.2)"),
                interactive_el_selected: some("rgba(51,51,51,0.3)"),
                emphasis: some("rgba(51,51,51,0.16)"),
                accent: some("rgba(16,163,127,0.2)"),
                accent_emphasis: some("rgba(16,163,127,0.4)"),
                info: some("rgba(232,239,253,1)"),
                info_emphasis: some("rgba(84,71,255,1)"),
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
            container_bg: some("oklch(0.995 0 0)"),
            assistant_bg: some("oklch(0.98 0 0)"),
            assistant_text: some("oklch(0.20 0.01 250)"),
            user_bg: some("rgba(230,230,230,1)"),
            user_text: some("oklch(0.20 0.01 250)"),
        },
        shadow: Some(ShadowConfig {
            color: some("rgba(19,22,26,1)"),
            opacity: Some(0.05),
            blur: Some(7.0),
            spread: Some(0.0),
            offset_x: Some(0.0),
            offset_y: Some(1.0),
        }),
        fonts: inter(),
        spacing: chat_spacing(),
        border_radius: chat_radius(),
        custom_css: Some(format!("{COMMON_CSS}{LIGHT_CSS}")),
        ..Default::default()
    }
}

fn dark() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#212121"),
            container_fills: some("#151515"),
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
            interactive_accent: some("#ffffff"),
            interactive_accent_hover: some("rgba(222,222,222,1)"),
            interactive_accent_pressed: some("rgba(222,222,222,1)"),
            interactive_accent_disabled: some("#737373"),
            interactive_destructive: some("#2d1410"),
            interactive_destructive_hover: some("#3d1a15"),
            interactive_destructive_pressed: some("#4d201a"),
            interactive_destructive_disabled: some("#1d0d0a"),
        },
        colors: LegacyColors {
            background: some("#212121"),
            container: some("#151515"),
            primary: some("#ffffff"),
            text_primary: some("#f5f5f5"),
            text_secondary: some("#8c8c8c"),
            link_text: some("#818cf8"),
            danger: some("#f87171"),
            success: some("#4ade80"),
            info: some("#60a5fa"),
            alert: some("#fbbf24"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(132,203,255,1)"),
            ..Default::default()
        },
        stroke_colors: StrokeColors {
            slots: StrokeSlots {
                default: some("rgba(255, 255, 255, 0.06)"),
                interactive_el: some("rgba(255,255,255,0.15)"),
                interactive_el_hover: some("rgba(255, 255, 255, 0.3)"),
                interactive_el_selected: some("rgba(255, 255, 255, 0.5)"),
                emphasis: some("rgba(255,255,255,0.25)"),
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
            container_bg: some("#212121"),
            assistant_bg: some("#151515"),
            assistant_text: some("#f5f5f5"),
            user_bg: some("rgba(51,51,51,1)"),
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
        fonts: inter(),
        font_size: FontSize { base: Some(15.0) },
        spacing: chat_spacing(),
        border_radius: chat_radius(),
        custom_css: Some(format!("{COMMON_CSS}{DARK_CSS}")),
        ..Default::default()
    }
}
