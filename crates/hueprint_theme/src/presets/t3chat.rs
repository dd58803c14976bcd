//! T3 Chat preset: pink-tinted surfaces with a magenta accent, Raleway throughout

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
  margin-bottom: -12px;
  display: flex;
  flex-direction: column;
  background-color: rgba(0,0,0,0.0);
  border: 1px solid rgba(0,0,0,0.08);
  box-shadow: 0 0 0 8px #FFDFFE;
  border-radius: 12px 12px 0px 0px;
}
";

const DARK_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  margin-bottom: -12px;
  display: flex;
  flex-direction: column;
  background-color: rgba(0,0,0,0.0);
  border: 1px solid rgba(0,0,0,0.08);
  box-shadow: 0 0 0 8px #241F2A;
  border-radius: 12px 12px 0px 0px;
}
";

fn raleway() -> Fonts {
    Fonts {
        body: some("Raleway"),
        heading: some("Raleway"),
        mono: some("Raleway"),
    }
}

pub(super) fn config() -> DualModeThemeCustomization {
    DualModeThemeCustomization::new(light(), dark())
}

fn light() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#FAF3FB"),
            container_fills: some("#F6DEF7"),
            container_hover_fills: some("#F6DEF7"),
            danger_fills: some("rgba(216,-35,-14,0.04)"),
            success_fills: some("rgba(-20,133,72,0.04)"),
            info_fills: some("rgba(-61,142,200,0.04)"),
            alert_fills: some("rgba(215,151,0,0.04)"),
            sunk_fills: some("rgba(78,42,100,0.04)"),
            sunk_bg_fills: some("rgba(78,42,100,0.04)"),
            highlight_subtle: some("rgba(78,42,100,0.02)"),
            ..Default::default()
        },
        text: TextColors {
            primary_text: some("rgba(78,42,100,1)"),
            secondary_text: some("rgba(78,42,100,0.5)"),
            link_text: some("rgba(56,117,214,1)"),
            danger_text: some("oklch(0.54 0.24 28)"),
            success_text: some("oklch(0.54 0.14 155)"),
            info_text: some("rgba(56,117,214,1)"),
            accent_primary_text: some("rgba(255,255,255,1)"),
            accent_secondary_text: some("rgba(255,255,255,0.5)"),
            brand_text: some("rgba(255,255,255,1)"),
            brand_secondary_text: some("rgba(255,255,255,0.5)"),
            disabled_text: some("rgba(78,42,100,0.3)"),
            accent_disabled_text: some("rgba(255,255,255,0.3)"),
            alert_text: some("oklch(0.72 0.15 78)"),
        },
        interactive: InteractiveColors {
            interactive_accent: some("#B2346C"),
            interactive_accent_hover: some("rgba(206,90,142,1)"),
            interactive_accent_pressed: some("rgba(206,90,142,1)"),
            interactive_accent_disabled: some("rgba(206,90,142,0.5)"),
            interactive_destructive: some("rgba(216,-35,-14,0.04)"),
            interactive_destructive_hover: some("rgba(203,-33,-13,1)"),
            interactive_destructive_pressed: some("rgba(194,-31,-13,1)"),
            ..Default::default()
        },
        colors: LegacyColors {
            background: some("#FAF3FB"),
            container: some("#F6DEF7"),
            primary: some("#B2346C"),
            text_primary: some("rgba(78,42,100,1)"),
            text_secondary: some("rgba(78,42,100,0.5)"),
            link_text: some("rgba(56,117,214,1)"),
            danger: some("oklch(0.54 0.24 28)"),
            success: some("oklch(0.54 0.14 155)"),
            info: some("rgba(56,117,214,1)"),
            alert: some("oklch(0.72 0.15 78)"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(178,52,108,1)"),
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
            container_bg: some("#FAF3FB"),
            assistant_bg: some("#FAF3FB"),
            assistant_text: some("#4E2A64"),
            user_bg: some("#F6DEF7"),
            user_text: some("#4E2A64"),
        },
        shadow: Some(ShadowConfig {
            color: some("rgba(14,18,22,1)"),
            opacity: Some(0.04),
            blur: Some(3.0),
            spread: Some(0.0),
            offset_x: Some(0.0),
            offset_y: Some(1.0),
        }),
        fonts: raleway(),
        font_weight: FontWeight {
            regular: Some(500),
            medium: Some(600),
            bold: Some(700),
        },
        spacing: chat_spacing(),
        border_radius: radius_scale([0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 16.0, 20.0, 24.0, 28.0, 10.0]),
        custom_css: Some(format!("{COMMON_CSS}{LIGHT_CSS}")),
        ..Default::default()
    }
}

fn dark() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#221C27"),
            container_fills: some("#191116"),
            overlay_fills: some("rgba(0, 0, 0, 0.7)"),
            sunk_fills: some("rgba(238,89,164,0.06)"),
            container_hover_fills: some("rgba(255, 255, 255, 0.06)"),
            danger_fills: some("#2d1410"),
            success_fills: some("#0d2818"),
            info_fills: some("#1a1a2e"),
            elevated_fills: some("rgba(255, 255, 255, 0.1)"),
            alert_fills: some("#2d2610"),
            sunk_bg_fills: some("rgba(238,89,164,0.06)"),
            inverted_fills: some("#f1f1f1"),
            highlight_subtle: some("rgba(238,89,164,0.02)"),
        },
        text: TextColors {
            brand_text: some("rgba(255,255,255,1)"),
            brand_secondary_text: some("rgba(255,255,255,0.5)"),
            primary_text: some("#F4EBFB"),
            secondary_text: some("rgba(244,235,251,0.5)"),
            disabled_text: some("rgba(244,235,251,0.3)"),
            danger_text: some("#f87171"),
            success_text: some("#4ade80"),
            link_text: some("#818cf8"),
            info_text: some("#60a5fa"),
            alert_text: some("#fbbf24"),
            accent_primary_text: some("rgba(255,255,255,1)"),
            accent_secondary_text: some("rgba(255,255,255,0.5)"),
            accent_disabled_text: some("rgba(255,255,255,0.3)"),
        },
        interactive: InteractiveColors {
            interactive_default: some("rgba(255, 255, 255, 0.02)"),
            interactive_hover: some("rgba(255, 255, 255, 0.06)"),
            interactive_pressed: some("rgba(255, 255, 255, 0.1)"),
            interactive_disabled: some("rgba(255, 255, 255, 0.02)"),
            interactive_accent: some("#8E0047"),
            interactive_accent_hover: some("rgba(168,11,89,1)"),
            interactive_accent_pressed: some("rgba(168,11,89,1)"),
            interactive_accent_disabled: some("rgba(168,11,89,0.5)"),
            interactive_destructive: some("#2d1410"),
            interactive_destructive_hover: some("#3d1a15"),
            interactive_destructive_pressed: some("#4d201a"),
            interactive_destructive_disabled: some("#1d0d0a"),
        },
        colors: LegacyColors {
            background: some("#221C27"),
            container: some("#191116"),
            primary: some("#8E0047"),
            text_primary: some("#F4EBFB"),
            text_secondary: some("rgba(244,235,251,0.5)"),
            link_text: some("#818cf8"),
            danger: some("#f87171"),
            success: some("#4ade80"),
            info: some("#60a5fa"),
            alert: some("#fbbf24"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(241,54,148,1)"),
            ..Default::default()
        },
        stroke_colors: StrokeColors {
            slots: StrokeSlots {
                default: some("rgba(255,255,255,0.06)"),
                interactive_el: some("rgba(255,255,255,0.12)"),
                interactive_el_hover: some("rgba(255,255,255,0.3)"),
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
            container_bg: some("#221C27"),
            assistant_bg: some("#221C27"),
            assistant_text: some("#F4EBFB"),
            user_bg: some("#2C2532"),
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
        fonts: raleway(),
        font_weight: FontWeight {
            regular: Some(500),
            medium: Some(600),
            bold: Some(700),
        },
        spacing: chat_spacing(),
        border_radius: radius_scale([0.0, 1.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 18.0, 24.0, 810.0]),
        custom_css: Some(format!("{COMMON_CSS}{DARK_CSS}")),
        ..Default::default()
    }
}
