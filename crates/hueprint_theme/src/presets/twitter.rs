//! Twitter preset: near-white and true-black surfaces, monochrome accent, Geist throughout

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
";

const LIGHT_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  padding: 8px;
  border-radius: 999px;
  padding-left: 16px;
  background-color: rgba(0,0,0,0.03);
}

.crayon-shell-thread-composer__input-wrapper .crayon-icon-button {
  height: 40px;
  width: 40px;
  border-radius: 999px;
}
";

const DARK_CSS: &str = "
.crayon-shell-thread-composer__input-wrapper {
  padding: 8px;
  border-radius: 999px;
  padding-left: 16px;
  background-color: rgba(255,255,255,0.03);
}

.crayon-shell-thread-composer__input-wrapper .crayon-icon-button {
  height: 40px;
  width: 40px;
  border-radius: 999px;
}

.crayon-shell-thread-message-user__content {
  border-radius: 20px 20px 0px 20px;
}
";

fn geist() -> Fonts {
    Fonts {
        body: some("Geist"),
        heading: some("Geist"),
        mono: some("Geist"),
    }
}

pub(super) fn config() -> DualModeThemeCustomization {
    DualModeThemeCustomization::new(light(), dark())
}

fn light() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#fefefe"),
            container_fills: some("#fefefe"),
            overlay_fills: some("rgba(0, 0, 0, 0.5)"),
            sunk_fills: some("rgba(0, 0, 0, 0.04)"),
            container_hover_fills: some("rgba(0, 0, 0, 0.04)"),
            danger_fills: some("#fff0ee"),
            success_fills: some("#e8fff0"),
            info_fills: some("#f3f2ff"),
            elevated_fills: some("rgba(255, 255, 255, 0.2)"),
            alert_fills: some("#fff8f1"),
            sunk_bg_fills: some("rgba(0, 0, 0, 0.04)"),
            inverted_fills: some("#101010"),
            highlight_subtle: some("rgba(0, 0, 0, 0.02)"),
        },
        text: TextColors {
            brand_text: some("rgba(255, 255, 255, 1)"),
            brand_secondary_text: some("rgba(255,255,255,0.5)"),
            primary_text: some("rgba(0,0,0,1)"),
            secondary_text: some("rgba(0,0,0,0.5)"),
            disabled_text: some("rgba(0,0,0,0.3)"),
            danger_text: some("#a61d0e"),
            success_text: some("#007a54"),
            link_text: some("rgba(71,85,245,1)"),
            info_text: some("rgba(71,85,245,1)"),
            alert_text: some("#9a6700"),
            accent_primary_text: some("rgba(255, 255, 255, 1)"),
            accent_secondary_text: some("rgba(255,255,255,0.5)"),
            accent_disabled_text: some("rgba(255,255,255,0.3)"),
        },
        interactive: InteractiveColors {
            interactive_default: some("rgba(255, 255, 255, 0.02)"),
            interactive_hover: some("rgba(0, 0, 0, 0.04)"),
            interactive_pressed: some("rgba(0, 0, 0, 0.06)"),
            interactive_disabled: some("rgba(255, 255, 255, 0.02)"),
            interactive_accent: some("rgba(0,0,0,1)"),
            interactive_accent_hover: some("rgba(0,0,0,0.7)"),
            interactive_accent_pressed: some("rgba(0,0,0,0.7)"),
            interactive_accent_disabled: some("rgba(0,0,0,0.4)"),
            interactive_destructive: some("#fff0ee"),
            interactive_destructive_hover: some("#ffe9e5"),
            interactive_destructive_pressed: some("#ffded8"),
            interactive_destructive_disabled: some("#fff0ee"),
        },
        colors: LegacyColors {
            background: some("#fefefe"),
            container: some("#fefefe"),
            primary: some("rgba(0,0,0,1)"),
            text_primary: some("rgba(0,0,0,1)"),
            text_secondary: some("rgba(0,0,0,0.5)"),
            link_text: some("rgba(71,85,245,1)"),
            danger: some("#a61d0e"),
            success: some("#007a54"),
            info: some("rgba(71,85,245,1)"),
            alert: some("#9a6700"),
        },
        chart_colors: ChartColors {
            primary: some("rgba(0,0,0,1)"),
            ..Default::default()
        },
        stroke_colors: StrokeColors {
            slots: StrokeSlots {
                default: some("rgba(0, 0, 0, 0.06)"),
                interactive_el: some("rgba(0, 0, 0, 0.1)"),
                interactive_el_hover: some("rgba(0, 0, 0, 0.3)"),
                interactive_el_selected: some("rgba(0, 0, 0, 0.5)"),
                emphasis: some("rgba(0, 0, 0, 0.2)"),
                accent: some("rgba(255, 255, 255, 0.04)"),
                accent_emphasis: some("rgba(255, 255, 255, 0.08)"),
                info: some("#ececff"),
                info_emphasis: some("#5879ff"),
                alert: some("#fff2d9"),
                alert_emphasis: some("#d9ae12"),
                success: some("#cdffe3"),
                success_emphasis: some("#0ab17d"),
                danger: some("#ffe9e5"),
                danger_emphasis: some("#eb4b35"),
            },
            ..Default::default()
        },
        chat_colors: ChatColors {
            container_bg: some("#fefefe"),
            assistant_bg: some("#fefefe"),
            assistant_text: some("rgba(0,0,0,1)"),
            user_bg: some("rgba(230,230,230,1)"),
            user_text: some("rgba(0,0,0,1)"),
        },
        shadow: Some(ShadowConfig {
            color: some("rgba(0,0,0,1)"),
            opacity: Some(0.03),
            blur: Some(4.0),
            spread: Some(0.0),
            offset_x: Some(0.0),
            offset_y: Some(1.0),
        }),
        fonts: geist(),
        font_size: FontSize { base: Some(15.0) },
        spacing: chat_spacing(),
        border_radius: radius_scale([0.0, 1.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 20.0, 10.0]),
        custom_css: Some(format!("{COMMON_CSS}{LIGHT_CSS}")),
        ..Default::default()
    }
}

fn dark() -> ThemeCustomization {
    ThemeCustomization {
        fills: Fills {
            background_fills: some("#050505"),
            container_fills: some("#0a0a0a"),
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
            accent_primary_text: some("rgba(0, 0, 0, 1)"),
            accent_secondary_text: some("rgba(0, 0, 0, 0.7)"),
            primary_text: some("#f5f5f5"),
            secondary_text: some("#8c8c8c"),
            disabled_text: some("#525252"),
            alert_text: some("#fbbf24"),
            accent_disabled_text: some("rgba(0, 0, 0, 0.4)"),
            danger_text: some("#f87171"),
            success_text: some("#4ade80"),
            link_text: some("#818cf8"),
            info_text: some("#60a5fa"),
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
            background: some("#050505"),
            container: some("#0a0a0a"),
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
            primary: some("#ffffff"),
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
            container_bg: some("#050505"),
            assistant_bg: some("#0a0a0a"),
            assistant_text: some("#f5f5f5"),
            user_bg: some("#1a1a1a"),
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
        fonts: geist(),
        spacing: chat_spacing(),
        border_radius: radius_scale([0.0, 1.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0, 20.0, 10.0]),
        custom_css: Some(format!("{COMMON_CSS}{DARK_CSS}")),
        ..Default::default()
    }
}
