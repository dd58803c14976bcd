//! Color token generators

use hueprint_core::ColorScheme;

use super::{put, TokenMap};
use crate::customization::{ChatColors, Fills, InteractiveColors, LegacyColors, TextColors};
use crate::engine::ColorEngine;

/// Expand the flat legacy `colors` namespace into semantic tokens.
///
/// Several tokens are derived through `engine` (hover, pressed, disabled,
/// subtle variants); the rest repeat the base color under every token that
/// historically shared it.
pub fn generate_semantic_colors(
    colors: &LegacyColors,
    engine: &dyn ColorEngine,
    scheme: ColorScheme,
) -> TokenMap {
    let mut tokens = TokenMap::new();

    if let Some(background) = colors.background.as_deref() {
        put(&mut tokens, "backgroundFills", background);
        put(&mut tokens, "chatContainerBg", background);
    }

    if let Some(container) = colors.container.as_deref() {
        put(&mut tokens, "containerFills", container);
        put(&mut tokens, "chatAssistantResponseBg", container);
        put(&mut tokens, "containerHoverFills", engine.hover(container, scheme));
    }

    if let Some(primary) = colors.primary.as_deref() {
        put(&mut tokens, "interactiveAccent", primary);
        put(&mut tokens, "interactiveAccentHover", engine.hover(primary, scheme));
        put(&mut tokens, "interactiveAccentPressed", engine.pressed(primary, scheme));
        put(&mut tokens, "interactiveAccentDisabled", engine.disabled(primary, scheme));
        put(&mut tokens, "strokeInteractiveElSelected", primary);
    }

    if let Some(text) = colors.text_primary.as_deref() {
        put(&mut tokens, "primaryText", text);
        put(&mut tokens, "chatAssistantResponseText", text);
        put(&mut tokens, "chatUserResponseText", text);
    }

    if let Some(text) = colors.text_secondary.as_deref() {
        put(&mut tokens, "secondaryText", text);
    }

    if let Some(link) = colors.link_text.as_deref() {
        put(&mut tokens, "linkText", link);
    }

    if let Some(danger) = colors.danger.as_deref() {
        let subtle = engine.subtle(danger, scheme);
        put(&mut tokens, "dangerFills", subtle.clone());
        put(&mut tokens, "dangerText", danger);
        put(&mut tokens, "strokeDanger", subtle.clone());
        put(&mut tokens, "strokeDangerEmphasis", danger);
        put(&mut tokens, "dangerPrimaryText", danger);
        put(&mut tokens, "interactiveDestructive", subtle);
        put(&mut tokens, "interactiveDestructiveHover", engine.hover(danger, scheme));
        put(&mut tokens, "interactiveDestructivePressed", engine.pressed(danger, scheme));
    }

    for (name, color) in [("success", &colors.success), ("info", &colors.info)] {
        let Some(color) = color.as_deref() else {
            continue;
        };
        let subtle = engine.subtle(color, scheme);
        let stroke = format!("stroke{}", capitalize(name));
        put(&mut tokens, format!("{name}Fills"), subtle.clone());
        put(&mut tokens, format!("{name}Text"), color);
        put(&mut tokens, stroke.clone(), subtle);
        put(&mut tokens, format!("{stroke}Emphasis"), color);
        put(&mut tokens, format!("{name}PrimaryText"), color);
    }

    if let Some(alert) = colors.alert.as_deref() {
        let subtle = engine.subtle(alert, scheme);
        put(&mut tokens, "alertFills", subtle.clone());
        put(&mut tokens, "strokeAlert", subtle);
        put(&mut tokens, "strokeAlertEmphasis", alert);
        put(&mut tokens, "alertPrimaryText", alert);
    }

    tokens
}

/// Fill colors, passed through under their own names
pub fn generate_fill_tokens(fills: &Fills) -> TokenMap {
    fills.entries().map(|(key, value)| (key.to_string(), value.into())).collect()
}

/// Text colors, passed through under their own names.
///
/// `brandText` and `accentPrimaryText` name the same color: when only one
/// is set it is emitted under both keys.
pub fn generate_text_tokens(text: &TextColors) -> TokenMap {
    let mut tokens: TokenMap = text
        .entries()
        .map(|(key, value)| (key.to_string(), value.into()))
        .collect();

    match (text.brand_text.as_deref(), text.accent_primary_text.as_deref()) {
        (Some(brand), None) => put(&mut tokens, "accentPrimaryText", brand),
        (None, Some(accent)) => put(&mut tokens, "brandText", accent),
        _ => {}
    }

    tokens
}

/// Interactive colors, passed through under their own names
pub fn generate_interactive_tokens(interactive: &InteractiveColors) -> TokenMap {
    interactive
        .entries()
        .map(|(key, value)| (key.to_string(), value.into()))
        .collect()
}

/// Chat bubble colors
pub fn generate_chat_colors(chat: &ChatColors) -> TokenMap {
    let mut tokens = TokenMap::new();
    let slots = [
        ("chatContainerBg", &chat.container_bg),
        ("chatAssistantResponseBg", &chat.assistant_bg),
        ("chatAssistantResponseText", &chat.assistant_text),
        ("chatUserResponseBg", &chat.user_bg),
        ("chatUserResponseText", &chat.user_text),
    ];
    for (key, value) in slots {
        if let Some(value) = value.as_deref() {
            put(&mut tokens, key, value);
        }
    }
    tokens
}

pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
