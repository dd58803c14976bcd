//! Theme generation from a text description
//!
//! The generator itself is external; this module defines the seam, the
//! request it receives, parsing of its JSON reply, and a single-flight
//! guard so only one request runs per editor.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use hueprint_core::ColorScheme;
use hueprint_theme::ThemeCustomization;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::GenerateError;

/// Standing instructions sent ahead of every request.
///
/// Covers the incremental-change rule and how everyday wording maps onto
/// customization namespaces.
pub const SYSTEM_PROMPT: &str = "\
You design themes for a chat widget. Reply with a JSON object holding theme customization fields.

Only include the fields the request changes. A narrow request such as \"make it sharp\", \"use blue\" or \"darker background\" touches only the matching fields. A request for a whole new theme fills every namespace.

Each request targets one mode, light or dark. Pick colors with contrast and brightness suited to that mode.

Fields:
- colors, fills, text, interactive: hex (#RRGGBB), rgb()/rgba() or oklch() colors
- fonts.body, fonts.heading, fonts.mono: Google Fonts family names such as \"Inter\", \"Roboto Mono\" or \"Playfair Display\"
- fontWeight.regular, fontWeight.medium, fontWeight.bold: 100 to 900
- fontSize.base: body size in px, 16 by default
- letterSpacing.body, letterSpacing.heading, letterSpacing.numbers: px offsets, negative is tighter
- spacing.base: multiplier from 0.5 (compact) to 2 (spacious)
- borderRadius.base: multiplier from 0 (square corners) to 8 (very rounded), 2 by default
- strokeColors: default, interactiveEl, interactiveElHover, emphasis and accent as rgba() with the opacity included
- shadow: color, opacity, blur, spread, offsetX, offsetY
- chartColors.primary, chartColors.secondary
- chatColors: containerBg, assistantBg, assistantText, userBg, userText
- colorEngine: always \"default\"

Wording:
- \"no borders\" or \"remove borders\": strokeColors.default = \"transparent\"
- \"subtle borders\": strokeColors.default = a low-opacity color like \"rgba(0,0,0,0.1)\"
- \"sharp\", \"square\" or \"no rounded corners\": borderRadius.base = 0
- \"more rounded\": raise borderRadius.base
- \"more spacing\": raise spacing.base
- \"blue primary color\": colors.primary only
- \"darker background\": colors.background only

Keep text at WCAG AA contrast, keep chart colors distinct from each other, and make user and assistant messages easy to tell apart.";

/// Author of a prompt message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
}

/// One chat message sent to the generation service
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

/// Input for one generation call
#[derive(Clone, Debug)]
pub struct GenerateRequest {
    pub api_key: String,
    pub description: String,
    /// Customization of the mode being generated for
    pub current: ThemeCustomization,
    pub scheme: ColorScheme,
}

impl GenerateRequest {
    /// Prompt describing the request and the current theme
    pub fn prompt(&self) -> String {
        let scheme = self.scheme;
        let current = serde_json::to_string_pretty(&self.current).unwrap_or_else(|_| "{}".to_string());
        format!(
            "Generate theme updates for {scheme} mode based on this description: \"{}\"\n\n\
             Current {scheme} mode theme:\n{current}\n\n\
             Instructions:\n\
             - You are generating for {scheme} mode specifically\n\
             - For an incremental change, only provide the fields that need to change\n\
             - For a complete theme request, provide all fields\n\
             - Ensure colors have proper contrast and brightness for {scheme} mode",
            self.description
        )
    }

    /// System instructions followed by the user prompt
    pub fn messages(&self) -> [PromptMessage; 2] {
        [
            PromptMessage {
                role: PromptRole::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            PromptMessage {
                role: PromptRole::User,
                content: self.prompt(),
            },
        ]
    }
}

/// Produces a partial customization for the requested mode.
///
/// Implementations send [`GenerateRequest::messages`] to their service.
/// The result is merged into the current customization namespace by
/// namespace; fields the generator leaves out keep their values.
#[async_trait]
pub trait ThemeGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<Map<String, Value>, GenerateError>;
}

/// Parse a generator's text reply into a partial customization
pub fn parse_response(content: &str) -> Result<Map<String, Value>, GenerateError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(GenerateError::InvalidResponse("empty response".into()));
    }
    match serde_json::from_str::<Value>(content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(GenerateError::InvalidResponse(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
        Err(err) => Err(GenerateError::InvalidResponse(err.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Allows at most one generation at a time.
///
/// Clones share the same slot, so a UI can hold one to disable its
/// generate action while a request is outstanding.
#[derive(Clone, Debug, Default)]
pub struct SingleFlight {
    busy: Arc<AtomicBool>,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Claim the slot; fails with [`GenerateError::InFlight`] while held
    pub fn acquire(&self) -> Result<FlightGuard<'_>, GenerateError> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| FlightGuard { slot: self })
            .map_err(|_| GenerateError::InFlight)
    }
}

/// Releases the [`SingleFlight`] slot on drop
#[derive(Debug)]
pub struct FlightGuard<'a> {
    slot: &'a SingleFlight,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.slot.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_object_reply() {
        let map = parse_response(" {\"fonts\": {\"body\": \"Lora\"}} ").unwrap();
        assert_eq!(map["fonts"]["body"], "Lora");
    }

    #[test]
    fn rejects_non_objects() {
        assert!(matches!(parse_response(""), Err(GenerateError::InvalidResponse(_))));
        assert!(matches!(parse_response("[1,2]"), Err(GenerateError::InvalidResponse(msg)) if msg.contains("an array")));
        assert!(matches!(parse_response("{oops"), Err(GenerateError::InvalidResponse(_))));
    }

    #[test]
    fn single_flight_blocks_second_acquire() {
        let slot = SingleFlight::new();
        let guard = slot.acquire().unwrap();
        assert!(slot.is_busy());
        assert_eq!(slot.acquire().err(), Some(GenerateError::InFlight));
        drop(guard);
        assert!(!slot.is_busy());
        assert!(slot.acquire().is_ok());
    }

    #[test]
    fn clones_share_the_slot() {
        let slot = SingleFlight::new();
        let observer = slot.clone();
        let _guard = slot.acquire().unwrap();
        assert!(observer.is_busy());
        assert!(observer.acquire().is_err());
    }

    #[test]
    fn prompt_names_mode_and_description() {
        let request = GenerateRequest {
            api_key: "sk-secret".into(),
            description: "retro terminal".into(),
            current: ThemeCustomization::empty(),
            scheme: ColorScheme::Dark,
        };
        let prompt = request.prompt();
        assert!(prompt.starts_with("Generate theme updates for dark mode"));
        assert!(prompt.contains("\"retro terminal\""));
        assert!(!prompt.contains("sk-secret"));
    }

    #[test]
    fn messages_lead_with_system_prompt() {
        let request = GenerateRequest {
            api_key: "sk-secret".into(),
            description: "make it sharp".into(),
            current: ThemeCustomization::empty(),
            scheme: ColorScheme::Light,
        };
        let [system, user] = request.messages();
        assert_eq!(system.role, PromptRole::System);
        assert!(system.content.contains("borderRadius.base = 0"));
        assert!(system.content.contains("Only include the fields the request changes"));
        assert_eq!(user.role, PromptRole::User);
        assert_eq!(user.content, request.prompt());

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], "user");
        assert!(!json.to_string().contains("sk-secret"));
    }

    #[test]
    fn status_codes_map_to_causes() {
        assert_eq!(GenerateError::from_status(401, ""), GenerateError::Unauthorized);
        assert_eq!(GenerateError::from_status(429, ""), GenerateError::RateLimited);
        assert_eq!(GenerateError::from_status(503, ""), GenerateError::Unavailable);
        assert!(matches!(
            GenerateError::from_status(404, "model gpt-x not found"),
            GenerateError::ModelUnavailable(_)
        ));
        assert_eq!(
            GenerateError::from_status(400, "").user_message(),
            "Failed to generate theme. Please try again."
        );
    }
}
