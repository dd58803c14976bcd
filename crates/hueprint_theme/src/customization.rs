//! Sparse, user-editable theme customization
//!
//! A [`ThemeCustomization`] holds only what the user (or a preset, or a
//! generated theme) actually set. Every field is optional; token generators
//! skip anything that is unset so the widget library's own defaults apply.
//!
//! The serialized shape uses camelCase keys and is the wire format of
//! share links and exported state files.

use hueprint_core::ColorScheme;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::{Result, ThemeError};

/// Defines a namespace whose fields are all optional color strings.
///
/// Each field carries its exact serialized key, which is also the token
/// name it maps to when the namespace is emitted 1:1.
macro_rules! color_namespace {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $field:ident => $key:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            $(
                #[serde(rename = $key, default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )*
        }

        impl $name {
            /// Serialized keys, in declaration order
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// `(key, value)` for every set field, in declaration order
            pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
                [$( ($key, self.$field.as_deref()) ),*]
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v)))
            }

            pub fn is_empty(&self) -> bool {
                $( self.$field.is_none() )&&*
            }
        }
    };
}

color_namespace! {
    /// Surface fill colors
    Fills {
        background_fills => "backgroundFills",
        container_fills => "containerFills",
        overlay_fills => "overlayFills",
        sunk_fills => "sunkFills",
        container_hover_fills => "containerHoverFills",
        danger_fills => "dangerFills",
        success_fills => "successFills",
        info_fills => "infoFills",
        elevated_fills => "elevatedFills",
        alert_fills => "alertFills",
        sunk_bg_fills => "sunkBgFills",
        inverted_fills => "invertedFills",
        highlight_subtle => "highlightSubtle",
    }
}

color_namespace! {
    /// Text colors
    TextColors {
        primary_text => "primaryText",
        secondary_text => "secondaryText",
        disabled_text => "disabledText",
        danger_text => "dangerText",
        success_text => "successText",
        link_text => "linkText",
        info_text => "infoText",
        alert_text => "alertText",
        accent_primary_text => "accentPrimaryText",
        accent_secondary_text => "accentSecondaryText",
        accent_disabled_text => "accentDisabledText",
        brand_text => "brandText",
        brand_secondary_text => "brandSecondaryText",
    }
}

color_namespace! {
    /// Interactive element colors
    InteractiveColors {
        interactive_default => "interactiveDefault",
        interactive_hover => "interactiveHover",
        interactive_pressed => "interactivePressed",
        interactive_disabled => "interactiveDisabled",
        interactive_accent => "interactiveAccent",
        interactive_accent_hover => "interactiveAccentHover",
        interactive_accent_pressed => "interactiveAccentPressed",
        interactive_accent_disabled => "interactiveAccentDisabled",
        interactive_destructive => "interactiveDestructive",
        interactive_destructive_hover => "interactiveDestructiveHover",
        interactive_destructive_pressed => "interactiveDestructivePressed",
        interactive_destructive_disabled => "interactiveDestructiveDisabled",
    }
}

color_namespace! {
    /// Flat colors from the first editor release.
    ///
    /// Still read for old share links and presets; anything set in
    /// [`Fills`], [`TextColors`], or [`InteractiveColors`] overrides the
    /// tokens these expand into.
    LegacyColors {
        background => "background",
        container => "container",
        primary => "primary",
        text_primary => "textPrimary",
        text_secondary => "textSecondary",
        link_text => "linkText",
        danger => "danger",
        success => "success",
        info => "info",
        alert => "alert",
    }
}

color_namespace! {
    /// Chat bubble and container colors
    ChatColors {
        container_bg => "containerBg",
        assistant_bg => "assistantBg",
        assistant_text => "assistantText",
        user_bg => "userBg",
        user_text => "userText",
    }
}

color_namespace! {
    /// Named stroke slots, passed through unchanged as `stroke<Slot>` tokens
    StrokeSlots {
        default => "default",
        interactive_el => "interactiveEl",
        interactive_el_hover => "interactiveElHover",
        interactive_el_selected => "interactiveElSelected",
        emphasis => "emphasis",
        accent => "accent",
        accent_emphasis => "accentEmphasis",
        info => "info",
        info_emphasis => "infoEmphasis",
        alert => "alert",
        alert_emphasis => "alertEmphasis",
        success => "success",
        success_emphasis => "successEmphasis",
        danger => "danger",
        danger_emphasis => "dangerEmphasis",
    }
}

/// Stroke colors: either a base color with an opacity that expands into
/// every stroke state, or explicit per-slot colors, or both (slots win).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StrokeColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(flatten)]
    pub slots: StrokeSlots,
}

impl StrokeColors {
    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.opacity.is_none() && self.slots.is_empty()
    }
}

/// Chart palette seed colors
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_dual_mode: Option<bool>,
}

/// The single stored shadow; every other size is derived from it
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
}

/// Font family names per category
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fonts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
}

/// Numeric weight overrides (100-900)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<u16>,
}

/// Letter spacing per font category, stored in px
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LetterSpacing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numbers: Option<f64>,
}

/// Base font size in px
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FontSize {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
}

/// A multiplier-driven scale (spacing, border radius) with optional
/// per-step pixel overrides layered on top.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleCustomization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<f64>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_values: BTreeMap<String, f64>,
}

impl ScaleCustomization {
    pub fn with_base(base: f64) -> Self {
        Self {
            base: Some(base),
            custom_values: BTreeMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_none() && self.custom_values.is_empty()
    }
}

pub const DEFAULT_COLOR_ENGINE: &str = "default";

fn default_color_engine() -> String {
    DEFAULT_COLOR_ENGINE.to_string()
}

/// Customization for one color scheme
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCustomization {
    #[serde(default)]
    pub fills: Fills,
    #[serde(default)]
    pub text: TextColors,
    #[serde(default)]
    pub interactive: InteractiveColors,
    #[serde(default)]
    pub colors: LegacyColors,
    #[serde(default)]
    pub chart_colors: ChartColors,
    #[serde(default)]
    pub stroke_colors: StrokeColors,
    #[serde(default)]
    pub chat_colors: ChatColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow: Option<ShadowConfig>,
    #[serde(default)]
    pub fonts: Fonts,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default)]
    pub letter_spacing: LetterSpacing,
    #[serde(default)]
    pub font_size: FontSize,
    #[serde(default)]
    pub spacing: ScaleCustomization,
    #[serde(default)]
    pub border_radius: ScaleCustomization,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(default = "default_color_engine")]
    pub color_engine: String,
}

impl Default for ThemeCustomization {
    fn default() -> Self {
        Self {
            fills: Fills::default(),
            text: TextColors::default(),
            interactive: InteractiveColors::default(),
            colors: LegacyColors::default(),
            chart_colors: ChartColors::default(),
            stroke_colors: StrokeColors::default(),
            chat_colors: ChatColors::default(),
            shadow: None,
            fonts: Fonts::default(),
            font_weight: FontWeight::default(),
            letter_spacing: LetterSpacing::default(),
            font_size: FontSize::default(),
            spacing: ScaleCustomization::default(),
            border_radius: ScaleCustomization::default(),
            custom_css: None,
            color_engine: default_color_engine(),
        }
    }
}

/// Light and dark customizations, edited independently
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DualModeThemeCustomization {
    #[serde(default)]
    pub light: ThemeCustomization,
    #[serde(default)]
    pub dark: ThemeCustomization,
}

impl DualModeThemeCustomization {
    pub fn new(light: ThemeCustomization, dark: ThemeCustomization) -> Self {
        Self { light, dark }
    }

    pub fn get(&self, scheme: ColorScheme) -> &ThemeCustomization {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }

    pub fn get_mut(&mut self, scheme: ColorScheme) -> &mut ThemeCustomization {
        match scheme {
            ColorScheme::Light => &mut self.light,
            ColorScheme::Dark => &mut self.dark,
        }
    }

    /// Copy of this state with one scheme replaced
    pub fn with(&self, scheme: ColorScheme, customization: ThemeCustomization) -> Self {
        let mut next = self.clone();
        *next.get_mut(scheme) = customization;
        next
    }
}

// ============================================================================
// Namespaces and generic patching
// ============================================================================

/// A patchable sub-object of [`ThemeCustomization`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Fills,
    Text,
    Interactive,
    Colors,
    ChartColors,
    StrokeColors,
    ChatColors,
    Shadow,
    Fonts,
    FontWeight,
    LetterSpacing,
    FontSize,
    Spacing,
    BorderRadius,
}

impl Namespace {
    pub const ALL: [Namespace; 14] = [
        Namespace::Fills,
        Namespace::Text,
        Namespace::Interactive,
        Namespace::Colors,
        Namespace::ChartColors,
        Namespace::StrokeColors,
        Namespace::ChatColors,
        Namespace::Shadow,
        Namespace::Fonts,
        Namespace::FontWeight,
        Namespace::LetterSpacing,
        Namespace::FontSize,
        Namespace::Spacing,
        Namespace::BorderRadius,
    ];

    /// Serialized key of this namespace
    pub fn key(self) -> &'static str {
        match self {
            Self::Fills => "fills",
            Self::Text => "text",
            Self::Interactive => "interactive",
            Self::Colors => "colors",
            Self::ChartColors => "chartColors",
            Self::StrokeColors => "strokeColors",
            Self::ChatColors => "chatColors",
            Self::Shadow => "shadow",
            Self::Fonts => "fonts",
            Self::FontWeight => "fontWeight",
            Self::LetterSpacing => "letterSpacing",
            Self::FontSize => "fontSize",
            Self::Spacing => "spacing",
            Self::BorderRadius => "borderRadius",
        }
    }

    /// Field names accepted inside this namespace
    pub fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Fills => Fills::KEYS,
            Self::Text => TextColors::KEYS,
            Self::Interactive => InteractiveColors::KEYS,
            Self::Colors => LegacyColors::KEYS,
            Self::ChartColors => &["primary", "secondary", "useDualMode"],
            Self::StrokeColors => &[
                "base",
                "opacity",
                "default",
                "interactiveEl",
                "interactiveElHover",
                "interactiveElSelected",
                "emphasis",
                "accent",
                "accentEmphasis",
                "info",
                "infoEmphasis",
                "alert",
                "alertEmphasis",
                "success",
                "successEmphasis",
                "danger",
                "dangerEmphasis",
            ],
            Self::ChatColors => ChatColors::KEYS,
            Self::Shadow => &["color", "opacity", "blur", "spread", "offsetX", "offsetY"],
            Self::Fonts => &["body", "heading", "mono"],
            Self::FontWeight => &["regular", "medium", "bold"],
            Self::LetterSpacing => &["body", "heading", "numbers"],
            Self::FontSize => &["base"],
            Self::Spacing | Self::BorderRadius => &["base", "customValues"],
        }
    }

    /// Text fields that mirror each other on write
    fn alias_of(self, field: &str) -> Option<&'static str> {
        match (self, field) {
            (Self::Text, "brandText") => Some("accentPrimaryText"),
            (Self::Text, "accentPrimaryText") => Some("brandText"),
            _ => None,
        }
    }
}

impl Display for Namespace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Namespace {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.key() == s)
            .ok_or_else(|| ThemeError::UnknownNamespace(s.to_string()))
    }
}

impl ThemeCustomization {
    /// An empty customization (no fields set)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Copy with one field of one namespace set. `Value::Null` clears it.
    ///
    /// Siblings in the namespace are kept. Writing `brandText` also writes
    /// `accentPrimaryText` (and the reverse), so the most recent write wins.
    pub fn set_field(&self, namespace: Namespace, field: &str, value: Value) -> Result<Self> {
        let mut patch = Map::new();
        patch.insert(field.to_string(), value);
        self.patch_namespace(namespace, &patch)
    }

    /// Copy with several fields of one namespace merged in.
    ///
    /// Keys are applied in order; `null` removes a field. Unknown field
    /// names are rejected rather than silently dropped.
    pub fn patch_namespace(&self, namespace: Namespace, patch: &Map<String, Value>) -> Result<Self> {
        for field in patch.keys() {
            if !namespace.fields().contains(&field.as_str()) {
                return Err(ThemeError::UnknownField {
                    namespace: namespace.key(),
                    field: field.clone(),
                });
            }
        }

        let mut root = self.to_json_object()?;
        merge_namespace(&mut root, namespace, patch);
        Self::from_json_object(root)
    }

    /// Copy with a whole namespace replaced by `value` (merge-free).
    pub fn replace_namespace(&self, namespace: Namespace, value: Value) -> Result<Self> {
        let mut root = self.to_json_object()?;
        if value.is_null() {
            root.remove(namespace.key());
        } else {
            root.insert(namespace.key().to_string(), value);
        }
        Self::from_json_object(root)
    }

    /// Deep-merge a partial customization (for example generated output).
    ///
    /// Namespaces merge field by field, so only fields present in
    /// `partial` change. `customCss` and `colorEngine` are replaced when
    /// present. Unknown top-level keys are ignored.
    pub fn merge(&self, partial: &Map<String, Value>) -> Result<Self> {
        let mut root = self.to_json_object()?;
        for (key, value) in partial {
            if value.is_null() {
                continue;
            }
            match key.parse::<Namespace>() {
                Ok(Namespace::Shadow) => {
                    root.insert(key.clone(), value.clone());
                }
                Ok(namespace) => {
                    let Value::Object(fields) = value else {
                        return Err(ThemeError::NotAnObject(namespace.key()));
                    };
                    let fields: Map<String, Value> = fields
                        .iter()
                        .filter(|(_, v)| !v.is_null())
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect();
                    merge_namespace(&mut root, namespace, &fields);
                }
                Err(_) if key == "customCss" || key == "colorEngine" => {
                    root.insert(key.clone(), value.clone());
                }
                Err(_) => {
                    tracing::debug!(key = key.as_str(), "ignoring unknown customization key");
                }
            }
        }
        Self::from_json_object(root)
    }

    fn to_json_object(&self) -> Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(ThemeError::NotAnObject("customization")),
        }
    }

    fn from_json_object(root: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(root))?)
    }
}

/// Merge `patch` into the namespace object under `root`, creating it if
/// missing. `null` values remove fields.
fn merge_namespace(root: &mut Map<String, Value>, namespace: Namespace, patch: &Map<String, Value>) {
    let slot = root
        .entry(namespace.key().to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !slot.is_object() {
        *slot = Value::Object(Map::new());
    }
    let Value::Object(target) = slot else {
        return;
    };

    for (field, value) in patch {
        let alias = namespace.alias_of(field);
        for key in std::iter::once(field.as_str()).chain(alias) {
            if value.is_null() {
                target.remove(key);
            } else {
                target.insert(key.to_string(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn empty_customization_serializes_namespaces_only() {
        let json = serde_json::to_value(ThemeCustomization::empty()).unwrap();
        assert_eq!(json["fills"], json!({}));
        assert_eq!(json["colorEngine"], json!("default"));
        assert!(json.get("shadow").is_none());
        assert!(json.get("customCss").is_none());
    }

    #[test]
    fn missing_namespaces_deserialize_as_empty() {
        let parsed: ThemeCustomization = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, ThemeCustomization::empty());
    }

    #[test]
    fn stroke_slots_flatten_next_to_base() {
        let parsed: StrokeColors =
            serde_json::from_value(json!({"base": "#000", "opacity": 0.2, "default": "red"})).unwrap();
        assert_eq!(parsed.base.as_deref(), Some("#000"));
        assert_eq!(parsed.slots.default.as_deref(), Some("red"));
    }

    #[test]
    fn set_field_keeps_siblings() {
        let base = ThemeCustomization::empty()
            .set_field(Namespace::Fills, "backgroundFills", json!("#fff"))
            .unwrap();
        let next = base
            .set_field(Namespace::Fills, "containerFills", json!("#eee"))
            .unwrap();
        assert_eq!(next.fills.background_fills.as_deref(), Some("#fff"));
        assert_eq!(next.fills.container_fills.as_deref(), Some("#eee"));
        // Original is untouched
        assert!(base.fills.container_fills.is_none());
    }

    #[test]
    fn set_field_null_clears() {
        let base = ThemeCustomization::empty()
            .set_field(Namespace::Fonts, "body", json!("Inter"))
            .unwrap();
        let cleared = base.set_field(Namespace::Fonts, "body", Value::Null).unwrap();
        assert!(cleared.fonts.body.is_none());
    }

    #[test]
    fn set_field_rejects_unknown_keys() {
        let err = ThemeCustomization::empty()
            .set_field(Namespace::Fills, "bogus", json!("#fff"))
            .unwrap_err();
        assert!(matches!(err, ThemeError::UnknownField { namespace: "fills", .. }));
    }

    #[test]
    fn set_field_rejects_wrong_types() {
        let err = ThemeCustomization::empty()
            .set_field(Namespace::FontWeight, "regular", json!("heavy"))
            .unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn brand_text_and_accent_primary_text_mirror() {
        let next = ThemeCustomization::empty()
            .set_field(Namespace::Text, "brandText", json!("#111"))
            .unwrap();
        assert_eq!(next.text.accent_primary_text.as_deref(), Some("#111"));

        let next = next
            .set_field(Namespace::Text, "accentPrimaryText", json!("#222"))
            .unwrap();
        assert_eq!(next.text.brand_text.as_deref(), Some("#222"));
    }

    #[test]
    fn last_alias_in_one_patch_wins() {
        let patch = obj(json!({"accentPrimaryText": "#aaa", "brandText": "#bbb"}));
        let next = ThemeCustomization::empty()
            .patch_namespace(Namespace::Text, &patch)
            .unwrap();
        assert_eq!(next.text.brand_text.as_deref(), Some("#bbb"));
        assert_eq!(next.text.accent_primary_text.as_deref(), Some("#bbb"));
    }

    #[test]
    fn replace_namespace_drops_old_fields() {
        let mut base = ThemeCustomization::empty();
        base.spacing.custom_values.insert("spacingS".into(), 8.0);
        let next = base
            .replace_namespace(Namespace::Spacing, json!({"base": 2}))
            .unwrap();
        assert_eq!(next.spacing, ScaleCustomization::with_base(2.0));
    }

    #[test]
    fn merge_only_touches_returned_fields() {
        let mut base = ThemeCustomization::empty();
        base.fonts.body = Some("Inter".into());
        base.fonts.mono = Some("Menlo".into());
        base.border_radius.base = Some(2.0);

        let partial = obj(json!({
            "fonts": {"body": "Roboto"},
            "borderRadius": {"base": 0},
            "customCss": ".x{}",
            "somethingElse": 1
        }));
        let merged = base.merge(&partial).unwrap();
        assert_eq!(merged.fonts.body.as_deref(), Some("Roboto"));
        assert_eq!(merged.fonts.mono.as_deref(), Some("Menlo"));
        assert_eq!(merged.border_radius.base, Some(0.0));
        assert_eq!(merged.custom_css.as_deref(), Some(".x{}"));
    }

    #[test]
    fn merge_replaces_shadow_whole() {
        let mut base = ThemeCustomization::empty();
        base.shadow = Some(ShadowConfig {
            blur: Some(12.0),
            spread: Some(3.0),
            ..Default::default()
        });
        let merged = base.merge(&obj(json!({"shadow": {"blur": 4}}))).unwrap();
        let shadow = merged.shadow.unwrap();
        assert_eq!(shadow.blur, Some(4.0));
        assert_eq!(shadow.spread, None);
    }

    #[test]
    fn namespace_keys_round_trip() {
        for ns in Namespace::ALL {
            assert_eq!(ns.key().parse::<Namespace>().unwrap(), ns);
        }
        assert!("nope".parse::<Namespace>().is_err());
    }

    #[test]
    fn dual_with_replaces_one_scheme() {
        let dual = DualModeThemeCustomization::default();
        let mut dark = ThemeCustomization::empty();
        dark.fonts.body = Some("Bitter".into());
        let next = dual.with(ColorScheme::Dark, dark.clone());
        assert_eq!(next.dark, dark);
        assert_eq!(next.light, dual.light);
    }
}
