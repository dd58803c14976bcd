//! Design token generators
//!
//! Each generator maps one slice of a [`ThemeCustomization`](crate::ThemeCustomization)
//! to a flat token map. Generators only emit keys for inputs that are set:
//! an empty slice always produces an empty map.
//!
//! - Colors: legacy semantic colors, fills, text, interactive, chat
//! - Typography: font shorthands and letter spacing
//! - Spacing and border-radius scales
//! - Shadows, strokes, and the chart palette

mod chart;
mod color;
mod radius;
mod shadow;
mod spacing;
mod stroke;
mod typography;

pub use chart::*;
pub use color::*;
pub use radius::*;
pub use shadow::*;
pub use spacing::*;
pub use stroke::*;
pub use typography::*;

use hueprint_core::fmt_num;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Flat token dictionary consumed by the widget library.
///
/// Keys keep their first insertion position; inserting an existing key
/// replaces its value in place, so later generators win.
pub type TokenMap = IndexMap<String, TokenValue>;

/// A single token value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Scalar(String),
    List(Vec<String>),
}

impl TokenValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenValue::Scalar(value) => Some(value),
            TokenValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TokenValue::Scalar(_) => None,
            TokenValue::List(values) => Some(values),
        }
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Scalar(value)
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Scalar(value.to_string())
    }
}

impl From<Vec<String>> for TokenValue {
    fn from(values: Vec<String>) -> Self {
        TokenValue::List(values)
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Scalar(value) => f.write_str(value),
            TokenValue::List(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// Insert or overwrite a token
pub(crate) fn put(map: &mut TokenMap, key: impl Into<String>, value: impl Into<TokenValue>) {
    map.insert(key.into(), value.into());
}

/// `"<n>px"`
pub(crate) fn px(value: f64) -> String {
    format!("{}px", fmt_num(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut map = TokenMap::new();
        put(&mut map, "a", "1");
        put(&mut map, "b", "2");
        put(&mut map, "a", "3");
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, ["a", "b"]);
        assert_eq!(map["a"].as_str(), Some("3"));
    }

    #[test]
    fn values_serialize_untagged() {
        let mut map = TokenMap::new();
        put(&mut map, "spacingS", "8px");
        put(&mut map, "palette", vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"spacingS":"8px","palette":["a","b"]}"#);
    }

    #[test]
    fn px_drops_integral_fraction() {
        assert_eq!(px(8.0), "8px");
        assert_eq!(px(1.5), "1.5px");
        assert_eq!(px(0.0), "0px");
    }
}
