//! Share links
//!
//! A share link carries the whole dual-mode state in one query parameter:
//! `base64(gzip(utf8(json(state))))`. Decoding is soft: a missing parameter
//! or a corrupt payload both yield `None`, the latter with a warning.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use hueprint_core::ColorScheme;
use hueprint_theme::{DualModeThemeCustomization, ThemeCustomization};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ShareError;

/// Default query parameter holding the payload
pub const DEFAULT_SHARE_PARAM: &str = "c";

/// Byte-level compression used by the codec
pub trait Compressor {
    fn compress(&self, bytes: &[u8]) -> std::io::Result<Vec<u8>>;

    fn decompress(&self, bytes: &[u8]) -> std::io::Result<Vec<u8>>;
}

/// Gzip via flate2
#[derive(Clone, Copy, Debug, Default)]
pub struct GzipCompressor;

impl Compressor for GzipCompressor {
    fn compress(&self, bytes: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(bytes)?;
        encoder.finish()
    }

    fn decompress(&self, bytes: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut decoder = GzDecoder::new(bytes);
        let mut out = Vec::new();
        decoder.read_to_end(&mut out)?;
        Ok(out)
    }
}

/// Payload of a share link
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedState {
    #[serde(default)]
    pub light: ThemeCustomization,
    #[serde(default)]
    pub dark: ThemeCustomization,
    /// Mode that was displayed when the link was made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_mode: Option<ColorScheme>,
}

impl SharedState {
    pub fn new(state: DualModeThemeCustomization, current_mode: Option<ColorScheme>) -> Self {
        Self {
            light: state.light,
            dark: state.dark,
            current_mode,
        }
    }

    /// Split into the dual-mode state and the tagged mode
    pub fn into_parts(self) -> (DualModeThemeCustomization, Option<ColorScheme>) {
        (
            DualModeThemeCustomization::new(self.light, self.dark),
            self.current_mode,
        )
    }
}

/// Encodes and decodes share links
#[derive(Clone, Debug)]
pub struct ShareCodec<C: Compressor = GzipCompressor> {
    param: String,
    compressor: C,
}

impl ShareCodec {
    pub fn new() -> Self {
        Self::with_param(DEFAULT_SHARE_PARAM)
    }

    pub fn with_param(param: impl Into<String>) -> Self {
        Self::with_compressor(param, GzipCompressor)
    }
}

impl Default for ShareCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Compressor> ShareCodec<C> {
    pub fn with_compressor(param: impl Into<String>, compressor: C) -> Self {
        Self {
            param: param.into(),
            compressor,
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    /// Serialize, compress and base64-encode a state
    pub fn encode_payload(&self, state: &SharedState) -> Result<String, ShareError> {
        let json = serde_json::to_vec(state)?;
        let compressed = self.compressor.compress(&json)?;
        Ok(STANDARD.encode(compressed))
    }

    /// Inverse of [`encode_payload`](Self::encode_payload)
    pub fn decode_payload(&self, payload: &str) -> Result<SharedState, ShareError> {
        let compressed = STANDARD.decode(payload.trim())?;
        let json = String::from_utf8(self.compressor.decompress(&compressed)?)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Build a share link on `base_url`, replacing any existing payload
    pub fn encode(&self, state: &SharedState, base_url: &str) -> Result<String, ShareError> {
        let payload = self.encode_payload(state)?;
        let mut url = Url::parse(base_url)?;
        let kept = self.other_pairs(&url);
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            pairs.append_pair(&self.param, &payload);
        }
        tracing::debug!(bytes = payload.len(), "encoded share link");
        Ok(url.into())
    }

    /// Read the shared state from a link.
    ///
    /// Returns `None` when the parameter is absent or the payload is
    /// malformed; the latter is logged.
    pub fn decode(&self, url: &str) -> Option<SharedState> {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(err) => {
                tracing::warn!(%err, "ignoring unparseable share url");
                return None;
            }
        };
        let payload = parsed
            .query_pairs()
            .find(|(key, _)| key == self.param.as_str())
            .map(|(_, value)| value.into_owned())?;

        match self.decode_payload(&payload) {
            Ok(state) => Some(state),
            Err(err) => {
                tracing::warn!(%err, "failed to decode shared state");
                None
            }
        }
    }

    /// Remove the payload parameter, keeping the rest of the link
    pub fn strip(&self, url: &str) -> Result<String, ShareError> {
        let mut parsed = Url::parse(url)?;
        let kept = self.other_pairs(&parsed);
        if kept.is_empty() {
            parsed.set_query(None);
        } else {
            parsed
                .query_pairs_mut()
                .clear()
                .extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        Ok(parsed.into())
    }

    fn other_pairs(&self, url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .filter(|(key, _)| key != self.param.as_str())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://example.com/editor";

    fn sample() -> SharedState {
        let mut light = ThemeCustomization::empty();
        light.colors.primary = Some("#5861CB".into());
        light.spacing.base = Some(2.5);
        let mut dark = ThemeCustomization::empty();
        dark.fonts.body = Some("Lora".into());
        dark.custom_css = Some(".x { color: red; }".into());
        SharedState::new(DualModeThemeCustomization::new(light, dark), Some(ColorScheme::Dark))
    }

    #[test]
    fn link_round_trips() {
        let codec = ShareCodec::new();
        let url = codec.encode(&sample(), BASE).unwrap();
        assert!(url.starts_with("https://example.com/editor?c="));
        assert_eq!(codec.decode(&url), Some(sample()));
    }

    #[test]
    fn missing_param_is_none() {
        let codec = ShareCodec::new();
        assert_eq!(codec.decode("https://example.com/editor?x=1"), None);
    }

    #[test]
    fn corrupt_payload_is_none() {
        let codec = ShareCodec::new();
        assert_eq!(codec.decode("https://example.com/editor?c=not-base64!!"), None);
        // Valid base64, not gzip
        assert_eq!(codec.decode("https://example.com/editor?c=aGVsbG8%3D"), None);
    }

    #[test]
    fn encode_replaces_existing_payload_and_keeps_other_params() {
        let codec = ShareCodec::new();
        let first = codec.encode(&SharedState::default(), "https://example.com/?lang=en").unwrap();
        let second = codec.encode(&sample(), &first).unwrap();
        let parsed = Url::parse(&second).unwrap();
        let keys: Vec<_> = parsed.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["lang", "c"]);
        assert_eq!(codec.decode(&second), Some(sample()));
    }

    #[test]
    fn strip_removes_only_payload() {
        let codec = ShareCodec::new();
        let url = codec.encode(&sample(), "https://example.com/?lang=en").unwrap();
        assert_eq!(codec.strip(&url).unwrap(), "https://example.com/?lang=en");

        let url = codec.encode(&sample(), BASE).unwrap();
        assert_eq!(codec.strip(&url).unwrap(), BASE);
    }

    #[test]
    fn custom_param_name() {
        let codec = ShareCodec::with_param("theme");
        let url = codec.encode(&sample(), BASE).unwrap();
        assert!(url.contains("?theme="));
        assert_eq!(ShareCodec::new().decode(&url), None);
        assert_eq!(codec.decode(&url), Some(sample()));
    }

    struct Identity;

    impl Compressor for Identity {
        fn compress(&self, bytes: &[u8]) -> std::io::Result<Vec<u8>> {
            Ok(bytes.to_vec())
        }

        fn decompress(&self, bytes: &[u8]) -> std::io::Result<Vec<u8>> {
            Ok(bytes.to_vec())
        }
    }

    #[test]
    fn compressor_is_pluggable() {
        let codec = ShareCodec::with_compressor("c", Identity);
        let payload = codec.encode_payload(&sample()).unwrap();
        let json = String::from_utf8(STANDARD.decode(&payload).unwrap()).unwrap();
        assert!(json.contains("\"currentMode\":\"dark\""));
        assert_eq!(codec.decode_payload(&payload).unwrap(), sample());
    }
}
