//! Color derivation engines
//!
//! An engine turns one base color into the interaction-state variants a
//! widget needs (hover, pressed, disabled, emphasis, subtle). Engines are
//! looked up by name from an [`EngineRegistry`] using the customization's
//! `colorEngine` field.

use hueprint_core::{parse_or_black, ColorScheme};
use rustc_hash::FxHashMap;

/// Strategy for deriving interaction-state colors from a base color.
///
/// Inputs are any CSS color string; outputs are canonical `rgba(r,g,b,a)`
/// strings. Unparseable inputs are treated as opaque black.
pub trait ColorEngine: Send + Sync {
    /// Registry name, matched against `colorEngine`
    fn name(&self) -> &str;

    fn hover(&self, base: &str, scheme: ColorScheme) -> String;

    fn pressed(&self, base: &str, scheme: ColorScheme) -> String;

    fn disabled(&self, base: &str, scheme: ColorScheme) -> String;

    fn emphasis(&self, base: &str, scheme: ColorScheme) -> String;

    fn subtle(&self, base: &str, scheme: ColorScheme) -> String;
}

/// Linear RGB blends toward black (light) or white (dark)
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEngine;

impl DefaultEngine {
    pub const NAME: &'static str = "default";
}

impl ColorEngine for DefaultEngine {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn hover(&self, base: &str, scheme: ColorScheme) -> String {
        let color = parse_or_black(base);
        match scheme {
            ColorScheme::Light => color.darken(0.06),
            ColorScheme::Dark => color.lighten(0.08),
        }
        .to_css()
    }

    fn pressed(&self, base: &str, scheme: ColorScheme) -> String {
        let color = parse_or_black(base);
        match scheme {
            ColorScheme::Light => color.darken(0.1),
            ColorScheme::Dark => color.lighten(0.16),
        }
        .to_css()
    }

    fn disabled(&self, base: &str, scheme: ColorScheme) -> String {
        let alpha = match scheme {
            ColorScheme::Light => 0.21,
            ColorScheme::Dark => 0.4,
        };
        parse_or_black(base).with_alpha(alpha).to_css()
    }

    fn emphasis(&self, base: &str, scheme: ColorScheme) -> String {
        let opaque = parse_or_black(base).with_alpha(1.0);
        match scheme {
            ColorScheme::Light => opaque,
            ColorScheme::Dark => opaque.lighten(0.1),
        }
        .to_css()
    }

    fn subtle(&self, base: &str, scheme: ColorScheme) -> String {
        let alpha = match scheme {
            ColorScheme::Light => 0.04,
            ColorScheme::Dark => 0.02,
        };
        parse_or_black(base).with_alpha(alpha).to_css()
    }
}

/// Named collection of color engines
pub struct EngineRegistry {
    engines: FxHashMap<String, Box<dyn ColorEngine>>,
    fallback: DefaultEngine,
}

impl EngineRegistry {
    /// Empty registry; every lookup resolves to [`DefaultEngine`]
    pub fn new() -> Self {
        Self {
            engines: FxHashMap::default(),
            fallback: DefaultEngine,
        }
    }

    /// Registry with the built-in engines registered
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(DefaultEngine);
        registry
    }

    /// Register an engine under its own name, replacing any previous one
    pub fn register(&mut self, engine: impl ColorEngine + 'static) {
        let name = engine.name().to_string();
        tracing::trace!(engine = name.as_str(), "registering color engine");
        self.engines.insert(name, Box::new(engine));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.engines.contains_key(name)
    }

    /// Registered engine names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.engines.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Look up an engine by name, falling back to the default engine
    pub fn resolve(&self, name: &str) -> &dyn ColorEngine {
        match self.engines.get(name) {
            Some(engine) => engine.as_ref(),
            None => {
                tracing::warn!(engine = name, "unknown color engine, using default");
                &self.fallback
            }
        }
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for EngineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineRegistry")
            .field("engines", &self.names())
            .finish()
    }
}

/// Apply `opacity` to a color, keeping its channels
pub(crate) fn with_opacity(color: &str, opacity: f64) -> String {
    parse_or_black(color).with_alpha(opacity).to_css()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCENT: &str = "rgb(100, 150, 200)";

    #[test]
    fn hover_darkens_in_light_and_lightens_in_dark() {
        let engine = DefaultEngine;
        assert_eq!(engine.hover(ACCENT, ColorScheme::Light), "rgba(94,141,188,1)");
        assert_eq!(engine.hover(ACCENT, ColorScheme::Dark), "rgba(112,158,204,1)");
    }

    #[test]
    fn pressed_uses_stronger_blend() {
        let engine = DefaultEngine;
        assert_eq!(engine.pressed(ACCENT, ColorScheme::Light), "rgba(90,135,180,1)");
        assert_eq!(engine.pressed(ACCENT, ColorScheme::Dark), "rgba(125,167,209,1)");
    }

    #[test]
    fn disabled_and_subtle_only_touch_alpha() {
        let engine = DefaultEngine;
        assert_eq!(engine.disabled(ACCENT, ColorScheme::Light), "rgba(100,150,200,0.21)");
        assert_eq!(engine.disabled(ACCENT, ColorScheme::Dark), "rgba(100,150,200,0.4)");
        assert_eq!(engine.subtle(ACCENT, ColorScheme::Light), "rgba(100,150,200,0.04)");
        assert_eq!(engine.subtle(ACCENT, ColorScheme::Dark), "rgba(100,150,200,0.02)");
    }

    #[test]
    fn emphasis_is_opaque() {
        let engine = DefaultEngine;
        let translucent = "rgba(100, 150, 200, 0.3)";
        assert_eq!(engine.emphasis(translucent, ColorScheme::Light), "rgba(100,150,200,1)");
        assert_eq!(engine.emphasis(translucent, ColorScheme::Dark), "rgba(116,161,206,1)");
    }

    #[test]
    fn hover_keeps_alpha() {
        let engine = DefaultEngine;
        assert_eq!(
            engine.hover("rgba(0,0,0,0.5)", ColorScheme::Dark),
            "rgba(20,20,20,0.5)"
        );
    }

    #[test]
    fn unparseable_input_is_black() {
        let engine = DefaultEngine;
        assert_eq!(engine.hover("not a color", ColorScheme::Light), "rgba(0,0,0,1)");
    }

    #[test]
    fn derivation_is_deterministic() {
        let engine = DefaultEngine;
        for scheme in ColorScheme::ALL {
            assert_eq!(engine.hover("#5861CB", scheme), engine.hover("#5861CB", scheme));
        }
    }

    struct Inverted;

    impl ColorEngine for Inverted {
        fn name(&self) -> &str {
            "inverted"
        }
        fn hover(&self, _: &str, _: ColorScheme) -> String {
            "hover".into()
        }
        fn pressed(&self, _: &str, _: ColorScheme) -> String {
            "pressed".into()
        }
        fn disabled(&self, _: &str, _: ColorScheme) -> String {
            "disabled".into()
        }
        fn emphasis(&self, _: &str, _: ColorScheme) -> String {
            "emphasis".into()
        }
        fn subtle(&self, _: &str, _: ColorScheme) -> String {
            "subtle".into()
        }
    }

    #[test]
    fn registry_resolves_registered_engines() {
        let mut registry = EngineRegistry::with_defaults();
        registry.register(Inverted);
        assert_eq!(registry.names(), vec!["default", "inverted"]);
        assert_eq!(registry.resolve("inverted").hover("#000", ColorScheme::Light), "hover");
    }

    #[test]
    fn registry_falls_back_to_default() {
        let registry = EngineRegistry::new();
        assert!(!registry.contains("default"));
        assert_eq!(registry.resolve("missing").name(), "default");
    }
}
