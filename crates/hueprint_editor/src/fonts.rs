//! Font catalog and per-session font loading
//!
//! Web fonts are fetched through a [`FontLoader`]; the [`FontRegistry`]
//! remembers which families were loaded in this session so each family is
//! requested at most once, and skips system fonts entirely.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use async_trait::async_trait;
use rustc_hash::FxHashSet;

use crate::error::FontError;

/// Stylesheet host for web fonts
pub const STYLESHEET_BASE: &str = "https://fonts.googleapis.com/css2";

/// Weights assumed for families missing from [`FONT_WEIGHTS`]
pub const DEFAULT_FONT_WEIGHTS: &[u16] = &[300, 400, 500, 600, 700];

/// Weights offered when no family is selected
pub const FALLBACK_COMMON_WEIGHTS: &[u16] = &[400, 500, 600];

const ALL_WEIGHTS: &[u16] = &[100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Known weight availability per family
pub const FONT_WEIGHTS: &[(&str, &[u16])] = &[
    // Sans-serif
    ("Geist", ALL_WEIGHTS),
    ("Inter", ALL_WEIGHTS),
    ("Roboto", &[100, 300, 400, 500, 700, 900]),
    ("Open Sans", &[300, 400, 500, 600, 700, 800]),
    ("Lato", &[100, 300, 400, 700, 900]),
    ("Montserrat", ALL_WEIGHTS),
    ("Oswald", &[200, 300, 400, 500, 600, 700]),
    ("Source Sans Pro", &[200, 300, 400, 600, 700, 900]),
    ("Raleway", ALL_WEIGHTS),
    ("Poppins", ALL_WEIGHTS),
    ("PT Sans", &[400, 700]),
    ("Ubuntu", &[300, 400, 500, 700]),
    ("Nunito", &[200, 300, 400, 500, 600, 700, 800, 900]),
    ("Work Sans", ALL_WEIGHTS),
    ("Rubik", &[300, 400, 500, 600, 700, 800, 900]),
    ("Barlow", ALL_WEIGHTS),
    ("DM Sans", &[400, 500, 700]),
    ("Manrope", &[200, 300, 400, 500, 600, 700, 800]),
    ("Mulish", &[200, 300, 400, 500, 600, 700, 800, 900]),
    ("Outfit", ALL_WEIGHTS),
    ("Public Sans", ALL_WEIGHTS),
    ("Lexend", ALL_WEIGHTS),
    ("Red Hat Display", &[300, 400, 500, 600, 700, 800, 900]),
    // Serif
    ("Playfair Display", &[400, 500, 600, 700, 800, 900]),
    ("Merriweather", &[300, 400, 700, 900]),
    ("Lora", &[400, 500, 600, 700]),
    ("PT Serif", &[400, 700]),
    ("Crimson Text", &[400, 600, 700]),
    ("EB Garamond", &[400, 500, 600, 700, 800]),
    ("Source Serif Pro", &[200, 300, 400, 600, 700, 900]),
    ("Spectral", &[200, 300, 400, 500, 600, 700, 800]),
    // Monospace
    ("Geist Mono", ALL_WEIGHTS),
    ("Fira Code", &[300, 400, 500, 600, 700]),
    ("JetBrains Mono", &[100, 200, 300, 400, 500, 600, 700, 800]),
    ("Source Code Pro", &[200, 300, 400, 500, 600, 700, 900]),
    ("Roboto Mono", &[100, 200, 300, 400, 500, 600, 700]),
    ("IBM Plex Mono", &[100, 200, 300, 400, 500, 600, 700]),
    ("Inconsolata", &[200, 300, 400, 500, 600, 700, 800, 900]),
    ("Space Mono", &[400, 700]),
    ("Ubuntu Mono", &[400, 700]),
    ("Menlo", &[400, 700]),
    ("Monaco", &[400]),
    ("Courier New", &[400, 700]),
    // System
    ("system-ui", ALL_WEIGHTS),
    ("-apple-system", ALL_WEIGHTS),
    ("Segoe UI", &[300, 400, 600, 700]),
    ("Arial", &[400, 700]),
    ("Helvetica", &[300, 400, 700]),
    ("Georgia", &[400, 700]),
    ("Times New Roman", &[400, 700]),
    ("Verdana", &[400, 700]),
    ("Tahoma", &[400, 700]),
];

/// Families that are never fetched: the system picker list plus the
/// macOS monospace faces used as the default numbers family
pub const SYSTEM_FONTS: &[&str] = &[
    "system-ui",
    "-apple-system",
    "Segoe UI",
    "Arial",
    "Helvetica",
    "Georgia",
    "Times New Roman",
    "Courier New",
    "Verdana",
    "Tahoma",
    "Menlo",
    "Monaco",
];

const SANS_SERIF_FONTS: &[&str] = &[
    "Geist",
    "Inter",
    "Roboto",
    "Open Sans",
    "Lato",
    "Montserrat",
    "Oswald",
    "Source Sans Pro",
    "Raleway",
    "Poppins",
    "PT Sans",
    "Ubuntu",
    "Nunito",
    "Roboto Condensed",
    "Mukta",
    "Work Sans",
    "Dosis",
    "Rubik",
    "Barlow",
    "Oxygen",
    "Karla",
    "Hind",
    "Cabin",
    "Quicksand",
    "Titillium Web",
    "Fira Sans",
    "Arimo",
    "Manrope",
    "Josefin Sans",
    "Mulish",
    "Heebo",
    "Abel",
    "Maven Pro",
    "Exo 2",
    "Catamaran",
    "DM Sans",
    "Asap",
    "Noto Sans",
    "Hind Siliguri",
    "Assistant",
    "Yanone Kaffeesatz",
    "Prompt",
    "Varela Round",
    "Archivo",
    "Public Sans",
    "Outfit",
    "Anton",
    "Bitter",
    "Comfortaa",
    "Fjalla One",
    "Libre Franklin",
    "Questrial",
    "Signika",
    "Kanit",
    "Saira Condensed",
    "Bebas Neue",
    "Barlow Condensed",
    "Rokkitt",
    "Shadows Into Light",
    "Pathway Gothic One",
    "Lexend",
    "Caveat",
    "Teko",
    "Cormorant Garamond",
    "Noto Sans Display",
    "Red Hat Display",
];

const SERIF_FONTS: &[&str] = &[
    "Playfair Display",
    "Merriweather",
    "Lora",
    "PT Serif",
    "Crimson Text",
    "Libre Baskerville",
    "EB Garamond",
    "Source Serif Pro",
    "Vollkorn",
    "Noto Serif",
    "Arvo",
    "Slabo 27px",
    "Cardo",
    "Cormorant",
    "Spectral",
    "Alegreya",
    "Gelasio",
    "Crimson Pro",
    "Domine",
    "Libre Caslon Text",
    "Old Standard TT",
    "Zilla Slab",
    "Alegreya Sans",
];

const MONOSPACE_FONTS: &[&str] = &[
    "Geist Mono",
    "Fira Code",
    "JetBrains Mono",
    "Source Code Pro",
    "Roboto Mono",
    "IBM Plex Mono",
    "Inconsolata",
    "Space Mono",
    "Ubuntu Mono",
    "Courier Prime",
    "Anonymous Pro",
    "Overpass Mono",
    "PT Mono",
];

/// Picker grouping of the font catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontCategory {
    SansSerif,
    Serif,
    Monospace,
    System,
}

impl FontCategory {
    pub const ALL: [FontCategory; 4] = [
        FontCategory::SansSerif,
        FontCategory::Serif,
        FontCategory::Monospace,
        FontCategory::System,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::SansSerif => "sans-serif",
            Self::Serif => "serif",
            Self::Monospace => "monospace",
            Self::System => "system",
        }
    }
}

impl Display for FontCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FontCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| format!("unknown font category: {s}"))
    }
}

/// Families offered in the picker for `category`
pub fn popular_fonts(category: FontCategory) -> &'static [&'static str] {
    match category {
        FontCategory::SansSerif => SANS_SERIF_FONTS,
        FontCategory::Serif => SERIF_FONTS,
        FontCategory::Monospace => MONOSPACE_FONTS,
        FontCategory::System => SYSTEM_FONTS,
    }
}

/// Every picker family, category by category
pub fn all_popular_fonts() -> impl Iterator<Item = &'static str> {
    FontCategory::ALL
        .into_iter()
        .flat_map(|category| popular_fonts(category).iter().copied())
}

/// Available weights for a family
pub fn font_weights(family: &str) -> &'static [u16] {
    FONT_WEIGHTS
        .iter()
        .find(|(name, _)| *name == family)
        .map_or(DEFAULT_FONT_WEIGHTS, |(_, weights)| *weights)
}

/// Weights every selected family supports, ascending.
///
/// Unset entries are ignored. With nothing selected the fallback trio is
/// returned; when the families share no weight, the first family's weights
/// are returned instead.
pub fn common_weights(families: &[Option<&str>]) -> Vec<u16> {
    let selected: Vec<&str> = families.iter().flatten().copied().collect();
    let Some(first) = selected.first() else {
        return FALLBACK_COMMON_WEIGHTS.to_vec();
    };

    let mut common: Vec<u16> = font_weights(first)
        .iter()
        .copied()
        .filter(|weight| selected.iter().all(|family| font_weights(family).contains(weight)))
        .collect();

    if common.is_empty() {
        return font_weights(first).to_vec();
    }
    common.sort_unstable();
    common.dedup();
    common
}

/// Stylesheet URL requesting `family` at `weights`
pub fn stylesheet_url(family: &str, weights: &[u16]) -> String {
    let weights: Vec<String> = weights.iter().map(u16::to_string).collect();
    format!(
        "{STYLESHEET_BASE}?family={}:wght@{}&display=swap",
        family.replace(' ', "+"),
        weights.join(";")
    )
}

/// Fetches a font stylesheet
#[async_trait]
pub trait FontLoader: Send + Sync {
    /// Resolve once the stylesheet at `url` for `family` is available
    async fn load(&self, family: &str, url: &str) -> Result<(), FontError>;
}

/// Outcome of [`FontRegistry::ensure_loaded`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontLoad {
    /// System font, nothing fetched
    System,
    /// Already fetched earlier in this session
    Cached,
    /// Fetched now
    Loaded,
}

/// Per-session record of loaded fonts
#[derive(Clone, Debug)]
pub struct FontRegistry {
    loaded: FxHashSet<String>,
    system: FxHashSet<String>,
}

impl FontRegistry {
    /// Registry with the built-in system font list
    pub fn new() -> Self {
        Self::with_system_fonts(std::iter::empty::<String>())
    }

    /// Registry treating `extra` as system fonts in addition to the built-ins
    pub fn with_system_fonts<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut system: FxHashSet<String> = SYSTEM_FONTS.iter().map(|s| s.to_string()).collect();
        system.extend(extra.into_iter().map(Into::into));
        Self {
            loaded: FxHashSet::default(),
            system,
        }
    }

    pub fn is_system(&self, family: &str) -> bool {
        self.system.contains(family)
    }

    pub fn is_loaded(&self, family: &str) -> bool {
        self.loaded.contains(family)
    }

    /// Number of families fetched in this session
    pub fn loaded_count(&self) -> usize {
        self.loaded.len()
    }

    /// Load `family` at every weight it offers, at most once per session.
    ///
    /// A failed load is not recorded, so a later call retries it.
    pub async fn ensure_loaded<L>(&mut self, loader: &L, family: &str) -> Result<FontLoad, FontError>
    where
        L: FontLoader + ?Sized,
    {
        self.ensure_loaded_with(loader, family, font_weights(family)).await
    }

    /// Like [`ensure_loaded`](Self::ensure_loaded) with explicit weights
    pub async fn ensure_loaded_with<L>(
        &mut self,
        loader: &L,
        family: &str,
        weights: &[u16],
    ) -> Result<FontLoad, FontError>
    where
        L: FontLoader + ?Sized,
    {
        if self.is_system(family) {
            return Ok(FontLoad::System);
        }
        if self.is_loaded(family) {
            return Ok(FontLoad::Cached);
        }

        let url = stylesheet_url(family, weights);
        tracing::debug!(family, url = url.as_str(), "loading font");
        match loader.load(family, &url).await {
            Ok(()) => {
                self.loaded.insert(family.to_string());
                Ok(FontLoad::Loaded)
            }
            Err(err) => {
                tracing::warn!(family, %err, "font load failed");
                Err(err)
            }
        }
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        urls: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl FontLoader for Recording {
        async fn load(&self, family: &str, url: &str) -> Result<(), FontError> {
            if let Ok(mut urls) = self.urls.lock() {
                urls.push(url.to_string());
            }
            if self.fail {
                return Err(FontError::Load {
                    family: family.to_string(),
                    reason: "offline".into(),
                });
            }
            Ok(())
        }
    }

    impl Recording {
        fn calls(&self) -> usize {
            self.urls.lock().map(|urls| urls.len()).unwrap_or_default()
        }
    }

    #[test]
    fn every_category_offers_fonts() {
        for category in FontCategory::ALL {
            assert!(!popular_fonts(category).is_empty(), "{category}");
            assert_eq!(category.key().parse::<FontCategory>(), Ok(category));
        }
        assert_eq!(popular_fonts(FontCategory::System), SYSTEM_FONTS);
        assert!(popular_fonts(FontCategory::Serif).contains(&"Lora"));
        assert!("cursive".parse::<FontCategory>().is_err());
    }

    #[test]
    fn all_popular_fonts_spans_categories() {
        let all: Vec<&str> = all_popular_fonts().collect();
        let expected: usize = FontCategory::ALL.iter().map(|c| popular_fonts(*c).len()).sum();
        assert_eq!(all.len(), expected);
        assert_eq!(all.first(), Some(&"Geist"));
        assert_eq!(all.last(), Some(&"Monaco"));
    }

    #[test]
    fn system_category_is_never_fetched() {
        let loader = Recording::default();
        let mut registry = FontRegistry::new();
        for family in popular_fonts(FontCategory::System) {
            let outcome = pollster::block_on(registry.ensure_loaded(&loader, family)).unwrap();
            assert_eq!(outcome, FontLoad::System, "{family}");
        }
        assert_eq!(loader.calls(), 0);
        assert_eq!(registry.loaded_count(), 0);
    }

    #[test]
    fn weights_for_known_and_unknown_families() {
        assert_eq!(font_weights("Monaco"), &[400]);
        assert_eq!(font_weights("Lora"), &[400, 500, 600, 700]);
        assert_eq!(font_weights("Made Up Sans"), DEFAULT_FONT_WEIGHTS);
    }

    #[test]
    fn common_weights_intersects() {
        assert_eq!(common_weights(&[]), vec![400, 500, 600]);
        assert_eq!(common_weights(&[None, None]), vec![400, 500, 600]);
        assert_eq!(common_weights(&[Some("Inter"), Some("Lora")]), vec![400, 500, 600, 700]);
        assert_eq!(common_weights(&[Some("Roboto"), None, Some("DM Sans")]), vec![400, 500, 700]);
    }

    #[test]
    fn single_family_keeps_its_weights() {
        assert_eq!(common_weights(&[Some("Monaco")]), vec![400]);
        assert_eq!(common_weights(&[None, Some("Crimson Text")]), vec![400, 600, 700]);
        assert_eq!(common_weights(&[Some("Lato"), Some("Menlo")]), vec![400, 700]);
    }

    #[test]
    fn stylesheet_url_format() {
        assert_eq!(
            stylesheet_url("Open Sans", &[400, 700]),
            "https://fonts.googleapis.com/css2?family=Open+Sans:wght@400;700&display=swap"
        );
    }

    #[test]
    fn loads_each_family_once() {
        let loader = Recording::default();
        let mut registry = FontRegistry::new();
        let first = pollster::block_on(registry.ensure_loaded(&loader, "Lora"));
        let second = pollster::block_on(registry.ensure_loaded(&loader, "Lora"));
        assert_eq!(first, Ok(FontLoad::Loaded));
        assert_eq!(second, Ok(FontLoad::Cached));
        assert_eq!(loader.calls(), 1);
        assert!(registry.is_loaded("Lora"));
    }

    #[test]
    fn system_fonts_are_not_fetched() {
        let loader = Recording::default();
        let mut registry = FontRegistry::with_system_fonts(["Corporate Sans"]);
        assert_eq!(pollster::block_on(registry.ensure_loaded(&loader, "Arial")), Ok(FontLoad::System));
        assert_eq!(
            pollster::block_on(registry.ensure_loaded(&loader, "Corporate Sans")),
            Ok(FontLoad::System)
        );
        assert_eq!(loader.calls(), 0);
        assert_eq!(registry.loaded_count(), 0);
    }

    #[test]
    fn failed_load_is_retried() {
        let loader = Recording {
            fail: true,
            ..Default::default()
        };
        let mut registry = FontRegistry::new();
        assert!(pollster::block_on(registry.ensure_loaded(&loader, "Lora")).is_err());
        assert!(!registry.is_loaded("Lora"));
        assert!(pollster::block_on(registry.ensure_loaded(&loader, "Lora")).is_err());
        assert_eq!(loader.calls(), 2);
    }

    #[test]
    fn separate_registries_do_not_share_state() {
        let loader = Recording::default();
        let mut a = FontRegistry::new();
        let mut b = FontRegistry::new();
        pollster::block_on(a.ensure_loaded(&loader, "Inter")).unwrap();
        assert_eq!(pollster::block_on(b.ensure_loaded(&loader, "Inter")), Ok(FontLoad::Loaded));
        assert_eq!(loader.calls(), 2);
    }
}
