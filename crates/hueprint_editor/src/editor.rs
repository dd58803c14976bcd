//! The editing session
//!
//! [`ThemeEditor`] owns everything one editor instance needs: the undo
//! history of the dual-mode state, the mode on display, the per-session
//! font registry, the color engines, share-link settings, and the
//! preference store. Nothing here is process-global, so independent
//! editors never observe each other.

use hueprint_core::ColorScheme;
use hueprint_theme::customization::ShadowConfig;
use hueprint_theme::{
    assemble, export_code, DualModeThemeCustomization, EngineRegistry, Namespace, ThemeCustomization,
    ThemePreset, TokenMap,
};
use serde_json::{Map, Value};

use crate::config::EditorConfig;
use crate::error::{EditorError, GenerateError, Result};
use crate::fonts::{common_weights, FontLoad, FontLoader, FontRegistry};
use crate::generate::{GenerateRequest, SingleFlight, ThemeGenerator};
use crate::history::{History, DEFAULT_HISTORY_LIMIT};
use crate::prefs::{FilePreferences, MemoryPreferences, PreferenceStore, SELECTED_THEME_KEY};
use crate::reducer;
use crate::share::{ShareCodec, SharedState};

/// One editing session over a dual-mode customization
pub struct ThemeEditor {
    history: History<DualModeThemeCustomization>,
    mode: ColorScheme,
    fonts: FontRegistry,
    engines: EngineRegistry,
    share: ShareCodec,
    base_url: String,
    flight: SingleFlight,
    preferences: Box<dyn PreferenceStore>,
    selected_preset: ThemePreset,
}

impl ThemeEditor {
    /// Empty session in light mode with default settings
    pub fn new() -> Self {
        Self::with_state(reducer::empty_state())
    }

    /// Session starting from `initial`; [`clear_history`](Self::clear_history)
    /// returns here
    pub fn with_state(initial: DualModeThemeCustomization) -> Self {
        let defaults = EditorConfig::default();
        Self {
            history: History::with_limit(initial, DEFAULT_HISTORY_LIMIT),
            mode: ColorScheme::Light,
            fonts: FontRegistry::new(),
            engines: EngineRegistry::with_defaults(),
            share: ShareCodec::new(),
            base_url: defaults.editor.base_url,
            flight: SingleFlight::new(),
            preferences: Box::new(MemoryPreferences::new()),
            selected_preset: ThemePreset::default(),
        }
    }

    /// Empty session configured from `config`.
    ///
    /// Preferences go to the configured file, or stay in memory when no
    /// path can be resolved. The stored preset selection is restored.
    pub fn from_config(config: &EditorConfig) -> Self {
        let preferences: Box<dyn PreferenceStore> = match config.preferences.resolved_path() {
            Some(path) => Box::new(FilePreferences::new(path)),
            None => {
                tracing::debug!("no preferences path, keeping preferences in memory");
                Box::new(MemoryPreferences::new())
            }
        };

        let mut editor = Self {
            history: History::with_limit(reducer::empty_state(), config.editor.history_limit),
            fonts: FontRegistry::with_system_fonts(config.fonts.system.iter().cloned()),
            share: ShareCodec::with_param(config.editor.share_param.as_str()),
            base_url: config.editor.base_url.clone(),
            ..Self::new()
        }
        .with_preferences_box(preferences);
        editor.restore_selected_preset();
        editor
    }

    /// Replace the color engines
    pub fn with_engines(mut self, engines: EngineRegistry) -> Self {
        self.engines = engines;
        self
    }

    /// Replace the preference store and restore the stored preset selection
    pub fn with_preferences(self, preferences: impl PreferenceStore + 'static) -> Self {
        let mut editor = self.with_preferences_box(Box::new(preferences));
        editor.restore_selected_preset();
        editor
    }

    fn with_preferences_box(mut self, preferences: Box<dyn PreferenceStore>) -> Self {
        self.preferences = preferences;
        self
    }

    fn restore_selected_preset(&mut self) {
        match self.preferences.get(SELECTED_THEME_KEY) {
            Ok(Some(id)) => match ThemePreset::from_id(&id) {
                Some(preset) => self.selected_preset = preset,
                None => tracing::warn!(preset = id.as_str(), "ignoring unknown stored preset"),
            },
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "failed to read preferences"),
        }
    }

    // ========================================================================
    // State
    // ========================================================================

    pub fn state(&self) -> &DualModeThemeCustomization {
        self.history.present()
    }

    /// Customization of the mode on display
    pub fn current(&self) -> &ThemeCustomization {
        self.state().get(self.mode)
    }

    pub fn mode(&self) -> ColorScheme {
        self.mode
    }

    /// Switch the mode on display. Not an undoable edit.
    pub fn set_mode(&mut self, mode: ColorScheme) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    pub fn engines(&self) -> &EngineRegistry {
        &self.engines
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    // ========================================================================
    // Edits (all target the mode on display)
    // ========================================================================

    pub fn update_field(&mut self, namespace: Namespace, field: &str, value: Value) -> Result<()> {
        let next = reducer::update_field(self.state(), self.mode, namespace, field, value)?;
        self.commit(next);
        Ok(())
    }

    pub fn patch_namespace(&mut self, namespace: Namespace, patch: &Map<String, Value>) -> Result<()> {
        let next = reducer::patch_namespace(self.state(), self.mode, namespace, patch)?;
        self.commit(next);
        Ok(())
    }

    pub fn replace_namespace(&mut self, namespace: Namespace, value: Value) -> Result<()> {
        let next = reducer::replace_namespace(self.state(), self.mode, namespace, value)?;
        self.commit(next);
        Ok(())
    }

    pub fn replace_shadow(&mut self, shadow: Option<ShadowConfig>) {
        let next = reducer::replace_shadow(self.state(), self.mode, shadow);
        self.commit(next);
    }

    pub fn replace_custom_css(&mut self, css: Option<String>) {
        let next = reducer::replace_custom_css(self.state(), self.mode, css);
        self.commit(next);
    }

    pub fn replace_mode(&mut self, customization: ThemeCustomization) {
        let next = reducer::replace_mode(self.state(), self.mode, customization);
        self.commit(next);
    }

    pub fn merge(&mut self, partial: &Map<String, Value>) -> Result<()> {
        let next = reducer::merge_into_mode(self.state(), self.mode, partial)?;
        self.commit(next);
        Ok(())
    }

    /// Load a preset into the mode on display only
    pub fn load_preset(&mut self, preset: ThemePreset) {
        let next = reducer::apply_preset(self.state(), self.mode, preset);
        self.commit(next);
    }

    /// Replace both modes with a preset's configuration
    pub fn load_preset_everywhere(&mut self, preset: ThemePreset) {
        self.commit(preset.config());
    }

    /// Clear both modes to an empty customization, as an undoable edit
    pub fn reset(&mut self) {
        self.commit(reducer::empty_state());
    }

    fn commit(&mut self, next: DualModeThemeCustomization) {
        self.history.set(next);
    }

    // ========================================================================
    // History
    // ========================================================================

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Drop history and return to the state the session started from
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History<DualModeThemeCustomization> {
        &self.history
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Token map for `mode`
    pub fn tokens(&self, mode: ColorScheme) -> TokenMap {
        assemble(self.state().get(mode), mode, &self.engines)
    }

    /// Pasteable code for both modes
    pub fn export_code(&self) -> String {
        let state = self.state();
        export_code(&state.light, &state.dark, &self.engines)
    }

    /// Share link for the current state, tagged with the mode on display
    pub fn share_url(&self) -> Result<String> {
        let shared = SharedState::new(self.state().clone(), Some(self.mode));
        Ok(self.share.encode(&shared, &self.base_url)?)
    }

    /// Start over from the state carried by a share link.
    ///
    /// On success the shared state becomes the session's starting point
    /// (history is dropped) and the link without its payload is returned,
    /// ready to replace the visible address. A link without a payload, or
    /// with a corrupt one, leaves the session untouched and returns `None`.
    pub fn load_from_url(&mut self, url: &str) -> Result<Option<String>> {
        let Some(shared) = self.share.decode(url) else {
            return Ok(None);
        };
        let stripped = self.share.strip(url)?;
        let (state, mode) = shared.into_parts();
        self.history = History::with_limit(state, self.history.limit());
        if let Some(mode) = mode {
            self.mode = mode;
        }
        tracing::debug!(mode = %self.mode, "loaded shared state");
        Ok(Some(stripped))
    }

    // ========================================================================
    // Side effects
    // ========================================================================

    /// Select a font for one family slot (`body`, `heading` or `mono`) and
    /// load it.
    ///
    /// The selection is recorded even when loading fails, so the family is
    /// retried next time.
    pub async fn select_font<L>(&mut self, loader: &L, slot: &str, family: &str) -> Result<FontLoad>
    where
        L: FontLoader + ?Sized,
    {
        self.update_field(Namespace::Fonts, slot, Value::String(family.to_string()))?;
        Ok(self.fonts.ensure_loaded(loader, family).await?)
    }

    /// Load every family the mode on display uses
    pub async fn load_current_fonts<L>(&mut self, loader: &L) -> Vec<(String, std::result::Result<FontLoad, EditorError>)>
    where
        L: FontLoader + ?Sized,
    {
        let fonts = &self.current().fonts;
        let families: Vec<String> = [&fonts.body, &fonts.heading, &fonts.mono]
            .into_iter()
            .flatten()
            .cloned()
            .collect();

        let mut outcomes = Vec::with_capacity(families.len());
        for family in families {
            let outcome = self.fonts.ensure_loaded(loader, &family).await.map_err(EditorError::from);
            outcomes.push((family, outcome));
        }
        outcomes
    }

    /// Weights shared by every family the mode on display uses
    pub fn available_weights(&self) -> Vec<u16> {
        let fonts = &self.current().fonts;
        common_weights(&[fonts.body.as_deref(), fonts.heading.as_deref(), fonts.mono.as_deref()])
    }

    /// Handle for observing whether a generation is running
    pub fn generation_slot(&self) -> SingleFlight {
        self.flight.clone()
    }

    pub fn is_generating(&self) -> bool {
        self.flight.is_busy()
    }

    /// Generate changes for the mode on display and merge them in.
    ///
    /// Only the fields the generator returns change. On failure the state
    /// is left exactly as it was.
    pub async fn generate<G>(&mut self, generator: &G, api_key: &str, description: &str) -> Result<()>
    where
        G: ThemeGenerator + ?Sized,
    {
        let flight = self.flight.clone();
        let _guard = flight.acquire()?;

        let request = GenerateRequest {
            api_key: api_key.to_string(),
            description: description.to_string(),
            current: self.current().clone(),
            scheme: self.mode,
        };
        let partial = generator.generate(&request).await.map_err(|err| {
            tracing::warn!(%err, "theme generation failed");
            err
        })?;

        tracing::debug!(namespaces = partial.len(), mode = %self.mode, "merging generated theme");
        self.merge(&partial)
    }

    /// Like [`generate`](Self::generate) with the API key saved in preferences
    pub async fn generate_with_saved_key<G>(&mut self, generator: &G, description: &str) -> Result<()>
    where
        G: ThemeGenerator + ?Sized,
    {
        let api_key = self.api_key()?.ok_or(GenerateError::MissingApiKey)?;
        self.generate(generator, &api_key, description).await
    }

    pub fn api_key(&self) -> Result<Option<String>> {
        Ok(self.preferences.api_key()?)
    }

    pub fn set_api_key(&mut self, key: &str) -> Result<()> {
        Ok(self.preferences.set_api_key(key)?)
    }

    pub fn clear_api_key(&mut self) -> Result<()> {
        Ok(self.preferences.clear_api_key()?)
    }

    // ========================================================================
    // Preset selection
    // ========================================================================

    pub fn selected_preset(&self) -> ThemePreset {
        self.selected_preset
    }

    /// Remember `preset` as the user's choice
    pub fn select_preset(&mut self, preset: ThemePreset) -> Result<()> {
        self.preferences.set(SELECTED_THEME_KEY, preset.id())?;
        self.selected_preset = preset;
        Ok(())
    }

    /// Like [`select_preset`](Self::select_preset), by preset id
    pub fn select_preset_id(&mut self, id: &str) -> Result<ThemePreset> {
        let preset = ThemePreset::from_id(id).ok_or_else(|| EditorError::UnknownPreset(id.to_string()))?;
        self.select_preset(preset)?;
        Ok(preset)
    }
}

impl Default for ThemeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ThemeEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeEditor")
            .field("mode", &self.mode)
            .field("past", &self.history.past_len())
            .field("future", &self.history.future_len())
            .field("selected_preset", &self.selected_preset)
            .field("engines", &self.engines)
            .finish_non_exhaustive()
    }
}
