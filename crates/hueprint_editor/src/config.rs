//! Editor configuration file handling (hueprint.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::share::DEFAULT_SHARE_PARAM;

/// Config file name looked up by the CLI
pub const CONFIG_FILE_NAME: &str = "hueprint.toml";

/// Top-level editor configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub editor: SessionConfig,
    #[serde(default)]
    pub fonts: FontsConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

/// Session settings
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Maximum undo depth
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Query parameter carrying shared state
    #[serde(default = "default_share_param")]
    pub share_param: String,
    /// Page that share links point at
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_share_param() -> String {
    DEFAULT_SHARE_PARAM.to_string()
}

fn default_base_url() -> String {
    "https://example.invalid/editor".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            share_param: default_share_param(),
            base_url: default_base_url(),
        }
    }
}

/// Font settings
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct FontsConfig {
    /// Extra families treated as installed system fonts
    #[serde(default)]
    pub system: Vec<String>,
}

/// Preference storage
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PreferencesConfig {
    /// Preferences file; defaults to the user config directory
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl PreferencesConfig {
    /// Configured path, or `<config dir>/hueprint/preferences.toml`
    pub fn resolved_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(default_preferences_path)
    }
}

/// `<config dir>/hueprint/preferences.toml`, when the platform has a config dir
pub fn default_preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hueprint").join("preferences.toml"))
}

impl EditorConfig {
    /// Load a config file; every missing field takes its default
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| EditorError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| EditorError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Load `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_path(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_is_all_defaults() {
        let config = EditorConfig::from_toml("").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.editor.history_limit, 50);
        assert_eq!(config.editor.share_param, "c");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = EditorConfig::from_toml(
            r#"
            [editor]
            history_limit = 10

            [fonts]
            system = ["Corporate Sans"]
            "#,
        )
        .unwrap();
        assert_eq!(config.editor.history_limit, 10);
        assert_eq!(config.editor.share_param, "c");
        assert_eq!(config.fonts.system, vec!["Corporate Sans"]);
        assert_eq!(config.preferences.path, None);
    }

    #[test]
    fn toml_round_trip() {
        let mut config = EditorConfig::default();
        config.preferences.path = Some(PathBuf::from("/tmp/prefs.toml"));
        let text = config.to_toml().unwrap();
        assert_eq!(EditorConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn load_reports_path_on_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let err = EditorConfig::load_from_path(&missing).unwrap_err();
        assert!(matches!(err, EditorError::ConfigRead { .. }));
        assert!(EditorConfig::load_or_default(&missing).is_ok());

        let bad = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&bad, "[editor]\nhistory_limit = \"many\"").unwrap();
        let err = EditorConfig::load_from_path(&bad).unwrap_err();
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn explicit_preferences_path_wins() {
        let prefs = PreferencesConfig {
            path: Some(PathBuf::from("/tmp/p.toml")),
        };
        assert_eq!(prefs.resolved_path(), Some(PathBuf::from("/tmp/p.toml")));
    }
}
