//! User settings and where they are kept.
//!
//! [`SettingsProvider`] is the single owner of the live [`Settings`]. It loads
//! once from its [`SettingsStore`] and writes back after every change.

use std::fmt;
use std::path::{Path, PathBuf};

use promptbank_layout::LayoutConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::json_file;

/// File name of the settings inside the config directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Default location of the settings file.
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("promptbank"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SETTINGS_FILE_NAME)
}

// =========================================================================
// Settings
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Tr => "tr",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(is_dark: bool) -> Self {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Persisted user preferences. Absent keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub is_dark_theme: bool,
    pub language: Language,
    pub layout: LayoutConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            is_dark_theme: false,
            language: Language::En,
            layout: LayoutConfig::board(),
        }
    }
}

impl Settings {
    pub fn theme(&self) -> Theme {
        Theme::from_dark_flag(self.is_dark_theme)
    }
}

// =========================================================================
// Storage Backends
// =========================================================================

/// Where settings are loaded from and saved to.
pub trait SettingsStore {
    /// Human-readable backend name for logs.
    fn name(&self) -> &str;

    /// Load stored settings. `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Settings>>;

    fn save(&mut self, settings: &Settings) -> Result<()>;
}

/// Settings kept in a JSON file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    /// The file does not need to exist; it is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        Self::new(default_settings_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn name(&self) -> &str {
        "file"
    }

    fn load(&self) -> Result<Option<Settings>> {
        json_file::read_optional(&self.path)
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        json_file::write_atomic(&self.path, settings)?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

/// Settings kept in memory. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    stored: Option<Settings>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            stored: Some(settings),
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Option<Settings>> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, settings: &Settings) -> Result<()> {
        self.stored = Some(settings.clone());
        Ok(())
    }
}

// =========================================================================
// SettingsProvider
// =========================================================================

/// Owner of the live settings.
pub struct SettingsProvider {
    store: Box<dyn SettingsStore>,
    settings: Settings,
}

impl SettingsProvider {
    /// Load settings from `store`.
    ///
    /// A missing entry gives the defaults. An unreadable or corrupt one is
    /// logged and also gives the defaults.
    pub fn load(store: Box<dyn SettingsStore>) -> Self {
        let settings = match store.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => Settings::default(),
            Err(e) => {
                tracing::warn!(store = store.name(), error = %e, "failed to load settings, using defaults");
                Settings::default()
            }
        };
        let settings = Settings {
            layout: settings.layout.normalized(),
            ..settings
        };
        tracing::debug!(store = store.name(), ?settings, "settings loaded");
        Self { store, settings }
    }

    pub fn in_memory() -> Self {
        Self::load(Box::new(MemorySettingsStore::new()))
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::load(Box::new(FileSettingsStore::new(path)))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    pub fn backend_name(&self) -> &str {
        self.store.name()
    }

    /// Apply `change` and save.
    pub fn update(&mut self, change: impl FnOnce(&mut Settings)) -> Result<()> {
        change(&mut self.settings);
        self.settings.layout = self.settings.layout.normalized();
        self.store.save(&self.settings)
    }

    pub fn set_dark_theme(&mut self, is_dark: bool) -> Result<()> {
        self.update(|s| s.is_dark_theme = is_dark)
    }

    /// Flip between light and dark, save, and return the new theme.
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let is_dark = !self.settings.is_dark_theme;
        self.set_dark_theme(is_dark)?;
        tracing::info!(dark = is_dark, "theme toggled");
        Ok(self.theme())
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.update(|s| s.language = language)
    }

    pub fn set_layout(&mut self, layout: LayoutConfig) -> Result<()> {
        self.update(|s| s.layout = layout)
    }
}

impl fmt::Debug for SettingsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsProvider")
            .field("store", &self.store.name())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let provider = SettingsProvider::in_memory();
        let s = provider.settings();
        assert!(!s.is_dark_theme);
        assert_eq!(s.language, Language::En);
        assert_eq!(s.layout, LayoutConfig::board());
        assert_eq!(provider.theme(), Theme::Light);
        assert_eq!(provider.backend_name(), "memory");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s: Settings = serde_json::from_str(r#"{"language": "tr", "extra": 1}"#).unwrap();
        assert_eq!(s.language, Language::Tr);
        assert!(!s.is_dark_theme);
        assert_eq!(s.layout, LayoutConfig::board());
    }

    #[test]
    fn test_toggle_theme() {
        let mut provider = SettingsProvider::in_memory();
        assert_eq!(provider.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(provider.toggle_theme().unwrap(), Theme::Light);
        assert!(!provider.settings().is_dark_theme);
    }

    #[test]
    fn test_loads_from_store() {
        let stored = Settings {
            is_dark_theme: true,
            ..Settings::default()
        };
        let provider = SettingsProvider::load(Box::new(MemorySettingsStore::with_settings(stored)));
        assert_eq!(provider.theme(), Theme::Dark);
    }
}
