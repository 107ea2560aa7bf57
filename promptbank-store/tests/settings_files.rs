//! Integration tests for file-backed settings.

use std::fs;

use promptbank_layout::{LayoutConfig, Spacing};
use promptbank_store::{FileSettingsStore, Language, SettingsProvider, SettingsStore, Theme};

#[test]
fn settings_round_trip_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config").join("settings.json");

    let mut provider = SettingsProvider::with_file(&path);
    assert_eq!(provider.backend_name(), "file");
    provider.toggle_theme().unwrap();
    provider.set_language(Language::Tr).unwrap();
    provider
        .set_layout(LayoutConfig::new().margin(4.0).spacing(8.0))
        .unwrap();

    let reloaded = SettingsProvider::with_file(&path);
    assert_eq!(reloaded.theme(), Theme::Dark);
    assert_eq!(reloaded.settings().language, Language::Tr);
    assert_eq!(reloaded.settings().layout.margin, 4.0);
    assert_eq!(reloaded.settings().layout.vertical_spacing, Spacing::Fixed(8.0));
}

#[test]
fn absent_keys_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"is_dark_theme": true}"#).unwrap();

    let provider = SettingsProvider::with_file(&path);
    assert_eq!(provider.theme(), Theme::Dark);
    assert_eq!(provider.settings().language, Language::En);
    assert_eq!(provider.settings().layout, LayoutConfig::board());
}

#[test]
fn corrupt_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, "{\"language\": ").unwrap();

    let store = FileSettingsStore::new(&path);
    assert!(store.load().is_err());

    let mut provider = SettingsProvider::with_file(&path);
    assert_eq!(provider.theme(), Theme::Light);

    // The next change overwrites the corrupt file.
    provider.set_dark_theme(true).unwrap();
    assert_eq!(SettingsProvider::with_file(&path).theme(), Theme::Dark);
}

#[test]
fn negative_layout_values_are_normalized_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(
        &path,
        r#"{"layout": {"margin": -5, "horizontal_spacing": -1, "vertical_spacing": 3}}"#,
    )
    .unwrap();

    let provider = SettingsProvider::with_file(&path);
    let layout = provider.settings().layout;
    assert_eq!(layout.margin, 0.0);
    assert_eq!(layout.horizontal_spacing, Spacing::Style);
    assert_eq!(layout.vertical_spacing, Spacing::Fixed(3.0));
}
