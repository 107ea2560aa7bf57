//! promptbank-store: prompt records, the JSON-backed library, and settings.
//!
//! Every mutation of a [`PromptLibrary`] is written straight back to its file.
//! Settings live behind a [`SettingsProvider`] with a pluggable
//! [`SettingsStore`] so tests can run without touching the disk.

pub mod error;
mod json_file;
pub mod library;
pub mod record;
pub mod settings;

pub use error::{Result, StoreError, ValidationError};
pub use library::{DATA_FILE_NAME, DEFAULT_EXPORT_NAME, PromptLibrary, default_data_path};
pub use record::PromptRecord;
pub use settings::{
    FileSettingsStore, Language, MemorySettingsStore, SETTINGS_FILE_NAME, Settings,
    SettingsProvider, SettingsStore, Theme, default_settings_path,
};
