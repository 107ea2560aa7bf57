//! The prompt library: an ordered list of records backed by a JSON file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::json_file;
use crate::record::PromptRecord;

/// File name suggested when exporting the library.
pub const DEFAULT_EXPORT_NAME: &str = "prompt_bank_backup.json";

/// File name of the library inside the data directory.
pub const DATA_FILE_NAME: &str = "prompts.json";

/// Default location of the library file.
///
/// `<data dir>/promptbank/prompts.json`, or the working directory when the
/// platform has no data directory.
pub fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("promptbank"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_FILE_NAME)
}

/// Ordered prompt records, saved after every change.
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary {
    records: Vec<PromptRecord>,
    /// Backing file. `None` keeps the library in memory.
    path: Option<PathBuf>,
}

impl PromptLibrary {
    /// Open the library stored at `path`. A missing file is an empty library.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records: Vec<PromptRecord> = json_file::read_optional(&path)?.unwrap_or_default();
        tracing::debug!(path = %path.display(), count = records.len(), "loaded prompts");
        Ok(Self {
            records,
            path: Some(path),
        })
    }

    /// An empty library that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// An in-memory library seeded with `records`.
    pub fn from_records(records: Vec<PromptRecord>) -> Self {
        Self { records, path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn records(&self) -> &[PromptRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PromptRecord> {
        self.records.get(index)
    }

    /// Validate, append and save. Returns the new record's index.
    ///
    /// Mutations are all-or-nothing: when the save fails the records are
    /// left as they were.
    pub fn add(&mut self, record: PromptRecord) -> Result<usize> {
        let record = record.normalized();
        record.validate()?;
        self.records.push(record);
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }
        Ok(self.records.len() - 1)
    }

    /// Validate and replace the record at `index`, then save.
    pub fn update(&mut self, index: usize, record: PromptRecord) -> Result<()> {
        let record = record.normalized();
        record.validate()?;
        let slot = self
            .records
            .get_mut(index)
            .ok_or(StoreError::NotFound(index))?;
        let previous = std::mem::replace(slot, record);
        if let Err(e) = self.save() {
            self.records[index] = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Remove the record at `index` and save.
    pub fn remove(&mut self, index: usize) -> Result<PromptRecord> {
        if index >= self.records.len() {
            return Err(StoreError::NotFound(index));
        }
        let record = self.records.remove(index);
        if let Err(e) = self.save() {
            self.records.insert(index, record);
            return Err(e);
        }
        Ok(record)
    }

    /// Index of the first record equal to `record`.
    pub fn position_of(&self, record: &PromptRecord) -> Option<usize> {
        self.records.iter().position(|r| r == record)
    }

    /// Indices of records whose title contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<usize> {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, record)| record.matches(query))
            .map(|(index, _)| index)
            .collect()
    }

    /// Append every record whose title is non-empty and not yet present.
    ///
    /// Titles are compared exactly. Later duplicates within `incoming` are
    /// skipped too. Saves only when something was added; returns how many
    /// records were added.
    pub fn merge(&mut self, incoming: impl IntoIterator<Item = PromptRecord>) -> Result<usize> {
        let mut titles: HashSet<String> = self.records.iter().map(|r| r.title.clone()).collect();
        let original_len = self.records.len();
        let mut added = 0usize;

        for record in incoming {
            if record.title.is_empty() || titles.contains(&record.title) {
                tracing::trace!(title = %record.title, "skipping merged prompt");
                continue;
            }
            titles.insert(record.title.clone());
            self.records.push(record);
            added += 1;
        }

        if added > 0 {
            if let Err(e) = self.save() {
                self.records.truncate(original_len);
                return Err(e);
            }
        }
        tracing::debug!(added, total = self.records.len(), "merged prompts");
        Ok(added)
    }

    /// Read a JSON array of records from `path` and merge it.
    pub fn import_file(&mut self, path: &Path) -> Result<usize> {
        let incoming: Vec<PromptRecord> = json_file::read(path)?;
        tracing::info!(path = %path.display(), count = incoming.len(), "importing prompts");
        self.merge(incoming)
    }

    /// Write every record to `path`.
    pub fn export_file(&self, path: &Path) -> Result<()> {
        json_file::write_atomic(path, &self.records)?;
        tracing::info!(path = %path.display(), count = self.records.len(), "exported prompts");
        Ok(())
    }

    /// Write the library to its backing file, if it has one.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        json_file::write_atomic(path, &self.records)?;
        tracing::debug!(path = %path.display(), count = self.records.len(), "saved prompts");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn sample() -> PromptLibrary {
        PromptLibrary::from_records(vec![
            PromptRecord::new("Sunset").prompt("orange sky"),
            PromptRecord::new("Forest").prompt("tall pines"),
            PromptRecord::new("sunrise").prompt("pink sky"),
        ])
    }

    #[test]
    fn test_add_validates() {
        let mut lib = PromptLibrary::in_memory();
        let err = lib.add(PromptRecord::new("empty")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::EmptyRecord)));
        assert!(lib.is_empty());

        let index = lib.add(PromptRecord::new("ok").prompt("x")).unwrap();
        assert_eq!(index, 0);
        assert_eq!(lib.len(), 1);
    }

    #[test]
    fn test_update_and_remove_bounds() {
        let mut lib = sample();
        assert!(matches!(
            lib.update(9, PromptRecord::new("x").prompt("y")),
            Err(StoreError::NotFound(9))
        ));
        lib.update(1, PromptRecord::new("Jungle").prompt("vines")).unwrap();
        assert_eq!(lib.get(1).unwrap().title, "Jungle");

        assert!(matches!(lib.remove(3), Err(StoreError::NotFound(3))));
        let removed = lib.remove(0).unwrap();
        assert_eq!(removed.title, "Sunset");
        assert_eq!(lib.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lib = sample();
        assert_eq!(lib.search("SUN"), vec![0, 2]);
        assert_eq!(lib.search(""), vec![0, 1, 2]);
        assert!(lib.search("desert").is_empty());
    }

    #[test]
    fn test_merge_by_title() {
        let mut lib = sample();
        let added = lib
            .merge(vec![
                PromptRecord::new("Sunset").prompt("duplicate"),
                PromptRecord::new("Desert").prompt("dunes"),
                PromptRecord::new("Desert").prompt("dunes again"),
                PromptRecord::new("").prompt("untitled"),
                PromptRecord::new("forest").prompt("case differs"),
            ])
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(lib.len(), 5);
        assert_eq!(lib.get(3).unwrap().prompt, "dunes");
        assert_eq!(lib.get(4).unwrap().title, "forest");
    }

    #[test]
    fn test_position_of() {
        let lib = sample();
        let forest = lib.get(1).unwrap().clone();
        assert_eq!(lib.position_of(&forest), Some(1));
        assert_eq!(lib.position_of(&PromptRecord::new("none")), None);
    }
}
