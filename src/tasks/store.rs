//! Task list persistence
//!
//! The record is a JSON array of strings (`tasks.json` in the data
//! directory). Loading is fail-open: a missing, unreadable or wrong-shaped
//! record yields an empty list instead of an error, so the session always
//! starts. Saving goes through a sibling temp file and a rename, so a
//! partially written record is never observable by a later load.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const TASKS_FILE: &str = "tasks.json";

/// File-backed store for the task list
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Open the store at the default data directory
    pub fn open_default() -> Result<Self> {
        let dir = crate::config::data_dir()?;
        std::fs::create_dir_all(&dir)
            .context("Failed to create data directory")?;
        Ok(Self { path: dir.join(TASKS_FILE) })
    }

    /// Open a store at a custom record path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted task list. Missing or unparsable records count as
    /// empty; the discarded content is reported through tracing only.
    pub fn load(&self) -> Vec<String> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Could not read task record at {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(
                    "Discarding unparsable task record at {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Persist the full task list, replacing the record atomically
    pub fn save(&self, tasks: &[String]) -> Result<()> {
        let json = serde_json::to_string_pretty(tasks)
            .context("Failed to serialize task list")?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        std::fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Path of the backing record
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::with_path(dir.path().join(TASKS_FILE))
    }

    #[test]
    fn test_missing_record_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let tasks = vec![
            "buy milk".to_string(),
            "учить Rust".to_string(),
            "water the plants".to_string(),
        ];
        store.save(&tasks).unwrap();
        assert_eq!(store.load(), tasks);
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&["old".to_string(), "older".to_string()]).unwrap();
        store.save(&["new".to_string()]).unwrap();
        assert_eq!(store.load(), vec!["new".to_string()]);
    }

    #[test]
    fn test_invalid_syntax_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "not json at all {{{").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_wrong_shape_is_rejected_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), r#"{"not": "a list of strings"}"#).unwrap();
        assert!(store.load().is_empty());

        // A list with a non-string member is also rejected, not salvaged
        std::fs::write(store.path(), r#"["fine", 42]"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_record_leaves_no_residue_after_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), r#"{"not": "a list of strings"}"#).unwrap();
        let mut tasks = store.load();
        assert!(tasks.is_empty());

        tasks.push("fresh start".to_string());
        store.save(&tasks).unwrap();
        assert_eq!(store.load(), vec!["fresh start".to_string()]);
    }

    #[test]
    fn test_save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&["one".to_string()]).unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], TASKS_FILE);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::with_path(dir.path().join("gone").join(TASKS_FILE));
        assert!(store.save(&["x".to_string()]).is_err());
    }

    #[test]
    fn test_empty_list_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.save(&[]).unwrap();
        assert!(store.load().is_empty());
        assert!(store.path().exists());
    }
}
