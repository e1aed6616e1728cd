//! Notified-state storage operations

use crate::{models::NotifiedState, Result};
use std::path::PathBuf;

pub struct StateStorage {
    path: PathBuf,
}

impl StateStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<NotifiedState> {
        if !self.path.exists() {
            return Ok(NotifiedState::new());
        }

        let content = std::fs::read_to_string(&self.path)?;

        // Handle empty file case
        if content.trim().is_empty() {
            return Ok(NotifiedState::new());
        }

        let state: NotifiedState = serde_json::from_str(&content)?;
        Ok(state)
    }

    pub fn save(&self, state: &NotifiedState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StateStorage::new(temp_dir.path().join("notified_state.json"));

        let state = storage.load().unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notified_state.json");
        std::fs::write(&path, "").unwrap();

        let storage = StateStorage::new(path);
        let state = storage.load().unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = StateStorage::new(temp_dir.path().join("state").join("notified_state.json"));

        let mut state = NotifiedState::new();
        state.mark("OPS-1".to_string());
        state.mark("OPS-7".to_string());

        storage.save(&state).unwrap();
        let loaded = storage.load().unwrap();
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notified_state.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = StateStorage::new(path);
        assert!(storage.load().is_err());
    }
}
