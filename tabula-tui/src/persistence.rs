//! Persistence for lightweight UI state.
//!
//! The state file is rewritten through a sibling temp file and a rename so a
//! crash mid-write never leaves a truncated file behind.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tabula_core::TableSnapshot;

/// Active table plus per-table search, status and page, keyed by table title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub active_table: Option<String>,
    #[serde(default)]
    pub tables: BTreeMap<String, TableSnapshot>,
}

#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Load the saved state. A missing or blank file means nothing was saved yet.
pub fn load(path: &Path) -> Result<Option<PersistedState>, PersistenceError> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(None);
    }
    let state = serde_json::from_str::<PersistedState>(&contents)?;
    Ok(Some(state))
}

pub fn save(path: &Path, state: &PersistedState) -> Result<(), PersistenceError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(state)?;
    let staging = staging_path(path);
    std::fs::write(&staging, contents)?;
    std::fs::rename(&staging, path)?;
    tracing::debug!(path = %path.display(), tables = state.tables.len(), "Saved UI state");
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::StatusFilter;

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(&dir.path().join("state.json")).unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        let mut state = PersistedState {
            active_table: Some("Vendors".to_string()),
            tables: BTreeMap::new(),
        };
        state.tables.insert(
            "Vendors".to_string(),
            TableSnapshot {
                search_term: "acme".to_string(),
                status: StatusFilter::parse("Active"),
                current_page: 3,
                page_size: 10,
            },
        );

        save(&path, &state).unwrap();
        assert_eq!(load(&path).unwrap(), Some(state));
        assert!(!staging_path(&path).exists());
    }

    #[test]
    fn test_load_blank_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "\n").unwrap();
        assert!(load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(load(&path), Err(PersistenceError::Serde(_))));
    }
}
