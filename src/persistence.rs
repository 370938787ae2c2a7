// src/persistence.rs
use crate::core::types::PageId;
use crate::counter::ViewCounter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// The on-disk form of the view counters.
#[derive(Clone, Serialize, Deserialize)]
struct CounterSnapshot {
    counts: HashMap<PageId, u64>,
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] bincode::Error),
    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the counter state to `path`. The snapshot goes to a temp file in
/// the same directory first and is renamed into place, so readers never see
/// a half-written file.
pub fn save_counts(counter: &ViewCounter, path: &Path) -> Result<(), PersistError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let snapshot = CounterSnapshot {
        counts: counter.snapshot(),
    };

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, &snapshot)?;
    temp_file.persist(path).map_err(|e| e.error)?;

    debug!(pages = snapshot.counts.len(), path = %path.display(), "saved view counters");
    Ok(())
}

/// Loads a previously saved counter state.
pub fn load_counts(path: &Path) -> Result<ViewCounter, PersistError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot: CounterSnapshot = bincode::deserialize_from(reader)?;

    debug!(pages = snapshot.counts.len(), path = %path.display(), "loaded view counters");
    Ok(ViewCounter::from_snapshot(snapshot.counts))
}

/// Loads the counter state, or starts fresh when no snapshot exists yet.
pub fn load_counts_or_new(path: &Path) -> ViewCounter {
    load_counts(path).unwrap_or_else(|_| ViewCounter::new())
}

/// Renders the counters as a JSON object keyed by page id, for consumers
/// outside this process.
pub fn export_counts_json(counter: &ViewCounter) -> Result<String, PersistError> {
    let snapshot = counter.snapshot();
    // JSON object keys must be strings
    let by_page: HashMap<String, u64> = snapshot
        .into_iter()
        .map(|(page, count)| (page.to_string(), count))
        .collect();
    Ok(serde_json::to_string_pretty(&by_page)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("counters.bin");

        let counter = ViewCounter::new();
        counter.record(3);
        counter.record(3);
        counter.record(11);
        save_counts(&counter, &path).unwrap();

        let restored = load_counts(&path).unwrap();
        assert_eq!(restored.get(3), 2);
        assert_eq!(restored.get(11), 1);
        assert_eq!(restored.len(), 2);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("counters.bin");
        save_counts(&ViewCounter::new(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn missing_snapshot_falls_back_to_empty() {
        let dir = TempDir::new().unwrap();
        let counter = load_counts_or_new(&dir.path().join("absent.bin"));
        assert!(counter.is_empty());
    }

    #[test]
    fn json_export_is_keyed_by_page_id() {
        let counter = ViewCounter::new();
        counter.record(5);
        counter.record(5);
        let json = export_counts_json(&counter).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["5"], 2);
    }
}
