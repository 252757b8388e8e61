//! Save files: a snapshot plus the time it was written.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rw_engine::Snapshot;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFile {
    pub saved_at: DateTime<Utc>,
    pub snapshot: Snapshot,
}

impl SaveFile {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            saved_at: Utc::now(),
            snapshot,
        }
    }

    pub fn read(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("cannot read save file '{}': {e}", path.display()))?;
        serde_json::from_str(&content)
            .map_err(|e| format!("invalid save file '{}': {e}", path.display()))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;
        fs::write(path, json).map_err(|e| format!("cannot write '{}': {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rw_engine::SessionState;

    #[test]
    fn save_file_uses_camel_case_and_rfc3339() {
        let save = SaveFile::new(SessionState::new().to_snapshot());
        let value = serde_json::to_value(&save).unwrap();

        let saved_at = value["savedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(saved_at).is_ok());
        assert_eq!(value["snapshot"]["name"], "INITIAL_LOAD");
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("save.json");
        let save = SaveFile::new(SessionState::new().to_snapshot());

        save.write(&path).unwrap();
        let read = SaveFile::read(&path).unwrap();

        assert_eq!(read.saved_at, save.saved_at);
        assert_eq!(read.snapshot, save.snapshot);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SaveFile::read(Path::new("/nonexistent/save.json")).unwrap_err();
        assert!(err.contains("/nonexistent/save.json"));
    }
}
