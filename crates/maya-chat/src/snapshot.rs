//! JSON snapshots of a session's conversational context.

use std::path::Path;

use chrono::{DateTime, Utc};
use maya_core::error::{MayaError, Result};
use maya_core::ContextEntry;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSnapshot {
    pub session_id: Uuid,
    pub saved_at: DateTime<Utc>,
    pub entries: Vec<ContextEntry>,
}

impl ContextSnapshot {
    pub fn new(session_id: Uuid, entries: Vec<ContextEntry>) -> Self {
        Self {
            session_id,
            saved_at: Utc::now(),
            entries,
        }
    }

    /// Write the snapshot as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        info!(
            path = %path.display(),
            entries = self.entries.len(),
            "Context snapshot saved"
        );
        Ok(())
    }

    /// Read a snapshot. A file that is not a snapshot document is a
    /// `MayaError::Snapshot` naming the path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| MayaError::Snapshot(format!("{}: {}", path.display(), e)))
    }

    /// Entries from the snapshot at `path`, or an empty history when the file
    /// is missing or unreadable.
    pub fn load_entries_or_empty(path: &Path) -> Vec<ContextEntry> {
        if !path.exists() {
            return Vec::new();
        }
        match Self::load(path) {
            Ok(snapshot) => snapshot.entries,
            Err(e) => {
                warn!("Ignoring context snapshot: {}", e);
                Vec::new()
            }
        }
    }
}
