// Persistence layer for the tab session.
// One JSON blob per storage key, always replaced whole.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{Error, Result};
use crate::state::{SessionState, Tab};

/// Durable key-value slot holding the serialized session.
pub trait SessionStore {
    /// Raw blob, or `None` if nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replaces the stored blob.
    fn write(&mut self, blob: &str) -> Result<()>;

    /// Never fails: unreadable or corrupt state comes back as an empty session.
    fn load(&self) -> SessionState {
        match self.read() {
            Ok(Some(blob)) => decode_session(&blob),
            Ok(None) => SessionState::default(),
            Err(e) => {
                log::warn!("[SessionStore] Failed to read session: {}, starting empty", e);
                SessionState::default()
            }
        }
    }

    fn save(&mut self, state: &SessionState) -> Result<()> {
        let json = serde_json::to_string(state)?;
        self.write(&json)
    }
}

/// Parses a stored blob, repairing what can be repaired.
///
/// A blob that is not JSON, not an object, or whose `tabs` is not an array
/// yields the empty session. Individual malformed tabs are dropped, repeated
/// paths keep their first entry, and an `activePath` that names no tab falls
/// back to the first tab. A null `activePath` stays null.
pub fn decode_session(blob: &str) -> SessionState {
    let parsed: Value = match serde_json::from_str(blob) {
        Ok(v) => v,
        Err(e) => {
            log::warn!("[SessionStore] Failed to parse session: {}, starting empty", e);
            return SessionState::default();
        }
    };

    let Some(raw_tabs) = parsed.get("tabs").and_then(Value::as_array) else {
        log::warn!("[SessionStore] Stored session has no tabs array, starting empty");
        return SessionState::default();
    };

    let mut seen = HashSet::new();
    let mut tabs = Vec::with_capacity(raw_tabs.len());
    for raw in raw_tabs {
        match serde_json::from_value::<Tab>(raw.clone()) {
            Ok(tab) if seen.insert(tab.path.clone()) => tabs.push(tab),
            Ok(tab) => log::warn!("[SessionStore] Dropping duplicate tab {}", tab.path),
            Err(e) => log::warn!("[SessionStore] Dropping malformed tab: {}", e),
        }
    }

    let active_path = match parsed.get("activePath").and_then(Value::as_str) {
        Some(active) if seen.contains(active) => Some(active.to_string()),
        Some(active) => {
            log::warn!("[SessionStore] Active tab {} is not open, using the first tab", active);
            tabs.first().map(|t| t.path.clone())
        }
        None => None,
    };

    SessionState { tabs, active_path }
}

/// In-memory slot, for tests and headless embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blob: Option<String>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            writes: 0,
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SessionStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// File-backed slot: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", key)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&self.path)
            .map(Some)
            .map_err(|e| Error::io(&self.path, e))
    }

    fn write(&mut self, blob: &str) -> Result<()> {
        write_atomic(&self.path, blob)
    }
}

/// Atomic write: tmp + rename, so a crash never leaves a half-written file.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("tmp");
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    fs::write(&tmp_path, contents).map_err(|e| Error::io(&tmp_path, e))?;
    fs::rename(&tmp_path, path).map_err(|e| Error::io(path, e))?;

    Ok(())
}
