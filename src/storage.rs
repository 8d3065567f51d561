//! Session-scoped key/value storage.
//!
//! [`SchemeState`](crate::state::SchemeState) only talks to the
//! [`SessionStorage`] trait, so the backing store can be swapped per target.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::warn;

/// Environment variable overriding the session directory.
pub const SESSION_DIR_ENV: &str = "COLOR_HARMONY_SESSION_DIR";

/// String-by-key storage that lives for one session.
pub trait SessionStorage {
    /// Read a value. Missing or unreadable keys are `None`.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-process storage; gone when the value is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key under a session directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("failed to read session file {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("failed to create session directory: {}", self.dir.display())
        })?;
        let path = self.path_for(key);
        std::fs::write(&path, value)
            .with_context(|| format!("failed to write session file {}", path.display()))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match std::fs::remove_file(&path) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e)
                .with_context(|| format!("failed to remove session file {}", path.display())),
            _ => Ok(()),
        }
    }
}

/// Resolve the default session directory.
///
/// `$COLOR_HARMONY_SESSION_DIR`, then `$XDG_RUNTIME_DIR/color-harmony`, then
/// the system temp directory.
pub fn default_session_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(SESSION_DIR_ENV) {
        return PathBuf::from(dir);
    }
    std::env::var("XDG_RUNTIME_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir())
        .join("color-harmony")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_set_get_remove() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.get("k"), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("v"));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k"), None);
        storage.remove("k").unwrap();
    }

    #[test]
    fn file_storage_creates_directory_on_set() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("session");
        let mut storage = FileStorage::new(&dir);

        assert_eq!(storage.get("history"), None);
        storage.set("history", "[]").unwrap();
        assert!(dir.join("history.json").exists());
        assert_eq!(storage.get("history").as_deref(), Some("[]"));
    }

    #[test]
    fn file_storage_remove_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(tmp.path());
        storage.set("history", "[1]").unwrap();
        storage.remove("history").unwrap();
        assert_eq!(storage.get("history"), None);
        storage.remove("history").unwrap();
    }

    #[test]
    fn file_storage_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        FileStorage::new(tmp.path()).set("k", "persisted").unwrap();
        let reopened = FileStorage::new(tmp.path());
        assert_eq!(reopened.get("k").as_deref(), Some("persisted"));
    }

    #[test]
    fn file_storage_set_fails_when_dir_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();

        let mut storage = FileStorage::new(&blocker);
        let err = storage.set("k", "v").unwrap_err().to_string();
        assert!(
            err.contains("session directory"),
            "expected directory context, got: {err}"
        );
    }
}
