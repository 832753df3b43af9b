//! Durable preference storage.
//!
//! The app persists exactly one value across runs: the dark-mode flag,
//! stored under the fixed key [`DARK_MODE_KEY`] as the literal strings
//! `"true"` / `"false"`. Writes are best-effort; a store that cannot be
//! read yields defaults instead of an error.
//!
//! Persistence goes through the `PreferenceStore` port so the UI layer
//! never touches the filesystem directly and tests can substitute
//! `MemoryPrefs`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Storage key for the dark-mode flag.
pub const DARK_MODE_KEY: &str = "dark_mode";

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML in preference file: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ============================================================================
// Storage Port
// ============================================================================

/// Key-value storage port for durable preferences.
///
/// Implementations must be callable from a spawned task: writes happen
/// fire-and-forget off the input path.
pub trait PreferenceStore: Send + Sync {
    /// Get a preference value by key. A missing key is `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a preference value. Persist if the backing store is durable.
    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Read the dark-mode flag from a store. Absent or unparseable → `false`.
pub fn load_dark_mode(store: &dyn PreferenceStore) -> bool {
    store
        .get(DARK_MODE_KEY)
        .map(|v| v == "true")
        .unwrap_or(false)
}

// ============================================================================
// File-backed Store
// ============================================================================

/// On-disk representation: a flat string map in `prefs.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

/// Preference store backed by a TOML file in the config directory.
///
/// The whole map is held in memory and rewritten on every set, using the
/// write-to-temp-then-rename pattern so the file is never left partial.
/// Load failures are logged and treated as an empty store.
pub struct FilePrefs {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FilePrefs {
    /// Open (or lazily create) the preference file at `path`.
    ///
    /// An unreadable or corrupt file falls back to defaults rather than
    /// failing startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<PrefsFile>(&content) {
                Ok(file) => file.values,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Corrupt preference file, falling back to defaults"
                    );
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No preference file yet, using defaults");
                BTreeMap::new()
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Cannot read preference file, falling back to defaults"
                );
                BTreeMap::new()
            }
        };

        Self {
            path,
            values: Mutex::new(values),
        }
    }

    /// Serialize the current map and atomically replace the file.
    fn persist(&self, values: &BTreeMap<String, String>) -> Result<(), PrefsError> {
        let file = PrefsFile {
            values: values.clone(),
        };
        let content = toml::to_string_pretty(&file)?;
        atomic_write(&self.path, content.as_bytes())?;
        Ok(())
    }
}

impl PreferenceStore for FilePrefs {
    fn get(&self, key: &str) -> Option<String> {
        let values = match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut values = match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.insert(key.to_string(), value.to_string());
        self.persist(&values)
    }
}

/// Atomically write `content` using the write-to-temp-then-rename pattern.
///
/// The temp filename carries a time-derived suffix so a concurrent writer
/// cannot collide on a predictable path. Rename on the same filesystem is
/// atomic on POSIX.
fn atomic_write(dst: &Path, content: &[u8]) -> std::io::Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let temp_path = dst.with_extension(format!("tmp.{:016x}", suffix));

    let mut temp_file = std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&temp_path)?;

    if let Err(e) = temp_file
        .write_all(content)
        .and_then(|_| temp_file.sync_all())
    {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }
    drop(temp_file);

    #[cfg(windows)]
    if dst.exists() {
        if let Err(e) = std::fs::remove_file(dst) {
            let _ = std::fs::remove_file(&temp_path);
            return Err(e);
        }
    }

    if let Err(e) = std::fs::rename(&temp_path, dst) {
        let _ = std::fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

// ============================================================================
// In-memory Store (tests, --ephemeral runs)
// ============================================================================

/// Volatile preference store. Behaves like `FilePrefs` minus the disk.
#[derive(Default)]
pub struct MemoryPrefs {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        let values = match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        let mut values = match self.values.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_get_missing() {
        let store = MemoryPrefs::new();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn memory_store_set_and_get() {
        let store = MemoryPrefs::new();
        store.set(DARK_MODE_KEY, "true").unwrap();
        assert_eq!(store.get(DARK_MODE_KEY), Some("true".to_string()));
    }

    #[test]
    fn memory_store_overwrites() {
        let store = MemoryPrefs::new();
        store.set(DARK_MODE_KEY, "true").unwrap();
        store.set(DARK_MODE_KEY, "false").unwrap();
        assert_eq!(store.get(DARK_MODE_KEY), Some("false".to_string()));
    }

    #[test]
    fn dark_mode_defaults_false_on_empty_store() {
        let store = MemoryPrefs::new();
        assert!(!load_dark_mode(&store));
    }

    #[test]
    fn dark_mode_unparseable_value_is_false() {
        let store = MemoryPrefs::new();
        store.set(DARK_MODE_KEY, "maybe").unwrap();
        assert!(!load_dark_mode(&store));
    }

    #[test]
    fn file_store_round_trip() {
        let dir = std::env::temp_dir().join("flowcare_prefs_test_roundtrip");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prefs.toml");
        let _ = std::fs::remove_file(&path);

        {
            let store = FilePrefs::open(&path);
            store.set(DARK_MODE_KEY, "true").unwrap();
        }

        // Fresh handle reads what the previous one persisted.
        let store = FilePrefs::open(&path);
        assert_eq!(store.get(DARK_MODE_KEY), Some("true".to_string()));
        assert!(load_dark_mode(&store));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn file_store_missing_file_is_empty() {
        let path = std::env::temp_dir().join("flowcare_prefs_test_missing/prefs.toml");
        let store = FilePrefs::open(&path);
        assert_eq!(store.get(DARK_MODE_KEY), None);
        assert!(!load_dark_mode(&store));
    }

    #[test]
    fn file_store_corrupt_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join("flowcare_prefs_test_corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prefs.toml");
        std::fs::write(&path, "this is not [valid toml").unwrap();

        let store = FilePrefs::open(&path);
        assert_eq!(store.get(DARK_MODE_KEY), None);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn file_store_persists_multiple_keys() {
        let dir = std::env::temp_dir().join("flowcare_prefs_test_multi");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prefs.toml");
        let _ = std::fs::remove_file(&path);

        {
            let store = FilePrefs::open(&path);
            store.set(DARK_MODE_KEY, "true").unwrap();
            store.set("other", "value").unwrap();
        }

        let store = FilePrefs::open(&path);
        assert_eq!(store.get(DARK_MODE_KEY), Some("true".to_string()));
        assert_eq!(store.get("other"), Some("value".to_string()));

        std::fs::remove_dir_all(&dir).ok();
    }
}
