//! # Storage Abstraction
//!
//! The history store and theme service persist through an injected
//! [`KeyValueStorage`] so the calculation core never depends on a concrete
//! backend. Two implementations ship:
//!
//! - [`MemoryStorage`] - HashMap-backed, used in tests and ephemeral runs
//! - [`FileStorage`] - one JSON document per key in a data directory, with
//!   atomic saves (write .tmp, fsync, rename) and an OS-level advisory lock
//!   on the directory for the lifetime of the storage
//!
//! ## Example
//!
//! ```rust
//! use volt_core::storage::{KeyValueStorage, MemoryStorage};
//!
//! let mut storage = MemoryStorage::new();
//! storage.set("voltaic_history", "[]").unwrap();
//! assert_eq!(storage.get("voltaic_history").as_deref(), Some("[]"));
//! ```

use std::collections::HashMap;

use crate::errors::{VoltError, VoltResult};

/// Minimal key-value persistence contract.
///
/// Keys are short identifiers (`voltaic_history`, `voltaic_theme`);
/// values are serialized JSON documents. Writes are whole-value overwrites.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> VoltResult<()>;

    /// Remove `key` if present
    fn remove(&mut self, key: &str) -> VoltResult<()>;
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    map: HashMap<String, String>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage
    pub fn new() -> Self {
        MemoryStorage::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> VoltResult<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> VoltResult<()> {
        self.map.remove(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_storage::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_storage {
    use std::fs::{self, File, OpenOptions};
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use fs2::FileExt;

    use super::{KeyValueStorage, VoltError, VoltResult};

    /// File-backed storage: `<dir>/<key>.json` per key.
    ///
    /// Opening acquires an exclusive advisory lock on `<dir>/.voltaic.lock`
    /// so two processes cannot race on the same data directory. The lock is
    /// released when the storage is dropped.
    pub struct FileStorage {
        dir: PathBuf,
        lock_path: PathBuf,
        _lock_file: File,
    }

    impl FileStorage {
        /// Open (creating if needed) a data directory and lock it.
        pub fn open(dir: impl Into<PathBuf>) -> VoltResult<Self> {
            let dir = dir.into();
            fs::create_dir_all(&dir).map_err(|e| {
                VoltError::storage_error("create dir", dir.display().to_string(), e.to_string())
            })?;

            let lock_path = dir.join(".voltaic.lock");
            let lock_file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(false)
                .open(&lock_path)
                .map_err(|e| {
                    VoltError::storage_error(
                        "create lock",
                        lock_path.display().to_string(),
                        e.to_string(),
                    )
                })?;

            lock_file.try_lock_exclusive().map_err(|_| {
                VoltError::storage_error(
                    "lock",
                    dir.display().to_string(),
                    "data directory is locked by another process",
                )
            })?;

            Ok(FileStorage {
                dir,
                lock_path,
                _lock_file: lock_file,
            })
        }

        /// Path to the data directory
        pub fn dir(&self) -> &Path {
            &self.dir
        }

        fn path_for(&self, key: &str) -> VoltResult<PathBuf> {
            // keys become file names; keep them to a safe charset
            if key.is_empty()
                || !key
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            {
                return Err(VoltError::storage_error(
                    "resolve",
                    key,
                    "Keys may only contain alphanumerics, '_' and '-'",
                ));
            }
            Ok(self.dir.join(format!("{key}.json")))
        }
    }

    impl KeyValueStorage for FileStorage {
        fn get(&self, key: &str) -> Option<String> {
            let path = self.path_for(key).ok()?;
            fs::read_to_string(path).ok()
        }

        fn set(&mut self, key: &str, value: &str) -> VoltResult<()> {
            let path = self.path_for(key)?;
            let tmp_path = path.with_extension("json.tmp");

            // write to tmp, sync, then rename for an atomic replace
            let mut tmp = File::create(&tmp_path).map_err(|e| {
                VoltError::storage_error("write", key, e.to_string())
            })?;
            tmp.write_all(value.as_bytes())
                .map_err(|e| VoltError::storage_error("write", key, e.to_string()))?;
            tmp.sync_all()
                .map_err(|e| VoltError::storage_error("sync", key, e.to_string()))?;
            drop(tmp);

            fs::rename(&tmp_path, &path)
                .map_err(|e| VoltError::storage_error("rename", key, e.to_string()))
        }

        fn remove(&mut self, key: &str) -> VoltResult<()> {
            let path = self.path_for(key)?;
            match fs::remove_file(&path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(VoltError::storage_error("remove", key, e.to_string())),
            }
        }
    }

    impl Drop for FileStorage {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.lock_path);
            // OS lock is released when _lock_file is dropped
        }
    }
}
