//! # Storage
//!
//! Raw key-value layer underneath the record store. Values are opaque strings;
//! typing and the corrupt-as-empty policy live one level up in [`crate::store`].
//!
//! ## Backends
//! - [`MemoryStorage`]: process-local map, lost on drop.
//! - [`FileStorage`]: one JSON object on disk (`{"incomes": "[...]", "theme": "dark"}`),
//!   rewritten through a temp file and rename on every write. A file that does not
//!   parse is moved aside to `<name>.corrupt` before booting empty, never overwritten.

use std::{
    collections::HashMap,
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::error::StoreError;

pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);

        Ok(())
    }
}

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileStorage {
    /// Opens `path`, booting empty if it is missing or does not parse.
    ///
    /// Unparseable content is moved to [`corrupt_path`] first. Any other read failure is
    /// returned as is.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let values = load_values(&path)?;

        debug!("Opened {} with {} keys", path.display(), values.len());

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let io_error = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_error)?;
            }
        }

        let payload = serde_json::to_vec(&self.values).map_err(|source| StoreError::Encode {
            key: self.path.display().to_string(),
            source,
        })?;

        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, payload).map_err(io_error)?;
        fs::rename(&temp_path, &self.path).map_err(io_error)?;

        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);

        self.persist()
    }
}

/// First free `<name>.corrupt`, `<name>.corrupt.1`, ... beside `path`.
pub fn corrupt_path(path: &Path) -> PathBuf {
    let name = path.file_name().map(OsString::from).unwrap_or_default();

    (0..)
        .map(|n| {
            let mut candidate = name.clone();
            candidate.push(".corrupt");
            if n > 0 {
                candidate.push(format!(".{n}"));
            }
            path.with_file_name(candidate)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.with_extension("corrupt"))
}

fn load_values(path: &Path) -> Result<HashMap<String, String>, StoreError> {
    let raw = match fs::read(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match serde_json::from_slice(&raw) {
        Ok(values) => Ok(values),
        Err(e) => {
            let aside = corrupt_path(path);
            fs::rename(path, &aside).map_err(|source| StoreError::Io {
                path: path.to_path_buf(),
                source,
            })?;

            warn!(
                "Failed to parse {}, moved to {} and booting empty: {e}",
                path.display(),
                aside.display()
            );
            Ok(HashMap::new())
        }
    }
}
