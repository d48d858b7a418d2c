use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use indexmap::IndexMap;

/// Keyed string-blob storage, the shape of a browser storage area. One
/// attempt per call; callers surface failures, they do not retry.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, blob: &str) -> Result<()>;
}

/// Stores blobs in process memory. Slot iteration keeps insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    slots: IndexMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<()> {
        self.slots.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// Stores each slot as `<key>.json` under a root directory. Keys must be
/// bare names so a slot can never escape the root.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    root: PathBuf,
}

impl FileBlobStore {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(anyhow!("invalid slot key {key:?}: keys must be bare names"));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read slot file {}", path.display()))
            }
        }
    }

    fn set(&mut self, key: &str, blob: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.root).with_context(|| {
            format!("failed to create store directory {}", self.root.display())
        })?;
        fs::write(&path, blob)
            .with_context(|| format!("failed to write slot file {}", path.display()))
    }
}
