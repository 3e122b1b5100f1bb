//! Directory-backed payload store.
//!
//! [`FsStore`] keeps one file per identifier under a root directory, named
//! `<id>.<extension>`. Writes go through a temporary file in the same
//! directory and are renamed into place, so a concurrent reader sees either
//! the old payload or the new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::traits::Fetcher;

/// File-per-identifier store rooted at a directory.
#[derive(Clone, Debug)]
pub struct FsStore {
    config: StoreConfig,
}

impl FsStore {
    /// Open a store, creating the root directory if needed.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        config.validate()?;
        fs::create_dir_all(&config.root)?;
        info!(root = %config.root.display(), extension = %config.extension, "file store opened");
        Ok(Self { config })
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Atomically store `payload` under `id`.
    pub fn put(&self, id: &str, payload: &[u8]) -> StoreResult<()> {
        let target = self.path_for(id)?;
        let mut tmp = NamedTempFile::new_in(&self.config.root)?;
        tmp.write_all(payload)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target).map_err(|e| StoreError::Io(e.error))?;
        debug!(id, len = payload.len(), "payload written");
        Ok(())
    }

    /// Delete the payload stored under `id`. Returns `true` if it existed.
    pub fn delete(&self, id: &str) -> StoreResult<bool> {
        let target = self.path_for(id)?;
        match fs::remove_file(&target) {
            Ok(()) => {
                debug!(id, "payload deleted");
                Ok(true)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns `true` if a payload is stored under `id`.
    pub fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.path_for(id)?.is_file())
    }

    /// Resolve the file path for `id`, rejecting keys that would escape the root.
    pub fn path_for(&self, id: &str) -> StoreResult<PathBuf> {
        validate_key(id)?;
        let name = if self.config.extension.is_empty() {
            id.to_string()
        } else {
            format!("{id}.{}", self.config.extension)
        };
        Ok(self.config.root.join(name))
    }
}

impl Fetcher for FsStore {
    fn fetch(&self, id: &str) -> StoreResult<Vec<u8>> {
        let path = self.path_for(id)?;
        match fs::read(&path) {
            Ok(payload) => {
                debug!(id, len = payload.len(), "payload fetched");
                Ok(payload)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(id, "payload not found");
                Err(StoreError::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn validate_key(id: &str) -> StoreResult<()> {
    let reason = if id.is_empty() {
        Some("key cannot be empty")
    } else if id == "." || id == ".." {
        Some("key cannot be a relative directory")
    } else if id.contains(['/', '\\']) {
        Some("key contains a path separator")
    } else if id.contains('\0') {
        Some("key contains a NUL byte")
    } else {
        None
    };

    match reason {
        Some(reason) => {
            debug!(key = id, reason, "key rejected");
            Err(StoreError::InvalidKey {
                key: id.to_string(),
                reason: reason.to_string(),
            })
        }
        None => Ok(()),
    }
}
