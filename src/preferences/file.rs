// ABOUTME: JSON file backed preference store persisted across CLI invocations
// ABOUTME: Loads the whole map on open and rewrites it atomically on every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::PreferenceStore;
use crate::errors::{AppError, AppResult};

/// Preference store backed by a single JSON object file
///
/// The file holds a flat `{"key": "value"}` object. Writes go to a sibling
/// temporary file that is then renamed over the original, so a crash mid-write
/// leaves the previous contents intact. Writers inside one process are
/// serialized by the write lock; separate processes are last-write-wins.
pub struct FilePreferences {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FilePreferences {
    /// Open the store at `path`, creating an empty one if the file is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a JSON
    /// object of strings
    pub async fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path).await {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::serialization(format!(
                    "Preferences file {} is corrupt: {e}",
                    path.display()
                ))
                .with_source(e)
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Preferences file not found, starting empty");
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            path = %path.display(),
            entries = entries.len(),
            "Opened file preference store"
        );
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let raw = serde_json::to_string_pretty(entries)?;
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);

        fs::write(&tmp_path, raw).await?;
        fs::rename(&tmp_path, &self.path).await?;
        debug!(path = %self.path.display(), entries = entries.len(), "Persisted preferences");
        Ok(())
    }
}

#[async_trait::async_trait]
impl PreferenceStore for FilePreferences {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        let previous = entries.insert(key.to_owned(), value.to_owned());
        if let Err(e) = self.persist(&entries).await {
            // Keep memory consistent with disk
            match previous {
                Some(old) => entries.insert(key.to_owned(), old),
                None => entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<bool> {
        let mut entries = self.entries.write().await;
        let Some(previous) = entries.remove(key) else {
            return Ok(false);
        };
        if let Err(e) = self.persist(&entries).await {
            entries.insert(key.to_owned(), previous);
            return Err(e);
        }
        Ok(true)
    }

    async fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }
}
