// ABOUTME: Preference key-value store abstraction for persisted tuning values
// ABOUTME: Pluggable backend support (in-memory, JSON file) with JSON value helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Backend selection from configuration
pub mod factory;
/// JSON file backed store
pub mod file;
/// In-memory store
pub mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::AppResult;

/// Preference store trait for pluggable backend implementations
///
/// Values are opaque strings; callers that store structured data use
/// [`load_json`] and [`save_json`]. There is no locking or conflict resolution
/// between concurrent writers: the last write wins.
///
/// # Examples
///
/// ```rust,no_run
/// use pierre_strength::preferences::{memory::InMemoryPreferences, PreferenceStore};
/// # async fn example() -> pierre_strength::errors::AppResult<()> {
/// let store = InMemoryPreferences::new();
/// store.set("units", "kg").await?;
/// assert_eq!(store.get("units").await?.as_deref(), Some("kg"));
/// # Ok(())
/// # }
/// ```
#[async_trait::async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    async fn remove(&self, key: &str) -> AppResult<bool>;

    /// All stored keys in sorted order
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    async fn keys(&self) -> AppResult<Vec<String>>;
}

/// Load and deserialize a JSON value
///
/// # Errors
///
/// Returns an error if the backend read fails or the stored value is not
/// valid JSON for `T`
pub async fn load_json<T: DeserializeOwned>(
    store: &dyn PreferenceStore,
    key: &str,
) -> AppResult<Option<T>> {
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Serialize and store a JSON value
///
/// # Errors
///
/// Returns an error if serialization or the backend write fails
pub async fn save_json<T: Serialize + Sync>(
    store: &dyn PreferenceStore,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}
