// ABOUTME: Favorite and avoided exercise lists persisted in the preference store
// ABOUTME: An exercise is in at most one list; names compare case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_core::constants::preference_keys;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::preferences::{load_json, save_json, PreferenceStore};

/// How the user has marked an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseStatus {
    /// Prefer this exercise
    Favorite,
    /// Never select this exercise
    Avoided,
    /// No preference
    Neutral,
}

/// Favorite and avoided exercise lists
#[derive(Clone)]
pub struct ExercisePreferences {
    store: Arc<dyn PreferenceStore>,
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

fn contains_ignore_case(list: &[String], name: &str) -> bool {
    let folded = fold(name);
    list.iter().any(|entry| fold(entry) == folded)
}

fn remove_ignore_case(list: &mut Vec<String>, name: &str) -> bool {
    let folded = fold(name);
    let before = list.len();
    list.retain(|entry| fold(entry) != folded);
    list.len() != before
}

fn clean_name(name: &str) -> AppResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::missing_field("Exercise name"));
    }
    Ok(trimmed.to_owned())
}

impl ExercisePreferences {
    /// Create lists over `store`
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    async fn load(&self, key: &str) -> AppResult<Vec<String>> {
        Ok(load_json(self.store.as_ref(), key).await?.unwrap_or_default())
    }

    async fn save(&self, key: &str, mut list: Vec<String>) -> AppResult<()> {
        list.sort_by_key(|name| fold(name));
        save_json(self.store.as_ref(), key, &list).await
    }

    /// Favorite exercises, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn favorites(&self) -> AppResult<Vec<String>> {
        self.load(preference_keys::FAVORITE_EXERCISES).await
    }

    /// Avoided exercises, sorted
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn avoided(&self) -> AppResult<Vec<String>> {
        self.load(preference_keys::AVOIDED_EXERCISES).await
    }

    /// Status of `name`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn status(&self, name: &str) -> AppResult<ExerciseStatus> {
        let name = name.trim();
        if contains_ignore_case(&self.favorites().await?, name) {
            Ok(ExerciseStatus::Favorite)
        } else if contains_ignore_case(&self.avoided().await?, name) {
            Ok(ExerciseStatus::Avoided)
        } else {
            Ok(ExerciseStatus::Neutral)
        }
    }

    /// Mark `name` as a favorite, removing it from the avoided list
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or a storage error
    pub async fn add_favorite(&self, name: &str) -> AppResult<()> {
        self.mark(name, ExerciseStatus::Favorite).await
    }

    /// Mark `name` as avoided, removing it from the favorites list
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or a storage error
    pub async fn add_avoided(&self, name: &str) -> AppResult<()> {
        self.mark(name, ExerciseStatus::Avoided).await
    }

    /// Clear any mark on `name`, returning whether it was in a list
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank name, or a storage error
    pub async fn remove(&self, name: &str) -> AppResult<bool> {
        self.mark_inner(&clean_name(name)?, ExerciseStatus::Neutral)
            .await
    }

    async fn mark(&self, name: &str, status: ExerciseStatus) -> AppResult<()> {
        let name = clean_name(name)?;
        self.mark_inner(&name, status).await?;
        info!(exercise = %name, status = ?status, "Updated exercise preference");
        Ok(())
    }

    async fn mark_inner(&self, name: &str, status: ExerciseStatus) -> AppResult<bool> {
        let previous_favorites = self.favorites().await?;
        let mut favorites = previous_favorites.clone();
        let mut avoided = self.avoided().await?;

        let mut changed = remove_ignore_case(&mut favorites, name);
        changed |= remove_ignore_case(&mut avoided, name);
        match status {
            ExerciseStatus::Favorite => favorites.push(name.to_owned()),
            ExerciseStatus::Avoided => avoided.push(name.to_owned()),
            ExerciseStatus::Neutral => {}
        }

        self.save(preference_keys::FAVORITE_EXERCISES, favorites)
            .await?;
        if let Err(error) = self
            .save(preference_keys::AVOIDED_EXERCISES, avoided)
            .await
        {
            // Keep the lists disjoint when the second write fails
            if let Err(restore) = self
                .save(preference_keys::FAVORITE_EXERCISES, previous_favorites)
                .await
            {
                warn!(error = %restore, "Failed to restore favorite exercises");
            }
            return Err(error);
        }
        Ok(changed)
    }
}
