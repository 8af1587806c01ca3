// ABOUTME: Exercise preference commands for pierre-strength-cli
// ABOUTME: Handles favorite, avoid, remove, and list operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_strength::{
    errors::AppResult, exercises::ExercisePreferences, preferences::PreferenceStore,
};

use crate::helpers::display::display_exercise_lists;

/// Mark `name` as a favorite
pub async fn favorite(store: Arc<dyn PreferenceStore>, name: &str) -> AppResult<()> {
    ExercisePreferences::new(store).add_favorite(name).await?;
    println!("Favorite: {}", name.trim());
    Ok(())
}

/// Mark `name` as avoided
pub async fn avoid(store: Arc<dyn PreferenceStore>, name: &str) -> AppResult<()> {
    ExercisePreferences::new(store).add_avoided(name).await?;
    println!("Avoided: {}", name.trim());
    Ok(())
}

/// Clear any mark on `name`
pub async fn remove(store: Arc<dyn PreferenceStore>, name: &str) -> AppResult<()> {
    if ExercisePreferences::new(store).remove(name).await? {
        println!("Cleared: {}", name.trim());
    } else {
        println!("{} was not marked", name.trim());
    }
    Ok(())
}

/// List both lists
pub async fn list(store: Arc<dyn PreferenceStore>) -> AppResult<()> {
    let exercises = ExercisePreferences::new(store);
    let favorites = exercises.favorites().await?;
    let avoided = exercises.avoided().await?;
    display_exercise_lists(&favorites, &avoided);
    Ok(())
}
