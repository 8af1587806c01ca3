// ABOUTME: Preference store factory for configuration-based backend selection
// ABOUTME: Returns a shared trait object so providers stay backend-agnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use tracing::info;

use super::{file::FilePreferences, memory::InMemoryPreferences, PreferenceStore};
use crate::config::environment::{PreferencesBackend, PreferencesConfig};
use crate::errors::AppResult;

/// Create the preference store described by `config`
///
/// # Errors
///
/// Returns an error if the file backend cannot open its file
pub async fn create_preference_store(
    config: &PreferencesConfig,
) -> AppResult<Arc<dyn PreferenceStore>> {
    match config.backend {
        PreferencesBackend::Memory => {
            info!("Initializing in-memory preference store");
            Ok(Arc::new(InMemoryPreferences::new()))
        }
        PreferencesBackend::File => {
            info!(path = %config.path.display(), "Initializing file preference store");
            Ok(Arc::new(FilePreferences::open(config.path.clone()).await?))
        }
    }
}
