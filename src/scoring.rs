// ABOUTME: Persisted exercise scoring weights with get, set, reset, and normalize
// ABOUTME: Wraps the pure ScoringWeights type with preference store persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::sync::Arc;

use pierre_core::constants::preference_keys;
use pierre_intelligence::config::ScoringTuningConfig;
use pierre_intelligence::ScoringWeights;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::preferences::{load_json, save_json, PreferenceStore};

/// Loads and saves [`ScoringWeights`] through the preference store
#[derive(Clone)]
pub struct ScoringWeightsProvider {
    store: Arc<dyn PreferenceStore>,
    bounds: ScoringTuningConfig,
}

impl ScoringWeightsProvider {
    /// Create a provider over `store`
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>, bounds: ScoringTuningConfig) -> Self {
        Self { store, bounds }
    }

    /// Bounds applied to every factor weight
    #[must_use]
    pub const fn bounds(&self) -> &ScoringTuningConfig {
        &self.bounds
    }

    /// Current weights; defaults when nothing is stored
    ///
    /// Factors added to the default table after the weights were saved are
    /// filled in with their default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds malformed data
    pub async fn get(&self) -> AppResult<ScoringWeights> {
        let stored: Option<BTreeMap<String, f64>> =
            load_json(self.store.as_ref(), preference_keys::SCORING_WEIGHTS).await?;
        let Some(stored) = stored else {
            return Ok(ScoringWeights::default());
        };

        let mut merged = ScoringWeights::default().as_map().clone();
        merged.extend(stored);
        Ok(ScoringWeights::from_map(merged))
    }

    /// Persist `weights`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub async fn save(&self, weights: &ScoringWeights) -> AppResult<()> {
        save_json(self.store.as_ref(), preference_keys::SCORING_WEIGHTS, weights).await
    }

    /// Set one factor weight, clamped to the configured bounds
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown factor, or a storage error
    pub async fn set(&self, factor: &str, value: f64) -> AppResult<ScoringWeights> {
        let weights = self.get().await?;
        if weights.get(factor).is_none() {
            return Err(AppError::not_found(format!("Scoring factor '{factor}'")));
        }
        let updated = weights.with(factor, self.bounds.clamp_weight(value));
        self.save(&updated).await?;
        info!(
            factor,
            weight = updated.get(factor).unwrap_or_default(),
            total = updated.sum(),
            "Updated scoring weight"
        );
        Ok(updated)
    }

    /// Restore the built-in weights
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub async fn reset(&self) -> AppResult<ScoringWeights> {
        self.store.remove(preference_keys::SCORING_WEIGHTS).await?;
        info!("Reset scoring weights to defaults");
        Ok(ScoringWeights::default())
    }

    /// Rescale the stored weights so they total 1.0
    ///
    /// A zero total leaves the weights untouched and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub async fn normalize(&self) -> AppResult<ScoringWeights> {
        let weights = self.get().await?;
        let normalized = weights.normalize();
        if normalized == weights {
            debug!(total = weights.sum(), "Normalization left weights unchanged");
            return Ok(weights);
        }
        self.save(&normalized).await?;
        info!(previous_total = weights.sum(), "Normalized scoring weights");
        Ok(normalized)
    }

    /// Whether the stored total is outside the acceptable band
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn needs_normalization(&self) -> AppResult<bool> {
        Ok(!self.bounds.total_is_acceptable(self.get().await?.sum()))
    }
}
