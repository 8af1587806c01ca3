// ABOUTME: Per-muscle recovery decay constants with built-in defaults and persistence
// ABOUTME: Every muscle group always resolves to exactly one rate in [0.02, 0.15]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::sync::Arc;

use pierre_core::constants::{preference_keys, recovery};
use pierre_core::models::MuscleGroup;
use pierre_intelligence::algorithms::freshness;
use pierre_intelligence::config::RecoveryTuningConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::AppResult;
use crate::preferences::{load_json, save_json, PreferenceStore};

/// Built-in decay constant for `muscle`
#[must_use]
pub fn default_rate(muscle: MuscleGroup) -> f64 {
    recovery::DEFAULT_RATES
        .iter()
        .find(|(name, _)| *name == muscle.as_str())
        .map_or(recovery::MIN_RATE, |(_, rate)| *rate)
}

/// Decay constant per muscle group
///
/// Only user overrides are stored; [`Self::get`] falls back to the built-in
/// table, so every muscle resolves to exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuscleRecoveryRates {
    overrides: BTreeMap<MuscleGroup, f64>,
}

impl MuscleRecoveryRates {
    /// Decay constant for `muscle`
    #[must_use]
    pub fn get(&self, muscle: MuscleGroup) -> f64 {
        self.overrides
            .get(&muscle)
            .copied()
            .unwrap_or_else(|| default_rate(muscle))
    }

    /// Whether `muscle` uses the built-in rate
    #[must_use]
    pub fn is_default(&self, muscle: MuscleGroup) -> bool {
        !self.overrides.contains_key(&muscle)
    }

    /// Copy with `muscle` set to `k`, clamped into `bounds`
    ///
    /// Setting a muscle back to its built-in value removes the override.
    #[must_use]
    pub fn with_rate(&self, muscle: MuscleGroup, k: f64, bounds: &RecoveryTuningConfig) -> Self {
        let mut next = self.clone();
        let clamped = bounds.clamp_rate(k);
        if (clamped - default_rate(muscle)).abs() < f64::EPSILON {
            next.overrides.remove(&muscle);
        } else {
            next.overrides.insert(muscle, clamped);
        }
        next
    }

    /// Every muscle with its effective rate
    pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, f64)> + '_ {
        MuscleGroup::ALL
            .into_iter()
            .map(move |muscle| (muscle, self.get(muscle)))
    }

    /// Number of user overrides
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Half-life in hours for `muscle`
    #[must_use]
    pub fn half_life_hours(&self, muscle: MuscleGroup) -> Option<f64> {
        freshness::half_life_hours(self.get(muscle))
    }

    /// Build from persisted raw values
    ///
    /// Unknown muscle names are dropped and out-of-range values are clamped.
    #[must_use]
    pub fn from_raw(raw: &BTreeMap<String, f64>, bounds: &RecoveryTuningConfig) -> Self {
        let mut rates = Self::default();
        for (name, k) in raw {
            match name.parse::<MuscleGroup>() {
                Ok(muscle) => rates = rates.with_rate(muscle, *k, bounds),
                Err(_) => warn!(muscle = %name, "Dropping recovery rate for unknown muscle"),
            }
        }
        rates
    }

    /// Raw overrides keyed by muscle name, as persisted
    #[must_use]
    pub fn to_raw(&self) -> BTreeMap<String, f64> {
        self.overrides
            .iter()
            .map(|(muscle, k)| (muscle.as_str().to_owned(), *k))
            .collect()
    }
}

/// Loads and saves [`MuscleRecoveryRates`] through the preference store
#[derive(Clone)]
pub struct RecoveryRateProvider {
    store: Arc<dyn PreferenceStore>,
    bounds: RecoveryTuningConfig,
}

impl RecoveryRateProvider {
    /// Create a provider over `store`
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>, bounds: RecoveryTuningConfig) -> Self {
        Self { store, bounds }
    }

    /// Bounds applied to every rate
    #[must_use]
    pub const fn bounds(&self) -> &RecoveryTuningConfig {
        &self.bounds
    }

    /// Current rates; defaults when nothing is stored
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds malformed data
    pub async fn load(&self) -> AppResult<MuscleRecoveryRates> {
        let raw: Option<BTreeMap<String, f64>> =
            load_json(self.store.as_ref(), preference_keys::RECOVERY_RATES).await?;
        let rates = raw.map_or_else(MuscleRecoveryRates::default, |raw| {
            MuscleRecoveryRates::from_raw(&raw, &self.bounds)
        });
        debug!(overrides = rates.override_count(), "Loaded recovery rates");
        Ok(rates)
    }

    /// Persist `rates`
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub async fn save(&self, rates: &MuscleRecoveryRates) -> AppResult<()> {
        save_json(
            self.store.as_ref(),
            preference_keys::RECOVERY_RATES,
            &rates.to_raw(),
        )
        .await
    }

    /// Set and persist the rate for one muscle, returning the updated rates
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub async fn set_rate(&self, muscle: MuscleGroup, k: f64) -> AppResult<MuscleRecoveryRates> {
        let rates = self.load().await?.with_rate(muscle, k, &self.bounds);
        self.save(&rates).await?;
        info!(muscle = %muscle, rate = rates.get(muscle), "Updated recovery rate");
        Ok(rates)
    }

    /// Restore every muscle to the built-in table
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub async fn reset(&self) -> AppResult<MuscleRecoveryRates> {
        self.store.remove(preference_keys::RECOVERY_RATES).await?;
        info!("Reset recovery rates to defaults");
        Ok(MuscleRecoveryRates::default())
    }
}
