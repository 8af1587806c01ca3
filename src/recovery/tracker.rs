// ABOUTME: Last-trained timestamp tracking per muscle with derived recovery percentages
// ABOUTME: Scores are recomputed on demand and never persisted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use pierre_core::constants::preference_keys;
use pierre_core::models::MuscleGroup;
use pierre_intelligence::algorithms::freshness;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::rates::MuscleRecoveryRates;
use crate::errors::{AppError, AppResult};
use crate::preferences::{load_json, save_json, PreferenceStore};

/// Recovery percentage per muscle, 100 meaning fully recovered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryScores {
    scores: BTreeMap<MuscleGroup, f64>,
}

impl RecoveryScores {
    /// Compute scores for every muscle at `now`
    ///
    /// Untrained muscles are fully recovered. A timestamp in the future is
    /// treated as "just trained" (0%).
    #[must_use]
    pub fn compute(
        last_trained: &BTreeMap<MuscleGroup, DateTime<Utc>>,
        rates: &MuscleRecoveryRates,
        now: DateTime<Utc>,
    ) -> Self {
        let scores = MuscleGroup::ALL
            .into_iter()
            .map(|muscle| {
                let score = last_trained.get(&muscle).map_or(100.0, |trained_at| {
                    let elapsed_hours = (now - *trained_at).num_seconds().max(0) as f64 / 3600.0;
                    freshness::recovery_percent(rates.get(muscle), elapsed_hours)
                });
                (muscle, score)
            })
            .collect();
        Self { scores }
    }

    /// Recovery percentage for `muscle`
    #[must_use]
    pub fn get(&self, muscle: MuscleGroup) -> f64 {
        self.scores.get(&muscle).copied().unwrap_or(100.0)
    }

    /// Every muscle with its percentage
    pub fn iter(&self) -> impl Iterator<Item = (MuscleGroup, f64)> + '_ {
        self.scores.iter().map(|(muscle, score)| (*muscle, *score))
    }

    /// Muscles at or above `ready_percent`
    #[must_use]
    pub fn ready(&self, ready_percent: f64) -> Vec<MuscleGroup> {
        self.iter()
            .filter(|(_, score)| *score >= ready_percent)
            .map(|(muscle, _)| muscle)
            .collect()
    }

    /// Least recovered muscle, if any is below 100%
    #[must_use]
    pub fn most_fatigued(&self) -> Option<(MuscleGroup, f64)> {
        self.iter()
            .filter(|(_, score)| *score < 100.0)
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Records when each muscle was last trained
#[derive(Clone)]
pub struct MuscleRecoveryTracker {
    store: Arc<dyn PreferenceStore>,
}

/// Timestamp `hours_ago` hours before `now`
///
/// # Errors
///
/// Returns `InvalidInput` for negative or non-finite hours, or when the
/// offset falls outside the representable date range
pub fn hours_before(now: DateTime<Utc>, hours_ago: f64) -> AppResult<DateTime<Utc>> {
    if !hours_ago.is_finite() || hours_ago < 0.0 {
        return Err(AppError::invalid_input("hours-ago must be a non-negative number"));
    }
    TimeDelta::try_seconds((hours_ago * 3600.0) as i64)
        .and_then(|offset| now.checked_sub_signed(offset))
        .ok_or_else(|| {
            AppError::invalid_input(format!("hours-ago {hours_ago} is out of range"))
        })
}

impl MuscleRecoveryTracker {
    /// Create a tracker over `store`
    #[must_use]
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Last-trained timestamps
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or holds malformed data
    pub async fn last_trained(&self) -> AppResult<BTreeMap<MuscleGroup, DateTime<Utc>>> {
        Ok(load_json(self.store.as_ref(), preference_keys::LAST_TRAINED)
            .await?
            .unwrap_or_default())
    }

    /// Mark `muscles` as trained at `trained_at`
    ///
    /// An older timestamp never replaces a newer one.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub async fn record_training(
        &self,
        muscles: &[MuscleGroup],
        trained_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let mut last = self.last_trained().await?;
        for muscle in muscles {
            let entry = last.entry(*muscle).or_insert(trained_at);
            if *entry < trained_at {
                *entry = trained_at;
            }
        }
        save_json(self.store.as_ref(), preference_keys::LAST_TRAINED, &last).await?;
        info!(muscles = ?muscles, trained_at = %trained_at, "Recorded training");
        Ok(())
    }

    /// Forget the last-trained timestamp of `muscle`, returning whether one existed
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub async fn clear(&self, muscle: MuscleGroup) -> AppResult<bool> {
        let mut last = self.last_trained().await?;
        let existed = last.remove(&muscle).is_some();
        if existed {
            save_json(self.store.as_ref(), preference_keys::LAST_TRAINED, &last).await?;
            debug!(muscle = %muscle, "Cleared last-trained timestamp");
        }
        Ok(existed)
    }

    /// Current recovery scores
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn scores(
        &self,
        rates: &MuscleRecoveryRates,
        now: DateTime<Utc>,
    ) -> AppResult<RecoveryScores> {
        let last = self.last_trained().await?;
        Ok(RecoveryScores::compute(&last, rates, now))
    }
}
