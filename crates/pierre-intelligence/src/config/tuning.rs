// ABOUTME: Tuning bounds for recovery decay constants and exercise scoring weights
// ABOUTME: Provides defaults from pierre-core constants and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tuning Configuration
//!
//! Bounds applied when a user edits recovery rates or scoring weights. The
//! defaults span the full permitted domain; deployments may narrow them but
//! never widen them past the hard limits in `pierre_core::constants`.

use pierre_core::constants::{recovery, scoring};
use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Bounds for recovery tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryTuningConfig {
    /// Lowest decay constant a user may select
    pub min_rate: f64,
    /// Highest decay constant a user may select
    pub max_rate: f64,
    /// Slider step for decay constants
    pub rate_step: f64,
    /// Recovery percentage considered ready to train
    pub ready_percent: f64,
}

impl Default for RecoveryTuningConfig {
    fn default() -> Self {
        Self {
            min_rate: recovery::MIN_RATE,
            max_rate: recovery::MAX_RATE,
            rate_step: recovery::RATE_STEP,
            ready_percent: recovery::READY_PERCENT,
        }
    }
}

impl RecoveryTuningConfig {
    /// Clamp a decay constant into `[min_rate, max_rate]`
    ///
    /// Non-finite input falls back to `min_rate`.
    #[must_use]
    pub fn clamp_rate(&self, k: f64) -> f64 {
        if k.is_finite() {
            k.clamp(self.min_rate, self.max_rate)
        } else {
            self.min_rate
        }
    }

    /// Whether `k` lies within the configured bounds
    #[must_use]
    pub fn contains(&self, k: f64) -> bool {
        (self.min_rate..=self.max_rate).contains(&k)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_rate < recovery::MIN_RATE || self.max_rate > recovery::MAX_RATE {
            return Err(ConfigError::ValueOutOfRange(
                "Recovery rate bounds must stay within [0.02, 0.15]",
            ));
        }
        if self.min_rate >= self.max_rate {
            return Err(ConfigError::InvalidRange(
                "Recovery min_rate must be below max_rate",
            ));
        }
        if self.rate_step <= 0.0 || self.rate_step > self.max_rate - self.min_rate {
            return Err(ConfigError::InvalidRange(
                "Recovery rate_step must be positive and fit within the rate range",
            ));
        }
        if !(self.ready_percent > 0.0 && self.ready_percent < 100.0) {
            return Err(ConfigError::ValueOutOfRange(
                "Recovery ready_percent must be between 0 and 100 exclusive",
            ));
        }
        Ok(())
    }
}

/// Bounds for scoring weight tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringTuningConfig {
    /// Lowest weight for a single factor
    pub min_factor_weight: f64,
    /// Highest weight for a single factor
    pub max_factor_weight: f64,
    /// Total below which normalization is suggested
    pub min_total: f64,
    /// Total above which normalization is suggested
    pub max_total: f64,
}

impl Default for ScoringTuningConfig {
    fn default() -> Self {
        Self {
            min_factor_weight: scoring::MIN_FACTOR_WEIGHT,
            max_factor_weight: scoring::MAX_FACTOR_WEIGHT,
            min_total: scoring::MIN_TOTAL,
            max_total: scoring::MAX_TOTAL,
        }
    }
}

impl ScoringTuningConfig {
    /// Clamp a factor weight into `[min_factor_weight, max_factor_weight]`
    #[must_use]
    pub fn clamp_weight(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min_factor_weight, self.max_factor_weight)
        } else {
            self.min_factor_weight
        }
    }

    /// Whether a weight total is inside the acceptable band
    #[must_use]
    pub fn total_is_acceptable(&self, total: f64) -> bool {
        (self.min_total..=self.max_total).contains(&total)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_factor_weight < scoring::MIN_FACTOR_WEIGHT
            || self.max_factor_weight > scoring::MAX_FACTOR_WEIGHT
            || self.min_factor_weight > self.max_factor_weight
        {
            return Err(ConfigError::InvalidWeights(
                "Factor weight bounds must satisfy 0 <= min <= max <= 0.50",
            ));
        }
        if !(self.min_total < 1.0 && self.max_total > 1.0) {
            return Err(ConfigError::InvalidRange(
                "Scoring total band must contain 1.0",
            ));
        }
        Ok(())
    }
}

/// Combined tuning configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Recovery rate bounds
    pub recovery: RecoveryTuningConfig,
    /// Scoring weight bounds
    pub scoring: ScoringTuningConfig,
}

impl TuningConfig {
    /// Validate all bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a bound is outside the hard limits or a
    /// range is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.recovery.validate()?;
        self.scoring.validate()
    }
}
