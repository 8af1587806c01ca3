// ABOUTME: Named exercise scoring weights with rebalancing to a unit total
// ABOUTME: Implements proportional normalization, reset to defaults, and weighted scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;

use pierre_core::constants::scoring::{
    DEFAULT_WEIGHTS, MAX_FACTOR_WEIGHT, MAX_TOTAL, MIN_FACTOR_WEIGHT, MIN_TOTAL,
    UNIT_SUM_TOLERANCE,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weights of the multi-factor exercise selection score
///
/// Keys are factor names; values are coefficients in `[0, 0.50]`. The total
/// should be close to 1.0; [`Self::needs_normalization`] reports when it has
/// drifted outside `[0.90, 1.10]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoringWeights {
    weights: BTreeMap<String, f64>,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS
                .iter()
                .map(|(name, weight)| ((*name).to_owned(), *weight))
                .collect(),
        }
    }
}

impl FromIterator<(String, f64)> for ScoringWeights {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}

impl ScoringWeights {
    /// Build from raw values without clamping
    ///
    /// Used when loading persisted weights or normalizing arbitrary input.
    #[must_use]
    pub const fn from_map(weights: BTreeMap<String, f64>) -> Self {
        Self { weights }
    }

    /// Sum of all weights
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Weight for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.weights.get(name).copied()
    }

    /// Set the weight for `name`, clamped to the per-factor range
    ///
    /// Non-finite values are stored as 0.0. Returns the value actually stored.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> f64 {
        let clamped = if value.is_finite() {
            value.clamp(MIN_FACTOR_WEIGHT, MAX_FACTOR_WEIGHT)
        } else {
            MIN_FACTOR_WEIGHT
        };
        self.weights.insert(name.into(), clamped);
        clamped
    }

    /// Copy with `name` set to `value`
    #[must_use]
    pub fn with(&self, name: impl Into<String>, value: f64) -> Self {
        let mut next = self.clone();
        next.set(name, value);
        next
    }

    /// Iterate factor names and weights in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(name, weight)| (name.as_str(), *weight))
    }

    /// Number of factors
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no factors are defined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Borrow the underlying map
    #[must_use]
    pub const fn as_map(&self) -> &BTreeMap<String, f64> {
        &self.weights
    }

    /// Whether the total has drifted outside `[0.90, 1.10]`
    #[must_use]
    pub fn needs_normalization(&self) -> bool {
        let total = self.sum();
        !(MIN_TOTAL..=MAX_TOTAL).contains(&total)
    }

    /// Rescale every weight by `1 / sum` so the total becomes 1.0
    ///
    /// Relative proportions are preserved. When the total is zero, negative, or
    /// not finite there is nothing meaningful to scale and the weights are
    /// returned unchanged. Weights already summing to 1.0 are also returned
    /// unchanged, which makes the operation exactly idempotent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pierre_intelligence::ScoringWeights;
    ///
    /// let weights: ScoringWeights =
    ///     [("a".to_owned(), 0.5), ("b".to_owned(), 0.7)].into_iter().collect();
    /// let normalized = weights.normalize();
    /// assert!((normalized.sum() - 1.0).abs() < 1e-12);
    /// assert!((normalized.get("a").unwrap() - 0.4167).abs() < 1e-4);
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        let total = self.sum();
        if !total.is_finite() || total <= 0.0 {
            debug!(total, "Skipping normalization of non-positive weight total");
            return self.clone();
        }
        if (total - 1.0).abs() <= UNIT_SUM_TOLERANCE {
            return self.clone();
        }

        Self {
            weights: self
                .weights
                .iter()
                .map(|(name, weight)| (name.clone(), weight / total))
                .collect(),
        }
    }

    /// Weighted exercise score `Σ weight × factor`
    ///
    /// Factor values are clamped to `[0, 1]`; factors missing from `factors`
    /// contribute nothing. Factors without a weight are ignored.
    #[must_use]
    pub fn score(&self, factors: &BTreeMap<String, f64>) -> f64 {
        self.contributions(factors).values().sum()
    }

    /// Per-factor contribution to [`Self::score`]
    #[must_use]
    pub fn contributions(&self, factors: &BTreeMap<String, f64>) -> BTreeMap<String, f64> {
        self.weights
            .iter()
            .map(|(name, weight)| {
                let value = factors
                    .get(name)
                    .copied()
                    .filter(|v| v.is_finite())
                    .map_or(0.0, |v| v.clamp(0.0, 1.0));
                (name.clone(), weight * value)
            })
            .collect()
    }
}
