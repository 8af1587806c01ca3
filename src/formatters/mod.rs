// ABOUTME: Fixed-precision display formatting for tuning values and estimates
// ABOUTME: Rates use 3 decimals, loads 1 decimal with unit, shares whole percents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Display formatting
//!
//! The decimal precision of each string is part of the contract with the UI
//! and must stay stable.

use pierre_core::models::WeightUnit;
use pierre_intelligence::{FormulaRecommendation, OneRepMaxAlgorithm, OneRepMaxEstimate};

/// Decay constant with three decimals, e.g. `"0.045"`
#[must_use]
pub fn format_rate(k: f64) -> String {
    format!("{k:.3}")
}

/// Load with one decimal and unit suffix, e.g. `"142.7 kg"`
#[must_use]
pub fn format_weight(value: f64, unit: WeightUnit) -> String {
    format!("{value:.1} {}", unit.suffix())
}

/// Fraction in `[0, 1]` as a whole percentage, e.g. `0.4167` → `"42%"`
#[must_use]
pub fn format_percent(fraction: f64) -> String {
    format!("{:.0}%", fraction * 100.0)
}

/// Scoring weight as a whole percentage of the total, e.g. `0.30` → `"30%"`
#[must_use]
pub fn format_weight_share(weight: f64) -> String {
    format_percent(weight)
}

/// Recovery percentage in `[0, 100]`, e.g. `87.4` → `"87%"`
#[must_use]
pub fn format_recovery(percent: f64) -> String {
    format!("{percent:.0}%")
}

/// Duration in hours with one decimal, e.g. `"15.4 h"`
#[must_use]
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.1} h")
}

/// One display line per available estimate, marking recommended formulas
///
/// Returns an empty list when there is no estimate.
#[must_use]
pub fn format_estimate_lines(
    estimate: Option<&OneRepMaxEstimate>,
    recommendation: Option<&FormulaRecommendation>,
    unit: WeightUnit,
) -> Vec<String> {
    let Some(estimate) = estimate else {
        return Vec::new();
    };

    OneRepMaxAlgorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let value = estimate
                .get(algorithm)
                .map_or_else(|| "n/a".to_owned(), |v| format_weight(v, unit));
            let marker = if recommendation.is_some_and(|r| r.recommends(algorithm)) {
                " *"
            } else {
                ""
            };
            format!("{:<8} {value}{marker}", algorithm.label())
        })
        .collect()
}
