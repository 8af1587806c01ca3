// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pierre-strength-cli
// ABOUTME: Provides consistent tables for estimates, recovery, weights, and exercises

use pierre_intelligence::{FormulaRecommendation, OneRepMaxEstimate};
use pierre_strength::{
    formatters::{
        format_estimate_lines, format_hours, format_rate, format_recovery, format_weight_share,
    },
    models::{MuscleGroup, WeightUnit},
    recovery::{MuscleRecoveryRates, RecoveryScores},
    tuning::TuningState,
};

/// Display the three estimates with the formula advisory
pub fn display_estimate(
    estimate: &OneRepMaxEstimate,
    recommendation: Option<&FormulaRecommendation>,
    unit: WeightUnit,
) {
    println!("\nEstimated One-Rep Max");
    println!("{}", "=".repeat(40));
    for line in format_estimate_lines(Some(estimate), recommendation, unit) {
        println!("   {line}");
    }
    if let Some(recommendation) = recommendation {
        println!("\n* {}", recommendation.advisory_text());
    }
}

/// Display rates, half-lives, and recovery status per muscle
pub fn display_recovery_table(
    rates: &MuscleRecoveryRates,
    scores: &RecoveryScores,
    ready_percent: f64,
) {
    println!("\nMuscle Recovery");
    println!("{}", "=".repeat(60));
    println!(
        "   {:<12} {:>6} {:>10} {:>9}  ",
        "Muscle", "Rate", "Half-life", "Recovery"
    );
    for muscle in MuscleGroup::ALL {
        let half_life = rates
            .half_life_hours(muscle)
            .map_or_else(|| "-".to_owned(), format_hours);
        let score = scores.get(muscle);
        let status = if score >= ready_percent { "ready" } else { "" };
        let custom = if rates.is_default(muscle) { "" } else { " (custom)" };
        println!(
            "   {:<12} {:>6} {:>10} {:>9}  {status}{custom}",
            muscle.display_name(),
            format_rate(rates.get(muscle)),
            half_life,
            format_recovery(score),
        );
    }
    if let Some((muscle, score)) = scores.most_fatigued() {
        println!(
            "\nMost fatigued: {} at {}",
            muscle.display_name(),
            format_recovery(score)
        );
    }
}

/// Display scoring weights with their share of the total
pub fn display_weights_table(state: &TuningState) {
    let weights = &state.scoring_weights;
    println!("\nExercise Scoring Weights");
    println!("{}", "=".repeat(40));
    for (name, weight) in weights.iter() {
        println!("   {name:<16} {weight:>6.3} {:>5}", format_weight_share(weight));
    }
    println!("{}", "-".repeat(40));
    println!("   {:<16} {:>6.3}", "total", weights.sum());
    if state.needs_normalization() {
        println!("\nWARNING weights total {:.3}; run `weights normalize`", weights.sum());
    }
}

/// Display favorite and avoided exercises
pub fn display_exercise_lists(favorites: &[String], avoided: &[String]) {
    println!("\nFavorites ({}):", favorites.len());
    for name in favorites {
        println!("   {name}");
    }
    println!("\nAvoided ({}):", avoided.len());
    for name in avoided {
        println!("   {name}");
    }
}
