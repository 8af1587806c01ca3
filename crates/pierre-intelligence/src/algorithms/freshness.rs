// ABOUTME: Exponential decay curves for exercise freshness and muscle recovery
// ABOUTME: Implements 1 - e^(-k·t) over sessions or hours with half-life helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recovery decay model
//!
//! Both the exercise freshness curve and the muscle recovery curve use the same
//! saturating exponential:
//!
//! ```text
//! f(k, t) = 1 - e^(-k · t)
//! ```
//!
//! where `k` is a per-muscle decay constant and `t` is elapsed time (sessions
//! for freshness, hours for recovery). `f` starts at 0 and approaches 1.
//!
//! Negative or non-finite decay constants are treated as zero, which yields a
//! flat curve at 0. Elapsed sessions are unsigned and cannot be negative.

/// Largest value the curve may report; keeps results in the half-open range `[0, 1)`
/// after `f64` saturation.
pub const MAX_CURVE_VALUE: f64 = 1.0 - f64::EPSILON;

/// Sanitize a decay constant: negative, NaN, or infinite values collapse to zero
fn sanitize_rate(k: f64) -> f64 {
    if k.is_finite() && k > 0.0 {
        k
    } else {
        0.0
    }
}

/// Saturating exponential `1 - e^(-k·t)` clamped to `[0, MAX_CURVE_VALUE]`
fn saturating_curve(k: f64, elapsed: f64) -> f64 {
    let k = sanitize_rate(k);
    let elapsed = if elapsed.is_finite() && elapsed > 0.0 {
        elapsed
    } else {
        0.0
    };
    if k == 0.0 || elapsed == 0.0 {
        return 0.0;
    }
    // -expm1(-x) == 1 - e^(-x), accurate for small x
    (-(-k * elapsed).exp_m1()).clamp(0.0, MAX_CURVE_VALUE)
}

/// Staleness of an exercise after `sessions_ago` sessions since it was last performed
///
/// Returns `1 − e^(−k · sessions_ago)` in `[0, 1)`. Higher values mean the
/// exercise has not been used for a while and is a better candidate for
/// reselection; `0.0` means it was used in the current session.
///
/// The result is non-decreasing in both `k` and `sessions_ago`.
///
/// # Example
///
/// ```rust
/// use pierre_intelligence::algorithms::freshness::freshness;
///
/// assert_eq!(freshness(0.3, 0), 0.0);
/// assert!((freshness(0.3, 2) - 0.451_188).abs() < 1e-6);
/// ```
#[must_use]
pub fn freshness(k: f64, sessions_ago: u32) -> f64 {
    saturating_curve(k, f64::from(sessions_ago))
}

/// Fraction of recovery `[0, 1)` reached `hours_since_trained` hours after training
#[must_use]
pub fn recovery_fraction(k: f64, hours_since_trained: f64) -> f64 {
    saturating_curve(k, hours_since_trained)
}

/// Recovery percentage `[0, 100]` reached `hours_since_trained` hours after training
#[must_use]
pub fn recovery_percent(k: f64, hours_since_trained: f64) -> f64 {
    (recovery_fraction(k, hours_since_trained) * 100.0).clamp(0.0, 100.0)
}

/// Hours until the curve reaches 50%
///
/// Returns `None` for a non-positive or non-finite decay constant.
#[must_use]
pub fn half_life_hours(k: f64) -> Option<f64> {
    let k = sanitize_rate(k);
    (k > 0.0).then(|| std::f64::consts::LN_2 / k)
}

/// Hours until recovery reaches `target_percent`
///
/// Returns `None` for a non-positive decay constant or a target outside the
/// open interval `(0, 100)`; the curve never reaches 100%.
#[must_use]
pub fn hours_to_recovery(k: f64, target_percent: f64) -> Option<f64> {
    let k = sanitize_rate(k);
    if k <= 0.0 || !(target_percent > 0.0 && target_percent < 100.0) {
        return None;
    }
    Some(-(1.0 - target_percent / 100.0).ln() / k)
}
