// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default recovery rates, scoring weights, bounds, and preference store keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// Muscle recovery decay constants
pub mod recovery {
    /// Lowest accepted decay constant (slowest recovery, half-life ~35 h)
    pub const MIN_RATE: f64 = 0.02;
    /// Highest accepted decay constant (fastest recovery, half-life ~4.6 h)
    pub const MAX_RATE: f64 = 0.15;
    /// Step used by the tuning slider
    pub const RATE_STEP: f64 = 0.005;
    /// Recovery percentage considered "ready to train again"
    pub const READY_PERCENT: f64 = 90.0;

    /// Built-in decay constant (per hour) for each muscle group.
    ///
    /// Large compound muscles recover slower than small, high-endurance ones.
    pub const DEFAULT_RATES: &[(&str, f64)] = &[
        ("chest", 0.045),
        ("back", 0.045),
        ("shoulders", 0.050),
        ("biceps", 0.060),
        ("triceps", 0.060),
        ("forearms", 0.080),
        ("core", 0.080),
        ("quads", 0.035),
        ("hamstrings", 0.035),
        ("glutes", 0.040),
        ("calves", 0.070),
    ];
}

/// Exercise scoring weight defaults and bounds
pub mod scoring {
    /// Lowest weight a single factor may take
    pub const MIN_FACTOR_WEIGHT: f64 = 0.0;
    /// Highest weight a single factor may take
    pub const MAX_FACTOR_WEIGHT: f64 = 0.50;
    /// Lower bound of the acceptable total before normalization is suggested
    pub const MIN_TOTAL: f64 = 0.90;
    /// Upper bound of the acceptable total before normalization is suggested
    pub const MAX_TOTAL: f64 = 1.10;
    /// Tolerance under which a total is treated as exactly 1.0
    pub const UNIT_SUM_TOLERANCE: f64 = 1e-12;

    /// Target muscle coverage
    pub const MUSCLE_MATCH: &str = "muscle_match";
    /// Time since the exercise was last performed
    pub const FRESHNESS: &str = "freshness";
    /// Recovery state of the muscles involved
    pub const RECOVERY: &str = "recovery";
    /// Available equipment compatibility
    pub const EQUIPMENT_FIT: &str = "equipment_fit";
    /// Bonus for user favorites
    pub const FAVORITE_BONUS: &str = "favorite_bonus";
    /// Match with the user's training level
    pub const DIFFICULTY_FIT: &str = "difficulty_fit";

    /// Built-in scoring weights; they sum to 1.0
    pub const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
        (MUSCLE_MATCH, 0.30),
        (FRESHNESS, 0.20),
        (RECOVERY, 0.20),
        (EQUIPMENT_FIT, 0.10),
        (FAVORITE_BONUS, 0.10),
        (DIFFICULTY_FIT, 0.10),
    ];
}

/// One-rep-max estimation constants
pub mod one_rep_max {
    /// Epley denominator
    pub const EPLEY_DIVISOR: f64 = 30.0;
    /// Brzycki numerator coefficient
    pub const BRZYCKI_NUMERATOR: f64 = 36.0;
    /// Brzycki denominator offset; the formula is singular at this rep count
    pub const BRZYCKI_REP_LIMIT: f64 = 37.0;
    /// Mayhew intercept
    pub const MAYHEW_INTERCEPT: f64 = 52.2;
    /// Mayhew exponential coefficient
    pub const MAYHEW_COEFFICIENT: f64 = 41.9;
    /// Mayhew exponential decay per rep
    pub const MAYHEW_DECAY: f64 = 0.055;
    /// Upper rep count of the low-rep advisory bracket
    pub const LOW_REP_MAX: u32 = 3;
    /// Upper rep count of the mid-rep advisory bracket
    pub const MID_REP_MAX: u32 = 6;
}

/// Keys used in the preference key-value store
pub mod preference_keys {
    /// Persisted per-muscle decay constants
    pub const RECOVERY_RATES: &str = "recovery.rates";
    /// Persisted last-trained timestamps per muscle
    pub const LAST_TRAINED: &str = "recovery.last_trained";
    /// Persisted scoring weights
    pub const SCORING_WEIGHTS: &str = "scoring.weights";
    /// Favorite exercise names
    pub const FAVORITE_EXERCISES: &str = "exercises.favorites";
    /// Avoided exercise names
    pub const AVOIDED_EXERCISES: &str = "exercises.avoided";
}

/// Unit conversion factors
pub mod units {
    /// Pounds per kilogram
    pub const LBS_PER_KG: f64 = 2.204_622_621_8;
}

/// Service identification for logging
pub mod service_names {
    /// Service name reported in structured logs
    pub const PIERRE_STRENGTH: &str = "pierre-strength";
}
