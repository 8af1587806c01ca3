// ABOUTME: One-repetition-maximum estimation from a submaximal set
// ABOUTME: Implements Epley, Brzycki, and Mayhew formulas with rep-range advisory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use pierre_core::constants::one_rep_max::{
    BRZYCKI_NUMERATOR, BRZYCKI_REP_LIMIT, EPLEY_DIVISOR, LOW_REP_MAX, MAYHEW_COEFFICIENT,
    MAYHEW_DECAY, MAYHEW_INTERCEPT, MID_REP_MAX,
};
use pierre_core::errors::AppError;
use serde::{Deserialize, Serialize};

/// One-rep-max estimation formula
///
/// - `Epley`: linear in reps, tends to run high above ~10 reps
/// - `Brzycki`: most accurate for low reps, singular at 37 reps
/// - `Mayhew`: exponential fit, holds up best for higher rep sets
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue." *JOPERD*, 64(1), 88-90.
/// - Mayhew, J.L. et al. (1992). "Relative muscular endurance performance as a predictor of bench press strength." *J Appl Sport Sci Res*, 6(4), 200-206.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxAlgorithm {
    /// Epley: `weight x (1 + reps/30)`
    Epley,
    /// Brzycki: `weight x 36 / (37 - reps)`
    ///
    /// Undefined at `reps >= 37` (zero or negative denominator).
    Brzycki,
    /// Mayhew: `100 x weight / (52.2 + 41.9 x e^(-0.055 x reps))`
    Mayhew,
}

impl OneRepMaxAlgorithm {
    /// All formulas in display order
    pub const ALL: [Self; 3] = [Self::Epley, Self::Brzycki, Self::Mayhew];

    /// Estimate 1RM with this formula
    ///
    /// Returns `None` when `weight` is not a positive finite number, when
    /// `reps` is zero, or when Brzycki is asked for `reps >= 37`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pierre_intelligence::OneRepMaxAlgorithm;
    ///
    /// let brzycki = OneRepMaxAlgorithm::Brzycki.calculate(100.0, 5);
    /// assert_eq!(brzycki, Some(112.5));
    /// assert_eq!(OneRepMaxAlgorithm::Brzycki.calculate(100.0, 37), None);
    /// ```
    #[must_use]
    pub fn calculate(&self, weight: f64, reps: u32) -> Option<f64> {
        if !is_valid_set(weight, reps) {
            return None;
        }
        let reps_f64 = f64::from(reps);

        match self {
            Self::Epley => Some(weight * (1.0 + reps_f64 / EPLEY_DIVISOR)),
            Self::Brzycki => {
                let denominator = BRZYCKI_REP_LIMIT - reps_f64;
                (denominator > 0.0).then(|| weight * BRZYCKI_NUMERATOR / denominator)
            }
            Self::Mayhew => {
                let denominator =
                    MAYHEW_COEFFICIENT.mul_add((-MAYHEW_DECAY * reps_f64).exp(), MAYHEW_INTERCEPT);
                Some(100.0 * weight / denominator)
            }
        }
    }

    /// Get algorithm name for logging and configuration
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Mayhew => "mayhew",
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Epley => "Epley",
            Self::Brzycki => "Brzycki",
            Self::Mayhew => "Mayhew",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Epley => "weight x (1 + reps / 30)",
            Self::Brzycki => "weight x 36 / (37 - reps)",
            Self::Mayhew => "100 x weight / (52.2 + 41.9 x e^(-0.055 x reps))",
        }
    }

    /// Get algorithm description with typical use
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Epley => "Epley: linear estimate, good for moderate reps (4-10)",
            Self::Brzycki => "Brzycki: most accurate for heavy sets (1-6 reps)",
            Self::Mayhew => "Mayhew: exponential fit, best for higher reps (7+)",
        }
    }
}

impl fmt::Display for OneRepMaxAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for OneRepMaxAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "mayhew" => Ok(Self::Mayhew),
            other => Err(AppError::invalid_input(format!(
                "Unknown 1RM algorithm: '{other}'. Valid options: epley, brzycki, mayhew"
            ))),
        }
    }
}

fn is_valid_set(weight: f64, reps: u32) -> bool {
    weight.is_finite() && weight > 0.0 && reps > 0
}

/// The three 1RM estimates for one set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OneRepMaxEstimate {
    /// Epley estimate
    pub epley: f64,
    /// Brzycki estimate, `None` at 37 reps or more
    pub brzycki: Option<f64>,
    /// Mayhew estimate
    pub mayhew: f64,
}

impl OneRepMaxEstimate {
    /// Estimate 1RM with all three formulas
    ///
    /// Returns `None` when `weight <= 0`, `weight` is not finite, or
    /// `reps == 0`. The absence of a result is the expected outcome for a
    /// blank or invalid input field, not an error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pierre_intelligence::OneRepMaxEstimate;
    ///
    /// let estimate = OneRepMaxEstimate::estimate(100.0, 5).unwrap();
    /// assert!((estimate.epley - 116.667).abs() < 1e-3);
    /// assert_eq!(estimate.brzycki, Some(112.5));
    /// assert!(OneRepMaxEstimate::estimate(0.0, 5).is_none());
    /// ```
    #[must_use]
    pub fn estimate(weight: f64, reps: u32) -> Option<Self> {
        Some(Self {
            epley: OneRepMaxAlgorithm::Epley.calculate(weight, reps)?,
            brzycki: OneRepMaxAlgorithm::Brzycki.calculate(weight, reps),
            mayhew: OneRepMaxAlgorithm::Mayhew.calculate(weight, reps)?,
        })
    }

    /// Estimate produced by a specific formula
    #[must_use]
    pub const fn get(&self, algorithm: OneRepMaxAlgorithm) -> Option<f64> {
        match algorithm {
            OneRepMaxAlgorithm::Epley => Some(self.epley),
            OneRepMaxAlgorithm::Brzycki => self.brzycki,
            OneRepMaxAlgorithm::Mayhew => Some(self.mayhew),
        }
    }

    /// All available estimates paired with their formula
    pub fn iter(&self) -> impl Iterator<Item = (OneRepMaxAlgorithm, f64)> + '_ {
        OneRepMaxAlgorithm::ALL
            .into_iter()
            .filter_map(|algorithm| self.get(algorithm).map(|value| (algorithm, value)))
    }
}

/// Which formula to trust for a given rep count
///
/// Presentation only: the recommendation never changes the numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FormulaRecommendation {
    /// One formula is clearly preferred
    Single {
        /// Preferred formula
        algorithm: OneRepMaxAlgorithm,
    },
    /// Two formulas are equally good
    Either {
        /// First choice
        first: OneRepMaxAlgorithm,
        /// Equally valid alternative
        second: OneRepMaxAlgorithm,
    },
}

impl FormulaRecommendation {
    /// Pick the most accurate formula for the rep bracket
    ///
    /// - `reps <= 3`: Brzycki
    /// - `4..=6`: Brzycki or Epley
    /// - `reps > 6`: Mayhew
    #[must_use]
    pub const fn for_reps(reps: u32) -> Self {
        if reps <= LOW_REP_MAX {
            Self::Single {
                algorithm: OneRepMaxAlgorithm::Brzycki,
            }
        } else if reps <= MID_REP_MAX {
            Self::Either {
                first: OneRepMaxAlgorithm::Brzycki,
                second: OneRepMaxAlgorithm::Epley,
            }
        } else {
            Self::Single {
                algorithm: OneRepMaxAlgorithm::Mayhew,
            }
        }
    }

    /// Recommended formulas in preference order
    #[must_use]
    pub fn algorithms(&self) -> Vec<OneRepMaxAlgorithm> {
        match *self {
            Self::Single { algorithm } => vec![algorithm],
            Self::Either { first, second } => vec![first, second],
        }
    }

    /// Whether `algorithm` is among the recommended formulas
    #[must_use]
    pub fn recommends(&self, algorithm: OneRepMaxAlgorithm) -> bool {
        match *self {
            Self::Single { algorithm: chosen } => chosen == algorithm,
            Self::Either { first, second } => first == algorithm || second == algorithm,
        }
    }

    /// Advisory sentence shown under the estimates
    #[must_use]
    pub fn advisory_text(&self) -> String {
        match *self {
            Self::Single { algorithm } => {
                format!("{} is the most accurate formula for this rep range", algorithm.label())
            }
            Self::Either { first, second } => format!(
                "{} and {} are equally accurate for this rep range",
                first.label(),
                second.label()
            ),
        }
    }
}

/// Parse the raw weight and reps text fields of the lift calculator
///
/// Blank, non-numeric, or non-positive input yields `None`, which the caller
/// shows as "no result".
#[must_use]
pub fn parse_lift_input(weight_text: &str, reps_text: &str) -> Option<(f64, u32)> {
    let weight: f64 = weight_text.trim().replace(',', ".").parse().ok()?;
    let reps: u32 = reps_text.trim().parse().ok()?;
    is_valid_set(weight, reps).then_some((weight, reps))
}
