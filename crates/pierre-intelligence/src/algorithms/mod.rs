// ABOUTME: Algorithm module for recovery decay, one-rep-max estimation, and scoring weights
// ABOUTME: Provides enum-based dispatch for 1RM formulas and pure decay functions

//! Algorithm Module
//!
//! Each algorithm family follows the same shape: pure functions or an enum
//! with a `calculate`-style method, `name()` and `formula()` for display, and
//! `FromStr` for configuration.

pub mod freshness;
pub mod one_rep_max;
pub mod scoring_weights;

pub use one_rep_max::{FormulaRecommendation, OneRepMaxAlgorithm, OneRepMaxEstimate};
pub use scoring_weights::ScoringWeights;
