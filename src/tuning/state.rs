// ABOUTME: Immutable tuning state, user actions, and the pure reducer between them
// ABOUTME: Recomputes derived 1RM estimates and normalization hints on every action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_core::models::MuscleGroup;
use pierre_intelligence::algorithms::one_rep_max::parse_lift_input;
use pierre_intelligence::config::TuningConfig;
use pierre_intelligence::{FormulaRecommendation, OneRepMaxEstimate, ScoringWeights};

use crate::recovery::MuscleRecoveryRates;

/// Raw lift calculator fields and the estimate derived from them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiftCalculatorState {
    /// Weight field as typed
    pub weight_text: String,
    /// Reps field as typed
    pub reps_text: String,
    /// Estimates, `None` while either field is blank or invalid
    pub estimate: Option<OneRepMaxEstimate>,
    /// Formula advice for the entered rep count
    pub recommendation: Option<FormulaRecommendation>,
}

impl LiftCalculatorState {
    fn with_fields(weight_text: String, reps_text: String) -> Self {
        let parsed = parse_lift_input(&weight_text, &reps_text);
        Self {
            estimate: parsed.and_then(|(weight, reps)| OneRepMaxEstimate::estimate(weight, reps)),
            recommendation: parsed.map(|(_, reps)| FormulaRecommendation::for_reps(reps)),
            weight_text,
            reps_text,
        }
    }
}

/// A user edit
#[derive(Debug, Clone, PartialEq)]
pub enum TuningAction {
    /// Slider moved for one muscle's decay constant
    SetRecoveryRate {
        /// Muscle being tuned
        muscle: MuscleGroup,
        /// New decay constant
        rate: f64,
    },
    /// Restore every decay constant to the built-in table
    ResetRecoveryRates,
    /// Slider moved for one scoring factor
    SetScoringWeight {
        /// Factor name
        factor: String,
        /// New weight
        weight: f64,
    },
    /// Rescale scoring weights to total 1.0
    NormalizeScoringWeights,
    /// Restore the built-in scoring weights
    ResetScoringWeights,
    /// Weight field edited in the lift calculator
    SetLiftWeightText(String),
    /// Reps field edited in the lift calculator
    SetLiftRepsText(String),
}

/// Persistence required after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistEffect {
    /// Save the recovery rates
    SaveRecoveryRates,
    /// Remove stored recovery rates
    ClearRecoveryRates,
    /// Save the scoring weights
    SaveScoringWeights,
    /// Remove stored scoring weights
    ClearScoringWeights,
}

/// Result of reducing one action
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The new state
    pub state: TuningState,
    /// Persistence the caller must perform, if any
    pub effect: Option<PersistEffect>,
}

/// Complete tuning screen state
#[derive(Debug, Clone, PartialEq)]
pub struct TuningState {
    /// Per-muscle decay constants
    pub recovery_rates: MuscleRecoveryRates,
    /// Exercise scoring weights
    pub scoring_weights: ScoringWeights,
    /// Lift calculator
    pub lift: LiftCalculatorState,
    /// Bounds applied to edits
    pub bounds: TuningConfig,
}

impl TuningState {
    /// Initial state from loaded values
    #[must_use]
    pub fn new(
        recovery_rates: MuscleRecoveryRates,
        scoring_weights: ScoringWeights,
        bounds: TuningConfig,
    ) -> Self {
        Self {
            recovery_rates,
            scoring_weights,
            lift: LiftCalculatorState::default(),
            bounds,
        }
    }

    /// Whether the scoring total is outside the acceptable band
    #[must_use]
    pub fn needs_normalization(&self) -> bool {
        !self
            .bounds
            .scoring
            .total_is_acceptable(self.scoring_weights.sum())
    }

    /// Apply `action`, producing the next state and any required persistence
    ///
    /// Edits that leave the state unchanged (an unknown scoring factor, a
    /// normalization of zero-total weights) produce no effect.
    #[must_use]
    pub fn reduce(&self, action: TuningAction) -> Transition {
        match action {
            TuningAction::SetRecoveryRate { muscle, rate } => {
                let recovery_rates = self
                    .recovery_rates
                    .with_rate(muscle, rate, &self.bounds.recovery);
                self.transition_if_changed(
                    Self {
                        recovery_rates,
                        ..self.clone()
                    },
                    PersistEffect::SaveRecoveryRates,
                )
            }
            TuningAction::ResetRecoveryRates => Transition {
                state: Self {
                    recovery_rates: MuscleRecoveryRates::default(),
                    ..self.clone()
                },
                effect: Some(PersistEffect::ClearRecoveryRates),
            },
            TuningAction::SetScoringWeight { factor, weight } => {
                if self.scoring_weights.get(&factor).is_none() {
                    return self.unchanged();
                }
                let scoring_weights = self
                    .scoring_weights
                    .with(factor, self.bounds.scoring.clamp_weight(weight));
                self.transition_if_changed(
                    Self {
                        scoring_weights,
                        ..self.clone()
                    },
                    PersistEffect::SaveScoringWeights,
                )
            }
            TuningAction::NormalizeScoringWeights => self.transition_if_changed(
                Self {
                    scoring_weights: self.scoring_weights.normalize(),
                    ..self.clone()
                },
                PersistEffect::SaveScoringWeights,
            ),
            TuningAction::ResetScoringWeights => Transition {
                state: Self {
                    scoring_weights: ScoringWeights::default(),
                    ..self.clone()
                },
                effect: Some(PersistEffect::ClearScoringWeights),
            },
            TuningAction::SetLiftWeightText(text) => Transition {
                state: Self {
                    lift: LiftCalculatorState::with_fields(text, self.lift.reps_text.clone()),
                    ..self.clone()
                },
                effect: None,
            },
            TuningAction::SetLiftRepsText(text) => Transition {
                state: Self {
                    lift: LiftCalculatorState::with_fields(self.lift.weight_text.clone(), text),
                    ..self.clone()
                },
                effect: None,
            },
        }
    }

    fn unchanged(&self) -> Transition {
        Transition {
            state: self.clone(),
            effect: None,
        }
    }

    fn transition_if_changed(&self, next: Self, effect: PersistEffect) -> Transition {
        let effect = (next != *self).then_some(effect);
        Transition {
            state: next,
            effect,
        }
    }
}
