// ABOUTME: Tuning controller owning the current state and performing persistence effects
// ABOUTME: Loads initial values from providers and dispatches actions through the reducer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use pierre_intelligence::config::TuningConfig;
use tracing::debug;

use super::state::{PersistEffect, TuningAction, TuningState};
use crate::errors::AppResult;
use crate::preferences::PreferenceStore;
use crate::recovery::RecoveryRateProvider;
use crate::scoring::ScoringWeightsProvider;

/// Owns the tuning state and isolates persistence from the reducer
pub struct TuningController {
    state: TuningState,
    rates: RecoveryRateProvider,
    weights: ScoringWeightsProvider,
}

impl TuningController {
    /// Load persisted values from `store` and build the initial state
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub async fn load(store: Arc<dyn PreferenceStore>, bounds: TuningConfig) -> AppResult<Self> {
        let rates = RecoveryRateProvider::new(Arc::clone(&store), bounds.recovery);
        let weights = ScoringWeightsProvider::new(store, bounds.scoring);
        let state = TuningState::new(rates.load().await?, weights.get().await?, bounds);
        Ok(Self {
            state,
            rates,
            weights,
        })
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &TuningState {
        &self.state
    }

    /// Reduce `action` and persist the result
    ///
    /// The new state is only committed once its effect has been persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if persistence fails; the previous state is kept
    pub async fn dispatch(&mut self, action: TuningAction) -> AppResult<&TuningState> {
        debug!(action = ?action, "Dispatching tuning action");
        let transition = self.state.reduce(action);

        if let Some(effect) = transition.effect {
            self.perform(effect, &transition.state).await?;
        }
        self.state = transition.state;
        Ok(&self.state)
    }

    async fn perform(&self, effect: PersistEffect, next: &TuningState) -> AppResult<()> {
        debug!(effect = ?effect, "Performing persistence effect");
        match effect {
            PersistEffect::SaveRecoveryRates => self.rates.save(&next.recovery_rates).await,
            PersistEffect::ClearRecoveryRates => self.rates.reset().await.map(|_| ()),
            PersistEffect::SaveScoringWeights => self.weights.save(&next.scoring_weights).await,
            PersistEffect::ClearScoringWeights => self.weights.reset().await.map(|_| ()),
        }
    }
}
