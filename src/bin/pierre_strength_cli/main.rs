// ABOUTME: Pierre Strength CLI - tune recovery rates, scoring weights, and estimate 1RM
// ABOUTME: Reads and writes the same preference store used by the library providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate a one-rep max from 100 kg for 5 reps
//! pierre-strength-cli one-rep-max 100 5
//!
//! # Freshness after 2 sessions with decay constant 0.3
//! pierre-strength-cli freshness 0.3 2
//!
//! # Show and tune per-muscle recovery
//! pierre-strength-cli recovery show
//! pierre-strength-cli recovery set chest 0.06
//! pierre-strength-cli recovery train chest triceps --hours-ago 12
//! pierre-strength-cli recovery reset
//!
//! # Show, tune, and normalize exercise scoring weights
//! pierre-strength-cli weights show
//! pierre-strength-cli weights set freshness 0.35
//! pierre-strength-cli weights normalize
//!
//! # Mark exercises
//! pierre-strength-cli exercises favorite "Bench Press"
//! pierre-strength-cli exercises avoid "Upright Row"
//! pierre-strength-cli exercises list
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_strength::{
    config::{PreferencesBackend, StrengthConfig},
    logging::LoggingConfig,
    models::{MuscleGroup, WeightUnit},
    preferences::{factory::create_preference_store, PreferenceStore},
};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "pierre-strength-cli",
    about = "Pierre Strength tuning CLI",
    long_about = "Tune muscle recovery rates and exercise scoring weights, and estimate one-rep maxes."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Preference file override (implies the file backend)
    #[arg(long, global = true)]
    prefs: Option<PathBuf>,

    /// Display unit override (kg or lbs)
    #[arg(long, global = true)]
    unit: Option<WeightUnit>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate a one-rep max with Epley, Brzycki, and Mayhew
    OneRepMax {
        /// Weight lifted, in the display unit
        weight: String,
        /// Repetitions performed
        reps: String,
    },

    /// Freshness of a muscle after a number of sessions
    Freshness {
        /// Decay constant
        k: f64,
        /// Sessions since the muscle was trained
        sessions_ago: u32,
    },

    /// Per-muscle recovery rates and status
    Recovery {
        #[command(subcommand)]
        action: RecoveryCommand,
    },

    /// Exercise scoring weights
    Weights {
        #[command(subcommand)]
        action: WeightsCommand,
    },

    /// Favorite and avoided exercises
    Exercises {
        #[command(subcommand)]
        action: ExercisesCommand,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum RecoveryCommand {
    /// Show rates, half-lives, and current recovery for every muscle
    Show,

    /// Set the decay constant of one muscle
    Set {
        /// Muscle group (e.g. chest, quads, lats)
        muscle: MuscleGroup,
        /// Decay constant per hour
        rate: f64,
    },

    /// Restore every decay constant to its default
    Reset,

    /// Record that muscles were trained
    Train {
        /// Muscle groups trained
        #[arg(required = true)]
        muscles: Vec<MuscleGroup>,
        /// How long ago the session ended
        #[arg(long, default_value = "0")]
        hours_ago: f64,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WeightsCommand {
    /// Show every factor weight and its share of the total
    Show,

    /// Set one factor weight
    Set {
        /// Factor name (e.g. `muscle_match`, freshness)
        factor: String,
        /// New weight
        weight: f64,
    },

    /// Rescale weights so they total 1.0
    Normalize,

    /// Restore the default weights
    Reset,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ExercisesCommand {
    /// Mark an exercise as a favorite
    Favorite {
        /// Exercise name
        name: String,
    },

    /// Mark an exercise as avoided
    Avoid {
        /// Exercise name
        name: String,
    },

    /// Clear any mark on an exercise
    Remove {
        /// Exercise name
        name: String,
    },

    /// List favorite and avoided exercises
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    LoggingConfig::for_cli(cli.verbose).init()?;

    let mut config = StrengthConfig::from_env()?;
    if let Some(path) = cli.prefs {
        config.preferences.backend = PreferencesBackend::File;
        config.preferences.path = path;
    }
    if let Some(unit) = cli.unit {
        config.weight_unit = unit;
    }
    debug!(path = %config.preferences.path.display(), "Using preference store");

    match cli.command {
        Command::OneRepMax { weight, reps } => {
            commands::lift::one_rep_max(&config, weight, reps).await?;
        }
        Command::Freshness { k, sessions_ago } => {
            commands::lift::freshness(k, sessions_ago);
        }
        Command::Recovery { action } => {
            let store = open_store(&config).await?;
            match action {
                RecoveryCommand::Show => commands::recovery::show(store, &config).await?,
                RecoveryCommand::Set { muscle, rate } => {
                    commands::recovery::set(store, &config, muscle, rate).await?;
                }
                RecoveryCommand::Reset => commands::recovery::reset(store, &config).await?,
                RecoveryCommand::Train { muscles, hours_ago } => {
                    commands::recovery::train(store, &muscles, hours_ago).await?;
                }
            }
        }
        Command::Weights { action } => {
            let store = open_store(&config).await?;
            match action {
                WeightsCommand::Show => commands::weights::show(store, &config).await?,
                WeightsCommand::Set { factor, weight } => {
                    commands::weights::set(store, &config, factor, weight).await?;
                }
                WeightsCommand::Normalize => commands::weights::normalize(store, &config).await?,
                WeightsCommand::Reset => commands::weights::reset(store, &config).await?,
            }
        }
        Command::Exercises { action } => {
            let store = open_store(&config).await?;
            match action {
                ExercisesCommand::Favorite { name } => {
                    commands::exercises::favorite(store, &name).await?;
                }
                ExercisesCommand::Avoid { name } => commands::exercises::avoid(store, &name).await?,
                ExercisesCommand::Remove { name } => {
                    commands::exercises::remove(store, &name).await?;
                }
                ExercisesCommand::List => commands::exercises::list(store).await?,
            }
        }
    }

    Ok(())
}

async fn open_store(config: &StrengthConfig) -> Result<Arc<dyn PreferenceStore>> {
    Ok(create_preference_store(&config.preferences).await?)
}
