// ABOUTME: Muscle group enumeration used as keys for recovery rates and scores
// ABOUTME: Defines all tracked muscle groups with parsing and display implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Muscle groups tracked for recovery
///
/// Serialized as lowercase names (`"chest"`, `"quads"`), which are also the
/// keys used by the persisted recovery tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, rhomboids, and traps
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Forearms and grip
    Forearms,
    /// Abdominals and obliques
    Core,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Glutes
    Glutes,
    /// Calves
    Calves,
}

impl MuscleGroup {
    /// Every muscle group, in display order
    pub const ALL: [Self; 11] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Forearms,
        Self::Core,
        Self::Quads,
        Self::Hamstrings,
        Self::Glutes,
        Self::Calves,
    ];

    /// Storage and display key
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Forearms => "forearms",
            Self::Core => "core",
            Self::Quads => "quads",
            Self::Hamstrings => "hamstrings",
            Self::Glutes => "glutes",
            Self::Calves => "calves",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Chest => "Chest",
            Self::Back => "Back",
            Self::Shoulders => "Shoulders",
            Self::Biceps => "Biceps",
            Self::Triceps => "Triceps",
            Self::Forearms => "Forearms",
            Self::Core => "Core",
            Self::Quads => "Quadriceps",
            Self::Hamstrings => "Hamstrings",
            Self::Glutes => "Glutes",
            Self::Calves => "Calves",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "chest" | "pecs" => Ok(Self::Chest),
            "back" | "lats" => Ok(Self::Back),
            "shoulders" | "delts" => Ok(Self::Shoulders),
            "biceps" => Ok(Self::Biceps),
            "triceps" => Ok(Self::Triceps),
            "forearms" => Ok(Self::Forearms),
            "core" | "abs" => Ok(Self::Core),
            "quads" | "quadriceps" => Ok(Self::Quads),
            "hamstrings" => Ok(Self::Hamstrings),
            "glutes" => Ok(Self::Glutes),
            "calves" => Ok(Self::Calves),
            other => Err(AppError::invalid_input(format!(
                "Unknown muscle group: '{other}'. Valid options: chest, back, shoulders, biceps, \
                 triceps, forearms, core, quads, hamstrings, glutes, calves"
            ))),
        }
    }
}
