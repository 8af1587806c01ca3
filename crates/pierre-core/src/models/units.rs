// ABOUTME: Weight unit selection for load display and conversion
// ABOUTME: Converts between kilograms and pounds for formatted output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::units::LBS_PER_KG;
use crate::errors::AppError;

/// Unit the user enters and reads loads in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    #[default]
    Kg,
    /// Pounds
    Lbs,
}

impl WeightUnit {
    /// Suffix shown after a formatted load
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Lbs => "lbs",
        }
    }

    /// Convert a load expressed in `from` into this unit
    #[must_use]
    pub fn convert(self, value: f64, from: Self) -> f64 {
        match (from, self) {
            (Self::Kg, Self::Lbs) => value * LBS_PER_KG,
            (Self::Lbs, Self::Kg) => value / LBS_PER_KG,
            _ => value,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Ok(Self::Kg),
            "lb" | "lbs" | "pounds" => Ok(Self::Lbs),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: '{other}'. Valid options: kg, lbs"
            ))),
        }
    }
}
