// ABOUTME: Core domain models shared by intelligence algorithms and storage providers
// ABOUTME: Exposes MuscleGroup and WeightUnit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Trainable muscle groups
mod muscle;
/// Load units used for display
mod units;

pub use muscle::MuscleGroup;
pub use units::WeightUnit;
