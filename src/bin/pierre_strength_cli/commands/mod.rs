// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-strength-cli
// ABOUTME: Provides lift, recovery, scoring weight, and exercise commands

pub mod exercises;
pub mod lift;
pub mod recovery;
pub mod weights;
