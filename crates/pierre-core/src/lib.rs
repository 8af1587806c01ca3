// ABOUTME: Core types and constants for Pierre Strength tuning and estimation
// ABOUTME: Foundation crate with error handling, domain models, and default tuning tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for Pierre Strength.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Default recovery rates, default scoring weights, bounds, and preference keys
//! - **models**: Muscle groups and weight units

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`MuscleGroup`, `WeightUnit`)
pub mod models;
