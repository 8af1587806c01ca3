// ABOUTME: Error handling re-exported from pierre-core for crate-local paths
// ABOUTME: Keeps `crate::errors::AppResult` stable for providers and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The error types are defined in `pierre-core` so the intelligence crate can
//! share them; this module re-exports them.

pub use pierre_core::errors::{AppError, AppResult, ErrorCode};
