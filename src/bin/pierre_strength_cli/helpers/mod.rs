// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for pierre-strength-cli
// ABOUTME: Provides terminal output formatting

pub mod display;
