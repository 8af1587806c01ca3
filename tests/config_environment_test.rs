// ABOUTME: Tests for environment-based configuration and tuning bound validation
// ABOUTME: Environment tests run serially because they mutate process variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::env;
use std::path::PathBuf;

use common::init_test_logging;
use pierre_intelligence::config::{ConfigError, TuningConfig};
use pierre_strength::{
    config::{
        environment::{
            default_preferences_path, ENV_ENVIRONMENT, ENV_PREFS_BACKEND, ENV_PREFS_PATH,
            ENV_READY_PERCENT, ENV_WEIGHT_UNIT,
        },
        Environment, LogLevel, PreferencesBackend, StrengthConfig,
    },
    errors::{AppError, ErrorCode},
    models::WeightUnit,
};
use serial_test::serial;

fn clear_env() {
    for key in [
        ENV_ENVIRONMENT,
        ENV_PREFS_BACKEND,
        ENV_PREFS_PATH,
        ENV_WEIGHT_UNIT,
        ENV_READY_PERCENT,
    ] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    init_test_logging();
    clear_env();

    let config = StrengthConfig::from_env().unwrap();
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.preferences.backend, PreferencesBackend::File);
    assert_eq!(config.preferences.path, default_preferences_path());
    assert_eq!(config.weight_unit, WeightUnit::Kg);
    assert_eq!(config.tuning, TuningConfig::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var(ENV_ENVIRONMENT, "production");
    env::set_var(ENV_PREFS_BACKEND, "memory");
    env::set_var(ENV_PREFS_PATH, "/tmp/pierre-strength-test/prefs.json");
    env::set_var(ENV_WEIGHT_UNIT, "lbs");
    env::set_var(ENV_READY_PERCENT, "85");

    let config = StrengthConfig::from_env().unwrap();
    clear_env();

    assert!(config.environment.is_production());
    assert_eq!(config.preferences.backend, PreferencesBackend::Memory);
    assert_eq!(
        config.preferences.path,
        PathBuf::from("/tmp/pierre-strength-test/prefs.json")
    );
    assert_eq!(config.weight_unit, WeightUnit::Lbs);
    assert!((config.tuning.recovery.ready_percent - 85.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_invalid_values_are_rejected() {
    clear_env();
    env::set_var(ENV_WEIGHT_UNIT, "stone");
    assert!(StrengthConfig::from_env().is_err());

    clear_env();
    env::set_var(ENV_READY_PERCENT, "150");
    assert!(StrengthConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_unknown_backend_falls_back_to_file() {
    clear_env();
    env::set_var(ENV_PREFS_BACKEND, "redis");
    let config = StrengthConfig::from_env().unwrap();
    clear_env();
    assert_eq!(config.preferences.backend, PreferencesBackend::File);
}

#[test]
fn test_default_preferences_path_layout() {
    let path = default_preferences_path();
    assert!(path.ends_with("pierre-strength/preferences.json"));
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
    assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
}

#[test]
fn test_tuning_bounds_validation() {
    assert!(TuningConfig::default().validate().is_ok());

    let mut widened = TuningConfig::default();
    widened.recovery.max_rate = 0.3;
    assert!(matches!(
        widened.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut inverted = TuningConfig::default();
    inverted.recovery.min_rate = 0.1;
    inverted.recovery.max_rate = 0.05;
    assert!(matches!(
        inverted.validate(),
        Err(ConfigError::InvalidRange(_))
    ));

    let mut heavy = TuningConfig::default();
    heavy.scoring.max_factor_weight = 0.8;
    let error = heavy.validate().unwrap_err();
    assert!(matches!(error, ConfigError::InvalidWeights(_)));

    let app_error: AppError = error.into();
    assert_eq!(app_error.code, ErrorCode::ConfigError);
}

#[test]
fn test_tuning_bounds_clamp() {
    let bounds = TuningConfig::default();
    assert!((bounds.recovery.clamp_rate(1.0) - 0.15).abs() < f64::EPSILON);
    assert!((bounds.recovery.clamp_rate(f64::NAN) - 0.02).abs() < f64::EPSILON);
    assert!((bounds.scoring.clamp_weight(0.75) - 0.5).abs() < f64::EPSILON);
    assert!(bounds.scoring.total_is_acceptable(1.05));
    assert!(!bounds.scoring.total_is_acceptable(1.2));
}
