// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, preference backend selection, and tuning bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};
use pierre_core::models::WeightUnit;
use pierre_intelligence::config::TuningConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Selects the deployment environment
pub const ENV_ENVIRONMENT: &str = "PIERRE_STRENGTH_ENV";
/// Selects the preference backend (`memory` or `file`)
pub const ENV_PREFS_BACKEND: &str = "PIERRE_STRENGTH_PREFS_BACKEND";
/// Overrides the preference file location
pub const ENV_PREFS_PATH: &str = "PIERRE_STRENGTH_PREFS_PATH";
/// Selects the display unit for loads (`kg` or `lbs`)
pub const ENV_WEIGHT_UNIT: &str = "PIERRE_STRENGTH_WEIGHT_UNIT";
/// Overrides the recovery percentage treated as ready to train
pub const ENV_READY_PERCENT: &str = "PIERRE_STRENGTH_READY_PERCENT";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        })
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Preference storage backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PreferencesBackend {
    /// Process-local map, lost on exit
    Memory,
    /// JSON file on disk
    #[default]
    File,
}

/// Preference store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Selected backend
    pub backend: PreferencesBackend,
    /// File used by the file backend
    pub path: PathBuf,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            backend: PreferencesBackend::default(),
            path: default_preferences_path(),
        }
    }
}

/// Default preference file: `<data dir>/pierre-strength/preferences.json`
///
/// Falls back to the working directory when the platform has no data dir.
#[must_use]
pub fn default_preferences_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pierre-strength")
        .join("preferences.json")
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StrengthConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Preference store settings
    pub preferences: PreferencesConfig,
    /// Display unit for loads
    pub weight_unit: WeightUnit,
    /// Tuning bounds
    pub tuning: TuningConfig,
}

impl StrengthConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value or the
    /// resulting tuning bounds fail validation
    pub fn from_env() -> Result<Self> {
        let environment = Environment::from_str_or_default(
            &env::var(ENV_ENVIRONMENT).unwrap_or_else(|_| "development".into()),
        );
        let log_level =
            LogLevel::from_str_or_default(&env::var("RUST_LOG").unwrap_or_else(|_| "info".into()));

        let backend = match env::var(ENV_PREFS_BACKEND).as_deref() {
            Ok("memory") => PreferencesBackend::Memory,
            Ok("file") | Err(_) => PreferencesBackend::File,
            Ok(other) => {
                warn!(backend = other, "Unknown preference backend, using file");
                PreferencesBackend::File
            }
        };
        let path = env::var(ENV_PREFS_PATH).map_or_else(|_| default_preferences_path(), PathBuf::from);

        let weight_unit = match env::var(ENV_WEIGHT_UNIT) {
            Ok(raw) => raw
                .parse::<WeightUnit>()
                .with_context(|| format!("Invalid {ENV_WEIGHT_UNIT}: {raw}"))?,
            Err(_) => WeightUnit::default(),
        };

        let mut tuning = TuningConfig::default();
        if let Ok(raw) = env::var(ENV_READY_PERCENT) {
            tuning.recovery.ready_percent = raw
                .parse::<f64>()
                .with_context(|| format!("Invalid {ENV_READY_PERCENT}: {raw}"))?;
        }
        tuning
            .validate()
            .context("Tuning configuration failed validation")?;

        let config = Self {
            environment,
            log_level,
            preferences: PreferencesConfig { backend, path },
            weight_unit,
            tuning,
        };
        config.log_summary();
        Ok(config)
    }

    fn log_summary(&self) {
        info!(
            environment = %self.environment,
            prefs.backend = ?self.preferences.backend,
            prefs.path = %self.preferences.path.display(),
            weight_unit = %self.weight_unit,
            ready_percent = self.tuning.recovery.ready_percent,
            "Configuration loaded"
        );
    }
}
