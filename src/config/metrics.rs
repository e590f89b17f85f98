// ABOUTME: Metrics configuration holding stride length and calorie formula coefficients
// ABOUTME: Loads environment overrides over defaults and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics formula configuration
//!
//! Environment overrides:
//!
//! | Variable | Field |
//! |---|---|
//! | `STRIDE_LENGTH_M` | `stride_length_m` |
//! | `STRIDE_RUNNING_SPEED_MULTIPLIER` | `running.speed_multiplier` |
//! | `STRIDE_RUNNING_SPEED_SHIFT` | `running.speed_shift` |
//! | `STRIDE_WALKING_WEIGHT_MULTIPLIER` | `walking.weight_multiplier` |
//! | `STRIDE_WALKING_HEIGHT_MULTIPLIER` | `walking.height_multiplier` |

use std::env;

use serde::{Deserialize, Serialize};
use stride_core::constants::{env_config, formulas};
use tracing::warn;

use super::error::ConfigError;

/// Formula configuration for distance, speed and calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Distance covered by one step (meters)
    pub stride_length_m: f64,
    /// Running calorie coefficients
    pub running: RunningCaloriesConfig,
    /// Walking calorie coefficients
    pub walking: WalkingCaloriesConfig,
}

/// Running calories: `(speed_multiplier * speed - speed_shift) * weight`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningCaloriesConfig {
    /// Multiplier applied to mean speed (18.0)
    pub speed_multiplier: f64,
    /// Shift subtracted after scaling (20.0)
    pub speed_shift: f64,
}

/// Walking calories: `(weight_multiplier * weight + speed^2 / height * height_multiplier) * minutes`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkingCaloriesConfig {
    /// Multiplier applied to body weight (0.035)
    pub weight_multiplier: f64,
    /// Multiplier applied to speed squared over height (0.029)
    pub height_multiplier: f64,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            stride_length_m: formulas::DEFAULT_STRIDE_LENGTH_M,
            running: RunningCaloriesConfig {
                speed_multiplier: formulas::RUNNING_SPEED_MULTIPLIER,
                speed_shift: formulas::RUNNING_SPEED_SHIFT,
            },
            walking: WalkingCaloriesConfig {
                weight_multiplier: formulas::WALKING_WEIGHT_MULTIPLIER,
                height_multiplier: formulas::WALKING_HEIGHT_MULTIPLIER,
            },
        }
    }
}

impl MetricsConfig {
    /// Load metrics configuration from environment variables with built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration fails validation
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_environment_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Same defaults with a different stride length
    #[must_use]
    pub fn with_stride_length(mut self, stride_length_m: f64) -> Self {
        self.stride_length_m = stride_length_m;
        self
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the stride length is not positive or any
    /// coefficient is not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.stride_length_m.is_finite() {
            return Err(ConfigError::NotFinite("stride_length_m"));
        }
        if self.stride_length_m <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stride_length_m must be greater than zero",
            ));
        }

        let coefficients = [
            (self.running.speed_multiplier, "running.speed_multiplier"),
            (self.running.speed_shift, "running.speed_shift"),
            (self.walking.weight_multiplier, "walking.weight_multiplier"),
            (self.walking.height_multiplier, "walking.height_multiplier"),
        ];
        for (value, name) in coefficients {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }
        Ok(())
    }

    fn apply_environment_overrides(&mut self) {
        Self::parse_env_f64(env_config::STRIDE_LENGTH_M, &mut self.stride_length_m);
        Self::parse_env_f64(
            env_config::RUNNING_SPEED_MULTIPLIER,
            &mut self.running.speed_multiplier,
        );
        Self::parse_env_f64(
            env_config::RUNNING_SPEED_SHIFT,
            &mut self.running.speed_shift,
        );
        Self::parse_env_f64(
            env_config::WALKING_WEIGHT_MULTIPLIER,
            &mut self.walking.weight_multiplier,
        );
        Self::parse_env_f64(
            env_config::WALKING_HEIGHT_MULTIPLIER,
            &mut self.walking.height_multiplier,
        );
    }

    /// Parse environment variable as f64 and update target if valid
    fn parse_env_f64(env_var: &str, target: &mut f64) {
        if let Ok(value) = env::var(env_var) {
            match value.parse::<f64>() {
                Ok(parsed) => *target = parsed,
                Err(e) => warn!(
                    variable = env_var,
                    value = %value,
                    error = %e,
                    "Ignoring unparseable configuration override"
                ),
            }
        }
    }
}
