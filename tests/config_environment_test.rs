// ABOUTME: Unit tests for metrics configuration loaded from the environment
// ABOUTME: Validates overrides, ignored garbage values and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;

use serial_test::serial;
use stride_metrics::config::{ConfigError, MetricsConfig};
use stride_metrics::constants::env_config;

const ALL_VARS: [&str; 5] = [
    env_config::STRIDE_LENGTH_M,
    env_config::RUNNING_SPEED_MULTIPLIER,
    env_config::RUNNING_SPEED_SHIFT,
    env_config::WALKING_WEIGHT_MULTIPLIER,
    env_config::WALKING_HEIGHT_MULTIPLIER,
];

fn clear_env() {
    for var in ALL_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_uses_defaults() {
    clear_env();
    assert_eq!(MetricsConfig::load().unwrap(), MetricsConfig::default());
}

#[test]
#[serial]
fn test_load_applies_overrides() {
    clear_env();
    env::set_var(env_config::STRIDE_LENGTH_M, "0.8");
    env::set_var(env_config::RUNNING_SPEED_SHIFT, "25");
    env::set_var(env_config::WALKING_HEIGHT_MULTIPLIER, "0.03");

    let config = MetricsConfig::load().unwrap();
    clear_env();

    assert!((config.stride_length_m - 0.8).abs() < f64::EPSILON);
    assert!((config.running.speed_shift - 25.0).abs() < f64::EPSILON);
    assert!((config.walking.height_multiplier - 0.03).abs() < f64::EPSILON);
    // Untouched values keep their defaults
    assert!((config.running.speed_multiplier - 18.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_load_ignores_unparseable_override() {
    clear_env();
    env::set_var(env_config::STRIDE_LENGTH_M, "long");

    let config = MetricsConfig::load().unwrap();
    clear_env();

    assert!((config.stride_length_m - 0.65).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_load_rejects_invalid_stride() {
    clear_env();
    env::set_var(env_config::STRIDE_LENGTH_M, "-0.5");

    let result = MetricsConfig::load();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_load_rejects_non_finite_coefficient() {
    clear_env();
    env::set_var(env_config::RUNNING_SPEED_MULTIPLIER, "inf");

    let result = MetricsConfig::load();
    clear_env();

    assert!(matches!(
        result,
        Err(ConfigError::NotFinite("running.speed_multiplier"))
    ));
}
