// ABOUTME: Configuration module for metric formulas and logging
// ABOUTME: Environment-only configuration with validated built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration
//!
//! All configuration comes from environment variables layered over built-in
//! defaults, so a bare invocation reproduces the reference formulas.

/// Configuration error types
pub mod error;

/// Stride length and calorie formula coefficients
pub mod metrics;

pub use error::ConfigError;
pub use metrics::MetricsConfig;
