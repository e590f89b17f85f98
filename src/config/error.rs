// ABOUTME: Configuration error types for metrics configuration validation
// ABOUTME: Defines error variants for out-of-range and non-finite configuration values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for metrics configuration validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Coefficient is NaN or infinite
    #[error("Value is not finite: {0}")]
    NotFinite(&'static str),
}
