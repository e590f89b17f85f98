// ABOUTME: Validation error taxonomy for activity record parsing and user profiles
// ABOUTME: Defines ValidationError variants and maps them onto standard error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Validation Errors
//!
//! Every rejection happens before any metric is computed, so a single error
//! type covers the whole input surface:
//! - `ValidationError` - field count, step count, duration and profile failures
//! - `ErrorCode` - coarse classification with stable numeric codes

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used for validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// The record does not have the expected shape
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A field could not be parsed
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A field parsed but is outside the accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "The record does not contain the expected fields",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
        }
    }
}

/// Errors raised while validating activity records and user profiles
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The record has the wrong number of delimited fields
    #[error("invalid record: expected {expected} fields, got {actual}")]
    FieldCount {
        /// Number of fields the record format requires
        expected: usize,
        /// Number of fields actually present
        actual: usize,
    },

    /// The step count is not an integer
    #[error("invalid step count {value:?}: not an integer")]
    InvalidSteps {
        /// Raw step field
        value: String,
    },

    /// The step count is zero or negative
    #[error("step count must be positive, got {value}")]
    NonPositiveSteps {
        /// Parsed step count
        value: i64,
    },

    /// The duration field is not a valid duration expression
    #[error("invalid duration {value:?}: {reason}")]
    InvalidDuration {
        /// Raw duration field
        value: String,
        /// What the duration grammar rejected
        reason: String,
    },

    /// Body weight is zero, negative or not finite
    #[error("weight must be a positive number, got {value}")]
    NonPositiveWeight {
        /// Supplied weight
        value: f64,
    },

    /// Height is zero, negative or not finite
    #[error("height must be a positive number, got {value}")]
    NonPositiveHeight {
        /// Supplied height
        value: f64,
    },
}

impl ValidationError {
    /// Create an "invalid duration" error
    #[must_use]
    pub fn invalid_duration(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDuration {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Error code classifying this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::FieldCount { .. } => ErrorCode::MissingRequiredField,
            Self::InvalidSteps { .. } | Self::InvalidDuration { .. } => ErrorCode::InvalidFormat,
            Self::NonPositiveSteps { .. }
            | Self::NonPositiveWeight { .. }
            | Self::NonPositiveHeight { .. } => ErrorCode::ValueOutOfRange,
        }
    }
}
