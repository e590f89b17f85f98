// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients, unit conversions, activity labels and report messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large list. Values that callers may want to tune (stride length and the
//! calorie coefficients) are only defaults here; the metrics configuration
//! owns the effective values.

/// Activity record wire format
pub mod record {
    /// Field delimiter inside a record
    pub const FIELD_DELIMITER: char = ',';
    /// Field count of a day record (`<steps>,<duration>`)
    pub const DAY_RECORD_FIELDS: usize = 2;
    /// Field count of a training record (`<steps>,<activity>,<duration>`)
    pub const TRAINING_RECORD_FIELDS: usize = 3;
}

/// Unit conversion constants
pub mod units {
    /// Meters in a kilometer
    pub const METERS_PER_KM: f64 = 1000.0;
    /// Minutes in an hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    /// Nanoseconds in an hour
    pub const NANOS_PER_HOUR: f64 = 3_600_000_000_000.0;
}

/// Default coefficients for the distance and calorie formulas
pub mod formulas {
    /// Assumed distance covered by one step (meters)
    pub const DEFAULT_STRIDE_LENGTH_M: f64 = 0.65;
    /// Running: multiplier applied to mean speed
    pub const RUNNING_SPEED_MULTIPLIER: f64 = 18.0;
    /// Running: shift subtracted from the scaled mean speed
    pub const RUNNING_SPEED_SHIFT: f64 = 20.0;
    /// Walking: multiplier applied to body weight
    pub const WALKING_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Walking: multiplier applied to speed squared over height
    pub const WALKING_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Activity labels recognised in training records
pub mod labels {
    /// Running label used in reports
    pub const RUNNING: &str = "Бег";
    /// Walking label used in reports
    pub const WALKING: &str = "Ходьба";
    /// English alias for running
    pub const RUNNING_ALIAS: &str = "Running";
    /// English alias for walking
    pub const WALKING_ALIAS: &str = "Walking";
}

/// Fixed report messages
pub mod messages {
    /// Returned instead of a report when the activity label is not recognised
    pub const UNKNOWN_ACTIVITY: &str = "неизвестный тип тренировки";
}

/// Environment variable names for metrics overrides
pub mod env_config {
    /// Stride length override (meters)
    pub const STRIDE_LENGTH_M: &str = "STRIDE_LENGTH_M";
    /// Running speed multiplier override
    pub const RUNNING_SPEED_MULTIPLIER: &str = "STRIDE_RUNNING_SPEED_MULTIPLIER";
    /// Running speed shift override
    pub const RUNNING_SPEED_SHIFT: &str = "STRIDE_RUNNING_SPEED_SHIFT";
    /// Walking weight multiplier override
    pub const WALKING_WEIGHT_MULTIPLIER: &str = "STRIDE_WALKING_WEIGHT_MULTIPLIER";
    /// Walking height multiplier override
    pub const WALKING_HEIGHT_MULTIPLIER: &str = "STRIDE_WALKING_HEIGHT_MULTIPLIER";
}

/// Service names used in structured logs
pub mod service_names {
    /// Name of the command-line service
    pub const STRIDE_METRICS: &str = "stride-metrics";
}
