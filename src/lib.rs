// ABOUTME: Main library entry point for stride metrics
// ABOUTME: Parses activity records and reports distance, mean speed and calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Metrics
//!
//! Turns a comma-separated activity record into a short report of distance,
//! mean speed and calories burned.
//!
//! ## Architecture
//!
//! Every call runs the same stateless pipeline:
//! - **Parser**: splits the record and validates steps and duration
//! - **Calculator**: distance, speed and calorie formulas over a `MetricsConfig`
//! - **Formatters**: fixed text templates or JSON
//!
//! ## Example Usage
//!
//! ```rust
//! use stride_metrics::calculator::MetricsCalculator;
//! use stride_metrics::models::UserProfile;
//! use stride_metrics::reports::training_info;
//!
//! let profile = UserProfile::new(75.0, 1.75);
//! let report = training_info("1000,Бег,40m", &profile, &MetricsCalculator::default());
//! assert!(report.starts_with("Тип тренировки: Бег"));
//! ```

/// Distance, speed and calorie formulas
pub mod calculator;

/// CLI command execution
pub mod commands;

/// Formula and logging configuration
pub mod config;

/// Duration expression grammar
pub mod duration;

/// Report templates and output formats
pub mod formatters;

/// Tracing subscriber setup
pub mod logging;

/// Activity record parsing
pub mod parser;

/// Record-to-report entry points
pub mod reports;

/// Re-export of the foundation crate's error types
pub use stride_core::errors;

/// Re-export of the foundation crate's models
pub use stride_core::models;

/// Re-export of the foundation crate's constants
pub use stride_core::constants;
