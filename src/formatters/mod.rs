// ABOUTME: Report templates and output format abstraction for activity summaries
// ABOUTME: Renders fixed-template text reports or JSON for day and training summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Reports come in two shapes:
//!
//! - **Text**: the fixed multi-line templates, two decimals for every measurement
//! - **JSON**: the typed summary serialized with `serde_json`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stride_metrics::formatters::{format_output, OutputFormat};
//!
//! let output = format_output(&summary, OutputFormat::Json)?;
//! println!("{}", output.data);
//! ```

use std::fmt;

use serde::Serialize;
use stride_core::constants::messages;
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-template text report (default)
    #[default]
    Text,
    /// JSON document with the raw, unrounded values
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the serialized data and the format used
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered report
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

/// Summaries that have a fixed-template text rendering
pub trait TextReport {
    /// Render the text template
    fn to_text(&self) -> String;
}

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + TextReport>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => data.to_text(),
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
    };

    Ok(FormattedOutput { data, format })
}

/// Day report: step count, distance and calories
#[must_use]
pub fn format_day_report(steps: u64, distance_km: f64, calories: f64) -> String {
    format!(
        "Количество шагов: {steps}.\n\
         Дистанция составила {distance_km:.2} км.\n\
         Вы сожгли {calories:.2} ккал."
    )
}

/// Training report: activity, duration, distance, speed and calories
#[must_use]
pub fn format_training_report(
    activity: &str,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories: f64,
) -> String {
    format!(
        "Тип тренировки: {activity}\n\
         Длительность: {duration_hours:.2} ч.\n\
         Дистанция: {distance_km:.2} км.\n\
         Скорость: {mean_speed_kmh:.2} км/ч\n\
         Сожгли калорий: {calories:.2}"
    )
}

/// Message returned in place of a report for unknown activity types
#[must_use]
pub const fn unknown_activity_message() -> &'static str {
    messages::UNKNOWN_ACTIVITY
}
