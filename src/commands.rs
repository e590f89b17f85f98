// ABOUTME: Command dispatch shared by the CLI - validates the profile and renders one record
// ABOUTME: Returns the text to print, or nothing when a day record is rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! CLI command execution
//!
//! The binary only parses arguments and prints what [`run_command`] returns.

use anyhow::Result;
use serde_json::json;
use stride_core::errors::ValidationError;
use stride_core::models::UserProfile;
use tracing::warn;

use crate::calculator::MetricsCalculator;
use crate::formatters::{format_output, OutputFormat};
use crate::reports::{day_action_info, summarize_day, summarize_training, training_info};

/// Which record format a command reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `<steps>,<duration>`
    Day,
    /// `<steps>,<activity>,<duration>`
    Training,
}

/// Validate the profile, then render the record in the requested format
///
/// Returns `Ok(None)` when a day record is rejected: the warning goes to the
/// log and nothing is printed. A rejected training record renders its error
/// text, or an error object in JSON mode.
///
/// # Errors
///
/// Returns an error if the profile is invalid or JSON serialization fails
pub fn run_command(
    kind: RecordKind,
    record: &str,
    profile: &UserProfile,
    calculator: &MetricsCalculator,
    format: OutputFormat,
) -> Result<Option<String>> {
    profile.validate()?;

    match kind {
        RecordKind::Day => run_day(record, profile, calculator, format),
        RecordKind::Training => run_training(record, profile, calculator, format).map(Some),
    }
}

fn run_day(
    record: &str,
    profile: &UserProfile,
    calculator: &MetricsCalculator,
    format: OutputFormat,
) -> Result<Option<String>> {
    match format {
        OutputFormat::Text => {
            let report = day_action_info(record, profile, calculator);
            Ok((!report.is_empty()).then_some(report))
        }
        OutputFormat::Json => match summarize_day(record, profile, calculator) {
            Ok(summary) => Ok(Some(format_output(&summary, format)?.data)),
            Err(e) => {
                warn!(error = %e, "Rejected day record");
                Ok(None)
            }
        },
    }
}

fn run_training(
    record: &str,
    profile: &UserProfile,
    calculator: &MetricsCalculator,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(training_info(record, profile, calculator)),
        OutputFormat::Json => match summarize_training(record, profile, calculator) {
            Ok(outcome) => Ok(format_output(&outcome, format)?.data),
            Err(e) => Ok(error_object(&e)),
        },
    }
}

fn error_object(error: &ValidationError) -> String {
    let code = error.code();
    json!({
        "status": "error",
        "code": code,
        "description": code.description(),
        "message": error.to_string(),
    })
    .to_string()
}
