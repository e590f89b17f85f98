// ABOUTME: Entry points turning raw activity records into reports
// ABOUTME: Parse, compute and format in one stateless call for day and training records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Activity reports
//!
//! Two record formats, two failure conventions:
//!
//! - [`day_action_info`] logs a rejected record and returns an empty string
//! - [`training_info`] returns the error text for a rejected record, and the
//!   unknown-activity message when the label has no formula
//!
//! The `summarize_*` functions expose the same pipeline with typed results.

use serde::{Deserialize, Serialize};
use stride_core::errors::ValidationError;
use stride_core::models::{ActivityRecord, ActivityType, UserProfile};
use tracing::{debug, warn};

use crate::calculator::MetricsCalculator;
use crate::formatters::{
    format_day_report, format_training_report, unknown_activity_message, TextReport,
};
use crate::parser::{parse_step_record, parse_training_record};

/// Daily step summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Number of steps
    pub steps: u64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Calories burned walking (kcal)
    pub calories: f64,
}

impl TextReport for DaySummary {
    fn to_text(&self) -> String {
        format_day_report(self.steps, self.distance_km, self.calories)
    }
}

/// Summary of one training session with a known activity type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Activity type
    pub activity: ActivityType,
    /// Duration in hours
    pub duration_hours: f64,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories: f64,
}

impl TextReport for TrainingSummary {
    fn to_text(&self) -> String {
        format_training_report(
            self.activity.label(),
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories,
        )
    }
}

/// Result of summarizing a training record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrainingOutcome {
    /// Metrics were computed
    Known(TrainingSummary),
    /// The label has no formula; nothing was computed
    UnknownActivity {
        /// Label as it appeared in the record
        label: String,
    },
}

impl TextReport for TrainingOutcome {
    fn to_text(&self) -> String {
        match self {
            Self::Known(summary) => summary.to_text(),
            Self::UnknownActivity { .. } => unknown_activity_message().to_owned(),
        }
    }
}

/// Summarize a day record `<steps>,<duration>` using the walking formula
///
/// # Errors
///
/// Returns a `ValidationError` if the record is rejected by the parser
pub fn summarize_day(
    data: &str,
    profile: &UserProfile,
    calculator: &MetricsCalculator,
) -> Result<DaySummary, ValidationError> {
    let record = parse_step_record(data)?;
    Ok(DaySummary {
        steps: record.steps,
        distance_km: calculator.distance_km(record.steps),
        calories: calculator.walking_calories(
            record.steps,
            profile.weight_kg,
            profile.height_m,
            record.duration,
        ),
    })
}

/// Summarize a training record `<steps>,<activity>,<duration>`
///
/// # Errors
///
/// Returns a `ValidationError` if the record is rejected by the parser
pub fn summarize_training(
    data: &str,
    profile: &UserProfile,
    calculator: &MetricsCalculator,
) -> Result<TrainingOutcome, ValidationError> {
    let record = parse_training_record(data)?;
    Ok(summarize_training_record(&record, profile, calculator))
}

fn summarize_training_record(
    record: &ActivityRecord,
    profile: &UserProfile,
    calculator: &MetricsCalculator,
) -> TrainingOutcome {
    let activity = record
        .activity_type()
        .unwrap_or_else(|| ActivityType::Unknown(String::new()));

    match calculator.measure(record, &activity, profile) {
        Some(metrics) => TrainingOutcome::Known(TrainingSummary {
            activity,
            duration_hours: record.duration_hours(),
            distance_km: metrics.distance_km,
            mean_speed_kmh: metrics.mean_speed_kmh,
            calories: metrics.calories,
        }),
        None => {
            debug!(label = %activity, "no formula for activity type");
            TrainingOutcome::UnknownActivity {
                label: activity.label().to_owned(),
            }
        }
    }
}

/// Day report for a `<steps>,<duration>` record
///
/// A rejected record is logged at `warn` and yields an empty string.
#[must_use]
pub fn day_action_info(
    data: &str,
    profile: &UserProfile,
    calculator: &MetricsCalculator,
) -> String {
    match summarize_day(data, profile, calculator) {
        Ok(summary) => summary.to_text(),
        Err(e) => {
            warn!(error = %e, code = ?e.code(), "Rejected day record");
            String::new()
        }
    }
}

/// Training report for a `<steps>,<activity>,<duration>` record
///
/// A rejected record yields its error message; an unknown activity yields
/// the unknown-activity message.
#[must_use]
pub fn training_info(
    data: &str,
    profile: &UserProfile,
    calculator: &MetricsCalculator,
) -> String {
    summarize_training(data, profile, calculator)
        .map_or_else(|e| e.to_string(), |outcome| outcome.to_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile::new(75.0, 1.75)
    }

    #[test]
    fn test_day_summary_values() {
        let summary = summarize_day("1000,30m", &profile(), &MetricsCalculator::default()).unwrap();
        assert_eq!(summary.steps, 1000);
        assert!((summary.distance_km - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_activity_outcome() {
        let outcome =
            summarize_training("1000,Плавание,10m", &profile(), &MetricsCalculator::default())
                .unwrap();
        assert_eq!(
            outcome,
            TrainingOutcome::UnknownActivity {
                label: "Плавание".to_owned()
            }
        );
    }

    #[test]
    fn test_training_outcome_json_is_tagged() {
        let outcome = TrainingOutcome::UnknownActivity {
            label: "Йога".to_owned(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unknown_activity");
        assert_eq!(json["label"], "Йога");
    }
}
