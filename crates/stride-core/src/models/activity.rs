// ABOUTME: Activity record and activity type models
// ABOUTME: Closed activity classification with parsing from record labels and display
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::constants::{labels, units};

const NANOS_PER_HOUR: i64 = 3_600_000_000_000;

/// Activity classification selecting the calorie formula
///
/// The `Unknown` variant keeps the unrecognised label so callers can report
/// it; no metrics are ever computed for it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    /// Running, scored with the speed-based running formula
    Running,
    /// Walking, scored with the weight/height walking formula
    Walking,
    /// Label not covered by any formula
    Unknown(String),
}

impl ActivityType {
    /// Classify a record label (exact, case-sensitive match)
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            labels::RUNNING | labels::RUNNING_ALIAS => Self::Running,
            labels::WALKING | labels::WALKING_ALIAS => Self::Walking,
            other => Self::Unknown(other.to_owned()),
        }
    }

    /// Label printed in reports
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Running => labels::RUNNING,
            Self::Walking => labels::WALKING,
            Self::Unknown(label) => label,
        }
    }

    /// Whether a calorie formula exists for this activity
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed activity record
///
/// Day records carry no label; training records always do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityRecord {
    /// Number of steps, always positive
    pub steps: u64,
    /// Raw activity label for training records
    pub label: Option<String>,
    /// Activity duration, may be zero or negative
    pub duration: TimeDelta,
}

impl ActivityRecord {
    /// Create a record without an activity label
    #[must_use]
    pub const fn new(steps: u64, duration: TimeDelta) -> Self {
        Self {
            steps,
            label: None,
            duration,
        }
    }

    /// Attach an activity label
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Classified activity type, `None` for day records
    #[must_use]
    pub fn activity_type(&self) -> Option<ActivityType> {
        self.label.as_deref().map(ActivityType::from_label)
    }

    /// Duration in fractional hours
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        duration_hours(self.duration)
    }
}

/// Convert a duration to fractional hours without losing sub-hour precision
#[must_use]
pub fn duration_hours(duration: TimeDelta) -> f64 {
    duration.num_nanoseconds().map_or_else(
        || duration.num_seconds() as f64 / (units::NANOS_PER_HOUR / 1e9),
        |nanos| {
            let hours = nanos / NANOS_PER_HOUR;
            let rest = nanos % NANOS_PER_HOUR;
            hours as f64 + rest as f64 / units::NANOS_PER_HOUR
        },
    )
}
