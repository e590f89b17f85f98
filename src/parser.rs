// ABOUTME: Activity record parser for day ("<steps>,<duration>") and training records
// ABOUTME: Shares one steps+duration validation primitive across both record formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Record parsing
//!
//! Records are split on `,` without trimming. Day records carry
//! `<steps>,<duration>`; training records carry
//! `<steps>,<activity>,<duration>`. Both go through
//! [`parse_steps_and_duration`], the training parser only adds the label.

use stride_core::constants::record::{
    DAY_RECORD_FIELDS, FIELD_DELIMITER, TRAINING_RECORD_FIELDS,
};
use stride_core::errors::ValidationError;
use stride_core::models::ActivityRecord;
use tracing::debug;

use crate::duration::parse_duration;

/// Validate a raw step count and duration pair
///
/// # Errors
///
/// Returns `InvalidSteps` if the step field is not an integer,
/// `NonPositiveSteps` if it is zero or negative, and `InvalidDuration` if the
/// duration text does not parse.
pub fn parse_steps_and_duration(
    steps: &str,
    duration: &str,
) -> Result<ActivityRecord, ValidationError> {
    let parsed: i64 = steps.parse().map_err(|_| {
        debug!(field = "steps", value = %steps, "rejected non-integer step count");
        ValidationError::InvalidSteps {
            value: steps.to_owned(),
        }
    })?;

    let steps = u64::try_from(parsed)
        .ok()
        .filter(|count| *count > 0)
        .ok_or_else(|| {
            debug!(field = "steps", value = parsed, "rejected non-positive step count");
            ValidationError::NonPositiveSteps { value: parsed }
        })?;

    let duration = parse_duration(duration).inspect_err(|err| {
        debug!(field = "duration", error = %err, "rejected duration");
    })?;

    Ok(ActivityRecord::new(steps, duration))
}

/// Parse a day record `<steps>,<duration>`
///
/// # Errors
///
/// Returns `FieldCount` unless the record has exactly two fields, otherwise
/// any error from [`parse_steps_and_duration`].
pub fn parse_step_record(data: &str) -> Result<ActivityRecord, ValidationError> {
    let fields = split_fields(data, DAY_RECORD_FIELDS)?;
    parse_steps_and_duration(fields[0], fields[1])
}

/// Parse a training record `<steps>,<activity>,<duration>`
///
/// The activity label is kept verbatim; classification happens later.
///
/// # Errors
///
/// Returns `FieldCount` unless the record has exactly three fields, otherwise
/// any error from [`parse_steps_and_duration`].
pub fn parse_training_record(data: &str) -> Result<ActivityRecord, ValidationError> {
    let fields = split_fields(data, TRAINING_RECORD_FIELDS)?;
    let record = parse_steps_and_duration(fields[0], fields[2])?;
    Ok(record.with_label(fields[1]))
}

fn split_fields(data: &str, expected: usize) -> Result<Vec<&str>, ValidationError> {
    let fields: Vec<&str> = data.split(FIELD_DELIMITER).collect();
    if fields.len() != expected {
        debug!(expected, actual = fields.len(), "rejected record field count");
        return Err(ValidationError::FieldCount {
            expected,
            actual: fields.len(),
        });
    }
    Ok(fields)
}
