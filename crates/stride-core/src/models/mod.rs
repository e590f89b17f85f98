// ABOUTME: Core data models for step-based activity metrics
// ABOUTME: Re-exports activity records, activity types and the user profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Data models shared by the parser, calculator and formatters.
//!
//! None of these types outlive a single computation: a record is parsed,
//! measured and formatted, then dropped.

mod activity;
mod athlete;

pub use activity::{duration_hours, ActivityRecord, ActivityType};
pub use athlete::UserProfile;
