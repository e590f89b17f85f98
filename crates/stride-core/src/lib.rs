// ABOUTME: Core types and constants for step-based activity metrics
// ABOUTME: Foundation crate with validation errors, activity models, and formula constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Stride Core
//!
//! Foundation crate providing shared types and constants for the stride
//! metrics workspace. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: `ValidationError` taxonomy and `ErrorCode` classification
//! - **constants**: Formula coefficients, unit conversions, labels and report messages
//! - **models**: Activity records, activity types and the user profile

/// Validation error taxonomy with standard error codes
pub mod errors;

/// Formula coefficients, unit conversions and report constants
pub mod constants;

/// Core data models (`ActivityType`, `ActivityRecord`, `UserProfile`)
pub mod models;
