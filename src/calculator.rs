// ABOUTME: Distance, mean speed and calorie calculations for step-based activities
// ABOUTME: Pure formulas parameterised by stride length and calorie coefficients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Metrics Calculator
//!
//! Formulas:
//!
//! - distance (km) = `steps * stride_length_m / 1000`
//! - mean speed (km/h) = `distance / hours`, or `0` when the duration is not positive
//! - running calories = `(18.0 * speed - 20.0) * weight`
//! - walking calories = `(0.035 * weight + speed^2 / height * 0.029) * hours * 60`
//!
//! Coefficients come from [`MetricsConfig`]. Every function is total over
//! validated input: no error paths remain once a record has parsed.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use stride_core::constants::units::{METERS_PER_KM, MINUTES_PER_HOUR};
use stride_core::models::{duration_hours, ActivityRecord, ActivityType, UserProfile};

use crate::config::MetricsConfig;

/// Metrics computed for one activity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityMetrics {
    /// Distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned (kcal)
    pub calories: f64,
}

/// Metrics calculator for step-based activities
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetricsCalculator {
    config: MetricsConfig,
}

impl MetricsCalculator {
    /// Create a calculator over the given formula configuration
    #[must_use]
    pub const fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    /// Formula configuration in use
    #[must_use]
    pub const fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// Distance covered in kilometers
    #[must_use]
    pub fn distance_km(&self, steps: u64) -> f64 {
        steps as f64 * self.config.stride_length_m / METERS_PER_KM
    }

    /// Mean speed in km/h, `0.0` when the duration is zero or negative
    #[must_use]
    pub fn mean_speed_kmh(&self, steps: u64, duration: TimeDelta) -> f64 {
        if duration <= TimeDelta::zero() {
            return 0.0;
        }
        self.distance_km(steps) / duration_hours(duration)
    }

    /// Calories burned while running
    #[must_use]
    pub fn running_calories(&self, steps: u64, weight_kg: f64, duration: TimeDelta) -> f64 {
        let running = &self.config.running;
        let speed = self.mean_speed_kmh(steps, duration);
        running.speed_multiplier.mul_add(speed, -running.speed_shift) * weight_kg
    }

    /// Calories burned while walking
    #[must_use]
    pub fn walking_calories(
        &self,
        steps: u64,
        weight_kg: f64,
        height_m: f64,
        duration: TimeDelta,
    ) -> f64 {
        let walking = &self.config.walking;
        let speed = self.mean_speed_kmh(steps, duration);
        let weight_term = walking.weight_multiplier * weight_kg;
        let speed_term = (speed * speed / height_m) * walking.height_multiplier;
        (weight_term + speed_term) * duration_hours(duration) * MINUTES_PER_HOUR
    }

    /// All metrics for a record, `None` for unknown activity types
    #[must_use]
    pub fn measure(
        &self,
        record: &ActivityRecord,
        activity: &ActivityType,
        profile: &UserProfile,
    ) -> Option<ActivityMetrics> {
        let calories = match activity {
            ActivityType::Running => {
                self.running_calories(record.steps, profile.weight_kg, record.duration)
            }
            ActivityType::Walking => self.walking_calories(
                record.steps,
                profile.weight_kg,
                profile.height_m,
                record.duration,
            ),
            ActivityType::Unknown(_) => return None,
        };

        Some(ActivityMetrics {
            distance_km: self.distance_km(record.steps),
            mean_speed_kmh: self.mean_speed_kmh(record.steps, record.duration),
            calories,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.0)
    }

    #[test]
    fn test_distance() {
        let calc = MetricsCalculator::default();
        assert!(close(calc.distance_km(1000), 0.65));
        assert!(close(calc.distance_km(1), 0.00065));
        assert!(close(calc.distance_km(123_456), 123_456.0 * 0.00065));
    }

    #[test]
    fn test_distance_uses_configured_stride() {
        let calc = MetricsCalculator::new(MetricsConfig::default().with_stride_length(0.8));
        assert!(close(calc.distance_km(1000), 0.8));
    }

    #[test]
    fn test_mean_speed_guards_non_positive_duration() {
        let calc = MetricsCalculator::default();
        assert!(calc.mean_speed_kmh(1000, TimeDelta::zero()).abs() < f64::EPSILON);
        assert!(calc.mean_speed_kmh(1000, TimeDelta::minutes(-5)).abs() < f64::EPSILON);
        assert!(close(calc.mean_speed_kmh(1000, TimeDelta::minutes(30)), 1.3));
    }

    #[test]
    fn test_running_calories() {
        let calc = MetricsCalculator::default();
        // 6000 steps in 30 minutes: 3.9 km, 7.8 km/h
        let calories = calc.running_calories(6000, 75.0, TimeDelta::minutes(30));
        assert!(close(calories, (18.0 * 7.8 - 20.0) * 75.0));
    }

    #[test]
    fn test_walking_calories() {
        let calc = MetricsCalculator::default();
        // 1000 steps in 30 minutes: 0.65 km, 1.3 km/h
        let calories = calc.walking_calories(1000, 75.0, 1.75, TimeDelta::minutes(30));
        let expected = (0.035 * 75.0 + (1.3 * 1.3 / 1.75) * 0.029) * 0.5 * 60.0;
        assert!(close(calories, expected));
    }

    #[test]
    fn test_measure_skips_unknown_activity() {
        let calc = MetricsCalculator::default();
        let record = ActivityRecord::new(1000, TimeDelta::minutes(10));
        let profile = UserProfile::new(75.0, 1.75);
        let unknown = ActivityType::Unknown("Плавание".to_owned());
        assert_eq!(calc.measure(&record, &unknown, &profile), None);

        let metrics = calc
            .measure(&record, &ActivityType::Running, &profile)
            .unwrap();
        assert!(close(metrics.distance_km, 0.65));
        assert!(close(metrics.mean_speed_kmh, 3.9));
    }
}
