// ABOUTME: User profile model supplying body measurements to calorie formulas
// ABOUTME: Weight and height are passed per call and never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Body measurements used by the calorie formulas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height, used as supplied by the walking formula (meters)
    pub height_m: f64,
}

impl UserProfile {
    /// Create a profile without validation
    #[must_use]
    pub const fn new(weight_kg: f64, height_m: f64) -> Self {
        Self {
            weight_kg,
            height_m,
        }
    }

    /// Check that both measurements are finite and positive
    ///
    /// # Errors
    ///
    /// Returns `NonPositiveWeight` or `NonPositiveHeight` for the first bad value
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(ValidationError::NonPositiveWeight {
                value: self.weight_kg,
            });
        }
        if !(self.height_m.is_finite() && self.height_m > 0.0) {
            return Err(ValidationError::NonPositiveHeight {
                value: self.height_m,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_positive_values() {
        assert!(UserProfile::new(75.0, 1.75).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            UserProfile::new(0.0, 1.75).validate(),
            Err(ValidationError::NonPositiveWeight { value: 0.0 })
        );
        assert_eq!(
            UserProfile::new(75.0, -1.0).validate(),
            Err(ValidationError::NonPositiveHeight { value: -1.0 })
        );
        assert!(UserProfile::new(f64::NAN, 1.75).validate().is_err());
        assert!(UserProfile::new(75.0, f64::INFINITY).validate().is_err());
    }
}
