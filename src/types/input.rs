//! Validated class statistics

use crate::errors::ValidationError;
use serde::Serialize;

/// Longest assignment duration accepted, in days
pub const MAX_TOTAL_DAYS: u32 = 3650;

/// The four class statistics a projection is computed from.
///
/// Only constructible through [`PredictionInput::new`], so every value in
/// circulation satisfies `fulfilled <= total`, `days_left <= total_days`
/// both totals are at least 1 and `total_days <= MAX_TOTAL_DAYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionInput {
    total_students: u32,
    fulfilled_students: u32,
    days_left: u32,
    total_days: u32,
}

impl PredictionInput {
    /// Validate and build an input record
    pub fn new(
        total_students: u32,
        fulfilled_students: u32,
        days_left: u32,
        total_days: u32,
    ) -> Result<Self, ValidationError> {
        if fulfilled_students > total_students {
            return Err(ValidationError::FulfilledExceedsTotal);
        }
        if days_left > total_days {
            return Err(ValidationError::DaysLeftExceedsTotal);
        }
        if total_students == 0 {
            return Err(ValidationError::NoStudents);
        }
        if total_days == 0 {
            return Err(ValidationError::NoDays);
        }
        if total_days > MAX_TOTAL_DAYS {
            return Err(ValidationError::DurationTooLong);
        }

        Ok(Self {
            total_students,
            fulfilled_students,
            days_left,
            total_days,
        })
    }

    pub fn total_students(&self) -> u32 {
        self.total_students
    }

    pub fn fulfilled_students(&self) -> u32 {
        self.fulfilled_students
    }

    pub fn days_left(&self) -> u32 {
        self.days_left
    }

    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Days already elapsed
    pub fn days_passed(&self) -> u32 {
        self.total_days - self.days_left
    }

    /// Fraction of the assignment duration still remaining
    pub fn remaining_ratio(&self) -> f64 {
        if self.total_days == 0 {
            return 0.0;
        }
        self.days_left as f64 / self.total_days as f64
    }
}
