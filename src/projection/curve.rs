//! Day-by-day completion curve
//!
//! Days up to "today" are interpolated linearly from zero to the observed
//! count. Days after today follow the model's shape from the observed count
//! towards the projected final count.

use crate::types::{CompletionModel, PredictionInput};
use serde::Serialize;
use std::fmt;

/// Whether a point is observed history or a projection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurvePhase {
    Historical,
    Projected,
}

impl fmt::Display for CurvePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurvePhase::Historical => write!(f, "Current"),
            CurvePhase::Projected => write!(f, "Predicted"),
        }
    }
}

/// One day of the completion curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurvePoint {
    pub day: u32,
    pub students: u32,
    pub phase: CurvePhase,
}

/// Generate one point per day from 0 to `total_days` inclusive.
///
/// `final_count` is the capped projection from
/// [`predict_final`](super::predict_final).
pub fn generate_curve(
    input: &PredictionInput,
    model: CompletionModel,
    final_count: f64,
) -> Vec<CurvePoint> {
    let total = input.total_students() as f64;
    let fulfilled = input.fulfilled_students() as f64;
    let days_passed = input.days_passed();
    let days_left = input.days_left();

    (0..=input.total_days())
        .map(|day| {
            let (students, phase) = if day <= days_passed {
                let students = if days_passed == 0 {
                    fulfilled
                } else {
                    day as f64 / days_passed as f64 * fulfilled
                };
                (students, CurvePhase::Historical)
            } else {
                // day > days_passed implies days_left >= 1
                let remaining_time_ratio = (day - days_passed) as f64 / days_left as f64;
                let prediction_factor = model.shape(remaining_time_ratio);
                let predicted_from_now = (final_count - fulfilled) * prediction_factor;
                (fulfilled + predicted_from_now, CurvePhase::Projected)
            };

            CurvePoint {
                day,
                students: students.clamp(0.0, total).round() as u32,
                phase,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::predict_final;

    fn curve_for(
        total: u32,
        fulfilled: u32,
        days_left: u32,
        total_days: u32,
        model: CompletionModel,
    ) -> Vec<CurvePoint> {
        let input = PredictionInput::new(total, fulfilled, days_left, total_days).unwrap();
        let projection = predict_final(&input, model);
        generate_curve(&input, model, projection.final_count)
    }

    #[test]
    fn test_one_point_per_day() {
        let curve = curve_for(30, 5, 3, 14, CompletionModel::Linear);
        assert_eq!(curve.len(), 15);
        assert_eq!(curve.first().unwrap().day, 0);
        assert_eq!(curve.last().unwrap().day, 14);
    }

    #[test]
    fn test_linear_example_curve() {
        let curve = curve_for(30, 5, 3, 14, CompletionModel::Linear);
        assert_eq!(curve[0].students, 0);
        assert_eq!(curve[11].students, 5);
        assert_eq!(curve[11].phase, CurvePhase::Historical);
        assert_eq!(curve[12].phase, CurvePhase::Projected);
        assert_eq!(curve[14].students, 11);
    }

    #[test]
    fn test_fresh_assignment_starts_at_fulfilled() {
        // Nothing has elapsed yet, so the only historical point is today.
        let curve = curve_for(20, 4, 10, 10, CompletionModel::SquareRoot);
        assert_eq!(curve[0].students, 4);
        assert_eq!(curve[0].phase, CurvePhase::Historical);
        assert!(curve[1..].iter().all(|p| p.phase == CurvePhase::Projected));
        assert_eq!(curve[10].students, 20);
    }

    #[test]
    fn test_past_due_is_all_historical() {
        let curve = curve_for(12, 6, 0, 6, CompletionModel::Exponential);
        assert!(curve.iter().all(|p| p.phase == CurvePhase::Historical));
        assert_eq!(curve[3].students, 3);
        assert_eq!(curve[6].students, 6);
    }

    #[test]
    fn test_capped_curve_stays_within_class() {
        let curve = curve_for(20, 18, 10, 10, CompletionModel::Exponential);
        assert!(curve.iter().all(|p| p.students <= 20));
        assert_eq!(curve.last().unwrap().students, 20);
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(CurvePhase::Historical.to_string(), "Current");
        assert_eq!(CurvePhase::Projected.to_string(), "Predicted");
    }
}
