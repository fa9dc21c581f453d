//! Everything the result step shows for a single prediction

use crate::projection::{generate_curve, predict_final, CurvePoint, Projection};
use crate::types::{CompletionModel, PredictionInput};
use serde::Serialize;

/// A finished prediction, ready to render or serialize
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionSummary {
    pub model: CompletionModel,
    pub input: PredictionInput,
    pub projection: Projection,
    /// Final count rounded for display
    pub rounded_final: u32,
    /// `final / total_students * 100`, using the unrounded final
    pub completion_percentage: f64,
    /// Students still expected to be missing at the due date
    pub remaining_slots: u32,
    pub curve: Vec<CurvePoint>,
}

impl PredictionSummary {
    /// Run the projection and curve for one input
    pub fn compute(input: PredictionInput, model: CompletionModel) -> Self {
        let projection = predict_final(&input, model);
        let curve = generate_curve(&input, model, projection.final_count);
        let rounded_final = projection.final_count.round() as u32;
        let total = input.total_students();

        Self {
            model,
            input,
            projection,
            rounded_final,
            completion_percentage: projection.final_count / total as f64 * 100.0,
            remaining_slots: total.saturating_sub(rounded_final),
            curve,
        }
    }

    pub fn is_capped(&self) -> bool {
        self.projection.is_capped
    }

    /// "N students will have completed the task"
    pub fn headline(&self) -> String {
        let noun = if self.rounded_final == 1 { "student" } else { "students" };
        format!("{} {} will have completed the task", self.rounded_final, noun)
    }

    /// "by the assigned due date based on {model} completion."
    pub fn basis(&self) -> String {
        format!("by the assigned due date based on {} completion.", self.model.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_example_summary() {
        let input = PredictionInput::new(30, 5, 3, 14).unwrap();
        let summary = PredictionSummary::compute(input, CompletionModel::Linear);
        assert_eq!(summary.rounded_final, 11);
        assert!(!summary.is_capped());
        assert!((summary.completion_percentage - 38.095).abs() < 0.01);
        assert_eq!(summary.remaining_slots, 19);
        assert_eq!(summary.curve.len(), 15);
    }

    #[test]
    fn test_capped_summary() {
        let input = PredictionInput::new(20, 18, 10, 10).unwrap();
        let summary = PredictionSummary::compute(input, CompletionModel::Exponential);
        assert!(summary.is_capped());
        assert_eq!(summary.rounded_final, 20);
        assert_eq!(summary.completion_percentage, 100.0);
        assert_eq!(summary.remaining_slots, 0);
    }

    #[test]
    fn test_headline_pluralization() {
        let one = PredictionSummary::compute(
            PredictionInput::new(5, 1, 0, 4).unwrap(),
            CompletionModel::Linear,
        );
        assert_eq!(one.headline(), "1 student will have completed the task");

        let many = PredictionSummary::compute(
            PredictionInput::new(5, 3, 0, 4).unwrap(),
            CompletionModel::Linear,
        );
        assert_eq!(many.headline(), "3 students will have completed the task");
    }

    #[test]
    fn test_basis_mentions_model() {
        let summary = PredictionSummary::compute(
            PredictionInput::new(5, 3, 0, 4).unwrap(),
            CompletionModel::SquareRoot,
        );
        assert_eq!(
            summary.basis(),
            "by the assigned due date based on square root function completion."
        );
    }

    #[test]
    fn test_summary_serializes() {
        let summary = PredictionSummary::compute(
            PredictionInput::new(30, 5, 3, 14).unwrap(),
            CompletionModel::Linear,
        );
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["model"], "linear");
        assert_eq!(json["rounded_final"], 11);
        assert_eq!(json["projection"]["is_capped"], false);
        assert_eq!(json["curve"][0]["phase"], "historical");
    }
}
