//! Completion projection engine
//!
//! Computes how many students are expected to have finished by the due
//! date, and the day-by-day curve leading there. Both are pure functions
//! of a validated [`PredictionInput`] and a [`CompletionModel`].

pub mod curve;
pub mod summary;

pub use curve::{generate_curve, CurvePhase, CurvePoint};
pub use summary::PredictionSummary;

use crate::types::{CompletionModel, PredictionInput};
use serde::Serialize;
use tracing::debug;

/// Result of the projection calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    /// Predicted completions at the due date, capped at class size
    pub final_count: f64,
    /// Prediction before capping
    pub raw_final: f64,
    /// Whether the raw prediction exceeded class size
    pub is_capped: bool,
}

/// Predict the final completion count.
///
/// The model's shape function is applied to the days-left ratio and the
/// result is taken as a fraction of the *whole* class, then added to the
/// students who have already finished.
pub fn predict_final(input: &PredictionInput, model: CompletionModel) -> Projection {
    let total = input.total_students() as f64;
    let newly_fulfilled = model.shape(input.remaining_ratio()) * total;
    let raw_final = input.fulfilled_students() as f64 + newly_fulfilled;
    let is_capped = raw_final > total;
    let final_count = raw_final.min(total);

    debug!(
        model = %model,
        newly_fulfilled,
        raw_final,
        final_count,
        is_capped,
        "projection computed"
    );

    Projection {
        final_count,
        raw_final,
        is_capped,
    }
}
