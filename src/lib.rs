//! classpredict - Class Assignment Predictor
//!
//! Projects how many students will have completed an assignment by its due
//! date, given a completion model and four class statistics, and renders the
//! day-by-day completion curve in the terminal.
//!
//! # Architecture
//!
//! - **projection**: final-count calculator, curve generator, result summary
//! - **validation**: raw form fields to validated input
//! - **wizard**: the three-step interactive form
//! - **chart**: text rendering of the curve
//! - **cli**: arguments and TOML configuration

pub mod errors;
pub mod types;
pub mod projection;
pub mod validation;
pub mod chart;
pub mod wizard;
pub mod cli;

// Re-export commonly used types
pub use errors::{PredictorError, Result, ValidationError};
pub use projection::{generate_curve, predict_final, CurvePoint, PredictionSummary, Projection};
pub use types::{CompletionModel, PredictionInput};
