//! Type definitions module
//!
//! Core types shared by the projection engine, the form, and the CLI.

pub mod model;
pub mod input;

// Re-export commonly used types
pub use model::CompletionModel;
pub use input::PredictionInput;
