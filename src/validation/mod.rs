//! Form input validation
//!
//! Turns the four raw text fields of the statistics step into a
//! [`PredictionInput`](crate::types::PredictionInput), or the first
//! validation message that applies.

pub mod fields;
pub mod validator;

pub use fields::{FormField, FormFields};
pub use validator::{parse_count, validate};
