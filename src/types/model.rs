//! Completion model variants
//!
//! A completion model is the assumed temporal shape of student submission
//! behavior. Each variant maps the days-left ratio through its own shape
//! function.

use crate::errors::PredictorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a class is assumed to complete assignments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionModel {
    /// Constant pace throughout the duration
    Linear,
    /// Rush towards the deadline
    Exponential,
    /// Early enthusiasm that tapers off
    SquareRoot,
}

impl CompletionModel {
    /// All variants, in menu order
    pub const ALL: [CompletionModel; 3] = [
        CompletionModel::Linear,
        CompletionModel::Exponential,
        CompletionModel::SquareRoot,
    ];

    /// Apply the model's shape function to a ratio in [0, 1]
    pub fn shape(&self, ratio: f64) -> f64 {
        match self {
            CompletionModel::Linear => ratio,
            CompletionModel::Exponential => ratio.powf(1.5),
            CompletionModel::SquareRoot => ratio.sqrt(),
        }
    }

    /// Short title used in the model menu
    pub fn title(&self) -> &'static str {
        match self {
            CompletionModel::Linear => "Linearly",
            CompletionModel::Exponential => "Exponentially",
            CompletionModel::SquareRoot => "Square Root",
        }
    }

    /// Label used in sentences ("based on {label} completion")
    pub fn label(&self) -> &'static str {
        match self {
            CompletionModel::Linear => "linearly",
            CompletionModel::Exponential => "exponentially",
            CompletionModel::SquareRoot => "square root function",
        }
    }

    /// One-line description of the submission behavior
    pub fn description(&self) -> &'static str {
        match self {
            CompletionModel::Linear => {
                "Students finish at a constant pace throughout the duration."
            }
            CompletionModel::Exponential => {
                "Most students rush to finish as the deadline approaches."
            }
            CompletionModel::SquareRoot => "High initial enthusiasm that tapers off over time.",
        }
    }

    /// 1-based position in the model menu
    pub fn menu_index(&self) -> usize {
        match self {
            CompletionModel::Linear => 1,
            CompletionModel::Exponential => 2,
            CompletionModel::SquareRoot => 3,
        }
    }
}

impl fmt::Display for CompletionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CompletionModel {
    type Err = PredictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "linear" | "linearly" => Ok(CompletionModel::Linear),
            "2" | "exp" | "exponential" | "exponentially" => Ok(CompletionModel::Exponential),
            "3" | "sqrt" | "square-root" | "square_root" | "squareroot" | "square root"
            | "square root function" => Ok(CompletionModel::SquareRoot),
            other => Err(PredictorError::UnknownModel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_functions() {
        assert_eq!(CompletionModel::Linear.shape(0.25), 0.25);
        assert!((CompletionModel::Exponential.shape(0.25) - 0.125).abs() < 1e-12);
        assert!((CompletionModel::SquareRoot.shape(0.25) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_shape_endpoints() {
        for model in CompletionModel::ALL {
            assert_eq!(model.shape(0.0), 0.0);
            assert_eq!(model.shape(1.0), 1.0);
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("linear".parse::<CompletionModel>().unwrap(), CompletionModel::Linear);
        assert_eq!(
            "Exponentially".parse::<CompletionModel>().unwrap(),
            CompletionModel::Exponential
        );
        assert_eq!("sqrt".parse::<CompletionModel>().unwrap(), CompletionModel::SquareRoot);
        assert_eq!(" 3 ".parse::<CompletionModel>().unwrap(), CompletionModel::SquareRoot);
    }

    #[test]
    fn test_parse_unknown() {
        assert!("logarithmic".parse::<CompletionModel>().is_err());
        assert!("".parse::<CompletionModel>().is_err());
    }

    #[test]
    fn test_menu_index_matches_parse() {
        for model in CompletionModel::ALL {
            let parsed: CompletionModel = model.menu_index().to_string().parse().unwrap();
            assert_eq!(parsed, model);
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(CompletionModel::SquareRoot.to_string(), "square root function");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CompletionModel::SquareRoot).unwrap();
        assert_eq!(json, "\"square_root\"");
        let back: CompletionModel = serde_json::from_str("\"exponential\"").unwrap();
        assert_eq!(back, CompletionModel::Exponential);
    }
}
