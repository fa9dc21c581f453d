//! Command-line argument parsing for classpredict
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use crate::errors::ValidationError;
use crate::types::{CompletionModel, PredictionInput};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// classpredict - Predict how many students will finish an assignment on time
#[derive(Parser, Debug)]
#[command(name = "classpredict")]
#[command(author = "Jerome (Kubashen) Naidoo")]
#[command(version)]
#[command(about = "Project class assignment completion by the due date", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand (defaults to the interactive form)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive guided form
    Start,

    /// Compute a single prediction without prompting
    Predict(PredictArgs),

    /// Display current configuration
    Config,
}

/// Flags for the one-shot prediction
#[derive(ClapArgs, Debug, Clone)]
pub struct PredictArgs {
    /// Completion model: linear, exponential or sqrt
    #[arg(short, long, value_parser = parse_model)]
    pub model: CompletionModel,

    /// Number of students in the class
    #[arg(long)]
    pub students: u32,

    /// Number of students who have already completed the assignment
    #[arg(long)]
    pub completed: u32,

    /// Days left until the due date
    #[arg(long)]
    pub days_left: u32,

    /// Total days allotted for the assignment
    #[arg(long)]
    pub total_days: u32,

    /// Print the prediction as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the curve chart
    #[arg(long)]
    pub no_chart: bool,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl PredictArgs {
    /// Validate the flags into a prediction input
    pub fn input(&self) -> Result<PredictionInput, ValidationError> {
        PredictionInput::new(self.students, self.completed, self.days_left, self.total_days)
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter directive for this level
    pub fn log_level(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::VeryVerbose => "debug",
        }
    }
}

fn parse_model(s: &str) -> Result<CompletionModel, String> {
    s.parse::<CompletionModel>().map_err(|e| e.to_string())
}
