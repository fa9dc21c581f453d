//! Display manager for the guided form
//!
//! All terminal output of the interactive flow goes through here:
//! step headers, the model menu, inline validation errors and the
//! result view with its chart.

use crate::chart::{ChartOptions, CurveChart};
use crate::errors::ValidationError;
use crate::projection::PredictionSummary;
use crate::types::CompletionModel;
use crate::wizard::commands::help_entries;
use crate::wizard::history::PredictionRecord;
use colored::*;
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{self, Write};

const WIDTH: usize = 64;

/// Display manager for the form UI
pub struct DisplayManager {
    /// `None` hides the curve chart
    chart: Option<ChartOptions>,
}

impl DisplayManager {
    pub fn new(chart: Option<ChartOptions>) -> Self {
        DisplayManager { chart }
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        let rule = "=".repeat(WIDTH);
        println!("\n{}", rule.cyan());
        println!("{}", format!("  CLASS ASSIGNMENT PREDICTOR {}", version).bold().cyan());
        println!("{}", "  Predicting classroom performance with mathematics".dimmed());
        println!("{}\n", rule.cyan());
        println!(
            "Answer each prompt (or {} for commands, {} to quit)\n",
            "/help".green(),
            "/exit".green()
        );
    }

    /// Step 1: the model menu
    pub fn show_model_menu(&self, default: Option<CompletionModel>) {
        self.show_section("How does your class complete assignments?");
        println!("{}", "Select the model that best describes your students' work habits.".dimmed());
        println!();
        for model in CompletionModel::ALL {
            let marker = if Some(model) == default {
                " (default)".dimmed().to_string()
            } else {
                String::new()
            };
            println!(
                "  {}. {}{}",
                model.menu_index().to_string().cyan(),
                model.title().bold(),
                marker
            );
            println!("     {}", model.description().dimmed());
        }
        println!();
    }

    /// Step 2: header for the statistics form
    pub fn show_form_header(&self, model: CompletionModel) {
        self.show_section("Class Statistics");
        println!("{}", "Enter the current numbers for your projection.".dimmed());
        println!(
            "{} {}  {}",
            "Model:".dimmed(),
            model.title().cyan(),
            format!("({} to change)", "/back".green()).dimmed()
        );
        println!();
    }

    /// Inline validation failure on the statistics step
    pub fn show_validation_error(&self, error: &ValidationError) {
        println!("{} {}", "✗".red().bold(), error.to_string().red());
        println!("{}", "Please correct the values and submit again.".dimmed());
        println!();
    }

    /// Step 3: the full result view
    pub fn show_result(&self, summary: &PredictionSummary) {
        println!();
        let icon = if summary.is_capped() { "◆".green() } else { "✓".cyan() };
        println!("{} {}", icon.bold(), summary.headline().bold());
        println!("  {}", summary.basis().dimmed());

        if summary.is_capped() {
            println!("  {}", "FULL CAPACITY REACHED".green().bold());
        }

        if let Some(options) = self.chart {
            self.show_section("Projected Completion Curve");
            let chart = CurveChart::new(&summary.curve, summary.input.total_students(), options);
            println!("{}", chart.render());
        }

        println!();
        let bar = self.show_completion_bar(summary.rounded_final, summary.input.total_students());
        bar.abandon();
        println!(
            "  {:<18} {}",
            "Completion Rate".dimmed(),
            format!("{:.1}%", summary.completion_percentage).bold()
        );
        let slots = format!("{} Students", summary.remaining_slots);
        let slots = if summary.is_capped() { slots.green() } else { slots.yellow() };
        println!("  {:<18} {}", "Remaining Slots".dimmed(), slots.bold());
        println!();
    }

    /// What the user can do from the result step
    pub fn show_next_steps(&self) {
        println!(
            "Press {} to start a new prediction ({} to edit these numbers)",
            "Enter".green(),
            "/back".green()
        );
    }

    /// Static bar showing completed out of total students
    pub fn show_completion_bar(&self, completed: u32, total: u32) -> ProgressBar {
        let pb = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stdout());
        let style = ProgressStyle::with_template("  [{bar:40.cyan/blue}] {pos}/{len} students")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        pb.set_style(style);
        pb.set_position(completed.min(total) as u64);
        pb
    }

    /// Predictions made this session
    pub fn show_history(&self, records: &[&PredictionRecord]) {
        if records.is_empty() {
            println!("{}", "No predictions yet.".yellow());
            return;
        }

        self.show_section(&format!("Prediction History (last {}):", records.len()));
        for (i, record) in records.iter().enumerate() {
            let capped = if record.is_capped {
                " capped".green().to_string()
            } else {
                String::new()
            };
            println!(
                "  {}. {} {} → {}/{}{} {}",
                (records.len() - i).to_string().cyan(),
                record.made_at.format("%H:%M:%S").to_string().dimmed(),
                record.model.title(),
                record.rounded_final.to_string().bold(),
                record.total_students,
                capped,
                format!(
                    "(done {}, {} of {} days left)",
                    record.fulfilled_students, record.days_left, record.total_days
                )
                .dimmed()
            );
        }
        println!();
    }

    /// Display help information
    pub fn show_help(&self) {
        self.show_section("Available Commands:");
        for (cmd, desc) in help_entries() {
            println!("  {:<20} {}", cmd.green(), desc);
        }
        println!("\n{}", "Usage:".bold());
        println!("  - Pick a model by number or name, then answer the four questions");
        println!("  - Press {} to keep a pre-filled value", "Enter".cyan());
        println!("  - Press {} or {} to exit", "Ctrl-D".cyan(), "/exit".cyan());
        println!();
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        println!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        println!("{} {}", "Info:".cyan(), info);
    }

    /// Show section header
    pub fn show_section(&self, title: &str) {
        println!("\n{}", title.bold().cyan());
        println!("{}", "-".repeat(60).cyan());
    }

    /// Clear screen
    pub fn clear_screen(&self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        io::stdout().flush()
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(Some(ChartOptions::default()))
    }
}
