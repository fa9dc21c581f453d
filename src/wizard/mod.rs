//! Interactive guided form
//!
//! Walks the user through three steps (model, statistics, result) on a
//! plain terminal. Every line the user enters is routed through
//! [`WizardSession::handle_line`], which makes the flow testable without a
//! terminal.

pub mod commands;
pub mod display;
pub mod history;
pub mod input;
pub mod state;

use crate::cli::Config;
use crate::errors::Result;
use crate::types::CompletionModel;
use crate::validation::FormField;
use tracing::{debug, warn};

use crate::wizard::commands::{is_command, Command};
pub use crate::wizard::display::DisplayManager;
pub use crate::wizard::history::{PredictionLog, PredictionRecord};
use crate::wizard::input::InputHandler;
pub use crate::wizard::state::{Step, WizardState};

/// Number of history entries shown when no limit is given
const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Guided form session coordinator
///
/// Owns the form state, the in-memory prediction log and the display, and
/// tracks which statistics field is being asked for.
pub struct WizardSession {
    state: WizardState,
    field_cursor: usize,
    history: PredictionLog,
    display: DisplayManager,
    default_model: Option<CompletionModel>,
}

impl WizardSession {
    /// Create a session from configuration
    pub fn new(config: &Config) -> Self {
        let chart = config.display.show_chart.then(|| config.chart_options());
        WizardSession {
            state: WizardState::new(),
            field_cursor: 0,
            history: PredictionLog::new(),
            display: DisplayManager::new(chart),
            default_model: config.default_model(),
        }
    }

    /// Run the form until the user exits
    pub fn run(&mut self, version: &str) -> Result<()> {
        let mut input = InputHandler::new()?;

        self.display.show_banner(version);
        self.display.show_model_menu(self.default_model);

        loop {
            let prompt = self.prompt();
            let initial = self.initial_value().to_string();
            match input.read_line(&prompt, &initial)? {
                Some(line) => {
                    if !self.handle_line(&line)? {
                        break;
                    }
                }
                None => break,
            }
        }

        debug!(predictions = self.history.total_recorded(), "form session ended");
        Ok(())
    }

    /// Handle one line of input.
    ///
    /// Returns false when the session should end.
    pub fn handle_line(&mut self, line: &str) -> Result<bool> {
        if is_command(line) {
            return self.execute(commands::parse(line));
        }

        let line = line.trim();
        match self.state.step().clone() {
            Step::SelectModel => self.handle_model_choice(line),
            Step::EnterStatistics(_) => self.handle_field_value(line),
            Step::ShowResult(_) => {
                if line.is_empty() {
                    self.start_over();
                } else {
                    self.display.show_info("Press Enter to start a new prediction, or type /help.");
                }
            }
        }
        Ok(true)
    }

    /// Prompt for the current step and field
    pub fn prompt(&self) -> String {
        match self.state.step() {
            Step::SelectModel => match self.default_model {
                Some(model) => format!("model [1-3, Enter for {}]> ", model.title()),
                None => "model [1-3]> ".to_string(),
            },
            Step::EnterStatistics(_) => {
                let field = self.current_field();
                if self.state.fields().get(field).is_empty() {
                    format!("{} ({}) ", field.question(), field.placeholder())
                } else {
                    format!("{} ", field.question())
                }
            }
            Step::ShowResult(_) => "> ".to_string(),
        }
    }

    /// Text pre-filled in the edit buffer for the current prompt
    pub fn initial_value(&self) -> &str {
        match self.state.step() {
            Step::EnterStatistics(_) => self.state.fields().get(self.current_field()),
            _ => "",
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn history(&self) -> &PredictionLog {
        &self.history
    }

    /// Statistics field currently being asked for
    pub fn current_field(&self) -> FormField {
        FormField::PROMPT_ORDER[self.field_cursor]
    }

    fn handle_model_choice(&mut self, line: &str) {
        let choice = if line.is_empty() {
            self.default_model
        } else {
            line.parse::<CompletionModel>().ok()
        };

        match choice {
            Some(model) => {
                self.state.select_model(model);
                self.field_cursor = 0;
                self.display.show_form_header(model);
            }
            None => {
                debug!(input = line, "unrecognized model choice");
                self.display.show_warning("Please choose 1, 2 or 3 (or type a model name).");
            }
        }
    }

    fn handle_field_value(&mut self, line: &str) {
        let field = self.current_field();
        self.state.fields_mut().set(field, line);

        if self.field_cursor + 1 < FormField::PROMPT_ORDER.len() {
            self.field_cursor += 1;
            return;
        }

        self.field_cursor = 0;
        match self.state.submit() {
            Ok(Some(summary)) => {
                self.history.record(summary);
                self.display.show_result(summary);
                self.display.show_next_steps();
            }
            Ok(None) => {}
            Err(error) => self.display.show_validation_error(&error),
        }
    }

    fn execute(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::Help => self.display.show_help(),
            Command::Back => {
                self.field_cursor = 0;
                if !self.state.back() {
                    self.display.show_warning("Already at the first step.");
                } else {
                    match self.state.step() {
                        Step::SelectModel => self.display.show_model_menu(self.default_model),
                        Step::EnterStatistics(model) => self.display.show_form_header(*model),
                        Step::ShowResult(_) => {}
                    }
                }
            }
            Command::Reset => self.start_over(),
            Command::History { limit } => {
                let records = self.history.recent(limit.unwrap_or(DEFAULT_HISTORY_LIMIT));
                self.display.show_history(&records);
            }
            Command::Clear => self.display.clear_screen()?,
            Command::Exit => {
                println!("Goodbye!");
                return Ok(false);
            }
            Command::Unknown { input } => {
                warn!(input = %input, "unknown command");
                self.display.show_error(&format!("Unknown command: {}", input));
                self.display.show_info("Type /help for available commands");
            }
        }
        Ok(true)
    }

    fn start_over(&mut self) {
        self.state.reset();
        self.field_cursor = 0;
        self.display.show_model_menu(self.default_model);
    }
}
