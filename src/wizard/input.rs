//! Line input for the form using rustyline
//!
//! Supports pre-filled values so that returning to the statistics step
//! shows what was typed before.

use crate::errors::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Input handler wrapping a readline editor with in-memory history
pub struct InputHandler {
    editor: DefaultEditor,
}

impl InputHandler {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(InputHandler { editor })
    }

    /// Read a line, with `initial` already in the edit buffer.
    ///
    /// Returns:
    /// - Ok(Some(input)) for normal input, trimmed
    /// - Ok(None) on Ctrl-C or Ctrl-D
    pub fn read_line(&mut self, prompt: &str, initial: &str) -> Result<Option<String>> {
        let line = if initial.is_empty() {
            self.editor.readline(prompt)
        } else {
            self.editor.readline_with_initial(prompt, (initial, ""))
        };

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Some(trimmed.to_string()))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
