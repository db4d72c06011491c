use expense_config::Config;
use expense_core::ExpenseStore;

use crate::cli::core::CommandError;
use crate::cli::io::{LineRead, LineSource};
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// State shared by every menu action for the lifetime of one session.
pub struct ShellContext {
    pub mode: CliMode,
    pub store: ExpenseStore,
    pub config: Config,
    pub last_command: Option<String>,
    pub running: bool,
    input: Box<dyn LineSource>,
}

impl ShellContext {
    pub fn new(mode: CliMode, config: Config, input: Box<dyn LineSource>) -> Self {
        Self {
            mode,
            store: ExpenseStore::new(),
            config,
            last_command: None,
            running: true,
            input,
        }
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<LineRead, CliError> {
        self.input.read_line(prompt)
    }

    /// Asks one question inside a menu action. Ctrl+C cancels the action and
    /// end of input ends the session.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, CommandError> {
        match self.read_line(prompt)? {
            LineRead::Line(line) => Ok(line),
            LineRead::Interrupted => Err(CommandError::Cancelled),
            LineRead::Eof => Err(CommandError::InputClosed),
        }
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, last_command: {:?}, expenses: {} }}",
            self.running,
            self.last_command,
            self.store.len()
        )
    }
}
