//! Menu dispatch and error reporting for the shell loop.

use expense_core::CoreError;
use thiserror::Error;

use super::commands;
use super::io as cli_io;
use super::menu::{self, MainMenuChoice};
pub use super::shell_context::{CliMode, ShellContext};
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Please enter a valid amount (number).")]
    InvalidAmount(String),
    #[error("Invalid choice! Please try again.")]
    InvalidChoice(String),
    #[error("Invalid choice!")]
    InvalidFilterChoice(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Terminal(CliError),
    #[error("An unexpected error occurred: {0}")]
    UnreadableInput(String),
    #[error("Operation cancelled.")]
    Cancelled,
    #[error("input closed")]
    InputClosed,
    #[error("exit requested")]
    ExitRequested,
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        if err.is_undecodable_input() {
            CommandError::UnreadableInput(err.to_string())
        } else {
            CommandError::Terminal(err)
        }
    }
}

impl ShellContext {
    /// Runs the action selected at the main menu.
    pub fn dispatch(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        self.last_command = Some(line.trim().to_string());
        let choice =
            MainMenuChoice::parse(line).ok_or_else(|| CommandError::InvalidChoice(line.to_string()))?;
        tracing::debug!(?choice, "dispatching menu choice");

        let result = match choice {
            MainMenuChoice::AddExpense => commands::add_expense(self),
            MainMenuChoice::ViewExpenses => commands::view_expenses(self),
            MainMenuChoice::Summary => commands::show_summary(self),
            MainMenuChoice::Exit => commands::exit(self),
        };

        match result {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            Err(CommandError::InputClosed) => {
                commands::farewell_short();
                self.running = false;
                Ok(LoopControl::Exit)
            }
            Err(err) => Err(err),
        }
    }

    /// Prints a recoverable error and keeps the session alive. Terminal
    /// failures are handed back to end the loop.
    pub fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested | CommandError::InputClosed => Ok(()),
            CommandError::Terminal(err) => Err(err),
            CommandError::InvalidChoice(input) => {
                cli_io::print_error("Invalid choice! Please try again.");
                if let Some(hint) = menu::suggest(&input) {
                    cli_io::print_info(format!("Did you mean `{}`?", hint));
                }
                Ok(())
            }
            CommandError::InvalidAmount(input) => {
                tracing::debug!(%input, "rejected amount");
                cli_io::print_error("Please enter a valid amount (number).");
                Ok(())
            }
            CommandError::UnreadableInput(detail) => {
                tracing::warn!(%detail, "discarded undecodable input line");
                cli_io::print_error(format!("An unexpected error occurred: {detail}"));
                cli_io::print_info("Please try again.");
                Ok(())
            }
            CommandError::Cancelled => {
                cli_io::print_info("\nOperation cancelled.");
                Ok(())
            }
            other => {
                cli_io::print_error(&other);
                Ok(())
            }
        }
    }
}
