use expense_config::ConfigError;
use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failures that end the interactive session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Terminal error: {0}")]
    Readline(#[from] ReadlineError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CliError {
    /// A line arrived but could not be decoded as text. The offending bytes
    /// are already consumed, so the session can carry on.
    pub fn is_undecodable_input(&self) -> bool {
        match self {
            CliError::Io(err) | CliError::Readline(ReadlineError::Io(err)) => {
                err.kind() == std::io::ErrorKind::InvalidData
            }
            #[cfg(windows)]
            CliError::Readline(ReadlineError::Decode(_)) => true,
            _ => false,
        }
    }
}
