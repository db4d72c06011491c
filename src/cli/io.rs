use std::fmt;
use std::io::{self, BufRead};

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::cli::output;
use crate::errors::CliError;

/// Print an informational message via the standard CLI output helpers.
pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Outcome of asking for one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineRead {
    Line(String),
    Interrupted,
    Eof,
}

/// Where the shell gets its input from.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<LineRead, CliError>;
}

/// Line editor backed by rustyline, used for interactive sessions.
pub struct ReadlineSource {
    editor: DefaultEditor,
}

impl ReadlineSource {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str) -> Result<LineRead, CliError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str()).ok();
                }
                Ok(LineRead::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(LineRead::Interrupted),
            Err(ReadlineError::Eof) => Ok(LineRead::Eof),
            Err(err) => Err(err.into()),
        }
    }
}

/// Reads answers line by line without echoing prompts, for piped input.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<LineRead, CliError> {
        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            return Ok(LineRead::Eof);
        }
        // The whole line is consumed before decoding so a bad line never
        // poisons the next read.
        let text = String::from_utf8(buffer)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        let line = text.trim_end_matches(|ch: char| ch == '\n' || ch == '\r').to_string();
        Ok(LineRead::Line(line))
    }
}
