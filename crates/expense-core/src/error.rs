use expense_domain::DateParseError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid date format `{input}`: expected YYYY-MM-DD")]
    InvalidDateFormat { input: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

impl From<DateParseError> for CoreError {
    fn from(err: DateParseError) -> Self {
        CoreError::InvalidDateFormat {
            input: err.input().to_string(),
        }
    }
}
