use thiserror::Error;

pub type Result<T> = std::result::Result<T, DateError>;

/// Errors raised while turning user input into calendar dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("'{input}' is not a valid YYYYMMDD date")]
    InvalidDateFormat { input: String },
}

impl DateError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        DateError::InvalidDateFormat {
            input: input.into(),
        }
    }

    /// The raw input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            DateError::InvalidDateFormat { input } => input,
        }
    }
}
