use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Validation(String),
    Serialization(String),
    Submission(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Serialization(message) => write!(formatter, "Request error: {message}"),
            AppError::Submission(message) => write!(formatter, "Submission failed: {message}"),
        }
    }
}

impl std::error::Error for AppError {}
