use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClinicError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Task error: {0}")]
    TaskError(String),
}

impl From<std::io::Error> for ClinicError {
    fn from(err: std::io::Error) -> Self {
        ClinicError::IoError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ClinicError {
    fn from(err: tokio::task::JoinError) -> Self {
        ClinicError::TaskError(err.to_string())
    }
}

impl From<serde_json::Error> for ClinicError {
    fn from(err: serde_json::Error) -> Self {
        ClinicError::ParseError(err.to_string())
    }
}
