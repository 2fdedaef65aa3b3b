use std::fmt::{self, Debug, Display};
use std::io;

/// Provides `EpigridError` and maps other errors to
/// convert to an `EpigridError`
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum EpigridError {
    IoError(io::Error),
    JsonError(serde_json::Error),
    CSVError(csv::Error),
    ParamsError(String),
}

impl From<io::Error> for EpigridError {
    fn from(error: io::Error) -> Self {
        EpigridError::IoError(error)
    }
}

impl From<serde_json::Error> for EpigridError {
    fn from(error: serde_json::Error) -> Self {
        EpigridError::JsonError(error)
    }
}

impl From<csv::Error> for EpigridError {
    fn from(error: csv::Error) -> Self {
        EpigridError::CSVError(error)
    }
}

impl From<String> for EpigridError {
    fn from(error: String) -> Self {
        EpigridError::ParamsError(error)
    }
}

impl From<&str> for EpigridError {
    fn from(error: &str) -> Self {
        EpigridError::ParamsError(error.to_string())
    }
}

impl std::error::Error for EpigridError {}

impl Display for EpigridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {self:?}")?;
        Ok(())
    }
}
