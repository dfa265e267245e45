//! Error types for game_picker

use picker_common::LibraryError;
use std::fmt;
use std::path::PathBuf;

/// Unified error type for source adapters and the aggregation pipeline
#[derive(Debug)]
pub enum PickerError {
    /// Credential file or a required credential key is absent
    MissingCredentials { distributor: String, missing: String },
    /// Credential file exists but a line is not a `key value` pair
    InvalidCredentials { path: PathBuf, line: usize },
    /// Library population was attempted before a connection was established
    NotConnected(String),
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Remote API answered, but not with what we asked for
    UnexpectedResponse(String),
    /// Failed to parse JSON
    Parse(serde_json::Error),
    /// File I/O error
    Io(std::io::Error),
    /// Library snapshot could not be read or written
    Library(LibraryError),
}

/// Short alias used throughout the adapters
pub type Error = PickerError;

impl fmt::Display for PickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerError::MissingCredentials {
                distributor,
                missing,
            } => write!(f, "Missing credentials for {}: {}", distributor, missing),
            PickerError::InvalidCredentials { path, line } => {
                write!(
                    f,
                    "Invalid credential entry in {} at line {}",
                    path.display(),
                    line
                )
            }
            PickerError::NotConnected(name) => write!(f, "Distributor {} is not connected", name),
            PickerError::Network(e) => write!(f, "Network error: {}", e),
            PickerError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            PickerError::UnexpectedResponse(msg) => write!(f, "Unexpected response: {}", msg),
            PickerError::Parse(e) => write!(f, "Parse error: {}", e),
            PickerError::Io(e) => write!(f, "I/O error: {}", e),
            PickerError::Library(e) => write!(f, "Library error: {}", e),
        }
    }
}

impl std::error::Error for PickerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PickerError::Network(e) => Some(e),
            PickerError::Parse(e) => Some(e),
            PickerError::Io(e) => Some(e),
            PickerError::Library(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PickerError {
    fn from(err: reqwest::Error) -> Self {
        PickerError::Network(err)
    }
}

impl From<serde_json::Error> for PickerError {
    fn from(err: serde_json::Error) -> Self {
        PickerError::Parse(err)
    }
}

impl From<std::io::Error> for PickerError {
    fn from(err: std::io::Error) -> Self {
        PickerError::Io(err)
    }
}

impl From<LibraryError> for PickerError {
    fn from(err: LibraryError) -> Self {
        PickerError::Library(err)
    }
}

/// Result alias for game_picker operations
pub type Result<T> = std::result::Result<T, PickerError>;
