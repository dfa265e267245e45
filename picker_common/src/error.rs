//! Error types shared by every library operation

/// Errors produced while querying or persisting a [`Library`](crate::Library)
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// A random pick was requested but there is nothing to choose from
    #[error("library is empty")]
    EmptyLibrary,

    /// Reading or writing a snapshot file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not valid JSON, or a tagged record is missing a field
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, LibraryError>;
