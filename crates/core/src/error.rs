use thiserror::Error;

/// Why one of the dashboard fetches did not produce data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The server answered with a non-success status. The message stays
    /// generic; the status is kept for logs.
    #[error("Failed to fetch backend data")]
    Status { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response body: {0}")]
    Decode(String),

    #[error("Failed to read {path}: {message}")]
    Io { path: String, message: String },
}

impl LoadError {
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            _ => None,
        }
    }
}
