//! Submission error types

/// Errors a transport can report for a submission.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Network error while sending the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}")]
    Http {
        /// HTTP status code.
        status: u16,
    },

    /// The snapshot could not be encoded.
    #[error("Failed to encode submission: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The backend refused the message.
    #[error("{0}")]
    Rejected(String),
}

impl SubmitError {
    /// Creates a rejection with a reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}
