//! Domain error types for critique.
//!
//! Every failure of a review submission ends up as one of these variants. The
//! `Display` text is exactly what the user sees; `reason` fields carry the
//! underlying cause for logs only.

use thiserror::Error;

/// Failures of a review submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// Blank input, caught before any request is made.
    #[error("Please enter some code to review")]
    Validation,

    #[error("Rate limit reached. Please wait a moment and try again.")]
    RateLimited,

    /// The service explained what went wrong.
    #[error("{0}")]
    Remote(String),

    #[error("Failed to analyze code. Please check if the backend is running.")]
    Transport { reason: String },

    /// The service answered with a body that is not a review.
    #[error("Failed to analyze code. Please check if the backend is running.")]
    MalformedResponse { reason: String },

    #[error("Invalid review type: {0}. Must be one of: general, security, performance, style")]
    InvalidReviewType(String),
}

impl ReviewError {
    pub fn transport(reason: impl ToString) -> Self {
        Self::Transport {
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl ToString) -> Self {
        Self::MalformedResponse {
            reason: reason.to_string(),
        }
    }

    /// Diagnostic detail that is not part of the user-facing message.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Transport { reason } | Self::MalformedResponse { reason } => Some(reason),
            _ => None,
        }
    }
}
