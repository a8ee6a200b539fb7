//! Error taxonomy for a single analysis run.
//!
//! Every failure that can abort a run is one of these variants. The classifier
//! and the aggregator never fail, so only the fetch boundary and configuration
//! validation produce them.

use thiserror::Error;

/// Errors surfaced to the presentation boundary.
#[derive(Error, Debug)]
pub enum CommentScopeError {
    /// Unknown or deleted video
    #[error("Video not found: {video_id}")]
    NotFound { video_id: String },

    /// The API reported quota or rate-limit exhaustion
    #[error("YouTube API quota exceeded: {message}")]
    QuotaExceeded { message: String },

    /// Connectivity failure or a server-side error; the whole run may be retried
    #[error("Network error: {message}")]
    TransientNetwork {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// Malformed configuration or input, detected before any request
    #[error("Validation error: {0}")]
    Validation(String),

    /// The video exists but its owner disabled comments
    #[error("Comments are disabled for video {video_id}")]
    CommentsDisabled { video_id: String },

    /// Any other error reply from the API
    #[error("YouTube API error ({status}): {message}")]
    Api {
        status: u16,
        reason: Option<String>,
        message: String,
    },

    /// The reply body could not be decoded into the expected record
    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CommentScopeError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(video_id: impl Into<String>) -> Self {
        Self::NotFound {
            video_id: video_id.into(),
        }
    }

    pub fn transient(message: impl Into<String>) -> Self {
        Self::TransientNetwork {
            message: message.into(),
            source: None,
        }
    }

    /// Whether re-running the whole analysis could succeed without user action
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TransientNetwork { .. })
    }
}

impl From<reqwest::Error> for CommentScopeError {
    fn from(error: reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            "could not connect to the API".to_string()
        } else {
            error.to_string()
        };

        Self::TransientNetwork {
            message,
            source: Some(error),
        }
    }
}

pub type CommentScopeResult<T> = Result<T, CommentScopeError>;
