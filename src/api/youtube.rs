use crate::errors::{CommentScopeError, CommentScopeResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static VIDEO_URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:youtube\.com|youtube-nocookie\.com)/(?:watch\?(?:[^#]*&)?v=|shorts/|embed/|live/|v/)([A-Za-z0-9_-]+)",
    )
    .unwrap()
});

static SHORT_URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"youtu\.be/([A-Za-z0-9_-]+)").unwrap());

static BARE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub String);

impl VideoId {
    pub fn new(value: impl Into<String>) -> CommentScopeResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(CommentScopeError::validation("video id must not be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Accepts either a bare video id or any common YouTube URL form.
    pub fn parse(input: &str) -> CommentScopeResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(CommentScopeError::validation(
                "video URL or id must not be empty",
            ));
        }

        if let Some(video_id) = extract_video_id(input) {
            return Ok(video_id);
        }

        if BARE_ID_REGEX.is_match(input) {
            return Ok(Self(input.to_string()));
        }

        Err(CommentScopeError::validation(format!(
            "could not find a YouTube video id in '{}'",
            input
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Data API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq, derive_more::Display)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// First few characters followed by an ellipsis, for logs
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(4).collect();
        format!("{}...", prefix)
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiKey").field(&self.masked()).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageToken(pub String);

pub fn extract_video_id(url: &str) -> Option<VideoId> {
    VIDEO_URL_REGEX
        .captures(url)
        .or_else(|| SHORT_URL_REGEX.captures(url))
        .and_then(|cap| cap.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
}
