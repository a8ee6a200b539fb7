//! YouTube Data API v3 境界
//!
//! APIレスポンスを型付きレコードとしてデコードし、
//! エラーレスポンスをエラー分類にマッピングする

use crate::api::youtube::{ApiKey, PageToken, VideoId};
use crate::errors::{CommentScopeError, CommentScopeResult};
use crate::utils;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::{Duration, Instant};

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// commentThreads.list の1ページあたり最大件数
pub const MAX_PAGE_SIZE: u32 = 100;

const REQUEST_TIMEOUT_SECS: u64 = 15;

/// videos.list レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListResponse {
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
    pub statistics: VideoStatistics,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoSnippet {
    pub title: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
}

/// 統計値はAPI上では10進数の文字列。非公開の値は省略される
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
    #[serde(default)]
    pub like_count: Option<String>,
    #[serde(default)]
    pub comment_count: Option<String>,
}

/// commentThreads.list レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    pub items: Vec<CommentThread>,
    #[serde(default)]
    pub next_page_token: Option<PageToken>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
    #[serde(default)]
    pub total_reply_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    #[serde(default)]
    pub author_display_name: String,
    pub text_display: String,
    #[serde(default)]
    pub like_count: u64,
    pub published_at: DateTime<Utc>,
}

/// APIエラーレスポンス
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub domain: String,
}

/// commentThreads.list のリクエストパラメータ
#[derive(Debug, Clone)]
pub struct CommentThreadsRequest {
    pub video_id: VideoId,
    pub page_token: Option<PageToken>,
    pub max_results: u32,
}

/// 動画データの取得元
///
/// HTTPクライアントとテスト用のインメモリ実装を差し替えるための境界
#[async_trait]
pub trait VideoDataSource: Send + Sync {
    async fn list_videos(&self, video_id: &VideoId) -> CommentScopeResult<VideoListResponse>;

    async fn list_comment_threads(
        &self,
        request: &CommentThreadsRequest,
    ) -> CommentScopeResult<CommentThreadListResponse>;
}

/// reqwestベースのData APIクライアント
#[derive(Debug, Clone)]
pub struct YouTubeDataClient {
    http_client: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
}

impl YouTubeDataClient {
    pub fn new(api_key: ApiKey) -> CommentScopeResult<Self> {
        if api_key.is_empty() {
            return Err(CommentScopeError::validation("api_key must not be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("commentscope/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!("🔑 Data API client created with key {}", api_key.masked());

        Ok(Self {
            http_client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// 接続先を差し替える（ローカルのスタブサーバー等）
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
        video_id: &VideoId,
    ) -> CommentScopeResult<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        utils::log_api_request(&url, query);

        let started = Instant::now();
        let response = self
            .http_client
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ HTTP request failed: {}", e);
                e
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            tracing::error!("❌ Failed to read response text: {}", e);
            e
        })?;

        utils::log_api_response(
            endpoint,
            status.as_u16(),
            body.len(),
            started.elapsed().as_millis() as u64,
        );

        if !status.is_success() {
            let error = classify_error_response(status.as_u16(), &body, video_id);
            tracing::warn!("⚠️ {} returned {}: {}", endpoint, status, error);
            return Err(error);
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("❌ Failed to parse JSON response: {}", e);
            tracing::debug!(
                "🔍 Response text preview: {}",
                body.chars().take(200).collect::<String>()
            );
            CommentScopeError::from(e)
        })
    }
}

#[async_trait]
impl VideoDataSource for YouTubeDataClient {
    async fn list_videos(&self, video_id: &VideoId) -> CommentScopeResult<VideoListResponse> {
        let query = [
            ("part", "snippet,statistics".to_string()),
            ("id", video_id.to_string()),
        ];
        self.get_json("videos", &query, video_id).await
    }

    async fn list_comment_threads(
        &self,
        request: &CommentThreadsRequest,
    ) -> CommentScopeResult<CommentThreadListResponse> {
        let mut query = vec![
            ("part", "snippet".to_string()),
            ("videoId", request.video_id.to_string()),
            ("maxResults", request.max_results.to_string()),
            ("textFormat", "plainText".to_string()),
        ];
        if let Some(token) = &request.page_token {
            query.push(("pageToken", token.to_string()));
        }
        self.get_json("commentThreads", &query, &request.video_id)
            .await
    }
}

/// 非成功レスポンスをエラー分類にマッピング
pub fn classify_error_response(status: u16, body: &str, video_id: &VideoId) -> CommentScopeError {
    let parsed = serde_json::from_str::<ApiErrorResponse>(body).ok();
    let reason = parsed
        .as_ref()
        .and_then(|r| r.error.errors.first())
        .map(|d| d.reason.clone())
        .filter(|r| !r.is_empty());
    let message = parsed
        .as_ref()
        .map(|r| r.error.message.clone())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP status {}", status));

    match reason.as_deref() {
        Some("videoNotFound") => return CommentScopeError::not_found(video_id.as_str()),
        Some("quotaExceeded")
        | Some("rateLimitExceeded")
        | Some("dailyLimitExceeded")
        | Some("userRateLimitExceeded") => {
            return CommentScopeError::QuotaExceeded { message };
        }
        Some("commentsDisabled") => {
            return CommentScopeError::CommentsDisabled {
                video_id: video_id.to_string(),
            };
        }
        _ => {}
    }

    match status {
        404 => CommentScopeError::not_found(video_id.as_str()),
        429 => CommentScopeError::QuotaExceeded { message },
        500..=599 => CommentScopeError::transient(message),
        _ => CommentScopeError::Api {
            status,
            reason,
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_id() -> VideoId {
        VideoId("dQw4w9WgXcQ".to_string())
    }

    fn error_body(code: u16, reason: &str, message: &str) -> String {
        serde_json::json!({
            "error": {
                "code": code,
                "message": message,
                "errors": [{ "domain": "youtube.quota", "reason": reason, "message": message }]
            }
        })
        .to_string()
    }

    #[test]
    fn test_quota_exceeded_mapping() {
        let body = error_body(403, "quotaExceeded", "The request cannot be completed");
        let error = classify_error_response(403, &body, &video_id());
        match error {
            CommentScopeError::QuotaExceeded { message } => {
                assert_eq!(message, "The request cannot be completed")
            }
            other => panic!("Expected QuotaExceeded, got {:?}", other),
        }
    }

    #[test]
    fn test_too_many_requests_without_body() {
        let error = classify_error_response(429, "", &video_id());
        assert!(matches!(error, CommentScopeError::QuotaExceeded { .. }));
    }

    #[test]
    fn test_video_not_found_mapping() {
        let body = error_body(404, "videoNotFound", "The video could not be found");
        let error = classify_error_response(404, &body, &video_id());
        match error {
            CommentScopeError::NotFound { video_id } => assert_eq!(video_id, "dQw4w9WgXcQ"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_comments_disabled_mapping() {
        let body = error_body(403, "commentsDisabled", "Comments are disabled");
        let error = classify_error_response(403, &body, &video_id());
        assert!(matches!(error, CommentScopeError::CommentsDisabled { .. }));
    }

    #[test]
    fn test_server_error_is_transient() {
        let error = classify_error_response(503, "<html>unavailable</html>", &video_id());
        assert!(error.is_retryable());
    }

    #[test]
    fn test_other_errors_keep_status_and_reason() {
        let body = error_body(400, "keyInvalid", "API key not valid");
        let error = classify_error_response(400, &body, &video_id());
        match error {
            CommentScopeError::Api {
                status,
                reason,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(reason.as_deref(), Some("keyInvalid"));
                assert_eq!(message, "API key not valid");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_comment_thread_page_decoding() {
        let body = r#"{
            "kind": "youtube#commentThreadListResponse",
            "nextPageToken": "QURTSl9p",
            "items": [{
                "snippet": {
                    "totalReplyCount": 4,
                    "topLevelComment": {
                        "snippet": {
                            "authorDisplayName": "@viewer",
                            "textDisplay": "Loved this, thanks!",
                            "likeCount": 17,
                            "publishedAt": "2024-03-05T10:15:00Z"
                        }
                    }
                }
            }]
        }"#;

        let page: CommentThreadListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.next_page_token, Some(PageToken("QURTSl9p".to_string())));
        assert_eq!(page.items.len(), 1);

        let thread = &page.items[0].snippet;
        assert_eq!(thread.total_reply_count, 4);
        assert_eq!(thread.top_level_comment.snippet.like_count, 17);
        assert_eq!(
            thread.top_level_comment.snippet.text_display,
            "Loved this, thanks!"
        );
    }

    #[test]
    fn test_comment_without_text_is_rejected() {
        let body = r#"{
            "items": [{
                "snippet": {
                    "topLevelComment": {
                        "snippet": { "publishedAt": "2024-03-05T10:15:00Z" }
                    }
                }
            }]
        }"#;

        let result = serde_json::from_str::<CommentThreadListResponse>(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_video_statistics_may_hide_counts() {
        let body = r#"{
            "items": [{
                "id": "dQw4w9WgXcQ",
                "snippet": {
                    "title": "Video",
                    "channelTitle": "Channel",
                    "publishedAt": "2009-10-25T06:57:33Z"
                },
                "statistics": { "viewCount": "1500" }
            }]
        }"#;

        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        let statistics = &response.items[0].statistics;
        assert_eq!(statistics.view_count.as_deref(), Some("1500"));
        assert!(statistics.like_count.is_none());
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = YouTubeDataClient::new(ApiKey::new("  ".to_string()));
        assert!(matches!(result, Err(CommentScopeError::Validation(_))));
    }

    #[test]
    fn test_client_base_url_override() {
        let client = YouTubeDataClient::new(ApiKey::new("key".to_string()))
            .unwrap()
            .with_base_url("http://127.0.0.1:8080/youtube/v3/");
        assert_eq!(client.base_url(), "http://127.0.0.1:8080/youtube/v3");
    }
}
