//! 分析対象のデータモデル
//!
//! 取得したコメント・分類済みコメント・動画メトリクス

use crate::api::youtube::VideoId;
use crate::sentiment::SentimentLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// トップレベルコメント（取得後は不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub like_count: u64,
    pub reply_count: u64,
}

impl Comment {
    pub fn new(text: impl Into<String>, published_at: DateTime<Utc>) -> Self {
        Self {
            author: String::new(),
            text: text.into(),
            published_at,
            like_count: 0,
            reply_count: 0,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_likes(mut self, like_count: u64) -> Self {
        self.like_count = like_count;
        self
    }

    pub fn with_replies(mut self, reply_count: u64) -> Self {
        self.reply_count = reply_count;
        self
    }
}

/// 感情分類済みコメント
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub sentiment_label: SentimentLabel,
    /// 複合スコア（-1.0 to 1.0）
    pub sentiment_score: f64,
}

impl ClassifiedComment {
    pub fn new(comment: Comment, sentiment_label: SentimentLabel, sentiment_score: f64) -> Self {
        Self {
            comment,
            sentiment_label,
            sentiment_score,
        }
    }

    pub fn text(&self) -> &str {
        &self.comment.text
    }
}

/// 動画の統計スナップショット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

impl Metrics {
    /// エンゲージメント率（%）: (高評価 + コメント) / 再生数
    ///
    /// 再生数が0の場合は算出できないため`None`
    pub fn engagement_rate(&self) -> Option<f64> {
        if self.view_count == 0 {
            return None;
        }

        let engaged = (self.like_count + self.comment_count) as f64;
        Some(engaged / self.view_count as f64 * 100.0)
    }
}

/// 動画の概要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoDetails {
    pub video_id: VideoId,
    pub title: String,
    pub channel_title: String,
    pub published_at: DateTime<Utc>,
    pub metrics: Metrics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_engagement_rate() {
        let metrics = Metrics {
            view_count: 1000,
            like_count: 40,
            comment_count: 10,
        };
        let rate = metrics.engagement_rate().unwrap();
        assert!((rate - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_engagement_rate_without_views() {
        let metrics = Metrics {
            view_count: 0,
            like_count: 3,
            comment_count: 1,
        };
        assert_eq!(metrics.engagement_rate(), None);
    }

    #[test]
    fn test_comment_builder() {
        let published = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let comment = Comment::new("nice video", published)
            .with_author("viewer")
            .with_likes(12)
            .with_replies(3);

        assert_eq!(comment.author, "viewer");
        assert_eq!(comment.text, "nice video");
        assert_eq!(comment.like_count, 12);
        assert_eq!(comment.reply_count, 3);
    }

    #[test]
    fn test_classified_comment_serializes_flat() {
        let published = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let classified = ClassifiedComment::new(
            Comment::new("great", published),
            SentimentLabel::Positive,
            0.6249,
        );

        let value = serde_json::to_value(&classified).unwrap();
        assert_eq!(value["text"], "great");
        assert_eq!(value["sentiment_label"], "Positive");
        assert_eq!(value["sentiment_score"], 0.6249);
    }
}
