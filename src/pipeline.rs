//! Single-pass analysis run: fetch, classify, aggregate.

use crate::analytics::{AggregateReport, Aggregator};
use crate::api::data_api::{VideoDataSource, YouTubeDataClient};
use crate::api::fetcher::{fetch_comments, fetch_video_details};
use crate::api::youtube::VideoId;
use crate::config::AppConfig;
use crate::errors::CommentScopeResult;
use crate::models::{ClassifiedComment, Comment, VideoDetails};
use crate::sentiment::SentimentAnalyzer;
use serde::Serialize;
use std::time::Instant;

/// Everything one run produces. Nothing outlives the caller's copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisOutcome {
    pub details: VideoDetails,
    pub comments: Vec<ClassifiedComment>,
    pub report: AggregateReport,
}

pub struct AnalysisPipeline<S> {
    source: S,
    max_comments: usize,
    analyzer: SentimentAnalyzer,
    aggregator: Aggregator,
}

impl<S: VideoDataSource> AnalysisPipeline<S> {
    pub fn new(source: S, config: &AppConfig) -> Self {
        Self::with_limits(source, config.max_comments, config.top_n)
    }

    pub fn with_limits(source: S, max_comments: usize, top_n: usize) -> Self {
        Self {
            source,
            max_comments,
            analyzer: SentimentAnalyzer::new(),
            aggregator: Aggregator::new(top_n),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches details and comments concurrently; the first failure aborts the run.
    pub async fn run(&self, video_id: &VideoId) -> CommentScopeResult<AnalysisOutcome> {
        let started = Instant::now();
        tracing::info!("🚀 Starting analysis for {}", video_id);

        let (details, comments) = tokio::try_join!(
            fetch_video_details(&self.source, video_id),
            fetch_comments(&self.source, video_id, self.max_comments)
        )?;

        let comments = self.classify_all(comments);
        let report = self.aggregator.aggregate(&comments);

        tracing::info!(
            "✅ Analysis of '{}' finished: {} comments in {}ms",
            details.title,
            report.total_comments,
            started.elapsed().as_millis()
        );

        Ok(AnalysisOutcome {
            details,
            comments,
            report,
        })
    }

    /// One classified comment per input comment, same order.
    pub fn classify_all(&self, comments: Vec<Comment>) -> Vec<ClassifiedComment> {
        comments
            .into_iter()
            .map(|comment| {
                let result = self.analyzer.analyze(&comment.text);
                ClassifiedComment::new(comment, result.label, result.compound)
            })
            .collect()
    }
}

/// Validates the configuration, then analyzes `input` (URL or bare id) against
/// the live API, or against `base_url` when given.
pub async fn analyze_video(
    config: &AppConfig,
    input: &str,
    base_url: Option<&str>,
) -> CommentScopeResult<AnalysisOutcome> {
    config.validate()?;
    let video_id = VideoId::parse(input)?;

    let mut client = YouTubeDataClient::new(config.api_key())?;
    if let Some(url) = base_url {
        client = client.with_base_url(url);
    }

    AnalysisPipeline::new(client, config).run(&video_id).await
}
