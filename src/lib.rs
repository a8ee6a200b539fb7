pub mod analytics;
pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod sentiment;
pub mod utils;

// Re-export the main error types for convenience
pub use errors::{CommentScopeError, CommentScopeResult};

// Re-export the pipeline entry points
pub use api::data_api::{VideoDataSource, YouTubeDataClient};
pub use api::fetcher::{fetch_comments, fetch_video_details};
pub use api::youtube::{ApiKey, VideoId};
pub use pipeline::{analyze_video, AnalysisOutcome, AnalysisPipeline};

// Re-export analytics and models
pub use analytics::{AggregateReport, Aggregator, ExportFormat, ExportManager, MonthlyCount};
pub use config::{AppConfig, ConfigManager, ConfigOverrides};
pub use models::{ClassifiedComment, Comment, Metrics, VideoDetails};
pub use sentiment::{classify, SentimentAnalyzer, SentimentLabel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Test that the main modules are accessible
        assert!(
            std::any::type_name::<api::data_api::YouTubeDataClient>().contains("YouTubeDataClient")
        );
        assert!(std::any::type_name::<api::youtube::VideoId>().contains("VideoId"));
    }

    #[test]
    fn test_public_api_availability() {
        let (label, score) = classify("What a great explanation");
        assert_eq!(label, SentimentLabel::Positive);
        assert!(score > 0.0);

        let report = Aggregator::default().aggregate(&[]);
        assert_eq!(report, AggregateReport::empty());
    }
}
