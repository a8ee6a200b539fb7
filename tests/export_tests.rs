//! エクスポートの統合テスト

use chrono::{TimeZone, Utc};
use commentscope::analytics::{parse_csv, CommentRow, ExportFormat, ExportManager};
use commentscope::models::{ClassifiedComment, Comment, Metrics, VideoDetails};
use commentscope::{classify, AnalysisOutcome, Aggregator, VideoId};

fn classified(text: &str, minute: u32, likes: u64, replies: u64) -> ClassifiedComment {
    let published = Utc.with_ymd_and_hms(2024, 4, 9, 18, minute, 7).unwrap();
    let (label, score) = classify(text);
    ClassifiedComment::new(
        Comment::new(text, published)
            .with_likes(likes)
            .with_replies(replies),
        label,
        score,
    )
}

fn outcome(comments: Vec<ClassifiedComment>) -> AnalysisOutcome {
    let report = Aggregator::default().aggregate(&comments);
    AnalysisOutcome {
        details: VideoDetails {
            video_id: VideoId("dQw4w9WgXcQ".to_string()),
            title: "Export test".to_string(),
            channel_title: "Channel".to_string(),
            published_at: Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap(),
            metrics: Metrics {
                view_count: 1200,
                like_count: 80,
                comment_count: comments.len() as u64,
            },
        },
        comments,
        report,
    }
}

#[test]
fn test_csv_round_trip_with_awkward_text() {
    let comments = vec![
        classified("Plain comment", 0, 1, 0),
        classified("Commas, everywhere, really", 1, 0, 2),
        classified("She said \"wow\" twice", 2, 15, 0),
        classified("Line one\nLine two\r\nLine three", 3, 3, 1),
        classified("Loved it ❤️🔥 最高", 4, 99, 12),
        classified("", 5, 0, 0),
        classified("\"", 6, 0, 0),
    ];
    let outcome = outcome(comments);

    let bytes = ExportManager::new()
        .export(&outcome, ExportFormat::Csv)
        .unwrap();
    let csv = String::from_utf8(bytes).unwrap();
    let rows = parse_csv(&csv).unwrap();

    let expected: Vec<CommentRow> = outcome.comments.iter().map(CommentRow::from).collect();
    assert_eq!(rows.len(), outcome.comments.len());
    assert_eq!(rows, expected);
    assert_eq!(rows[3].text, "Line one\nLine two\r\nLine three");
    assert_eq!(rows[4].published_at, "2024-04-09T18:04:07Z");
}

#[test]
fn test_csv_header_and_labels() {
    let outcome = outcome(vec![
        classified("This is great", 0, 0, 0),
        classified("This is terrible", 1, 0, 0),
    ]);
    let csv = String::from_utf8(
        ExportManager::new()
            .export(&outcome, ExportFormat::Csv)
            .unwrap(),
    )
    .unwrap();

    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("text,published_at,like_count,reply_count,sentiment_label,sentiment_score")
    );
    assert!(lines.next().unwrap().contains(",Positive,"));
    assert!(lines.next().unwrap().contains(",Negative,"));
}

#[test]
fn test_empty_export() {
    let outcome = outcome(Vec::new());
    let manager = ExportManager::new();

    let csv = String::from_utf8(manager.export(&outcome, ExportFormat::Csv).unwrap()).unwrap();
    assert!(parse_csv(&csv).unwrap().is_empty());

    let json: serde_json::Value =
        serde_json::from_slice(&manager.export(&outcome, ExportFormat::Json).unwrap()).unwrap();
    assert_eq!(json["report"]["total_comments"], 0);
    assert!(json["comments"].as_array().unwrap().is_empty());
}

#[test]
fn test_json_file_export() {
    let outcome = outcome(vec![classified("Helpful video", 0, 5, 0)]);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    ExportManager::new()
        .export_to_file(&outcome, ExportFormat::Json, &path)
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["video"]["title"], "Export test");
    assert_eq!(json["comments"][0]["like_count"], 5);
    assert_eq!(json["report"]["monthly_counts"][0]["month"], 4);
}
