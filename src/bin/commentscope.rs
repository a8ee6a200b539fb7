use anyhow::Context;
use clap::Parser;
use commentscope::analytics::{ExportFormat, ExportManager};
use commentscope::config::{AppConfig, ConfigManager, ConfigOverrides};
use commentscope::models::ClassifiedComment;
use commentscope::sentiment::SentimentLabel;
use commentscope::utils::{self, format_count, truncate_chars, LogFormat};
use commentscope::{analyze_video, AnalysisOutcome};
use std::path::PathBuf;

const COMMENT_PREVIEW_CHARS: usize = 100;

/// YouTube コメント分析ツール
#[derive(Parser)]
#[command(name = "commentscope")]
#[command(version, about = "Fetch a YouTube video's comments, score their sentiment and summarize them.")]
struct Cli {
    /// 動画URLまたは動画ID
    #[arg(value_name = "VIDEO")]
    video: String,

    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// 取得するコメント数の上限（0 = すべて）
    #[arg(long, value_name = "N")]
    max_comments: Option<usize>,

    /// 上位コメントの表示件数
    #[arg(long, value_name = "N")]
    top_n: Option<usize>,

    /// 表示する頻出語の数
    #[arg(long, value_name = "N", default_value_t = 20)]
    words: usize,

    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// 設定ファイル（既定はプラットフォームの設定ディレクトリ）
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// 実行後、有効な設定を設定ファイルに保存する
    #[arg(long)]
    save_config: bool,

    /// API のベースURL（ローカルのスタブサーバー向け）
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: String,

    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    utils::init_logging(&cli.log_level, log_format).context("Failed to initialize logging")?;

    let manager = match cli.config.as_ref() {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new()?,
    };

    let overrides = ConfigOverrides {
        api_key: cli.api_key.clone(),
        max_comments: cli.max_comments,
        top_n: cli.top_n,
    };
    let config: AppConfig = manager
        .load_config()?
        .with_process_env()
        .with_overrides(&overrides);

    tracing::debug!("⚙️ Effective configuration: {:?}", config);

    let outcome = analyze_video(&config, &cli.video, cli.base_url.as_deref())
        .await
        .with_context(|| format!("Analysis of '{}' failed", cli.video))?;

    print_summary(&outcome, cli.words);

    let exporter = ExportManager::new();
    for (path, format) in [(&cli.csv, ExportFormat::Csv), (&cli.json, ExportFormat::Json)] {
        if let Some(path) = path {
            exporter
                .export_to_file(&outcome, format, path)
                .with_context(|| format!("Failed to export to {}", path.display()))?;
            println!("💾 Saved {} export to {}", format.file_extension(), path.display());
        }
    }

    if cli.save_config {
        manager.save_config(&config)?;
    }

    Ok(())
}

fn print_summary(outcome: &AnalysisOutcome, word_count: usize) {
    let details = &outcome.details;
    let metrics = &details.metrics;
    let report = &outcome.report;

    println!("🎬 {}", details.title);
    println!(
        "   Channel: {} | Published: {}",
        details.channel_title,
        details.published_at.format("%Y-%m-%d")
    );
    println!(
        "   Views: {} | Likes: {} | Comments: {} | Engagement: {}",
        format_count(metrics.view_count),
        format_count(metrics.like_count),
        format_count(metrics.comment_count),
        metrics
            .engagement_rate()
            .map(|rate| format!("{:.2}%", rate))
            .unwrap_or_else(|| "n/a".to_string())
    );
    println!();

    println!(
        "📊 Sentiment distribution ({} comments analyzed)",
        format_count(report.total_comments as u64)
    );
    for label in SentimentLabel::ALL {
        println!(
            "   {:<8} {:>6} ({:>5.1}%)",
            label.as_str(),
            report.count(label),
            report.percentage(label)
        );
    }
    println!();

    if !report.monthly_counts.is_empty() {
        println!("📅 Monthly activity");
        for month in &report.monthly_counts {
            println!("   {}  {:>6}", month, month.count);
        }
        println!();
    }

    print_highlights("👍 Most positive comments", &report.top_positive);
    print_highlights("👎 Most negative comments", &report.top_negative);

    let words = report.top_words(word_count);
    if !words.is_empty() {
        println!("🔤 Most frequent words");
        let rendered: Vec<String> = words
            .iter()
            .map(|(word, count)| format!("{} ({})", word, count))
            .collect();
        println!("   {}", rendered.join(", "));
        println!();
    }
}

fn print_highlights(title: &str, comments: &[ClassifiedComment]) {
    if comments.is_empty() {
        return;
    }

    println!("{}", title);
    for comment in comments {
        let text = comment.text().replace(['\n', '\r'], " ");
        println!(
            "   {:+.4} | {} likes | {}",
            comment.sentiment_score,
            format_count(comment.comment.like_count),
            truncate_chars(&text, COMMENT_PREVIEW_CHARS)
        );
    }
    println!();
}
