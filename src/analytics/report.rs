//! 集計レポート
//!
//! 分類済みコメントから感情分布・月別件数・上位コメント・語頻度を作る。
//! 入力が空でも失敗せず、空のレポートを返す。

use super::word_frequency::word_frequencies;
use crate::models::ClassifiedComment;
use crate::sentiment::SentimentLabel;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 上位コメントの既定件数
pub const DEFAULT_TOP_N: usize = 5;

/// 月別コメント数
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    pub count: usize,
}

impl std::fmt::Display for MonthlyCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// 集計結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub total_comments: usize,
    /// 3ラベルすべてを常に含む
    pub sentiment_counts: BTreeMap<SentimentLabel, usize>,
    /// 古い月から順に（件数0の月は含まない）
    pub monthly_counts: Vec<MonthlyCount>,
    pub top_positive: Vec<ClassifiedComment>,
    pub top_negative: Vec<ClassifiedComment>,
    pub word_frequencies: BTreeMap<String, usize>,
}

impl AggregateReport {
    pub fn empty() -> Self {
        Self {
            total_comments: 0,
            sentiment_counts: SentimentLabel::ALL.iter().map(|label| (*label, 0)).collect(),
            monthly_counts: Vec::new(),
            top_positive: Vec::new(),
            top_negative: Vec::new(),
            word_frequencies: BTreeMap::new(),
        }
    }

    pub fn count(&self, label: SentimentLabel) -> usize {
        self.sentiment_counts.get(&label).copied().unwrap_or(0)
    }

    /// ラベルの割合（%）。コメントが無ければ0
    pub fn percentage(&self, label: SentimentLabel) -> f64 {
        if self.total_comments == 0 {
            return 0.0;
        }
        self.count(label) as f64 / self.total_comments as f64 * 100.0
    }

    /// 頻出語（件数降順、同数は語の昇順）
    pub fn top_words(&self, n: usize) -> Vec<(&str, usize)> {
        let mut words: Vec<(&str, usize)> = self
            .word_frequencies
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
            .collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(n);
        words
    }

    pub fn is_empty(&self) -> bool {
        self.total_comments == 0
    }
}

impl Default for AggregateReport {
    fn default() -> Self {
        Self::empty()
    }
}

/// 集計器
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    top_n: usize,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl Aggregator {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }

    pub fn aggregate(&self, comments: &[ClassifiedComment]) -> AggregateReport {
        let mut report = AggregateReport::empty();
        if comments.is_empty() {
            tracing::debug!("📊 No comments to aggregate");
            return report;
        }

        report.total_comments = comments.len();

        for comment in comments {
            *report
                .sentiment_counts
                .entry(comment.sentiment_label)
                .or_insert(0) += 1;
        }

        report.monthly_counts = monthly_counts(comments);
        report.top_positive = self.highlights(comments, SentimentLabel::Positive);
        report.top_negative = self.highlights(comments, SentimentLabel::Negative);
        report.word_frequencies = word_frequencies(comments.iter().map(|c| c.text()));

        if tracing::level_enabled!(tracing::Level::DEBUG) {
            tracing::debug!(
                "📊 Aggregated {} comments: +{} / ={} / -{} across {} month(s), {} distinct words",
                report.total_comments,
                report.count(SentimentLabel::Positive),
                report.count(SentimentLabel::Neutral),
                report.count(SentimentLabel::Negative),
                report.monthly_counts.len(),
                report.word_frequencies.len()
            );
        }

        report
    }

    /// ラベルで絞り込み、スコア順に上位N件
    ///
    /// ポジティブは降順、ネガティブは昇順。安定ソートなので同点は入力順
    fn highlights(&self, comments: &[ClassifiedComment], label: SentimentLabel) -> Vec<ClassifiedComment> {
        let mut selected: Vec<&ClassifiedComment> = comments
            .iter()
            .filter(|c| c.sentiment_label == label)
            .collect();

        match label {
            SentimentLabel::Negative => {
                selected.sort_by(|a, b| a.sentiment_score.total_cmp(&b.sentiment_score))
            }
            _ => selected.sort_by(|a, b| b.sentiment_score.total_cmp(&a.sentiment_score)),
        }

        selected.into_iter().take(self.top_n).cloned().collect()
    }
}

fn monthly_counts(comments: &[ClassifiedComment]) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for comment in comments {
        let published = comment.comment.published_at;
        *months.entry((published.year(), published.month())).or_insert(0) += 1;
    }

    months
        .into_iter()
        .map(|((year, month), count)| MonthlyCount { year, month, count })
        .collect()
}
