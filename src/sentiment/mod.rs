//! 感情分析モジュール
//!
//! 含まれるもの:
//! - 固定辞書（単語・絵文字・強調語・否定語）
//! - VADER方式の複合スコア算出
//! - 固定しきい値によるラベル分類

mod analyzer;
mod lexicon;

pub use analyzer::{SentimentAnalyzer, SentimentResult};
pub use lexicon::{is_booster, is_negation, lexicon_valence};

use serde::{Deserialize, Serialize};

/// これ以上のスコアはポジティブ
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// これ以下のスコアはネガティブ
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// 感情ラベル
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// 複合スコアからラベルを決定（しきい値は境界を含む）
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl std::str::FromStr for SentimentLabel {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "Positive" | "positive" => Ok(SentimentLabel::Positive),
            "Neutral" | "neutral" => Ok(SentimentLabel::Neutral),
            "Negative" | "negative" => Ok(SentimentLabel::Negative),
            other => Err(format!("unknown sentiment label: {}", other)),
        }
    }
}

/// テキストを分類して (ラベル, スコア) を返す
pub fn classify(text: &str) -> (SentimentLabel, f64) {
    let result = SentimentAnalyzer::new().analyze(text);
    (result.label, result.compound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(SentimentLabel::from_score(0.05), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.05), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.0499), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_label_parsing() {
        assert_eq!(
            "Positive".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Positive
        );
        assert_eq!(
            "negative".parse::<SentimentLabel>().unwrap(),
            SentimentLabel::Negative
        );
        assert!("Mixed".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn test_label_display_matches_as_str() {
        for label in SentimentLabel::ALL {
            assert_eq!(label.to_string(), label.as_str());
        }
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Honestly the BEST tutorial I've seen!!! not boring at all 🔥";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_classify_empty_text() {
        assert_eq!(classify(""), (SentimentLabel::Neutral, 0.0));
        assert_eq!(classify("   \n\t "), (SentimentLabel::Neutral, 0.0));
    }
}
