//! 複合スコア算出
//!
//! 単語ごとの極性を強調語・否定語・大文字・"but" で補正し、
//! 感嘆符/疑問符の強調を加えてから -1.0 〜 1.0 に正規化する。

use super::lexicon::{
    booster_value, is_emoji_char, is_in_lexicon, is_negation, lexicon_valence, CAPS_INCREMENT,
    NEGATION_SCALAR,
};
use super::SentimentLabel;
use crate::utils::strip_urls;
use serde::Serialize;

/// 正規化定数（スコア合計がこの平方根付近で約0.7になる）
const NORMALIZATION_ALPHA: f64 = 15.0;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCREMENT: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;
const NEVER_SO_SCALAR: f64 = 1.25;
const BEFORE_BUT_SCALAR: f64 = 0.5;
const AFTER_BUT_SCALAR: f64 = 1.5;

/// 分析結果
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    /// 正規化済み複合スコア（小数点以下4桁）
    pub compound: f64,
    pub label: SentimentLabel,
    /// ポジティブ成分の割合
    pub positive: f64,
    /// 中立成分の割合
    pub neutral: f64,
    /// ネガティブ成分の割合
    pub negative: f64,
}

impl SentimentResult {
    fn empty() -> Self {
        Self {
            compound: 0.0,
            label: SentimentLabel::Neutral,
            positive: 0.0,
            neutral: 0.0,
            negative: 0.0,
        }
    }
}

/// 辞書ベース感情分析器
///
/// 状態を持たないため、同じ入力には常に同じ結果を返す
#[derive(Debug, Clone, Copy)]
pub struct SentimentAnalyzer {
    strip_urls: bool,
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self { strip_urls: true }
    }

    /// URL除去を切り替える（既定は有効）
    pub fn with_url_stripping(mut self, enabled: bool) -> Self {
        self.strip_urls = enabled;
        self
    }

    pub fn analyze(&self, text: &str) -> SentimentResult {
        let prepared = if self.strip_urls {
            strip_urls(text).into_owned()
        } else {
            text.to_string()
        };

        let tokens = tokenize(&prepared);
        if tokens.is_empty() {
            return SentimentResult::empty();
        }

        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_differential = has_cap_differential(&tokens);

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| {
                let is_kind_of =
                    lowered[i] == "kind" && lowered.get(i + 1).is_some_and(|next| next == "of");
                if booster_value(&lowered[i]).is_some() || is_kind_of {
                    0.0
                } else {
                    token_valence(&tokens, &lowered, i, cap_differential)
                }
            })
            .collect();

        apply_but_contrast(&lowered, &mut valences);

        let emphasis = punctuation_emphasis(&prepared);
        let compound = compound_score(&valences, emphasis);
        let (positive, neutral, negative) = proportions(&valences, emphasis);

        SentimentResult {
            compound,
            label: SentimentLabel::from_score(compound),
            positive,
            neutral,
            negative,
        }
    }
}

/// 空白区切り + 絵文字の独立トークン化
///
/// 前後の記号は除去するが、除去後2文字以下になる場合は元のまま残す（":)" など）
fn tokenize(text: &str) -> Vec<String> {
    let mut spaced = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\u{FE0F}' => {}
            '\u{200D}' => spaced.push(' '),
            c if is_emoji_char(c) => {
                spaced.push(' ');
                spaced.push(c);
                spaced.push(' ');
            }
            c => spaced.push(c),
        }
    }

    spaced
        .split_whitespace()
        .map(|raw| {
            let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                raw.to_string()
            } else {
                stripped.to_string()
            }
        })
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// 大文字語と非大文字語が混在しているか
fn has_cap_differential(tokens: &[String]) -> bool {
    let all_caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    let differential = tokens.len() - all_caps;
    differential > 0 && differential < tokens.len()
}

fn token_valence(tokens: &[String], lowered: &[String], i: usize, cap_differential: bool) -> f64 {
    let Some(base) = lexicon_valence(&lowered[i]) else {
        return 0.0;
    };

    let mut valence = base;

    // "no" は直前/2語前のみ反転
    if (i > 0 && lowered[i - 1] == "no") || (i > 1 && lowered[i - 2] == "no") {
        valence *= NEGATION_SCALAR;
    }

    if cap_differential && is_all_caps(&tokens[i]) {
        valence += CAPS_INCREMENT.copysign(valence);
    }

    for start in 0..3 {
        if i <= start {
            break;
        }
        let j = i - (start + 1);
        if is_in_lexicon(&lowered[j]) {
            continue;
        }

        let mut scalar = booster_scalar(&tokens[j], &lowered[j], valence, cap_differential);
        match start {
            1 => scalar *= 0.95,
            2 => scalar *= 0.9,
            _ => {}
        }
        valence += scalar;
        valence = negation_check(valence, lowered, start, i);
    }

    least_check(valence, lowered, i)
}

/// 直前の強調語による加減
fn booster_scalar(token: &str, lowered: &str, valence: f64, cap_differential: bool) -> f64 {
    let Some(mut scalar) = booster_value(lowered) else {
        return 0.0;
    };

    if valence < 0.0 {
        scalar = -scalar;
    }
    if cap_differential && is_all_caps(token) {
        scalar += if valence > 0.0 {
            CAPS_INCREMENT
        } else {
            -CAPS_INCREMENT
        };
    }
    scalar
}

fn negation_check(valence: f64, lowered: &[String], start: usize, i: usize) -> f64 {
    let word = |offset: usize| lowered[i - offset].as_str();

    match start {
        0 => {
            if is_negation(word(1)) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        1 => {
            if word(2) == "never" && matches!(word(1), "so" | "this") {
                valence * NEVER_SO_SCALAR
            } else if word(2) == "without" && word(1) == "doubt" {
                valence
            } else if is_negation(word(2)) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if word(3) == "never"
                && (matches!(word(2), "so" | "this") || matches!(word(1), "so" | "this"))
            {
                valence * NEVER_SO_SCALAR
            } else if word(3) == "without" && (word(2) == "doubt" || word(1) == "doubt") {
                valence
            } else if is_negation(word(3)) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// "least" 直後は反転（"at least" / "very least" は除く）
fn least_check(valence: f64, lowered: &[String], i: usize) -> f64 {
    if i > 1 && lowered[i - 1] == "least" {
        if lowered[i - 2] != "at" && lowered[i - 2] != "very" {
            return valence * NEGATION_SCALAR;
        }
    } else if i > 0 && lowered[i - 1] == "least" {
        return valence * NEGATION_SCALAR;
    }
    valence
}

/// "but" の前は弱め、後は強める
fn apply_but_contrast(lowered: &[String], valences: &mut [f64]) {
    let Some(but_index) = lowered.iter().position(|w| w == "but") else {
        return;
    };

    for (k, valence) in valences.iter_mut().enumerate() {
        if k < but_index {
            *valence *= BEFORE_BUT_SCALAR;
        } else if k > but_index {
            *valence *= AFTER_BUT_SCALAR;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS);
    let exclamation_emphasis = exclamations as f64 * EXCLAMATION_INCREMENT;

    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => QUESTION_CAP,
    };

    exclamation_emphasis + question_emphasis
}

fn compound_score(valences: &[f64], emphasis: f64) -> f64 {
    let mut sum: f64 = valences.iter().sum();
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }

    let normalized = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);
    round_to(normalized, 4)
}

/// (positive, neutral, negative) の構成比
fn proportions(valences: &[f64], emphasis: f64) -> (f64, f64, f64) {
    let mut positive_sum = 0.0;
    let mut negative_sum = 0.0;
    let mut neutral_count = 0.0;

    for &valence in valences {
        if valence > 0.0 {
            positive_sum += valence + 1.0;
        } else if valence < 0.0 {
            negative_sum += valence - 1.0;
        } else {
            neutral_count += 1.0;
        }
    }

    if positive_sum > f64::abs(negative_sum) {
        positive_sum += emphasis;
    } else if positive_sum < f64::abs(negative_sum) {
        negative_sum -= emphasis;
    }

    let total = positive_sum + f64::abs(negative_sum) + neutral_count;
    if total == 0.0 {
        return (0.0, 0.0, 0.0);
    }

    (
        round_to((positive_sum / total).abs(), 3),
        round_to((neutral_count / total).abs(), 3),
        round_to((negative_sum / total).abs(), 3),
    )
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
