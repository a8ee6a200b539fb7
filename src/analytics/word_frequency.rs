//! 単語頻度
//!
//! ワードクラウド用の語彙集計。小文字化・URL除去・アポストロフィ除去の後、
//! 英数字以外で分割し、ストップワード・1文字語・数字のみの語を除く。

use crate::utils::strip_urls;
use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

/// 最小語長（文字数）
pub const MIN_WORD_LENGTH: usize = 2;

/// 英語ストップワード（アポストロフィ除去済みの形）
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "arent", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "cant", "cannot", "com", "could", "couldnt", "did", "didnt", "do",
    "does", "doesnt", "doing", "dont", "down", "during", "each", "else", "ever", "few", "for",
    "from", "further", "get", "had", "hadnt", "has", "hasnt", "have", "havent", "having", "he",
    "hed", "hell", "hence", "her", "here", "heres", "hers", "herself", "hes", "him", "himself",
    "his", "how", "hows", "however", "http", "https", "i", "id", "if", "ill", "im", "in", "into",
    "is", "isnt", "it", "its", "itself", "ive", "just", "k", "lets", "like", "me", "more", "most",
    "mustnt", "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or",
    "other", "otherwise", "ought", "our", "ours", "ourselves", "out", "over", "own", "r", "same",
    "shall", "shant", "she", "shed", "shell", "shes", "should", "shouldnt", "since", "so", "some",
    "such", "than", "that", "thats", "the", "their", "theirs", "them", "themselves", "then",
    "there", "theres", "therefore", "these", "they", "theyd", "theyll", "theyre", "theyve",
    "this", "those", "through", "to", "too", "under", "until", "up", "very", "was", "wasnt", "we",
    "wed", "well", "were", "werent", "weve", "what", "whats", "when", "whens", "where", "wheres",
    "which", "while", "who", "whom", "whos", "why", "whys", "with", "wont", "would", "wouldnt",
    "www", "you", "youd", "youll", "your", "youre", "yours", "yourself", "yourselves", "youve",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// 小文字化・URL除去・アポストロフィ除去
pub fn clean_text(text: &str) -> String {
    strip_urls(text)
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect()
}

/// 集計対象の語を取り出す
pub fn tokenize_words(text: &str) -> Vec<String> {
    clean_text(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| is_countable(word))
        .map(str::to_string)
        .collect()
}

fn is_countable(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
        && !word.chars().all(|c| c.is_ascii_digit())
        && !is_stop_word(word)
}

/// コーパス全体の語頻度
pub fn word_frequencies<'a, I>(texts: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut frequencies = BTreeMap::new();
    for text in texts {
        for word in tokenize_words(text) {
            *frequencies.entry(word).or_insert(0) += 1;
        }
    }
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(
            clean_text("Don't MISS https://example.com/x this"),
            "dont miss   this"
        );
        assert_eq!(clean_text("It\u{2019}s Fine"), "its fine");
    }

    #[test]
    fn test_tokenize_filters_noise() {
        let words = tokenize_words("The BEST tutorial, 10/10!!! I'd watch it again: a+ x 2024");
        assert_eq!(words, vec!["best", "tutorial", "watch"]);
    }

    #[test]
    fn test_tokenize_keeps_non_ascii_words() {
        let words = tokenize_words("Café vibes 最高");
        assert_eq!(words, vec!["café", "vibes", "最高"]);
    }

    #[test]
    fn test_word_frequencies_across_corpus() {
        let texts = ["Great video, great editing", "Editing was great!", "www.spam.com"];
        let frequencies = word_frequencies(texts.iter().copied());

        assert_eq!(frequencies.get("great"), Some(&3));
        assert_eq!(frequencies.get("editing"), Some(&2));
        assert_eq!(frequencies.get("video"), Some(&1));
        assert!(!frequencies.contains_key("was"));
        assert!(!frequencies.contains_key("spam"));
    }

    #[test]
    fn test_empty_corpus() {
        let frequencies = word_frequencies(std::iter::empty::<&str>());
        assert!(frequencies.is_empty());
    }
}
