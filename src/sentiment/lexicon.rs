//! 感情辞書
//!
//! 単語の極性は -4.0 〜 4.0 のスケール（VADER互換）。
//! 絵文字も単語と同じ扱いで辞書に載せる。

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// 強調語による加算量
pub const BOOSTER_INCREMENT: f64 = 0.293;
/// 緩和語による減算量
pub const BOOSTER_DECREMENT: f64 = -0.293;
/// 大文字強調による加算量
pub const CAPS_INCREMENT: f64 = 0.733;
/// 否定による反転係数
pub const NEGATION_SCALAR: f64 = -0.74;

const WORD_VALENCES: &[(&str, f64)] = &[
    // ポジティブ
    ("acceptable", 1.3),
    ("accomplished", 1.9),
    ("adorable", 2.2),
    ("agree", 1.5),
    ("alright", 1.0),
    ("amazed", 2.2),
    ("amazing", 2.8),
    ("amused", 1.6),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("beautifully", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("bless", 1.8),
    ("blessed", 2.9),
    ("bravo", 2.2),
    ("brilliant", 2.8),
    ("calm", 1.3),
    ("care", 2.2),
    ("charming", 2.2),
    ("cheer", 2.3),
    ("clean", 1.7),
    ("clear", 1.6),
    ("clever", 2.0),
    ("comfortable", 2.3),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("cool", 1.3),
    ("creative", 1.9),
    ("cute", 2.0),
    ("delight", 2.9),
    ("delightful", 2.8),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("enjoying", 2.4),
    ("entertaining", 1.9),
    ("epic", 2.1),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fabulous", 2.4),
    ("fair", 1.3),
    ("fan", 1.3),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fine", 0.8),
    ("free", 2.3),
    ("fresh", 1.3),
    ("friendly", 2.2),
    ("fun", 2.3),
    ("funny", 1.9),
    ("generous", 2.3),
    ("genius", 1.9),
    ("gem", 1.9),
    ("glad", 2.0),
    ("god", 1.1),
    ("gold", 1.5),
    ("good", 1.9),
    ("goodness", 2.0),
    ("gorgeous", 3.0),
    ("grateful", 2.0),
    ("great", 3.1),
    ("greatest", 3.2),
    ("haha", 2.0),
    ("hahaha", 2.6),
    ("handsome", 2.2),
    ("happy", 2.7),
    ("happiness", 2.6),
    ("heart", 1.6),
    ("helpful", 1.8),
    ("helped", 1.8),
    ("hero", 2.6),
    ("hilarious", 1.7),
    ("hope", 1.9),
    ("hopeful", 1.9),
    ("impressed", 2.1),
    ("impressive", 2.3),
    ("incredible", 2.3),
    ("informative", 1.6),
    ("inspiring", 2.2),
    ("inspired", 2.2),
    ("insightful", 1.8),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("kind", 2.4),
    ("laugh", 2.6),
    ("laughing", 2.2),
    ("legend", 1.9),
    ("legendary", 2.2),
    ("like", 1.5),
    ("liked", 1.8),
    ("lmao", 2.0),
    ("lol", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loves", 2.7),
    ("loving", 2.9),
    ("lucky", 1.8),
    ("magnificent", 2.9),
    ("masterpiece", 3.0),
    ("motivated", 1.8),
    ("motivation", 1.6),
    ("nice", 1.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("outstanding", 3.0),
    ("peace", 2.5),
    ("perfect", 2.7),
    ("perfectly", 3.2),
    ("pleasant", 2.3),
    ("please", 1.3),
    ("pleased", 1.9),
    ("positive", 2.6),
    ("pretty", 2.2),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("recommended", 1.6),
    ("relaxing", 2.2),
    ("respect", 2.1),
    ("rock", 0.3),
    ("rocks", 1.5),
    ("safe", 1.9),
    ("smart", 1.7),
    ("smile", 1.5),
    ("smiling", 2.3),
    ("solid", 1.4),
    ("special", 1.7),
    ("splendid", 2.8),
    ("strong", 2.3),
    ("success", 2.7),
    ("successful", 2.8),
    ("super", 2.9),
    ("superb", 3.1),
    ("support", 1.7),
    ("supportive", 1.2),
    ("sweet", 2.0),
    ("talent", 1.8),
    ("talented", 2.3),
    ("thank", 1.5),
    ("thanks", 1.9),
    ("thankful", 2.7),
    ("thx", 1.5),
    ("top", 0.8),
    ("true", 1.8),
    ("trust", 2.3),
    ("useful", 1.9),
    ("valuable", 2.1),
    ("win", 2.8),
    ("winner", 2.8),
    ("winning", 2.4),
    ("wise", 1.8),
    ("won", 2.7),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yay", 2.4),
    ("yeah", 1.2),
    ("yes", 1.7),
    // ネガティブ
    ("abuse", -3.2),
    ("afraid", -2.2),
    ("angry", -2.3),
    ("annoyed", -1.6),
    ("annoying", -1.7),
    ("anxious", -1.0),
    ("ashamed", -2.1),
    ("awful", -2.0),
    ("awkward", -0.6),
    ("bad", -2.5),
    ("badly", -2.1),
    ("bitter", -1.8),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broke", -1.8),
    ("broken", -2.1),
    ("bs", -1.8),
    ("bug", -1.0),
    ("cheap", -0.4),
    ("cheated", -1.9),
    ("clickbait", -1.8),
    ("confused", -1.3),
    ("confusing", -1.3),
    ("crap", -1.6),
    ("crappy", -2.5),
    ("crazy", -1.4),
    ("cringe", -1.7),
    ("cruel", -2.8),
    ("cry", -2.1),
    ("crying", -2.1),
    ("damn", -1.7),
    ("dead", -3.3),
    ("death", -2.9),
    ("die", -2.9),
    ("dirty", -1.9),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disappointment", -2.3),
    ("disaster", -3.1),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dumb", -2.3),
    ("evil", -3.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("fake", -2.1),
    ("fear", -2.2),
    ("fraud", -2.8),
    ("garbage", -2.0),
    ("gross", -2.1),
    ("guilty", -1.8),
    ("hard", -0.4),
    ("harm", -2.5),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hater", -1.8),
    ("haters", -2.2),
    ("hates", -1.9),
    ("hell", -3.6),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("idiot", -2.3),
    ("ignorant", -1.1),
    ("ill", -1.8),
    ("issue", -0.6),
    ("kill", -3.7),
    ("lame", -1.8),
    ("liar", -3.1),
    ("lie", -1.6),
    ("lies", -1.8),
    ("lose", -1.7),
    ("losing", -1.6),
    ("loss", -1.3),
    ("lost", -1.3),
    ("mad", -2.2),
    ("mess", -1.5),
    ("mediocre", -1.0),
    ("miss", -0.6),
    ("misleading", -1.6),
    ("mistake", -1.4),
    ("nasty", -2.6),
    ("nonsense", -1.7),
    ("pain", -2.3),
    ("painful", -1.9),
    ("pathetic", -2.7),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("racist", -3.1),
    ("regret", -1.8),
    ("ridiculous", -1.5),
    ("rip", -1.2),
    ("rubbish", -1.8),
    ("rude", -2.0),
    ("sad", -2.1),
    ("sadly", -1.6),
    ("scam", -2.4),
    ("scary", -2.2),
    ("shame", -2.1),
    ("shit", -2.6),
    ("sick", -2.3),
    ("slow", -0.7),
    ("sorry", -0.3),
    ("stupid", -2.4),
    ("suck", -1.9),
    ("sucks", -1.5),
    ("terrible", -2.1),
    ("trash", -1.8),
    ("ugly", -2.0),
    ("unfair", -2.1),
    ("unfortunately", -1.4),
    ("unhappy", -1.8),
    ("upset", -1.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("weak", -1.9),
    ("weird", -0.7),
    ("worried", -1.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("worthless", -1.9),
    ("wrong", -2.1),
    ("wtf", -2.8),
];

/// 絵文字の極性（異体字セレクタ除去後の文字で照合）
const EMOJI_VALENCES: &[(&str, f64)] = &[
    // ポジティブ
    ("😀", 2.1),
    ("😃", 2.3),
    ("😄", 2.4),
    ("😁", 2.1),
    ("😆", 2.0),
    ("😊", 2.3),
    ("🙂", 1.5),
    ("😉", 1.4),
    ("😍", 3.0),
    ("🥰", 2.9),
    ("😘", 2.3),
    ("🤗", 2.0),
    ("🤩", 2.8),
    ("🥳", 2.6),
    ("😎", 1.8),
    ("😂", 2.0),
    ("🤣", 2.0),
    ("😋", 1.6),
    ("👍", 2.0),
    ("👏", 2.0),
    ("🙌", 2.0),
    ("🙏", 1.6),
    ("💪", 1.7),
    ("🎉", 2.4),
    ("🎊", 2.4),
    ("🔥", 1.8),
    ("✨", 1.3),
    ("💯", 2.0),
    ("❤", 3.0),
    ("♥", 2.6),
    ("💕", 2.5),
    ("💖", 2.5),
    ("💗", 2.5),
    ("💓", 2.4),
    ("💘", 2.3),
    ("💙", 2.2),
    ("💚", 2.2),
    ("💛", 2.2),
    ("💜", 2.2),
    ("🧡", 2.2),
    ("🌟", 1.8),
    ("⭐", 1.5),
    ("🏆", 2.0),
    ("👌", 1.6),
    ("🥇", 2.0),
    // ネガティブ
    ("😢", -2.2),
    ("😭", -2.4),
    ("😞", -2.0),
    ("😔", -1.8),
    ("😟", -1.7),
    ("😕", -1.2),
    ("🙁", -1.5),
    ("☹", -1.8),
    ("😠", -2.5),
    ("😡", -2.9),
    ("🤬", -3.2),
    ("💢", -2.0),
    ("😤", -1.8),
    ("😰", -1.9),
    ("😨", -2.0),
    ("😱", -2.1),
    ("😫", -1.9),
    ("😩", -1.9),
    ("😣", -1.6),
    ("😖", -1.8),
    ("🤢", -2.4),
    ("🤮", -2.8),
    ("👎", -2.0),
    ("💔", -2.6),
    ("😒", -1.5),
    ("🙄", -1.3),
    ("💩", -1.8),
    ("🤡", -1.4),
];

/// 強調語・緩和語（符号は感情の向きに合わせて反転される）
const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", BOOSTER_INCREMENT),
    ("amazingly", BOOSTER_INCREMENT),
    ("awfully", BOOSTER_INCREMENT),
    ("completely", BOOSTER_INCREMENT),
    ("considerably", BOOSTER_INCREMENT),
    ("deeply", BOOSTER_INCREMENT),
    ("effing", BOOSTER_INCREMENT),
    ("enormously", BOOSTER_INCREMENT),
    ("entirely", BOOSTER_INCREMENT),
    ("especially", BOOSTER_INCREMENT),
    ("exceptionally", BOOSTER_INCREMENT),
    ("extremely", BOOSTER_INCREMENT),
    ("fabulously", BOOSTER_INCREMENT),
    ("freaking", BOOSTER_INCREMENT),
    ("fricking", BOOSTER_INCREMENT),
    ("fucking", BOOSTER_INCREMENT),
    ("fully", BOOSTER_INCREMENT),
    ("greatly", BOOSTER_INCREMENT),
    ("hella", BOOSTER_INCREMENT),
    ("highly", BOOSTER_INCREMENT),
    ("hugely", BOOSTER_INCREMENT),
    ("incredibly", BOOSTER_INCREMENT),
    ("intensely", BOOSTER_INCREMENT),
    ("majorly", BOOSTER_INCREMENT),
    ("more", BOOSTER_INCREMENT),
    ("most", BOOSTER_INCREMENT),
    ("particularly", BOOSTER_INCREMENT),
    ("purely", BOOSTER_INCREMENT),
    ("quite", BOOSTER_INCREMENT),
    ("really", BOOSTER_INCREMENT),
    ("remarkably", BOOSTER_INCREMENT),
    ("so", BOOSTER_INCREMENT),
    ("soo", BOOSTER_INCREMENT),
    ("sooo", BOOSTER_INCREMENT),
    ("substantially", BOOSTER_INCREMENT),
    ("thoroughly", BOOSTER_INCREMENT),
    ("totally", BOOSTER_INCREMENT),
    ("tremendously", BOOSTER_INCREMENT),
    ("truly", BOOSTER_INCREMENT),
    ("uber", BOOSTER_INCREMENT),
    ("unbelievably", BOOSTER_INCREMENT),
    ("unusually", BOOSTER_INCREMENT),
    ("utterly", BOOSTER_INCREMENT),
    ("very", BOOSTER_INCREMENT),
    ("almost", BOOSTER_DECREMENT),
    ("barely", BOOSTER_DECREMENT),
    ("hardly", BOOSTER_DECREMENT),
    ("kinda", BOOSTER_DECREMENT),
    ("less", BOOSTER_DECREMENT),
    ("little", BOOSTER_DECREMENT),
    ("marginally", BOOSTER_DECREMENT),
    ("occasionally", BOOSTER_DECREMENT),
    ("partly", BOOSTER_DECREMENT),
    ("scarcely", BOOSTER_DECREMENT),
    ("slightly", BOOSTER_DECREMENT),
    ("somewhat", BOOSTER_DECREMENT),
    ("sorta", BOOSTER_DECREMENT),
];

const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "neednt", "never", "none", "nope",
    "nor", "not", "nothing", "nowhere", "oughtnt", "shant", "shouldnt", "uhuh", "wasnt", "werent",
    "without", "wont", "wouldnt", "rarely", "seldom", "despite",
];

static LEXICON: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    WORD_VALENCES
        .iter()
        .chain(EMOJI_VALENCES.iter())
        .copied()
        .collect()
});

static BOOSTER_MAP: LazyLock<HashMap<&'static str, f64>> =
    LazyLock::new(|| BOOSTERS.iter().copied().collect());

static NEGATION_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NEGATIONS.iter().copied().collect());

/// 辞書上の極性（小文字化済みの語で照合）
pub fn lexicon_valence(word_lower: &str) -> Option<f64> {
    LEXICON.get(word_lower).copied()
}

pub fn is_in_lexicon(word_lower: &str) -> bool {
    LEXICON.contains_key(word_lower)
}

pub fn booster_value(word_lower: &str) -> Option<f64> {
    BOOSTER_MAP.get(word_lower).copied()
}

pub fn is_booster(word_lower: &str) -> bool {
    BOOSTER_MAP.contains_key(word_lower)
}

/// 否定語判定（"n't" を含む語も否定として扱う）
pub fn is_negation(word_lower: &str) -> bool {
    let normalized = word_lower.replace('\u{2019}', "'");
    NEGATION_SET.contains(normalized.as_str())
        || NEGATION_SET.contains(normalized.replace('\'', "").as_str())
        || normalized.contains("n't")
}

/// 絵文字として独立トークンに切り出す文字か
pub fn is_emoji_char(c: char) -> bool {
    matches!(c as u32,
        0x1F000..=0x1FAFF
        | 0x2600..=0x27BF
        | 0x2B00..=0x2BFF
        | 0x2300..=0x23FF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_lookup() {
        assert_eq!(lexicon_valence("great"), Some(3.1));
        assert_eq!(lexicon_valence("terrible"), Some(-2.1));
        assert_eq!(lexicon_valence("🔥"), Some(1.8));
        assert_eq!(lexicon_valence("video"), None);
    }

    #[test]
    fn test_negation_detection() {
        assert!(is_negation("not"));
        assert!(is_negation("don't"));
        assert!(is_negation("didn\u{2019}t"));
        assert!(is_negation("dont"));
        assert!(is_negation("shouldn't"));
        assert!(!is_negation("know"));
    }

    #[test]
    fn test_booster_signs() {
        assert_eq!(booster_value("very"), Some(BOOSTER_INCREMENT));
        assert_eq!(booster_value("slightly"), Some(BOOSTER_DECREMENT));
        assert!(!is_booster("video"));
    }

    #[test]
    fn test_emoji_detection() {
        assert!(is_emoji_char('🔥'));
        assert!(is_emoji_char('❤'));
        assert!(is_emoji_char('⭐'));
        assert!(!is_emoji_char('a'));
        assert!(!is_emoji_char('あ'));
    }

    #[test]
    fn test_lexicon_has_no_duplicate_entries() {
        let mut seen = HashSet::new();
        for (word, _) in WORD_VALENCES.iter().chain(EMOJI_VALENCES.iter()) {
            assert!(seen.insert(*word), "duplicate lexicon entry: {}", word);
        }
    }
}
