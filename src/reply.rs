//! Text normalization and keyword-triggered auto-replies.
//!
//! Incoming message text is canonicalized before matching so that common
//! Arabic orthographic variants (alef forms, final yaa, taa marbuta) all hit
//! the same keywords. Rules are static configuration checked in declaration
//! order; the first matching rule wins and one of its candidate replies is
//! chosen uniformly at random.

use rand::Rng;

/// A set of trigger keywords paired with candidate replies.
///
/// Rules are immutable and checked against incoming normalized text in
/// declaration order.
pub struct AutoReplyRule {
    /// Keywords that trigger this rule. Matched by substring containment
    /// after normalization.
    pub keywords: &'static [&'static str],
    /// Candidate replies, one of which is selected at random on a match.
    pub replies: &'static [&'static str],
}

/// The built-in auto-reply rules, in priority order.
pub const DEFAULT_RULES: &[AutoReplyRule] = &[
    AutoReplyRule {
        keywords: &["مرحبا", "هلا", "السلام", "السلام عليكم"],
        replies: &["وعليكم السلام 👋", "ياهلا فيك 🔥", "نورت ❤️"],
    },
    AutoReplyRule {
        keywords: &["كيفك", "شلونك"],
        replies: &["تمام الحمدلله 😄 وانت؟"],
    },
];

/// Words flagged for content filtering.
///
/// Declared configuration only: no enforcement action is currently wired to
/// this list.
pub const BAD_WORDS: &[&str] = &["زب", "كس", "قح"];

/// Canonicalizes text for keyword comparison.
///
/// Folds the alef variants `إ`/`أ`/`آ` to `ا`, `ى` to `ي`, and `ة` to `ه`,
/// lowercases, and trims surrounding whitespace. Absent input yields the
/// empty string. Pure and total; applying it twice is a no-op.
///
/// # Arguments
/// - `text` - Raw message text, possibly absent
///
/// # Returns
/// - `String` - The canonical comparable form
pub fn normalize(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    text.chars()
        .map(|c| match c {
            'إ' | 'أ' | 'آ' => 'ا',
            'ى' => 'ي',
            'ة' => 'ه',
            c => c,
        })
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Selects an auto-reply for normalized message text.
///
/// Rules are checked in declaration order; a rule matches when the text
/// contains any of its keywords (keywords are normalized before comparison).
/// On a match one of the rule's replies is chosen uniformly at random.
///
/// # Arguments
/// - `normalized` - Message text already passed through [`normalize`]
/// - `rules` - Rules to check, in priority order
///
/// # Returns
/// - `Some(&str)` - The selected reply from the first matching rule
/// - `None` - No rule matched; the caller sends nothing
pub fn match_reply(normalized: &str, rules: &[AutoReplyRule]) -> Option<&'static str> {
    for rule in rules {
        let matched = rule
            .keywords
            .iter()
            .any(|keyword| normalized.contains(normalize(Some(keyword)).as_str()));

        if matched {
            let mut rng = rand::rng();
            let idx = rng.random_range(0..rule.replies.len());
            return Some(rule.replies[idx]);
        }
    }

    None
}

/// Checks normalized text against the bad-word list.
///
/// No enforcement is attached to this check anywhere in the event flow; it
/// exists as declared configuration for a future moderation feature.
pub fn contains_bad_word(normalized: &str) -> bool {
    BAD_WORDS.iter().any(|word| normalized.contains(word))
}
