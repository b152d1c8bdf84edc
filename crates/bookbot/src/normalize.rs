//! Text canonicalization for title matching.
//!
//! Everything here is pure string work: fold typographic punctuation,
//! lowercase, strip punctuation to spaces, collapse whitespace. Titles
//! additionally lose one leading article so "The Hobbit" and "Hobbit"
//! normalize the same way.

use std::sync::LazyLock;

use regex::Regex;

/// Conversational filler removed from a message before book resolution.
///
/// Order matters: phrases are removed front to back, so an early phrase can
/// punch a hole in a longer one listed later. That is intentional and part
/// of the matching contract.
pub const HELPER_PHRASES: [&str; 24] = [
    "tell me about",
    "summary of",
    "give me the summary of",
    "short summary of",
    "what is",
    "what's",
    "whats",
    "can you summarize",
    "verdict on",
    "who is the author of",
    "author of",
    "who wrote",
    "writer of",
    "how many pages in",
    "total pages of",
    "length of",
    "page count of",
    "number of pages in",
    "how long is",
    "rating of",
    "goodreads rating of",
    "average rating of",
    "how is",
    "what is the rating of",
];

static NON_WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("non-word regex is valid"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex is valid"));
static LEADING_ARTICLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(the|a|an)\s+").expect("leading article regex is valid"));
static HELPER_PHRASE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    HELPER_PHRASES
        .iter()
        .map(|phrase| {
            Regex::new(&format!(r"\b{}\b", regex::escape(phrase)))
                .expect("helper phrase regex is valid")
        })
        .collect()
});

/// Canonical form of arbitrary text: quotes/dashes folded to ASCII,
/// lowercased, punctuation replaced by spaces, whitespace collapsed.
/// Idempotent.
pub fn normalize_text(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }
    let s = fold_smart_punctuation(&s.to_lowercase());
    let s = NON_WORD_RE.replace_all(&s, " ");
    let s = WHITESPACE_RE.replace_all(&s, " ");
    s.trim().to_string()
}

/// Canonical form of a book title: `normalize_text` plus one leading
/// article ("the", "a", "an") dropped.
pub fn normalize_title(s: &str) -> String {
    let s = normalize_text(s);
    strip_leading_article(&s).to_string()
}

/// Remove known helper phrases ("tell me about", "who wrote", ...) from a
/// raw message, matching whole phrases at word boundaries only.
///
/// This lowercases and folds smart punctuation but deliberately does not
/// strip punctuation, so a title like "don't look back" survives intact
/// for the resolver's own normalization.
pub fn strip_helper_phrases(message: &str) -> String {
    let mut m = fold_smart_punctuation(&message.to_lowercase());
    for re in HELPER_PHRASE_RES.iter() {
        m = re.replace_all(&m, "").into_owned();
    }
    WHITESPACE_RE.replace_all(&m, " ").trim().to_string()
}

/// Slice off one leading article token, if present.
pub(crate) fn strip_leading_article(s: &str) -> &str {
    match LEADING_ARTICLE_RE.find(s) {
        Some(m) => &s[m.end()..],
        None => s,
    }
}

fn fold_smart_punctuation(s: &str) -> String {
    s.replace('\u{2019}', "'")
        .replace('\u{2018}', "'")
        .replace('\u{201C}', "\"")
        .replace('\u{201D}', "\"")
        .replace('\u{2013}', "-")
        .replace('\u{2014}', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_strips_punctuation() {
        assert_eq!(normalize_text("What's “Dune”?"), "what s dune");
        assert_eq!(normalize_text("  spaced   out\ttext "), "spaced out text");
    }

    #[test]
    fn test_normalize_text_folds_smart_punctuation() {
        assert_eq!(normalize_text("it’s"), normalize_text("it's"));
        assert_eq!(normalize_text("1984 – Orwell"), "1984 orwell");
    }

    #[test]
    fn test_normalize_text_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("?!*"), "");
    }

    #[test]
    fn test_normalize_text_idempotent() {
        let samples = [
            "What's the deal with “Dune”?",
            "THE  HUNGER   GAMES!!!",
            "it ends with us",
            "",
        ];
        for s in samples {
            let once = normalize_text(s);
            assert_eq!(normalize_text(&once), once);
        }
    }

    #[test]
    fn test_normalize_title_strips_one_leading_article() {
        assert_eq!(normalize_title("The Hunger Games"), "hunger games");
        assert_eq!(normalize_title("An Unwanted Guest"), "unwanted guest");
        // only the first article goes
        assert_eq!(normalize_title("The A Team"), "a team");
        assert_eq!(normalize_title("Dune"), "dune");
    }

    #[test]
    fn test_strip_helper_phrases_removes_phrase() {
        assert_eq!(strip_helper_phrases("who wrote Dune"), "dune");
        assert_eq!(strip_helper_phrases("Tell Me About Dune"), "dune");
        assert_eq!(
            strip_helper_phrases("give me the summary of the hobbit"),
            "give me the the hobbit"
        );
    }

    #[test]
    fn test_strip_helper_phrases_keeps_punctuation() {
        // phrase removal only; the title's apostrophe must survive
        assert_eq!(strip_helper_phrases("summary of don’t look back"), "don't look back");
    }

    #[test]
    fn test_strip_helper_phrases_respects_word_boundaries() {
        assert_eq!(strip_helper_phrases("somewhat issue"), "somewhat issue");
    }
}
