//! Report normalization — lower-case, drop filler words, keep letters only.
//!
//! Every consumer downstream (keyword classifiers and location resolver)
//! works on the output of [`normalize`], which contains only `a-z` and
//! single spaces with no leading or trailing whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::keywords::FILLER_WORDS;

// Whole-word filler match, run while punctuation is still present so that
// "ok," and "sir." keep their word boundaries.
static FILLER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let alternation = FILLER_WORDS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("filler pattern is built from escaped words")
});

static NON_LETTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z\s]").expect("static pattern"));

static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("static pattern"));

/// Normalize a raw caller report.
///
/// Steps, in order:
/// 1. lower-case;
/// 2. remove whole-word filler words (`um`, `please`, `sir`, ...);
/// 3. delete every character that is not `a-z` or whitespace;
/// 4. collapse whitespace runs to one space and trim.
///
/// Step 3 can glue a filler back together ("o.k" becomes "ok"), so a final
/// token pass drops any filler left standing. This keeps
/// `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let without_fillers = FILLER_PATTERN.replace_all(&lowered, "");
    let letters_only = NON_LETTER_PATTERN.replace_all(&without_fillers, "");
    let collapsed = WHITESPACE_PATTERN.replace_all(&letters_only, " ");

    collapsed
        .split(' ')
        .filter(|token| !token.is_empty() && !is_filler(token))
        .collect::<Vec<&str>>()
        .join(" ")
}

/// True if `word` is exactly one of the filler words.
pub fn is_filler(word: &str) -> bool {
    FILLER_WORDS.contains(&word)
}
