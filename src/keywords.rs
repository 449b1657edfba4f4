//! Keyword tables — ordered category→keyword lists compiled from
//! `config/triage_keywords.toml` by the build script.

use crate::classify::{IncidentType, UrgencyLevel};

/// One category and the phrases that select it.
///
/// Tables are slices of these, never maps: scan order is the tie-break.
#[derive(Debug)]
pub struct KeywordSet<L> {
    pub label: L,
    pub keywords: &'static [&'static str],
}

include!(concat!(env!("OUT_DIR"), "/keywords.rs"));

/// Return the label of the first set (in table order) having any keyword
/// (in list order) occur as a substring of `haystack`.
///
/// Plain substring containment: "hit" matches inside "chittoor".
pub fn first_match<L: Copy>(table: &[KeywordSet<L>], haystack: &str) -> Option<L> {
    for kset in table {
        if kset.keywords.iter().any(|kw| haystack.contains(kw)) {
            return Some(kset.label);
        }
    }
    None
}

/// Byte offset of the first standalone-word occurrence of `word` in
/// `haystack`.
///
/// Used where a phrase must not match inside a longer word, such as
/// gazetteer place names.
pub fn find_word(haystack: &str, word: &str) -> Option<usize> {
    if word.is_empty() {
        return None;
    }
    let bytes = haystack.as_bytes();
    let mut start = 0;
    while let Some(offset) = haystack[start..].find(word) {
        let pos = start + offset;
        let before_ok = pos == 0 || !bytes[pos - 1].is_ascii_alphanumeric();
        let after_pos = pos + word.len();
        let after_ok = after_pos >= bytes.len() || !bytes[after_pos].is_ascii_alphanumeric();
        if before_ok && after_ok {
            return Some(pos);
        }
        start = pos + haystack[pos..].chars().next().map_or(1, char::len_utf8);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_table_order() {
        let labels: Vec<IncidentType> = INCIDENT_KEYWORDS.iter().map(|k| k.label).collect();
        assert_eq!(
            labels,
            vec![
                IncidentType::Medical,
                IncidentType::Fire,
                IncidentType::Accident,
                IncidentType::Crime,
            ]
        );
    }

    #[test]
    fn test_urgency_table_order() {
        let labels: Vec<UrgencyLevel> = URGENCY_KEYWORDS.iter().map(|k| k.label).collect();
        assert_eq!(
            labels,
            vec![
                UrgencyLevel::Critical,
                UrgencyLevel::High,
                UrgencyLevel::Medium,
                UrgencyLevel::Low,
            ]
        );
    }

    #[test]
    fn test_filler_vocabulary() {
        assert_eq!(
            FILLER_WORDS,
            &["um", "uh", "please", "sir", "actually", "hello", "hey", "kindly", "ok", "okay"]
        );
        assert_eq!(LOCATIVE_PREPOSITIONS, &["in", "near", "at"]);
    }

    #[test]
    fn test_first_match_multiword() {
        assert_eq!(
            first_match(INCIDENT_KEYWORDS, "there is a gas leak"),
            Some(IncidentType::Fire)
        );
        assert_eq!(first_match(INCIDENT_KEYWORDS, "gasleak"), None);
    }

    #[test]
    fn test_first_match_none() {
        assert_eq!(first_match(URGENCY_KEYWORDS, "the weather is nice"), None);
        assert_eq!(first_match(URGENCY_KEYWORDS, ""), None);
    }

    #[test]
    fn test_find_word() {
        assert_eq!(find_word("accident near rayachoty", "rayachoty"), Some(14));
        assert_eq!(find_word("new delhi station", "new delhi"), Some(0));
        assert_eq!(find_word("chittoor", "hit"), None);
        assert_eq!(find_word("chittoor hit", "hit"), Some(9));
        assert_eq!(find_word("", "hit"), None);
        assert_eq!(find_word("hit", ""), None);
    }
}
