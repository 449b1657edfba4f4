use proptest::prelude::*;
use triage_core::normalize;
use triage_core::normalize::is_filler;

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".{0,200}") {
        let once = normalize(&s);
        let twice = normalize(&once);
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn output_is_lowercase_letters_and_single_spaces(s in ".{0,200}") {
        let out = normalize(&s);
        prop_assert!(out.chars().all(|c| c.is_ascii_lowercase() || c == ' '), "bad char in {:?}", out);
        prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
        prop_assert!(!out.contains("  "));
    }

    #[test]
    fn no_filler_tokens_survive(s in "[a-zA-Z ,.!?]{0,120}") {
        let out = normalize(&s);
        prop_assert!(out.split(' ').all(|t| !is_filler(t)), "filler left in {:?}", out);
    }

    #[test]
    fn fillers_around_words_vanish(
        word in "[b-df-hj-np-tv-z]{3,10}",
        filler in prop::sample::select(vec!["um", "uh", "please", "sir", "actually", "hello", "hey", "kindly", "ok", "okay"])
    ) {
        let input = format!("{filler}, {word} {filler}!");
        prop_assert_eq!(normalize(&input), word);
    }

    #[test]
    fn normalize_is_deterministic(s in ".{0,100}") {
        prop_assert_eq!(normalize(&s), normalize(&s));
    }
}
