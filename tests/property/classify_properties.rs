use proptest::prelude::*;
use triage_core::{classify_incident, detect_urgency, normalize, IncidentType, LocationResolver, UrgencyLevel};

proptest! {
    #[test]
    fn classifiers_are_total_and_deterministic(s in ".{0,200}") {
        let n = normalize(&s);
        prop_assert_eq!(classify_incident(&n), classify_incident(&n));
        prop_assert_eq!(detect_urgency(&n), detect_urgency(&n));
        let resolver = LocationResolver::default();
        prop_assert_eq!(resolver.extract_location(&n), resolver.extract_location(&n));
    }

    // Vowel-free words cannot contain any keyword, since every keyword has a vowel.
    #[test]
    fn keyword_free_text_uses_defaults(words in prop::collection::vec("[bcdfghjklmnpqrstvwxz]{1,8}", 0..10)) {
        let text = words.join(" ");
        prop_assert_eq!(classify_incident(&text), IncidentType::Unknown);
        prop_assert_eq!(detect_urgency(&text), UrgencyLevel::Low);
    }

    #[test]
    fn earlier_category_wins(prefix in "[bcdfg]{0,5}", suffix in "[bcdfg]{0,5}") {
        let text = format!("{prefix} crash {suffix} fire");
        prop_assert_eq!(classify_incident(&text), IncidentType::Fire);
        let text = format!("{prefix} robbery {suffix} collision");
        prop_assert_eq!(classify_incident(&text), IncidentType::Accident);
    }

    #[test]
    fn word_after_near_is_location(place in "[bcdfgklmnprstvy]{2,12}") {
        let text = format!("accident near {place}");
        let location = LocationResolver::default().extract_location(&text);
        prop_assert_eq!(location.as_str(), place.as_str());
    }
}
