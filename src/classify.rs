//! Incident-type and urgency classification over normalized report text.
//!
//! Both classifiers scan an ordered keyword table and return the first
//! category with a keyword present. They differ only in what happens when
//! nothing matches: incident type reports [`IncidentType::Unknown`], while
//! urgency falls back to [`UrgencyLevel::Low`]. The asymmetry is deliberate;
//! dispatch assumes "least urgent" rather than "unknown urgency".

use std::fmt;
use std::str::FromStr;

use crate::keywords::{first_match, INCIDENT_KEYWORDS, URGENCY_KEYWORDS};

/// Incident category of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IncidentType {
    Medical,
    Fire,
    Accident,
    Crime,
    /// No incident keyword present.
    Unknown,
}

impl IncidentType {
    /// All categories in table (tie-break) order, sentinel last.
    pub const ALL: [IncidentType; 5] = [
        IncidentType::Medical,
        IncidentType::Fire,
        IncidentType::Accident,
        IncidentType::Crime,
        IncidentType::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IncidentType::Medical => "Medical",
            IncidentType::Fire => "Fire",
            IncidentType::Accident => "Accident",
            IncidentType::Crime => "Crime",
            IncidentType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a label that names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown label: {0:?}")]
pub struct UnknownLabel(pub String);

impl FromStr for IncidentType {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncidentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Dispatch urgency tier, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    #[default]
    Low,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Critical,
        UrgencyLevel::High,
        UrgencyLevel::Medium,
        UrgencyLevel::Low,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            UrgencyLevel::Critical => "CRITICAL",
            UrgencyLevel::High => "HIGH",
            UrgencyLevel::Medium => "MEDIUM",
            UrgencyLevel::Low => "LOW",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UrgencyLevel::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

/// Classify the incident type of normalized text.
///
/// Categories are tried in Medical, Fire, Accident, Crime order; keywords
/// are matched as substrings. Returns [`IncidentType::Unknown`] when no
/// keyword occurs.
pub fn classify_incident(normalized: &str) -> IncidentType {
    first_match(INCIDENT_KEYWORDS, normalized).unwrap_or(IncidentType::Unknown)
}

/// Detect the urgency tier of normalized text.
///
/// Tiers are tried from CRITICAL down to LOW. With no keyword present the
/// result is [`UrgencyLevel::Low`].
pub fn detect_urgency(normalized: &str) -> UrgencyLevel {
    first_match(URGENCY_KEYWORDS, normalized).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_each_category() {
        assert_eq!(classify_incident("man is bleeding badly"), IncidentType::Medical);
        assert_eq!(classify_incident("smoke from the kitchen"), IncidentType::Fire);
        assert_eq!(classify_incident("bus collision on highway"), IncidentType::Accident);
        assert_eq!(classify_incident("armed robbery at the bank"), IncidentType::Crime);
    }

    #[test]
    fn test_classify_order_sensitivity() {
        assert_eq!(classify_incident("fire accident"), IncidentType::Fire);
        assert_eq!(classify_incident("accident fire"), IncidentType::Fire);
        // "heart attack" is Medical even though "attack" is a Crime keyword.
        assert_eq!(classify_incident("he had a heart attack"), IncidentType::Medical);
        assert_eq!(classify_incident("robbery and explosion"), IncidentType::Fire);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify_incident("vehicle overturned near rayachoty"), IncidentType::Unknown);
        assert_eq!(classify_incident(""), IncidentType::Unknown);
    }

    #[test]
    fn test_classify_substring_match() {
        // "hit" inside "chittoor".
        assert_eq!(classify_incident("flood in chittoor"), IncidentType::Accident);
        assert_eq!(classify_incident("firefighters needed"), IncidentType::Fire);
    }

    #[test]
    fn test_urgency_levels() {
        assert_eq!(detect_urgency("he is not breathing"), UrgencyLevel::Critical);
        assert_eq!(detect_urgency("come immediately"), UrgencyLevel::High);
        assert_eq!(detect_urgency("need help"), UrgencyLevel::Medium);
        assert_eq!(detect_urgency("minor scratch"), UrgencyLevel::Low);
    }

    #[test]
    fn test_urgency_order() {
        assert_eq!(detect_urgency("injured and dying"), UrgencyLevel::Critical);
        assert_eq!(detect_urgency("help immediately"), UrgencyLevel::High);
        // "serious" is a HIGH keyword and is scanned before LOW's "not serious".
        assert_eq!(detect_urgency("it is not serious"), UrgencyLevel::High);
    }

    #[test]
    fn test_urgency_default_low() {
        assert_eq!(detect_urgency("the weather is nice"), UrgencyLevel::Low);
        assert_eq!(detect_urgency(""), UrgencyLevel::Low);
    }

    #[test]
    fn test_labels_round_trip_through_from_str() {
        assert_eq!("Fire".parse::<IncidentType>(), Ok(IncidentType::Fire));
        assert_eq!("Unknown".parse::<IncidentType>(), Ok(IncidentType::Unknown));
        assert!("fire".parse::<IncidentType>().is_err());
        assert_eq!("HIGH".parse::<UrgencyLevel>(), Ok(UrgencyLevel::High));
        assert_eq!(UrgencyLevel::Critical.to_string(), "CRITICAL");
    }
}
