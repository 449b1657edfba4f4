//! End-to-end triage of one caller report.

use std::sync::Arc;

use tracing::debug;

use crate::classify::{classify_incident, detect_urgency, IncidentType, UrgencyLevel};
use crate::error::TriageResult;
use crate::location::{
    EntityLabel, EntityRecognizer, GazetteerRecognizer, Location, LocationResolver,
};
use crate::normalize::normalize;

/// Structured fields extracted from one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageReport {
    pub normalized: String,
    pub incident: IncidentType,
    pub urgency: UrgencyLevel,
    pub location: Location,
}

/// Report triage pipeline.
///
/// Holds the entity recognizer for the life of the process; cloning shares
/// it. The text is normalized once and the same string feeds both
/// classifiers and the location resolver.
#[derive(Debug, Clone, Default)]
pub struct Triage {
    resolver: LocationResolver,
}

impl Triage {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            resolver: LocationResolver::new(recognizer),
        }
    }

    /// Pipeline backed by a gazetteer of known places.
    pub fn with_gazetteer<I, S>(places: I) -> TriageResult<Self>
    where
        I: IntoIterator<Item = (S, EntityLabel)>,
        S: AsRef<str>,
    {
        Ok(Self::new(Arc::new(GazetteerRecognizer::new(places)?)))
    }

    pub fn resolver(&self) -> &LocationResolver {
        &self.resolver
    }

    pub fn triage(&self, raw: &str) -> TriageReport {
        let normalized = normalize(raw);
        let incident = classify_incident(&normalized);
        let urgency = detect_urgency(&normalized);
        let location = self.resolver.extract_location(&normalized);
        debug!(
            normalized = %normalized,
            incident = %incident,
            urgency = %urgency,
            location = %location,
            "triaged report"
        );
        TriageReport {
            normalized,
            incident,
            urgency,
            location,
        }
    }
}
