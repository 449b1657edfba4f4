//! Keyword triage of emergency caller reports.
//!
//! Turns a short caller transcript into structured dispatch fields:
//! 1. Normalization (lower-case, filler-word and punctuation stripping)
//! 2. Incident type (ordered keyword table, "Unknown" when nothing matches)
//! 3. Urgency (ordered keyword table, "LOW" when nothing matches)
//! 4. Location (entity recognizer, then word after "in"/"near"/"at")
//!
//! Built with the `python` feature the crate is also a Python extension
//! module exposing the same operations.

pub mod classify;
pub mod error;
pub mod evaluate;
pub mod keywords;
pub mod location;
pub mod normalize;
pub mod pipeline;

#[cfg(feature = "python")]
mod python;

pub use classify::{classify_incident, detect_urgency, IncidentType, UnknownLabel, UrgencyLevel};
pub use error::{RecognizerError, TriageError, TriageResult};
pub use evaluate::{evaluate, macro_f1, parse_labeled_tsv, Evaluation, LabeledReport};
pub use location::{
    EntityLabel, EntityRecognizer, EntitySpan, GazetteerRecognizer, Location, LocationResolver,
    NoopRecognizer,
};
pub use normalize::normalize;
pub use pipeline::{Triage, TriageReport};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Triage Core — native accelerator for emergency report triage.
#[cfg(feature = "python")]
#[pymodule]
fn triage_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Normalization
    m.add_function(wrap_pyfunction!(python::normalize_text, m)?)?;

    // Keyword classification
    m.add_function(wrap_pyfunction!(python::classify_incident, m)?)?;
    m.add_function(wrap_pyfunction!(python::detect_urgency, m)?)?;

    // Location
    m.add_function(wrap_pyfunction!(python::extract_location, m)?)?;

    // Pipeline and scoring
    m.add_function(wrap_pyfunction!(python::triage, m)?)?;
    m.add_function(wrap_pyfunction!(python::macro_f1_score, m)?)?;

    Ok(())
}
