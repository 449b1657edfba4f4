//! Python bindings for the dispatch triage tool.
//!
//! Functions take raw or normalized text exactly like their Rust
//! counterparts; `places` arguments are `(name, tag)` pairs with tag one
//! of `GPE`, `LOC`, `FAC`.

use std::sync::Arc;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::error::TriageError;
use crate::location::{EntityRecognizer, GazetteerRecognizer, LocationResolver, NoopRecognizer};
use crate::pipeline::Triage;

impl From<TriageError> for PyErr {
    fn from(err: TriageError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

fn recognizer(places: Option<Vec<(String, String)>>) -> PyResult<Arc<dyn EntityRecognizer>> {
    let recognizer: Arc<dyn EntityRecognizer> = match places {
        Some(places) => Arc::new(GazetteerRecognizer::from_tagged(places)?),
        None => Arc::new(NoopRecognizer),
    };
    Ok(recognizer)
}

/// Lower-case, strip filler words and non-letters, collapse whitespace.
#[pyfunction]
pub fn normalize_text(text: &str) -> String {
    crate::normalize::normalize(text)
}

/// Incident type of normalized text: "Medical", "Fire", "Accident",
/// "Crime" or "Unknown".
#[pyfunction]
pub fn classify_incident(text: &str) -> &'static str {
    crate::classify::classify_incident(text).as_str()
}

/// Urgency of normalized text: "CRITICAL", "HIGH", "MEDIUM" or "LOW".
#[pyfunction]
pub fn detect_urgency(text: &str) -> &'static str {
    crate::classify::detect_urgency(text).as_str()
}

/// Location mentioned in normalized text, or "Not Found".
#[pyfunction]
#[pyo3(signature = (text, places=None))]
pub fn extract_location(text: &str, places: Option<Vec<(String, String)>>) -> PyResult<String> {
    let resolver = LocationResolver::new(recognizer(places)?);
    Ok(resolver.extract_location(text).as_str().to_string())
}

/// Run the full pipeline on a raw report.
///
/// Returns a dict with keys `normalized`, `type`, `urgency`, `location`.
#[pyfunction]
#[pyo3(signature = (text, places=None))]
pub fn triage(
    py: Python<'_>,
    text: &str,
    places: Option<Vec<(String, String)>>,
) -> PyResult<Py<PyDict>> {
    let report = Triage::new(recognizer(places)?).triage(text);
    let dict = PyDict::new_bound(py);
    dict.set_item("normalized", &report.normalized)?;
    dict.set_item("type", report.incident.as_str())?;
    dict.set_item("urgency", report.urgency.as_str())?;
    dict.set_item("location", report.location.as_str())?;
    Ok(dict.unbind())
}

/// Macro-averaged F1 of predicted against true labels.
#[pyfunction]
pub fn macro_f1_score(y_true: Vec<String>, y_pred: Vec<String>) -> PyResult<f64> {
    Ok(crate::evaluate::macro_f1(&y_true, &y_pred)?)
}
