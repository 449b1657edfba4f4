//! Crate error types.

/// Failure reported by an [`EntityRecognizer`](crate::location::EntityRecognizer).
///
/// The location resolver absorbs these: a failing recognizer is treated
/// as one that found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecognizerError {
    #[error("entity recognizer unavailable: {0}")]
    Unavailable(String),

    #[error("entity recognition failed: {reason}")]
    Failed { reason: String },
}

/// Errors raised while building triage resources or evaluating samples.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TriageError {
    #[error("gazetteer entry {name:?} is empty after normalization")]
    InvalidGazetteerEntry { name: String },

    #[error("unrecognized entity tag {tag:?}")]
    UnknownEntityTag { tag: String },

    #[error("malformed sample on line {line}: {reason}")]
    MalformedSample { line: usize, reason: String },

    #[error("label sequences differ in length: {truth} expected vs {predicted} predicted")]
    LengthMismatch { truth: usize, predicted: usize },
}

pub type TriageResult<T> = Result<T, TriageError>;
