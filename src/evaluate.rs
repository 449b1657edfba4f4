//! Batch evaluation of incident classification against labeled reports.

use std::collections::{BTreeSet, HashMap};

use crate::error::{TriageError, TriageResult};
use crate::pipeline::{Triage, TriageReport};

/// A raw report and its expected incident label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledReport {
    pub text: String,
    pub label: String,
}

impl LabeledReport {
    pub fn new(text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Reference samples used when no dataset is supplied.
pub const SAMPLE_REPORTS: &[(&str, &str)] = &[
    ("burning accident in chittoor please help immediately", "Fire"),
    ("a person is injured at Tirupathi", "Medical"),
    ("vehicle overturned near rayachoty", "Accident"),
];

pub fn sample_reports() -> Vec<LabeledReport> {
    SAMPLE_REPORTS
        .iter()
        .map(|(text, label)| LabeledReport::new(*text, *label))
        .collect()
}

/// Parse `text<TAB>label` lines. Blank lines and `#` comments are skipped.
pub fn parse_labeled_tsv(input: &str) -> TriageResult<Vec<LabeledReport>> {
    let mut samples = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let (text, label) = line.rsplit_once('\t').ok_or_else(|| TriageError::MalformedSample {
            line: line_no,
            reason: "expected `text<TAB>label`".to_string(),
        })?;
        let (text, label) = (text.trim(), label.trim());
        if text.is_empty() || label.is_empty() {
            return Err(TriageError::MalformedSample {
                line: line_no,
                reason: "empty text or label".to_string(),
            });
        }
        samples.push(LabeledReport::new(text, label));
    }
    Ok(samples)
}

/// Macro-averaged F1 over the union of labels seen in either sequence.
///
/// Precision or recall with a zero denominator counts as 0, as does F1
/// when precision and recall are both 0. Empty input scores 0.0.
pub fn macro_f1<T, P>(truth: &[T], predicted: &[P]) -> TriageResult<f64>
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    if truth.len() != predicted.len() {
        return Err(TriageError::LengthMismatch {
            truth: truth.len(),
            predicted: predicted.len(),
        });
    }

    let labels: BTreeSet<&str> = truth
        .iter()
        .map(|t| t.as_ref())
        .chain(predicted.iter().map(|p| p.as_ref()))
        .collect();
    if labels.is_empty() {
        return Ok(0.0);
    }

    // label -> (true positives, predicted count, actual count)
    let mut counts: HashMap<&str, (usize, usize, usize)> = HashMap::new();
    for (t, p) in truth.iter().zip(predicted) {
        let (t, p) = (t.as_ref(), p.as_ref());
        counts.entry(t).or_default().2 += 1;
        let entry = counts.entry(p).or_default();
        entry.1 += 1;
        if t == p {
            entry.0 += 1;
        }
    }

    let total: f64 = labels
        .iter()
        .map(|label| {
            let (tp, pred, actual) = counts.get(label).copied().unwrap_or_default();
            let precision = ratio(tp, pred);
            let recall = ratio(tp, actual);
            if precision + recall == 0.0 {
                0.0
            } else {
                2.0 * precision * recall / (precision + recall)
            }
        })
        .sum();
    Ok(total / labels.len() as f64)
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// One evaluated sample.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationRow {
    pub text: String,
    pub expected: String,
    pub report: TriageReport,
}

impl EvaluationRow {
    pub fn is_correct(&self) -> bool {
        self.report.incident.as_str() == self.expected
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub rows: Vec<EvaluationRow>,
    pub macro_f1: f64,
}

/// Triage every sample and score the incident predictions.
pub fn evaluate(triage: &Triage, samples: &[LabeledReport]) -> TriageResult<Evaluation> {
    let rows: Vec<EvaluationRow> = samples
        .iter()
        .map(|sample| EvaluationRow {
            text: sample.text.clone(),
            expected: sample.label.clone(),
            report: triage.triage(&sample.text),
        })
        .collect();

    let truth: Vec<&str> = rows.iter().map(|r| r.expected.as_str()).collect();
    let predicted: Vec<&str> = rows.iter().map(|r| r.report.incident.as_str()).collect();
    let macro_f1 = macro_f1(&truth, &predicted)?;

    Ok(Evaluation { rows, macro_f1 })
}
