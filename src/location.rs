//! Location resolution — entity recognition first, positional rule second.
//!
//! The resolver asks an [`EntityRecognizer`] for labeled spans and accepts
//! the first geo-political, location or facility span. When the recognizer
//! finds nothing (or fails), the word following the first locative
//! preposition ("in", "near", "at") is used instead.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::{RecognizerError, TriageError, TriageResult};
use crate::keywords::{find_word, LOCATIVE_PREPOSITIONS};
use crate::normalize::normalize;

/// Sentinel text for an unresolved location.
pub const NOT_FOUND: &str = "Not Found";

/// Entity type tag attached to a recognized span.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// Geo-political entity: countries, states, cities, towns.
    Gpe,
    /// Non-GPE location: rivers, mountains, regions.
    Loc,
    /// Facility: buildings, bridges, highways, stations.
    Fac,
    /// Any other recognizer-defined tag.
    Other(String),
}

impl EntityLabel {
    /// Map a spaCy-style tag (`GPE`, `LOC`, `FAC`, ...) to a label.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "GPE" => EntityLabel::Gpe,
            "LOC" => EntityLabel::Loc,
            "FAC" => EntityLabel::Fac,
            other => EntityLabel::Other(other.to_string()),
        }
    }

    pub fn as_tag(&self) -> &str {
        match self {
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Fac => "FAC",
            EntityLabel::Other(tag) => tag,
        }
    }

    /// Whether spans with this label can name a location.
    pub fn is_locative(&self) -> bool {
        matches!(self, EntityLabel::Gpe | EntityLabel::Loc | EntityLabel::Fac)
    }
}

/// A recognized span of text with its entity label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// Named-entity recognition capability consumed by [`LocationResolver`].
///
/// Implementations are shared across calls and threads, so they must be
/// safe for concurrent read-only use.
pub trait EntityRecognizer: Send + Sync {
    /// Return labeled spans found in `text`, in the recognizer's own order.
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError>;
}

/// Recognizer that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        Ok(Vec::new())
    }
}

struct GazetteerEntry {
    name: String,
    label: EntityLabel,
}

/// Dictionary recognizer over a list of known place names.
///
/// Names are normalized on construction so they match normalized report
/// text. Spans come back in order of first appearance; a longer name wins
/// over a shorter one starting at the same position.
pub struct GazetteerRecognizer {
    entries: Vec<GazetteerEntry>,
}

impl GazetteerRecognizer {
    /// Build from `(place name, label)` pairs.
    pub fn new<I, S>(places: I) -> TriageResult<Self>
    where
        I: IntoIterator<Item = (S, EntityLabel)>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        for (raw, label) in places {
            let name = normalize(raw.as_ref());
            if name.is_empty() {
                return Err(TriageError::InvalidGazetteerEntry {
                    name: raw.as_ref().to_string(),
                });
            }
            entries.push(GazetteerEntry { name, label });
        }
        Ok(Self { entries })
    }

    /// Build from `(place name, tag)` pairs, where tag is `GPE`, `LOC` or `FAC`.
    pub fn from_tagged<I, S, T>(places: I) -> TriageResult<Self>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut labeled = Vec::new();
        for (name, tag) in places {
            let label = EntityLabel::from_tag(tag.as_ref());
            if !label.is_locative() {
                return Err(TriageError::UnknownEntityTag {
                    tag: tag.as_ref().to_string(),
                });
            }
            labeled.push((name.as_ref().to_string(), label));
        }
        Self::new(labeled)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for GazetteerRecognizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GazetteerRecognizer")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl EntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, RecognizerError> {
        let mut hits: Vec<(usize, &GazetteerEntry)> = self
            .entries
            .iter()
            .filter_map(|entry| find_word(text, &entry.name).map(|pos| (pos, entry)))
            .collect();
        hits.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.name.len().cmp(&a.1.name.len())));
        Ok(hits
            .into_iter()
            .map(|(_, entry)| EntitySpan::new(entry.name.clone(), entry.label.clone()))
            .collect())
    }
}

/// Outcome of location resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Span accepted from the entity recognizer.
    Entity(EntitySpan),
    /// Word following a locative preposition.
    Positional(String),
    NotFound,
}

impl Location {
    /// Location text, or `"Not Found"`.
    pub fn as_str(&self) -> &str {
        match self {
            Location::Entity(span) => &span.text,
            Location::Positional(word) => word,
            Location::NotFound => NOT_FOUND,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Location::NotFound)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the location mentioned in normalized report text.
#[derive(Clone)]
pub struct LocationResolver {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl LocationResolver {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    /// Extract a location from normalized text.
    ///
    /// Recognizer errors are logged and handled as "no spans", so location
    /// lookup never fails.
    pub fn extract_location(&self, normalized: &str) -> Location {
        let spans = match self.recognizer.recognize(normalized) {
            Ok(spans) => spans,
            Err(e) => {
                warn!(error = %e, "entity recognizer failed, using positional fallback");
                Vec::new()
            }
        };

        if let Some(span) = spans.into_iter().find(|s| s.label.is_locative()) {
            debug!(location = %span.text, tag = span.label.as_tag(), "location from entity span");
            return Location::Entity(span);
        }

        match word_after_preposition(normalized) {
            Some(word) => {
                debug!(location = word, "location from preposition fallback");
                Location::Positional(word.to_string())
            }
            None => {
                debug!("no location found");
                Location::NotFound
            }
        }
    }
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new(Arc::new(NoopRecognizer))
    }
}

impl fmt::Debug for LocationResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationResolver").finish_non_exhaustive()
    }
}

/// The word right after the first "in" / "near" / "at" that has one.
fn word_after_preposition(normalized: &str) -> Option<&str> {
    let words: Vec<&str> = normalized.split_whitespace().collect();
    words
        .windows(2)
        .find(|pair| LOCATIVE_PREPOSITIONS.contains(&pair[0]))
        .map(|pair| pair[1])
}
