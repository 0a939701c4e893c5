//! Domain entities. Pure data structures for the core business.
//!
//! No model/IO types here; artifacts are mapped into these by adapters.

use chrono::{DateTime, Local};
use std::fmt;

/// Emotion category produced by the label decoder.
///
/// The eight known categories carry a fixed mood score. A decoder whose label set
/// was extended without updating the table yields `Other`, which scores 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Emotion {
    Joy,
    Neutral,
    Fear,
    Anger,
    Sadness,
    Disgust,
    Shame,
    Guilt,
    Other(String),
}

impl Emotion {
    /// All categories with an entry in the score table.
    pub const KNOWN: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Neutral,
        Emotion::Fear,
        Emotion::Anger,
        Emotion::Sadness,
        Emotion::Disgust,
        Emotion::Shame,
        Emotion::Guilt,
    ];

    /// Map a decoded label to a category. Matching is exact; anything else is `Other`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "joy" => Emotion::Joy,
            "neutral" => Emotion::Neutral,
            "fear" => Emotion::Fear,
            "anger" => Emotion::Anger,
            "sadness" => Emotion::Sadness,
            "disgust" => Emotion::Disgust,
            "shame" => Emotion::Shame,
            "guilt" => Emotion::Guilt,
            other => Emotion::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Neutral => "neutral",
            Emotion::Fear => "fear",
            Emotion::Anger => "anger",
            Emotion::Sadness => "sadness",
            Emotion::Disgust => "disgust",
            Emotion::Shame => "shame",
            Emotion::Guilt => "guilt",
            Emotion::Other(label) => label,
        }
    }

    /// Mood score in [-100, 100]. Unknown categories score 0.
    pub fn score(&self) -> i32 {
        match self {
            Emotion::Joy => 80,
            Emotion::Neutral => 0,
            Emotion::Fear => -60,
            Emotion::Anger => -80,
            Emotion::Sadness => -70,
            Emotion::Disgust => -60,
            Emotion::Shame => -90,
            Emotion::Guilt => -50,
            Emotion::Other(_) => 0,
        }
    }

    /// Label with the first letter upper-cased, for display.
    pub fn display_name(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Output of the classifier adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub emotion: Emotion,
    pub score: i32,
}

impl Prediction {
    pub fn from_emotion(emotion: Emotion) -> Self {
        let score = emotion.score();
        Self { emotion, score }
    }
}

/// One immutable journal submission.
///
/// Fields are private so the score can only ever be derived from the emotion.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    timestamp: DateTime<Local>,
    text: String,
    emotion: Emotion,
    score: i32,
}

impl JournalEntry {
    pub fn new(timestamp: DateTime<Local>, text: impl Into<String>, emotion: Emotion) -> Self {
        let score = emotion.score();
        Self {
            timestamp,
            text: text.into(),
            emotion,
            score,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Raw user input, exactly as submitted.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn emotion(&self) -> &Emotion {
        &self.emotion
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}

/// A single point on the mood trend chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub timestamp: DateTime<Local>,
    pub score: i32,
}

/// Label in the classifier's internal output space (before decoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InternalLabel(pub i64);

/// Sparse feature vector produced by a vectorizer.
///
/// `entries` are `(column, value)` pairs sorted by column, with no duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Build from unordered pairs. Duplicate columns are summed; out-of-range
    /// columns and zero values are dropped.
    pub fn from_pairs(dim: usize, pairs: impl IntoIterator<Item = (usize, f64)>) -> Self {
        let mut entries: Vec<(usize, f64)> = pairs.into_iter().filter(|(c, _)| *c < dim).collect();
        entries.sort_by_key(|(c, _)| *c);
        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (col, val) in entries {
            match merged.last_mut() {
                Some((last_col, last_val)) if *last_col == col => *last_val += val,
                _ => merged.push((col, val)),
            }
        }
        merged.retain(|(_, v)| *v != 0.0);
        Self {
            dim,
            entries: merged,
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product with a dense row (extra columns in `row` are ignored).
    pub fn dot(&self, row: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|(c, v)| row.get(*c).map(|w| w * v))
            .sum()
    }
}
