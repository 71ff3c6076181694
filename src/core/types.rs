use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provenance of a chart point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointSource {
    History,
    Forecast,
}

impl PointSource {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Forecast => "forecast",
        }
    }

    /// Parses a record-level source override, ignoring ASCII case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("history") {
            Some(Self::History)
        } else if raw.eq_ignore_ascii_case("forecast") {
            Some(Self::Forecast)
        } else {
            None
        }
    }
}

impl fmt::Display for PointSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arbitrary-shaped history/forecast record as delivered by the backend.
///
/// The wrapped value is kept verbatim so the explanation request can echo the
/// timeline in its original form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawPoint(pub Value);

impl RawPoint {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Returns the field when the record is an object and the field is non-null.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.0
            .as_object()
            .and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for RawPoint {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Canonical chart datum.
///
/// `value` is always finite; normalization substitutes `0.0` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub date: String,
    pub label: String,
    pub value: f64,
    pub source: PointSource,
}

impl NormalizedPoint {
    #[must_use]
    pub fn new(
        date: impl Into<String>,
        label: impl Into<String>,
        value: f64,
        source: PointSource,
    ) -> Self {
        Self {
            date: date.into(),
            label: label.into(),
            value: if value.is_finite() { value } else { 0.0 },
            source,
        }
    }
}

/// Per-datum identity handed to the rendering surface.
///
/// `revision` changes every time the normalized sequence is replaced, so keys
/// captured before a data swap never alias points of the new sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointKey {
    pub revision: u64,
    pub index: usize,
}

/// Normalized point plus the pixel coordinates assigned by the host surface.
///
/// Coordinates are ephemeral: they are replaced on every host layout pass and
/// dropped whenever the sequence changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub key: PointKey,
    pub point: NormalizedPoint,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl SeriesPoint {
    #[must_use]
    pub fn pixel(&self) -> Option<Anchor> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Anchor::new(x, y)),
            _ => None,
        }
    }
}

/// Screen-space anchor of the annotation card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
