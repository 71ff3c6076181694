//! Canonicalization of heterogeneous history/forecast records.
//!
//! Backends report the plotted quantity under many synonymous keys. Rather
//! than probing records dynamically, the value is read through
//! [`VALUE_ACCESSORS`], a fixed ordered list tried front to back.

use chrono::NaiveDate;
use serde_json::Value;
use tracing::trace;

use crate::core::types::{NormalizedPoint, PointSource, RawPoint};

/// Number of characters kept from a raw date (`YYYY-MM-DD`).
pub const DATE_PRECISION_CHARS: usize = 10;

/// Reads one candidate value field from a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueAccessor {
    pub field: &'static str,
}

impl ValueAccessor {
    const fn new(field: &'static str) -> Self {
        Self { field }
    }

    /// Returns the field when present and non-null.
    #[must_use]
    pub fn read(self, raw: &RawPoint) -> Option<&Value> {
        raw.field(self.field)
    }
}

/// Candidate value fields in priority order. The first non-null field wins.
pub const VALUE_ACCESSORS: [ValueAccessor; 8] = [
    ValueAccessor::new("total"),
    ValueAccessor::new("total_sales"),
    ValueAccessor::new("sales"),
    ValueAccessor::new("value"),
    ValueAccessor::new("amount"),
    ValueAccessor::new("sum"),
    ValueAccessor::new("pred"),
    ValueAccessor::new("predicted"),
];

/// Normalizes history then forecast into one ordered sequence.
///
/// Input order is preserved and no sorting is performed; callers supply
/// chronologically ordered arrays.
#[must_use]
pub fn normalize_points(history: &[RawPoint], forecast: &[RawPoint]) -> Vec<NormalizedPoint> {
    let mut points = Vec::with_capacity(history.len() + forecast.len());
    points.extend(
        history
            .iter()
            .map(|raw| normalize_point(raw, PointSource::History)),
    );
    points.extend(
        forecast
            .iter()
            .map(|raw| normalize_point(raw, PointSource::Forecast)),
    );
    points
}

/// Normalizes one record, tagging it with `default_source` unless the record
/// carries a recognized `source` override.
#[must_use]
pub fn normalize_point(raw: &RawPoint, default_source: PointSource) -> NormalizedPoint {
    let date = resolve_date(raw);
    let label = raw
        .field("label")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .unwrap_or_else(|| default_label(&date));
    let source = raw
        .field("source")
        .and_then(Value::as_str)
        .and_then(PointSource::parse)
        .unwrap_or(default_source);

    NormalizedPoint {
        date,
        label,
        value: resolve_value(raw),
        source,
    }
}

/// Resolves the plotted value, defaulting to `0.0`.
#[must_use]
pub fn resolve_value(raw: &RawPoint) -> f64 {
    let Some((field, value)) = VALUE_ACCESSORS
        .iter()
        .find_map(|accessor| accessor.read(raw).map(|value| (accessor.field, value)))
    else {
        trace!("no value field on record, defaulting to 0");
        return 0.0;
    };

    match coerce_finite(value) {
        Some(number) => number,
        None => {
            trace!(field, "unparsable value, defaulting to 0");
            0.0
        }
    }
}

/// Coerces JSON numbers and numeric-looking strings into a finite `f64`.
#[must_use]
pub fn coerce_finite(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Truncates the raw `date` field to calendar-date precision.
///
/// Plain string slicing; the date is never parsed through a timezone.
#[must_use]
pub fn resolve_date(raw: &RawPoint) -> String {
    let text = match raw.field("date") {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    };
    truncate_chars(&text, DATE_PRECISION_CHARS)
}

/// Month/year label (`"Jan 24"`) derived from a `YYYY-MM` prefix, falling back
/// to the date itself.
#[must_use]
pub fn default_label(date: &str) -> String {
    month_year_label(date).unwrap_or_else(|| date.to_owned())
}

fn month_year_label(date: &str) -> Option<String> {
    let bytes = date.as_bytes();
    if bytes.len() < 7 || bytes[4] != b'-' {
        return None;
    }
    if !bytes[..4].iter().chain(&bytes[5..7]).all(u8::is_ascii_digit) {
        return None;
    }
    let year: i32 = date[..4].parse().ok()?;
    let month: u32 = date[5..7].parse().ok()?;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    Some(first_of_month.format("%b %y").to_string())
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_owned(),
        None => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{default_label, truncate_chars};

    #[test]
    fn label_requires_valid_month() {
        assert_eq!(default_label("2024-13-01"), "2024-13-01");
        assert_eq!(default_label("2024-00"), "2024-00");
        assert_eq!(default_label("2024-12"), "Dec 24");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("2024-01-05T10:00:00Z", 10), "2024-01-05");
        assert_eq!(truncate_chars("ééééééééééé", 10), "éééééééééé");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
