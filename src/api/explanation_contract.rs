use serde::{Deserialize, Serialize};

use crate::core::{NormalizedPoint, PointSource, RawPoint};
use crate::error::{ChartError, ChartResult};

/// Route of the explanation service, relative to its base URL.
pub const EXPLAIN_FORECAST_PATH: &str = "/api/explain_forecast";

/// The focused point as sent to the explanation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusRef {
    pub date: String,
    pub value: f64,
    pub source: PointSource,
}

impl From<&NormalizedPoint> for FocusRef {
    fn from(point: &NormalizedPoint) -> Self {
        Self {
            date: point.date.clone(),
            value: point.value,
            source: point.source,
        }
    }
}

/// Request body: the full timeline in original form plus an optional focus.
///
/// Without `focus` the service summarizes the whole timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationRequest {
    pub timeline: Vec<RawPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<FocusRef>,
}

impl ExplanationRequest {
    #[must_use]
    pub fn focused(timeline: Vec<RawPoint>, point: &NormalizedPoint) -> Self {
        Self {
            timeline,
            focus: Some(FocusRef::from(point)),
        }
    }

    #[must_use]
    pub fn overview(timeline: Vec<RawPoint>) -> Self {
        Self {
            timeline,
            focus: None,
        }
    }

    pub fn to_json(&self) -> ChartResult<String> {
        serde_json::to_string(self).map_err(|e| {
            ChartError::Contract(format!("failed to serialize explanation request: {e}"))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationResponse {
    pub summary: String,
}

#[derive(Deserialize)]
struct ExplanationResponseBody {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ExplanationResponse {
    #[must_use]
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }

    /// Parses a `{summary}` body. An `{error}` body is a request failure.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let body: ExplanationResponseBody = serde_json::from_str(input).map_err(|e| {
            ChartError::Contract(format!("failed to parse explanation response: {e}"))
        })?;
        match (body.summary, body.error) {
            (Some(summary), _) => Ok(Self { summary }),
            (None, Some(message)) => Err(ChartError::Request {
                status: None,
                message,
            }),
            (None, None) => Err(ChartError::Contract(
                "explanation response has neither summary nor error".to_owned(),
            )),
        }
    }

    /// Extracts the service's `error` message from a failure body, if any.
    #[must_use]
    pub fn error_message(input: &str) -> Option<String> {
        serde_json::from_str::<ExplanationResponseBody>(input)
            .ok()
            .and_then(|body| body.error)
    }
}
