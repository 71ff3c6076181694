use serde::{Deserialize, Serialize};

use crate::core::point_normalizer::normalize_points;
use crate::core::types::{NormalizedPoint, RawPoint};
use crate::error::{ChartError, ChartResult};

/// Response body of the forecast backend (`GET /api/forecast/<store>`).
///
/// Both arrays are optional on the wire; the backend answers
/// `{"history": [], "forecast": []}` for stores without enough data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub history: Vec<RawPoint>,
    #[serde(default)]
    pub forecast: Vec<RawPoint>,
}

impl ForecastPayload {
    #[must_use]
    pub fn new(history: Vec<RawPoint>, forecast: Vec<RawPoint>) -> Self {
        Self { history, forecast }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse forecast payload: {e}")))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.forecast.is_empty()
    }

    #[must_use]
    pub fn normalize(&self) -> Vec<NormalizedPoint> {
        normalize_points(&self.history, &self.forecast)
    }

    /// History followed by forecast, each record in its original form.
    #[must_use]
    pub fn timeline(&self) -> Vec<RawPoint> {
        self.history
            .iter()
            .chain(&self.forecast)
            .cloned()
            .collect()
    }
}
