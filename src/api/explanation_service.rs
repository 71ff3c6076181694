use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::explanation_contract::{EXPLAIN_FORECAST_PATH, ExplanationRequest, ExplanationResponse};

/// Explanation collaborator consumed through the fixed request/response
/// contract.
///
/// Implementations perform the I/O; the engine only hands out requests and
/// applies results.
pub trait ExplanationService {
    fn explain(&mut self, request: &ExplanationRequest) -> ChartResult<ExplanationResponse>;
}

impl<F> ExplanationService for F
where
    F: FnMut(&ExplanationRequest) -> ChartResult<ExplanationResponse>,
{
    fn explain(&mut self, request: &ExplanationRequest) -> ChartResult<ExplanationResponse> {
        self(request)
    }
}

/// Location and timeout of the HTTP explanation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpExplanationConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpExplanationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl HttpExplanationConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Full URL of the explanation route.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "{}{EXPLAIN_FORECAST_PATH}",
            self.base_url.trim_end_matches('/')
        )
    }

    pub fn validate(&self) -> ChartResult<()> {
        let base = self.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ChartError::InvalidConfig(format!(
                "explanation base url must be http(s): {base:?}"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ChartError::InvalidConfig(
                "explanation timeout must be > 0 seconds".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_owned()
}

fn default_timeout_secs() -> u64 {
    20
}

/// Blocking JSON-over-HTTP explanation client.
#[cfg(feature = "http-client")]
#[derive(Debug, Clone)]
pub struct HttpExplanationService {
    client: reqwest::blocking::Client,
    endpoint: String,
}

#[cfg(feature = "http-client")]
impl HttpExplanationService {
    pub fn new(config: &HttpExplanationConfig) -> ChartResult<Self> {
        config.validate()?;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChartError::Transport(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: config.endpoint(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(feature = "http-client")]
impl ExplanationService for HttpExplanationService {
    fn explain(&mut self, request: &ExplanationRequest) -> ChartResult<ExplanationResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|e| ChartError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ChartError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            let message = ExplanationResponse::error_message(&body).unwrap_or(body);
            return Err(ChartError::Request {
                status: Some(status.as_u16()),
                message,
            });
        }
        ExplanationResponse::from_json_str(&body)
    }
}
