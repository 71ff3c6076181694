use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid container width: {width}")]
    InvalidContainer { width: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("explanation request failed (status {status:?}): {message}")]
    Request {
        status: Option<u16>,
        message: String,
    },

    #[error("explanation transport error: {0}")]
    Transport(String),

    #[error("explanation contract violation: {0}")]
    Contract(String),
}
