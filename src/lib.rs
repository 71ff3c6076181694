//! forecast-chart-rs: interactive forecast chart core.
//!
//! Normalizes history/forecast records into one series, resolves pointer
//! events to canonical points, tracks the focused point and its generated
//! explanation, and lays out the annotation card next to it. Drawing and
//! network I/O stay with the host.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ForecastChart, ForecastChartConfig};
pub use error::{ChartError, ChartResult};
