mod data_controller;
mod engine;
mod engine_config;
mod explanation_contract;
mod explanation_controller;
mod explanation_service;
mod focus_controller;
mod interaction_controller;

pub use engine::ForecastChart;
pub use engine_config::{FocusTexts, ForecastChartConfig};
pub use explanation_contract::{
    EXPLAIN_FORECAST_PATH, ExplanationRequest, ExplanationResponse, FocusRef,
};
#[cfg(feature = "http-client")]
pub use explanation_service::HttpExplanationService;
pub use explanation_service::{ExplanationService, HttpExplanationConfig};
pub use focus_controller::{
    CompletionOutcome, ExplanationTicket, FocusController, FocusPhase, FocusSelection,
    OverviewState, TicketId, TicketKind,
};
