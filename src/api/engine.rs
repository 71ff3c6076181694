use tracing::trace;

use crate::core::{ForecastPayload, SeriesPoint};
use crate::error::ChartResult;
use crate::interaction::InteractionResolver;
use crate::render::{ChartFrame, Renderer};

use super::engine_config::ForecastChartConfig;
use super::focus_controller::FocusController;

/// Main orchestration facade consumed by host applications.
///
/// `ForecastChart` owns the normalized series, hover/click resolution, the
/// focus state machine and renderer calls. It performs no I/O: explanation
/// requests leave as tickets and come back through `complete_explanation`.
pub struct ForecastChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ForecastChartConfig,
    pub(super) payload: ForecastPayload,
    pub(super) revision: u64,
    pub(super) series: Vec<SeriesPoint>,
    pub(super) resolver: InteractionResolver,
    pub(super) focus: FocusController,
}

impl<R: Renderer> ForecastChart<R> {
    /// Creates an engine with an empty timeline.
    pub fn new(renderer: R, config: ForecastChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let focus = FocusController::new(config.texts.clone());
        Ok(Self {
            renderer,
            config,
            payload: ForecastPayload::default(),
            revision: 0,
            series: Vec::new(),
            resolver: InteractionResolver::default(),
            focus,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ForecastChartConfig {
        &self.config
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.config.container_width
    }

    /// Updates the container width. Only popup layout depends on it, so the
    /// selection survives.
    pub fn set_container_width(&mut self, width: f64) -> ChartResult<()> {
        super::engine_config::validate_container_width(width)?;
        trace!(width, "container resized");
        self.config.container_width = width;
        Ok(())
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)
    }

    /// Materializes the frame the renderer would receive.
    #[must_use]
    pub fn build_frame(&self) -> ChartFrame {
        let frame = ChartFrame::new(self.config.container_width, self.series.clone());
        match self.annotation_overlay() {
            Some(overlay) => frame.with_overlay(overlay),
            None => frame,
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
