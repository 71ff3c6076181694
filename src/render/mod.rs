mod frame;
mod null_renderer;
mod popup_layout;

pub use frame::{AnnotationOverlay, ChartFrame, FrameStats};
pub use null_renderer::NullRenderer;
pub use popup_layout::{PopupLayoutConfig, PopupPlacement, place_popup};

use crate::error::ChartResult;

/// Contract implemented by the hosting chart surface.
///
/// Surfaces receive a fully materialized `ChartFrame` so drawing code stays
/// isolated from normalization, interaction and focus logic.
pub trait Renderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()>;
}
