use crate::error::ChartResult;
use crate::render::{ChartFrame, FrameStats, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so invalid overlays are caught before a
/// real surface is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_stats: FrameStats,
    pub last_overlay_position: Option<(f64, f64)>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ChartFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_stats = FrameStats::of(frame);
        self.last_overlay_position = frame
            .overlay
            .as_ref()
            .map(|overlay| (overlay.placement.x, overlay.placement.y));
        Ok(())
    }
}
