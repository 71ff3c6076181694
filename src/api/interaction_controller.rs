use tracing::trace;

use crate::interaction::{HoverState, PointerEvent};
use crate::render::Renderer;

use super::{ExplanationTicket, ForecastChart};

impl<R: Renderer> ForecastChart<R> {
    /// Tracks hover on every pointer move. Never issues a request.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> Option<usize> {
        self.resolver.on_pointer_move(event, &self.series)
    }

    pub fn pointer_leave(&mut self) {
        self.resolver.on_pointer_leave();
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.resolver.hover()
    }

    /// Resolves a click and focuses the resulting point.
    ///
    /// Returns the explanation request to perform. `None` means either the
    /// click hit nothing or the timeline is empty and the empty summary was
    /// applied synchronously; `focus()` tells the two apart.
    pub fn click(&mut self, event: &PointerEvent) -> Option<ExplanationTicket> {
        let Some(selection) = self.resolver.resolve_click(event, &self.series) else {
            trace!(x = event.x, y = event.y, "click resolved to no point");
            return None;
        };
        trace!(source = ?selection.source, index = ?selection.index, "click resolved");
        self.focus.select(
            selection.point,
            selection.index,
            selection.anchor,
            self.payload.timeline(),
        )
    }
}
