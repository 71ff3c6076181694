use crate::core::{ExplanationCardContent, ExplanationSections, parse_explanation};
use crate::error::ChartResult;
use crate::render::{AnnotationOverlay, Renderer, place_popup};

use super::{
    CompletionOutcome, ExplanationResponse, ExplanationService, ExplanationTicket, FocusPhase,
    FocusSelection, ForecastChart, OverviewState, TicketId,
};

impl<R: Renderer> ForecastChart<R> {
    #[must_use]
    pub fn focus(&self) -> Option<&FocusSelection> {
        self.focus.focus()
    }

    #[must_use]
    pub fn focus_phase(&self) -> FocusPhase {
        self.focus.phase()
    }

    #[must_use]
    pub fn overview(&self) -> &OverviewState {
        self.focus.overview()
    }

    /// Requests a summary of the whole timeline, without a focus point.
    pub fn request_overview(&mut self) -> Option<ExplanationTicket> {
        self.focus.request_overview(self.payload.timeline())
    }

    /// Applies the result of a ticket previously handed out by `click` or
    /// `request_overview`. Stale results are dropped.
    pub fn complete_explanation(
        &mut self,
        id: TicketId,
        result: ChartResult<ExplanationResponse>,
    ) -> CompletionOutcome {
        self.focus.complete(id, result)
    }

    /// Runs `ticket` through a synchronous service on the calling thread.
    pub fn explain_pending_with<S: ExplanationService + ?Sized>(
        &mut self,
        service: &mut S,
        ticket: &ExplanationTicket,
    ) -> CompletionOutcome {
        let result = service.explain(&ticket.request);
        self.complete_explanation(ticket.id, result)
    }

    pub fn close_focus(&mut self) {
        self.focus.close();
    }

    /// Bullet sections of the focused explanation, derived on every call.
    #[must_use]
    pub fn explanation_sections(&self) -> Option<ExplanationSections> {
        self.focus
            .focus()
            .filter(|focus| !focus.loading)
            .map(|focus| parse_explanation(&focus.explanation_text))
    }

    /// Positioned card for the current focus, when its anchor is on screen.
    #[must_use]
    pub fn annotation_overlay(&self) -> Option<AnnotationOverlay> {
        let focus = self.focus.focus()?;
        if !focus.anchor.is_finite() {
            return None;
        }
        let layout = self.config.popup_layout;
        let texts = self.focus.texts();
        Some(AnnotationOverlay {
            point: focus.point.clone(),
            anchor: focus.anchor,
            placement: place_popup(focus.anchor, self.config.container_width, layout),
            card_width: layout.card_width,
            card_max_height: layout.card_max_height,
            loading: focus.loading,
            content: ExplanationCardContent::resolve(
                &focus.explanation_text,
                focus.loading,
                &texts.loading_text,
                &texts.empty_text,
            ),
        })
    }
}
