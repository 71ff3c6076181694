//! Focus/explanation state and its transition rules.
//!
//! ```text
//! Idle --select--> Selecting --complete--> Resolved
//!  ^                   |                      |
//!  +---- close/reset --+----------------------+
//! ```
//!
//! Requests cannot be cancelled. Every selection bumps a generation counter
//! that travels with its ticket; completions carrying an older generation are
//! discarded.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Anchor, NormalizedPoint, RawPoint};
use crate::error::ChartResult;

use super::engine_config::FocusTexts;
use super::explanation_contract::{ExplanationRequest, ExplanationResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusPhase {
    Idle,
    Selecting,
    Resolved,
}

/// Currently selected point and its in-progress or resolved explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct FocusSelection {
    pub point: NormalizedPoint,
    /// Sequence position; absent when the point came from a foreign payload.
    pub index: Option<usize>,
    pub anchor: Anchor,
    pub explanation_text: String,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TicketKind {
    Focus,
    Overview,
}

/// Identity of an outstanding explanation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId {
    pub kind: TicketKind,
    pub generation: u64,
}

/// An explanation request the host must perform, tagged with its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplanationTicket {
    pub id: TicketId,
    pub request: ExplanationRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionOutcome {
    Applied,
    Stale,
}

/// Whole-timeline summary state, independent of the focused point.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverviewState {
    pub text: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FocusController {
    texts: FocusTexts,
    focus: Option<FocusSelection>,
    focus_generation: u64,
    overview: OverviewState,
    overview_generation: u64,
}

impl FocusController {
    #[must_use]
    pub fn new(texts: FocusTexts) -> Self {
        Self {
            texts,
            focus: None,
            focus_generation: 0,
            overview: OverviewState::default(),
            overview_generation: 0,
        }
    }

    #[must_use]
    pub fn texts(&self) -> &FocusTexts {
        &self.texts
    }

    #[must_use]
    pub fn phase(&self) -> FocusPhase {
        match &self.focus {
            None => FocusPhase::Idle,
            Some(focus) if focus.loading => FocusPhase::Selecting,
            Some(_) => FocusPhase::Resolved,
        }
    }

    #[must_use]
    pub fn focus(&self) -> Option<&FocusSelection> {
        self.focus.as_ref()
    }

    #[must_use]
    pub fn focus_generation(&self) -> u64 {
        self.focus_generation
    }

    #[must_use]
    pub fn overview(&self) -> &OverviewState {
        &self.overview
    }

    /// Focuses `point`, superseding any previous focus.
    ///
    /// Returns the request to perform, or `None` when the timeline is empty:
    /// the empty-summary text is then applied immediately.
    pub fn select(
        &mut self,
        point: NormalizedPoint,
        index: Option<usize>,
        anchor: Anchor,
        timeline: Vec<RawPoint>,
    ) -> Option<ExplanationTicket> {
        self.focus_generation = self.focus_generation.saturating_add(1);
        let generation = self.focus_generation;

        if timeline.is_empty() {
            debug!(generation, date = %point.date, "empty timeline, skipping explanation request");
            self.focus = Some(FocusSelection {
                point,
                index,
                anchor,
                explanation_text: self.texts.empty_summary_text.clone(),
                loading: false,
            });
            return None;
        }

        debug!(generation, date = %point.date, source = %point.source, "focus selected");
        let request = ExplanationRequest::focused(timeline, &point);
        self.focus = Some(FocusSelection {
            point,
            index,
            anchor,
            explanation_text: self.texts.loading_text.clone(),
            loading: true,
        });
        Some(ExplanationTicket {
            id: TicketId {
                kind: TicketKind::Focus,
                generation,
            },
            request,
        })
    }

    /// Starts a whole-timeline summary. Same empty-timeline rule as [`Self::select`].
    pub fn request_overview(&mut self, timeline: Vec<RawPoint>) -> Option<ExplanationTicket> {
        self.overview_generation = self.overview_generation.saturating_add(1);
        let generation = self.overview_generation;

        if timeline.is_empty() {
            self.overview = OverviewState {
                text: Some(self.texts.empty_summary_text.clone()),
                loading: false,
            };
            return None;
        }

        debug!(generation, "overview requested");
        self.overview = OverviewState {
            text: None,
            loading: true,
        };
        Some(ExplanationTicket {
            id: TicketId {
                kind: TicketKind::Overview,
                generation,
            },
            request: ExplanationRequest::overview(timeline),
        })
    }

    /// Applies a finished request unless a newer selection superseded it.
    pub fn complete(
        &mut self,
        id: TicketId,
        result: ChartResult<ExplanationResponse>,
    ) -> CompletionOutcome {
        match id.kind {
            TicketKind::Focus => {
                let current = self.focus_generation;
                let Some(focus) = self
                    .focus
                    .as_mut()
                    .filter(|focus| focus.loading && id.generation == current)
                else {
                    debug!(generation = id.generation, current, "discarding stale focus explanation");
                    return CompletionOutcome::Stale;
                };
                focus.explanation_text = resolve_text(&self.texts, result);
                focus.loading = false;
                CompletionOutcome::Applied
            }
            TicketKind::Overview => {
                if !self.overview.loading || id.generation != self.overview_generation {
                    debug!(generation = id.generation, "discarding stale overview explanation");
                    return CompletionOutcome::Stale;
                }
                self.overview = OverviewState {
                    text: Some(resolve_text(&self.texts, result)),
                    loading: false,
                };
                CompletionOutcome::Applied
            }
        }
    }

    /// Explicit close. Outstanding focus requests become stale.
    pub fn close(&mut self) {
        if self.focus.take().is_some() {
            debug!(generation = self.focus_generation, "focus closed");
        }
        self.focus_generation = self.focus_generation.saturating_add(1);
    }

    /// Forced reset on store/timeline change. Clears focus and overview.
    pub fn reset(&mut self) {
        self.focus = None;
        self.overview = OverviewState::default();
        self.focus_generation = self.focus_generation.saturating_add(1);
        self.overview_generation = self.overview_generation.saturating_add(1);
    }
}

fn resolve_text(texts: &FocusTexts, result: ChartResult<ExplanationResponse>) -> String {
    match result {
        Ok(response) => {
            let summary = response.summary.trim();
            if summary.is_empty() {
                texts.fallback_text.clone()
            } else {
                summary.to_owned()
            }
        }
        Err(err) => {
            warn!(error = %err, "explanation request failed, using fallback text");
            texts.fallback_text.clone()
        }
    }
}
