//! Pointer/hover/click correlation to a canonical series point.
//!
//! The hosting chart surface does not guarantee stable per-datum identity in
//! its event payloads. Hover tracking therefore records a sequence index on
//! every move, and clicks prefer that index over whatever the click payload
//! happens to carry.

mod series_index;

pub use series_index::SeriesIndex;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Anchor, NormalizedPoint, PointKey, SeriesPoint};

/// Datum reference attached to a pointer event by the rendering surface.
///
/// Either field may be missing or stale: the key can belong to a previous
/// revision and the point can be a clone that no longer shares identity with
/// the sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerPayload {
    #[serde(default)]
    pub key: Option<PointKey>,
    #[serde(default)]
    pub point: Option<NormalizedPoint>,
}

impl PointerPayload {
    #[must_use]
    pub fn from_key(key: PointKey) -> Self {
        Self {
            key: Some(key),
            point: None,
        }
    }

    #[must_use]
    pub fn from_point(point: NormalizedPoint) -> Self {
        Self {
            key: None,
            point: Some(point),
        }
    }
}

/// Pointer move or click in container coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub payload: Option<PointerPayload>,
}

impl PointerEvent {
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            payload: None,
        }
    }

    #[must_use]
    pub fn with_payload(mut self, payload: PointerPayload) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Public hover state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub index: Option<usize>,
}

/// Which signal produced a click resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolutionSource {
    HoverTracked,
    ClickPayload,
}

/// Outcome of a click: the canonical point and where to anchor its card.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection {
    /// Sequence position, absent when the payload point is not in the sequence.
    pub index: Option<usize>,
    pub point: NormalizedPoint,
    pub anchor: Anchor,
    pub source: ResolutionSource,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionResolver {
    index: SeriesIndex,
    hover: HoverState,
}

impl InteractionResolver {
    #[must_use]
    pub fn new(revision: u64, points: &[NormalizedPoint]) -> Self {
        Self {
            index: SeriesIndex::build(revision, points),
            hover: HoverState::default(),
        }
    }

    /// Rebuilds the lookup table for a new sequence and forgets hover state.
    pub fn rebuild(&mut self, revision: u64, points: &[NormalizedPoint]) {
        self.index = SeriesIndex::build(revision, points);
        self.hover = HoverState::default();
    }

    #[must_use]
    pub fn series_index(&self) -> &SeriesIndex {
        &self.index
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// Tracks the point under the pointer and returns its index.
    ///
    /// Uses the payload when it names a point of the current sequence, else
    /// the nearest host-positioned point by horizontal distance.
    pub fn on_pointer_move(&mut self, event: &PointerEvent, series: &[SeriesPoint]) -> Option<usize> {
        let tracked = event
            .payload
            .as_ref()
            .and_then(|payload| self.index.resolve_payload(payload))
            .or_else(|| nearest_index_by_x(series, event.x));

        self.hover = HoverState {
            visible: true,
            x: event.x,
            y: event.y,
            index: tracked,
        };
        tracked
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::default();
    }

    /// Resolves a click to one point, or `None` for a no-op click.
    ///
    /// Order: a valid hover-tracked index, then the click payload's own point.
    #[must_use]
    pub fn resolve_click(
        &self,
        event: &PointerEvent,
        series: &[SeriesPoint],
    ) -> Option<ResolvedSelection> {
        let click_anchor = Anchor::new(event.x, event.y);

        if let Some(idx) = self.hover.index.filter(|idx| self.index.contains_index(*idx)) {
            if let Some(series_point) = series.get(idx) {
                return Some(ResolvedSelection {
                    index: Some(idx),
                    point: series_point.point.clone(),
                    anchor: series_point.pixel().unwrap_or(click_anchor),
                    source: ResolutionSource::HoverTracked,
                });
            }
        }

        let payload = event.payload.as_ref()?;
        if let Some(series_point) = self
            .index
            .resolve_payload(payload)
            .and_then(|idx| series.get(idx))
        {
            return Some(ResolvedSelection {
                index: Some(series_point.key.index),
                point: series_point.point.clone(),
                anchor: series_point.pixel().unwrap_or(click_anchor),
                source: ResolutionSource::ClickPayload,
            });
        }

        payload.point.clone().map(|point| ResolvedSelection {
            index: None,
            point,
            anchor: click_anchor,
            source: ResolutionSource::ClickPayload,
        })
    }
}

/// Nearest positioned point by horizontal pixel distance; ties keep the
/// earliest sequence position.
#[must_use]
pub fn nearest_index_by_x(series: &[SeriesPoint], pointer_x: f64) -> Option<usize> {
    if !pointer_x.is_finite() {
        return None;
    }
    series
        .iter()
        .enumerate()
        .filter_map(|(idx, point)| {
            let x = point.x.filter(|x| x.is_finite())?;
            Some((OrderedFloat((x - pointer_x).abs()), idx))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, idx)| idx)
}
