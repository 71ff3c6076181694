use serde::{Deserialize, Serialize};

use crate::core::{Anchor, ExplanationCardContent, NormalizedPoint, SeriesPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::PopupPlacement;

/// Positioned annotation card for the focused point.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationOverlay {
    pub point: NormalizedPoint,
    pub anchor: Anchor,
    pub placement: PopupPlacement,
    pub card_width: f64,
    pub card_max_height: f64,
    pub loading: bool,
    pub content: ExplanationCardContent,
}

/// Backend-agnostic output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub container_width: f64,
    pub series: Vec<SeriesPoint>,
    pub overlay: Option<AnnotationOverlay>,
}

impl ChartFrame {
    #[must_use]
    pub fn new(container_width: f64, series: Vec<SeriesPoint>) -> Self {
        Self {
            container_width,
            series,
            overlay: None,
        }
    }

    #[must_use]
    pub fn with_overlay(mut self, overlay: AnnotationOverlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.container_width.is_finite() || self.container_width < 0.0 {
            return Err(ChartError::InvalidContainer {
                width: self.container_width,
            });
        }

        for point in &self.series {
            if !point.point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series value at index {} must be finite",
                    point.key.index
                )));
            }
        }

        if let Some(overlay) = &self.overlay {
            if !overlay.placement.x.is_finite() || !overlay.placement.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "overlay placement must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }

    /// Renderable points in sequence order.
    #[must_use]
    pub fn points(&self) -> impl Iterator<Item = &NormalizedPoint> {
        self.series.iter().map(|series_point| &series_point.point)
    }
}

/// Summary of the last frame handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameStats {
    pub series_len: usize,
    pub positioned_len: usize,
    pub has_overlay: bool,
}

impl FrameStats {
    #[must_use]
    pub fn of(frame: &ChartFrame) -> Self {
        Self {
            series_len: frame.series.len(),
            positioned_len: frame
                .series
                .iter()
                .filter(|point| point.pixel().is_some())
                .count(),
            has_overlay: frame.overlay.is_some(),
        }
    }
}
