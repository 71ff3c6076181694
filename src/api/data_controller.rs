use tracing::debug;

use crate::core::{ForecastPayload, NormalizedPoint, PointKey, RawPoint, SeriesPoint};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::ForecastChart;

impl<R: Renderer> ForecastChart<R> {
    /// Replaces the timeline with new history and forecast records.
    ///
    /// Resets focus and overview: any in-flight explanation becomes stale.
    pub fn set_data(&mut self, history: Vec<RawPoint>, forecast: Vec<RawPoint>) {
        self.set_payload(ForecastPayload::new(history, forecast));
    }

    /// Replaces the timeline from a forecast backend payload.
    pub fn set_payload(&mut self, payload: ForecastPayload) {
        let normalized = payload.normalize();
        self.revision = self.revision.saturating_add(1);
        let revision = self.revision;

        self.resolver.rebuild(revision, &normalized);
        self.series = normalized
            .into_iter()
            .enumerate()
            .map(|(index, point)| SeriesPoint {
                key: PointKey { revision, index },
                point,
                x: None,
                y: None,
            })
            .collect();
        debug!(
            revision,
            history_count = payload.history.len(),
            forecast_count = payload.forecast.len(),
            normalized_count = self.series.len(),
            "set timeline data"
        );
        self.payload = payload;
        self.focus.reset();
    }

    /// Forces the focus back to idle for a store switch that keeps the data
    /// on screen until the next payload arrives.
    pub fn reset_for_store_change(&mut self) {
        debug!(revision = self.revision, "store changed, resetting focus");
        self.focus.reset();
        self.resolver.on_pointer_leave();
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn payload(&self) -> &ForecastPayload {
        &self.payload
    }

    #[must_use]
    pub fn series(&self) -> &[SeriesPoint] {
        &self.series
    }

    /// Normalized points in sequence order, history first.
    #[must_use]
    pub fn points(&self) -> Vec<NormalizedPoint> {
        self.series
            .iter()
            .map(|series_point| series_point.point.clone())
            .collect()
    }

    /// Assigns host-computed pixel coordinates, one pair per point.
    ///
    /// Coordinates are ephemeral: hosts call this after each layout pass.
    pub fn set_point_coordinates(&mut self, coordinates: &[(f64, f64)]) -> ChartResult<()> {
        if coordinates.len() != self.series.len() {
            return Err(ChartError::InvalidData(format!(
                "expected {} point coordinates, got {}",
                self.series.len(),
                coordinates.len()
            )));
        }
        for (series_point, &(x, y)) in self.series.iter_mut().zip(coordinates) {
            series_point.x = x.is_finite().then_some(x);
            series_point.y = y.is_finite().then_some(y);
        }
        Ok(())
    }

    pub fn clear_point_coordinates(&mut self) {
        for series_point in &mut self.series {
            series_point.x = None;
            series_point.y = None;
        }
    }
}
