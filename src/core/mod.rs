pub mod explanation_text;
pub mod forecast_payload;
pub mod point_normalizer;
pub mod types;

pub use explanation_text::{
    ExplanationBullet, ExplanationCardContent, ExplanationSections, TextSpan, parse_explanation,
};
pub use forecast_payload::ForecastPayload;
pub use point_normalizer::{VALUE_ACCESSORS, ValueAccessor, normalize_point, normalize_points};
pub use types::{Anchor, NormalizedPoint, PointKey, PointSource, RawPoint, SeriesPoint};
