use forecast_chart_rs::core::{Anchor, NormalizedPoint, PointKey, PointSource, SeriesPoint};
use forecast_chart_rs::interaction::{
    InteractionResolver, PointerEvent, PointerPayload, ResolutionSource, SeriesIndex,
    nearest_index_by_x,
};

const REVISION: u64 = 3;

fn points() -> Vec<NormalizedPoint> {
    vec![
        NormalizedPoint::new("2024-01-01", "Jan 24", 10.0, PointSource::History),
        NormalizedPoint::new("2024-02-01", "Feb 24", 20.0, PointSource::History),
        NormalizedPoint::new("2024-03-01", "Mar 24", 30.0, PointSource::Forecast),
    ]
}

fn series(points: &[NormalizedPoint], xs: &[Option<f64>]) -> Vec<SeriesPoint> {
    points
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, point)| SeriesPoint {
            key: PointKey {
                revision: REVISION,
                index,
            },
            point,
            x: xs.get(index).copied().flatten(),
            y: xs.get(index).copied().flatten().map(|_| 50.0 + index as f64),
        })
        .collect()
}

#[test]
fn hover_tracks_nearest_positioned_point() {
    let pts = points();
    let series = series(&pts, &[Some(100.0), Some(200.0), Some(300.0)]);
    let mut resolver = InteractionResolver::new(REVISION, &pts);

    assert_eq!(resolver.on_pointer_move(&PointerEvent::at(240.0, 10.0), &series), Some(1));
    assert_eq!(resolver.on_pointer_move(&PointerEvent::at(260.0, 10.0), &series), Some(2));
    let hover = resolver.hover();
    assert!(hover.visible);
    assert_eq!(hover.index, Some(2));
    assert_eq!((hover.x, hover.y), (260.0, 10.0));
}

#[test]
fn nearest_ties_keep_earliest_position() {
    let pts = points();
    let series = series(&pts, &[Some(100.0), Some(200.0), None]);
    assert_eq!(nearest_index_by_x(&series, 150.0), Some(0));
    assert_eq!(nearest_index_by_x(&series, f64::NAN), None);
    assert_eq!(nearest_index_by_x(&series[2..], 150.0), None);
}

#[test]
fn hover_payload_identity_wins_over_geometry() {
    let pts = points();
    let series = series(&pts, &[Some(100.0), Some(200.0), Some(300.0)]);
    let mut resolver = InteractionResolver::new(REVISION, &pts);

    let event = PointerEvent::at(100.0, 0.0).with_payload(PointerPayload::from_key(PointKey {
        revision: REVISION,
        index: 2,
    }));
    assert_eq!(resolver.on_pointer_move(&event, &series), Some(2));
}

#[test]
fn stale_key_falls_back_to_date_equality() {
    let pts = points();
    let series = series(&pts, &[None, None, None]);
    let mut resolver = InteractionResolver::new(REVISION, &pts);

    let cloned = pts[1].clone();
    let payload = PointerPayload {
        key: Some(PointKey {
            revision: REVISION - 1,
            index: 0,
        }),
        point: Some(cloned),
    };
    let event = PointerEvent::at(0.0, 0.0).with_payload(payload);
    assert_eq!(resolver.on_pointer_move(&event, &series), Some(1));
}

#[test]
fn click_prefers_hover_tracked_index_over_payload() {
    let pts = points();
    let series = series(&pts, &[Some(100.0), Some(200.0), Some(300.0)]);
    let mut resolver = InteractionResolver::new(REVISION, &pts);
    resolver.on_pointer_move(&PointerEvent::at(198.0, 5.0), &series);

    let click = PointerEvent::at(198.0, 5.0).with_payload(PointerPayload::from_point(pts[2].clone()));
    let selection = resolver.resolve_click(&click, &series).expect("click resolves");

    assert_eq!(selection.source, ResolutionSource::HoverTracked);
    assert_eq!(selection.index, Some(1));
    assert_eq!(selection.point, pts[1]);
    assert_eq!(selection.anchor, Anchor::new(200.0, 51.0));
}

#[test]
fn click_uses_payload_point_without_hover() {
    let pts = points();
    let series = series(&pts, &[None, None, None]);
    let resolver = InteractionResolver::new(REVISION, &pts);

    let click = PointerEvent::at(42.0, 24.0).with_payload(PointerPayload::from_point(pts[2].clone()));
    let selection = resolver.resolve_click(&click, &series).expect("click resolves");

    assert_eq!(selection.source, ResolutionSource::ClickPayload);
    assert_eq!(selection.index, Some(2));
    assert_eq!(selection.anchor, Anchor::new(42.0, 24.0));
}

#[test]
fn click_keeps_foreign_payload_point_as_is() {
    let pts = points();
    let series = series(&pts, &[None, None, None]);
    let resolver = InteractionResolver::new(REVISION, &pts);

    let foreign = NormalizedPoint::new("2030-01-01", "Jan 30", 5.0, PointSource::Forecast);
    let click = PointerEvent::at(1.0, 2.0).with_payload(PointerPayload::from_point(foreign.clone()));
    let selection = resolver.resolve_click(&click, &series).expect("click resolves");

    assert_eq!(selection.index, None);
    assert_eq!(selection.point, foreign);
}

#[test]
fn click_without_hover_or_payload_is_a_no_op() {
    let pts = points();
    let series = series(&pts, &[None, None, None]);
    let resolver = InteractionResolver::new(REVISION, &pts);

    assert!(resolver.resolve_click(&PointerEvent::at(5.0, 5.0), &series).is_none());
}

#[test]
fn pointer_leave_and_rebuild_clear_hover() {
    let pts = points();
    let series = series(&pts, &[Some(100.0), Some(200.0), Some(300.0)]);
    let mut resolver = InteractionResolver::new(REVISION, &pts);

    resolver.on_pointer_move(&PointerEvent::at(100.0, 0.0), &series);
    resolver.on_pointer_leave();
    assert_eq!(resolver.hover().index, None);
    assert!(!resolver.hover().visible);

    resolver.on_pointer_move(&PointerEvent::at(300.0, 0.0), &series);
    resolver.rebuild(REVISION + 1, &pts[..1]);
    assert_eq!(resolver.hover().index, None);
    assert_eq!(resolver.series_index().revision(), REVISION + 1);
}

#[test]
fn same_date_points_resolve_to_first_position() {
    let pts = vec![
        NormalizedPoint::new("2024-06-01", "Jun 24", 1.0, PointSource::History),
        NormalizedPoint::new("2024-06-01", "Jun 24", 2.0, PointSource::Forecast),
    ];
    let index = SeriesIndex::build(1, &pts);

    let payload = PointerPayload::from_point(pts[1].clone());
    assert_eq!(index.resolve_payload(&payload), Some(0));

    let payload = PointerPayload::from_key(PointKey {
        revision: 1,
        index: 1,
    });
    assert_eq!(index.resolve_payload(&payload), Some(1));
}

#[test]
fn out_of_range_key_is_rejected() {
    let pts = points();
    let index = SeriesIndex::build(REVISION, &pts);
    assert_eq!(
        index.index_of_key(PointKey {
            revision: REVISION,
            index: 3
        }),
        None
    );
    assert_eq!(index.key_for(3), None);
    assert_eq!(
        index.key_for(2),
        Some(PointKey {
            revision: REVISION,
            index: 2
        })
    );
}
