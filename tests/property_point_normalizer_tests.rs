use forecast_chart_rs::core::{PointSource, RawPoint, normalize_points};
use proptest::prelude::*;
use serde_json::json;

fn arb_value() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        (-1.0e9f64..1.0e9).prop_map(|v| json!(v)),
        (-1.0e9f64..1.0e9).prop_map(|v| json!(v.to_string())),
        "[a-z ]{0,8}".prop_map(|s| json!(s)),
        Just(json!(null)),
        Just(json!(true)),
    ]
}

fn arb_record() -> impl Strategy<Value = RawPoint> {
    (
        "[a-z_]{1,12}",
        arb_value(),
        "[0-9]{4}-[0-9]{2}-[0-9]{2}(T[0-9]{2}:[0-9]{2})?",
    )
        .prop_map(|(field, value, date)| {
            let mut map = serde_json::Map::new();
            map.insert("date".to_owned(), json!(date));
            map.insert(field, value);
            RawPoint::new(serde_json::Value::Object(map))
        })
}

proptest! {
    #[test]
    fn normalized_values_are_always_finite(
        history in proptest::collection::vec(arb_record(), 0..16),
        forecast in proptest::collection::vec(arb_record(), 0..16),
    ) {
        let points = normalize_points(&history, &forecast);
        prop_assert_eq!(points.len(), history.len() + forecast.len());
        for point in &points {
            prop_assert!(point.value.is_finite());
            prop_assert!(point.date.chars().count() <= 10);
        }
        for point in &points[..history.len()] {
            prop_assert_eq!(point.source, PointSource::History);
        }
        for point in &points[history.len()..] {
            prop_assert_eq!(point.source, PointSource::Forecast);
        }
    }

    #[test]
    fn records_without_value_fields_normalize_to_zero(
        field in "[a-z]{1,6}_x",
        value in -1.0e6f64..1.0e6,
    ) {
        let mut map = serde_json::Map::new();
        map.insert(field, json!(value));
        let record = RawPoint::new(serde_json::Value::Object(map));
        let points = normalize_points(&[record], &[]);
        prop_assert_eq!(points[0].value, 0.0);
    }

    #[test]
    fn labels_are_deterministic_given_date(date in "[0-9]{4}-[0-9]{2}-[0-9]{2}") {
        let record = RawPoint::new(json!({"date": date.clone(), "total": 1}));
        let first = normalize_points(&[record.clone()], &[]);
        let second = normalize_points(&[], &[record]);
        prop_assert_eq!(&first[0].label, &second[0].label);
    }
}
