use forecast_chart_rs::core::Anchor;
use forecast_chart_rs::render::{PopupLayoutConfig, place_popup};
use proptest::prelude::*;

proptest! {
    #[test]
    fn horizontal_placement_follows_flip_rule(
        cx in 0.0f64..2_000.0,
        container_width in 0.0f64..2_000.0,
        card_width in 1.0f64..600.0,
    ) {
        let config = PopupLayoutConfig {
            card_width,
            card_max_height: 200.0,
            anchor_offset: 12.0,
        };
        let placement = place_popup(Anchor::new(cx, 500.0), container_width, config);

        if cx + 12.0 + card_width <= container_width {
            prop_assert_eq!(placement.x, cx + 12.0);
            prop_assert!(!placement.flipped_left);
        } else {
            prop_assert_eq!(placement.x, (cx - card_width - 12.0).max(0.0));
            prop_assert!(placement.flipped_left);
        }
        prop_assert!(placement.x >= 0.0);
    }

    #[test]
    fn vertical_placement_follows_flip_rule(
        cy in 0.0f64..2_000.0,
        card_max_height in 1.0f64..600.0,
    ) {
        let config = PopupLayoutConfig {
            card_width: 100.0,
            card_max_height,
            anchor_offset: 12.0,
        };
        let placement = place_popup(Anchor::new(10.0, cy), 1_000.0, config);

        if cy - card_max_height - 12.0 >= 0.0 {
            prop_assert_eq!(placement.y, cy - card_max_height - 12.0);
            prop_assert!(!placement.flipped_below);
        } else {
            prop_assert_eq!(placement.y, cy + 12.0);
            prop_assert!(placement.flipped_below);
        }
        prop_assert!(placement.y >= 0.0);
    }
}
