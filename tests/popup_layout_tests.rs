use approx::assert_relative_eq;
use forecast_chart_rs::core::Anchor;
use forecast_chart_rs::render::{PopupLayoutConfig, place_popup};

fn card(width: f64, max_height: f64) -> PopupLayoutConfig {
    PopupLayoutConfig {
        card_width: width,
        card_max_height: max_height,
        anchor_offset: 12.0,
    }
}

#[test]
fn card_sits_right_of_and_above_anchor_when_it_fits() {
    let placement = place_popup(Anchor::new(100.0, 400.0), 800.0, card(320.0, 240.0));
    assert_relative_eq!(placement.x, 112.0);
    assert_relative_eq!(placement.y, 148.0);
    assert!(!placement.flipped_left);
    assert!(!placement.flipped_below);
}

#[test]
fn card_flips_left_when_right_edge_overflows() {
    let placement = place_popup(Anchor::new(700.0, 400.0), 800.0, card(320.0, 240.0));
    assert_relative_eq!(placement.x, 368.0);
    assert!(placement.flipped_left);
}

#[test]
fn flipped_card_is_clamped_at_left_edge() {
    let placement = place_popup(Anchor::new(200.0, 400.0), 300.0, card(320.0, 240.0));
    assert_relative_eq!(placement.x, 0.0);
    assert!(placement.flipped_left);
}

#[test]
fn card_flips_below_when_top_edge_overflows() {
    let placement = place_popup(Anchor::new(100.0, 200.0), 800.0, card(320.0, 240.0));
    assert_relative_eq!(placement.y, 212.0);
    assert!(placement.flipped_below);
}

#[test]
fn resize_changes_only_horizontal_placement() {
    let anchor = Anchor::new(500.0, 300.0);
    let wide = place_popup(anchor, 1200.0, card(320.0, 240.0));
    let narrow = place_popup(anchor, 600.0, card(320.0, 240.0));

    assert_relative_eq!(wide.x, 512.0);
    assert_relative_eq!(narrow.x, 168.0);
    assert_relative_eq!(wide.y, narrow.y);
}

#[test]
fn default_geometry_uses_twelve_pixel_offset() {
    let config = PopupLayoutConfig::default();
    assert_relative_eq!(config.anchor_offset, 12.0);
    assert!(config.validate().is_ok());
}
