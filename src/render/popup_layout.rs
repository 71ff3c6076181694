use serde::{Deserialize, Serialize};

use crate::core::Anchor;
use crate::error::{ChartError, ChartResult};

/// Geometry of the floating annotation card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopupLayoutConfig {
    #[serde(default = "default_card_width")]
    pub card_width: f64,
    #[serde(default = "default_card_max_height")]
    pub card_max_height: f64,
    /// Gap between the anchor and the nearest card edge.
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset: f64,
}

impl Default for PopupLayoutConfig {
    fn default() -> Self {
        Self {
            card_width: default_card_width(),
            card_max_height: default_card_max_height(),
            anchor_offset: default_anchor_offset(),
        }
    }
}

fn default_card_width() -> f64 {
    320.0
}

fn default_card_max_height() -> f64 {
    240.0
}

fn default_anchor_offset() -> f64 {
    12.0
}

impl PopupLayoutConfig {
    pub fn validate(self) -> ChartResult<()> {
        for (name, value) in [
            ("card_width", self.card_width),
            ("card_max_height", self.card_max_height),
            ("anchor_offset", self.anchor_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Top-left corner of the card in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopupPlacement {
    pub x: f64,
    pub y: f64,
    /// Card moved to the left of the anchor because it overflowed the right edge.
    pub flipped_left: bool,
    /// Card moved below the anchor because it overflowed the top edge.
    pub flipped_below: bool,
}

/// Places the card next to `anchor` inside a container `container_width` wide.
///
/// Default placement is right of and above the anchor. The card flips left
/// when `cx + offset + W` exceeds the container width (clamped at 0), and
/// flips below when the top edge would be negative. Stateless; hosts call it
/// again after every focus change or resize.
#[must_use]
pub fn place_popup(anchor: Anchor, container_width: f64, config: PopupLayoutConfig) -> PopupPlacement {
    let PopupLayoutConfig {
        card_width,
        card_max_height,
        anchor_offset,
    } = config;

    let flipped_left = anchor.x + anchor_offset + card_width > container_width;
    let x = if flipped_left {
        (anchor.x - card_width - anchor_offset).max(0.0)
    } else {
        anchor.x + anchor_offset
    };

    let above = anchor.y - card_max_height - anchor_offset;
    let flipped_below = above < 0.0;
    let y = if flipped_below {
        anchor.y + anchor_offset
    } else {
        above
    };

    PopupPlacement {
        x,
        y,
        flipped_left,
        flipped_below,
    }
}
