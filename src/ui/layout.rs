//! Layout calculations for the card, the share button, and the link group.
//!
//! Zones are pure functions of the terminal area and the active
//! presentation. The renderer draws into them and the mouse handler
//! hit-tests against them, so both always agree on where things are.

use ratatui::layout::{Position, Rect};

use crate::constants::{CARD_HEIGHT, CARD_WIDTH, FOOTER_HEIGHT, TOOLTIP_WIDTH};
use crate::domain::SharePlatform;
use crate::state::viewport::Presentation;

/// Width of the rendered share button, including brackets.
pub const SHARE_BUTTON_WIDTH: u16 = 11;

/// Rows of the tooltip box: one per link plus the border.
const TOOLTIP_HEIGHT: u16 = SharePlatform::ALL.len() as u16 + 2;

// ============================================================================
// Zones
// ============================================================================

/// Screen regions of the interactive elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zones {
    /// The article card.
    pub card: Rect,
    /// The share button inside the card footer.
    pub share_button: Rect,
    /// The link group, when a presentation is active.
    pub link_group: Option<Rect>,
    /// One row per link inside the group, in platform order.
    pub link_rows: Vec<Rect>,
    /// The keyboard hint bar at the bottom of the screen.
    pub hint_bar: Rect,
}

impl Zones {
    /// Index of the link row containing `position`, if any.
    #[must_use]
    pub fn link_at(&self, position: Position) -> Option<usize> {
        self.link_rows
            .iter()
            .position(|row| row.contains(position))
    }
}

/// Computes the zones for the given terminal area and presentation.
///
/// All zones are clamped to the area, so tiny terminals degrade to empty
/// regions instead of out-of-bounds rects.
#[must_use]
pub fn zones(area: Rect, presentation: Option<Presentation>) -> Zones {
    let hint_bar = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(FOOTER_HEIGHT),
        width: area.width,
        height: FOOTER_HEIGHT.min(area.height),
    }
    .intersection(area);

    let body = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(hint_bar.height),
    };

    let card_width = CARD_WIDTH.min(body.width);
    let card_height = CARD_HEIGHT.min(body.height);
    let card = Rect {
        x: body.x + (body.width.saturating_sub(card_width)) / 2,
        y: body.y + (body.height.saturating_sub(card_height)) / 2,
        width: card_width,
        height: card_height,
    };

    // Bottom row inside the card border, right-aligned.
    let share_button = Rect {
        x: card.right().saturating_sub(SHARE_BUTTON_WIDTH + 2),
        y: card.bottom().saturating_sub(2),
        width: SHARE_BUTTON_WIDTH,
        height: 1,
    }
    .intersection(card);

    let link_count = SharePlatform::ALL.len() as u16;
    let (link_group, link_rows) = match presentation {
        Some(Presentation::FooterTakeover) => {
            // The card footer transforms: the link group takes over the
            // rows directly above the share button.
            let group = Rect {
                x: card.x.saturating_add(1),
                y: card.bottom().saturating_sub(link_count + 2),
                width: card.width.saturating_sub(2),
                height: link_count,
            }
            .intersection(card);
            let rows = row_slices(group);
            (Some(group), rows)
        }
        Some(Presentation::Tooltip) => {
            // Popover anchored above the share button, right-aligned.
            let width = TOOLTIP_WIDTH.min(area.width);
            let group = Rect {
                x: share_button
                    .right()
                    .saturating_sub(width)
                    .max(area.x),
                y: share_button.y.saturating_sub(TOOLTIP_HEIGHT),
                width,
                height: TOOLTIP_HEIGHT,
            }
            .intersection(area);
            let rows = row_slices(inner(group));
            (Some(group), rows)
        }
        None => (None, Vec::new()),
    };

    Zones {
        card,
        share_button,
        link_group,
        link_rows,
        hint_bar,
    }
}

/// Shrinks a rect by its one-cell border.
fn inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Splits a group rect into one-row rects, one per link.
fn row_slices(group: Rect) -> Vec<Rect> {
    let count = SharePlatform::ALL.len() as u16;
    (0..count)
        .filter_map(|index| {
            let y = group.y.checked_add(index)?;
            if y >= group.bottom() {
                return None;
            }
            Some(Rect {
                x: group.x,
                y,
                width: group.width,
                height: 1,
            })
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
