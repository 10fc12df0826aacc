//! Application-wide constants.

use std::time::Duration;

// ============================================================================
// Viewport
// ============================================================================

/// Width, in layout units, at which the share menu switches from the mobile
/// footer takeover to the desktop tooltip. Inclusive on the desktop side.
pub const VIEWPORT_BREAKPOINT: u32 = 608;

/// Approximate width of one terminal cell in layout units, used when the
/// terminal does not report its pixel size.
pub const FALLBACK_CELL_WIDTH: u32 = 8;

// ============================================================================
// Timing
// ============================================================================

/// Quiet interval a resize burst must hold before the menu resets.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

/// Delay between opening the menu and moving focus to the first link.
pub const FOCUS_DEFER: Duration = Duration::from_millis(100);

/// Main loop tick rate.
pub const TICK_RATE: Duration = Duration::from_millis(100);

// ============================================================================
// Share Popup
// ============================================================================

/// Requested width of the browser popup share links open in.
pub const SHARE_POPUP_WIDTH: u32 = 580;

/// Requested height of the browser popup share links open in.
pub const SHARE_POPUP_HEIGHT: u32 = 400;

// ============================================================================
// Layout
// ============================================================================

/// Width of the article card, in cells.
pub const CARD_WIDTH: u16 = 64;

/// Height of the article card, in cells.
pub const CARD_HEIGHT: u16 = 14;

/// Rows of the image placeholder strip inside the card.
pub const CARD_IMAGE_HEIGHT: u16 = 4;

/// Width of the desktop tooltip popover.
pub const TOOLTIP_WIDTH: u16 = 26;

/// Height of the keyboard hint bar.
pub const FOOTER_HEIGHT: u16 = 1;
