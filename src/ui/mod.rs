//! UI rendering module for the sharecard TUI.
//!
//! - `card` - the article preview card and its share button
//! - `menu` - the open share menu (footer takeover / tooltip)
//! - `footer` - the keyboard hint bar
//! - `layout` - zone calculations shared with mouse hit-testing
//! - `helpers` - styled block helpers

pub mod card;
pub mod footer;
pub mod helpers;
pub mod layout;
pub mod menu;

use ratatui::Frame;

use crate::state::App;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function orchestrating all UI rendering.
pub fn render(app: &App, frame: &mut Frame) {
    let zones = layout::zones(frame.area(), app.surface.presentation);

    card::render(frame, &zones, app);
    menu::render(frame, &zones, app);
    footer::render(frame, zones.hint_bar, app);
}
