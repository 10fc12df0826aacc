//! Footer hint bar rendering.
//!
//! Displays the keyboard shortcuts for the current input context at the
//! bottom of the screen.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Renders the hint bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let hint = if app.menu.is_open() {
        "←/→:Links  Enter:Open  Tab:Cycle  n:Native  Esc:Close  q:Quit"
    } else {
        "s:Share  q:Quit"
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
