//! Share menu rendering: footer takeover and tooltip presentations.

use ratatui::{
    Frame,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use crate::domain::SharePlatform;
use crate::state::App;
use crate::state::surface::PresentationSurface;
use crate::state::viewport::Presentation;
use crate::theme::{MUTED_COLOR, SELECTED_STYLE, TAKEOVER_BG_COLOR};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::Zones;

// ============================================================================
// Menu Rendering
// ============================================================================

/// Renders the open share menu in its active presentation.
///
/// Hidden link groups render nothing, whatever the presentation field
/// says.
pub fn render(frame: &mut Frame, zones: &Zones, app: &App) {
    if app.surface.hidden {
        return;
    }
    let Some(group) = zones.link_group else {
        return;
    };
    if group.width == 0 || group.height == 0 {
        return;
    }

    match app.surface.presentation {
        Some(Presentation::FooterTakeover) => {
            frame.render_widget(Clear, group);
            frame.render_widget(
                Paragraph::new("").style(Style::default().bg(TAKEOVER_BG_COLOR)),
                group,
            );
            render_links(frame, zones, app);
        }
        Some(Presentation::Tooltip) => {
            frame.render_widget(Clear, group);
            frame.render_widget(create_border_block("Share", true), group);
            render_links(frame, zones, app);
        }
        None => {}
    }
}

fn render_links(frame: &mut Frame, zones: &Zones, app: &App) {
    for (index, platform) in SharePlatform::ALL.iter().enumerate() {
        let Some(row) = zones.link_rows.get(index).copied() else {
            continue;
        };
        if row.width == 0 {
            continue;
        }

        let focused = app.surface.focused_link() == Some(index);
        let style = if focused {
            SELECTED_STYLE
        } else if app.surface.is_link_focusable(index) {
            Style::default()
        } else {
            Style::default().fg(MUTED_COLOR)
        };

        let marker = if focused { "▸ " } else { "  " };
        let line = Line::from(vec![
            Span::raw(marker),
            Span::raw(platform.label()),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), row);
    }
}

// ============================================================================
// Tests
// ============================================================================
