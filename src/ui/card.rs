//! Article preview card rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::constants::CARD_IMAGE_HEIGHT;
use crate::state::{App, FocusTarget};
use crate::theme::{FOCUSED_TITLE_STYLE, MUTED_COLOR, TITLE_STYLE};
use crate::ui::helpers::create_border_block;
use crate::ui::layout::Zones;

// ============================================================================
// Card Rendering
// ============================================================================

/// Renders the article preview card and the share button.
pub fn render(frame: &mut Frame, zones: &Zones, app: &App) {
    let card = zones.card;
    if card.width < 4 || card.height < 4 {
        return;
    }

    let block = create_border_block("Article", app.menu.is_open());
    let content = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CARD_IMAGE_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(content);

    render_image_placeholder(frame, chunks[0]);

    let context = app.dispatcher.context();
    let title = Paragraph::new(context.title.as_str()).style(TITLE_STYLE);
    frame.render_widget(title, chunks[1]);

    let description = Paragraph::new(context.description.as_str())
        .style(Style::default().fg(MUTED_COLOR))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[2]);

    let byline = Paragraph::new(Line::from(Span::styled(
        context.page_url.as_str(),
        Style::default().fg(MUTED_COLOR),
    )));
    frame.render_widget(byline, chunks[3]);

    render_share_button(frame, zones, app);
}

fn render_image_placeholder(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let strip = "▒".repeat(area.width as usize);
    let lines: Vec<Line> = (0..area.height)
        .map(|_| Line::from(Span::styled(strip.clone(), Style::default().fg(MUTED_COLOR))))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_share_button(frame: &mut Frame, zones: &Zones, app: &App) {
    let button = zones.share_button;
    if button.width == 0 {
        return;
    }

    let focused = app.surface.focus == FocusTarget::ShareButton;
    let label = if app.surface.expanded {
        "[ Share ▾ ]"
    } else {
        "[ Share ▸ ]"
    };
    let style = if focused {
        FOCUSED_TITLE_STYLE
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    let widget = Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Right);
    frame.render_widget(widget, button);
}

// ============================================================================
// Tests
// ============================================================================
