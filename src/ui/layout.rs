//! Panel layout.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                    X-API                     │
//! ├──────────────────────────────────────────────┤
//! │ Endpoint: /api/hello█                        │
//! ├──────────────────────────────────────────────┤
//! │ [Enter] Call API   [Ctrl+B] Burst x20        │
//! ├──────────────────────────────────────────────┤
//! │ Response                                     │
//! │ {                                            │
//! │   "message": "hello"                         │
//! │ }                                            │
//! ├──────────────────────────────────────────────┤
//! │      Backend URL: http://localhost:3000      │
//! └──────────────────────────────────────────────┘
//! ```

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::{App, AppMode},
    models::{PanelState, PanelView},
};

use super::widgets;

const INPUT_PLACEHOLDER: &str = "Enter API Endpoint (e.g. /api/hello)";

/// Render the whole panel from a state snapshot.
///
/// Also records how far the response can scroll at the current size and
/// pulls `app.scroll` back inside that range.
pub fn render(frame: &mut Frame, app: &mut App, state: &PanelState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Endpoint input
            Constraint::Length(3), // Triggers
            Constraint::Min(5),    // Response
            Constraint::Length(3), // Backend label
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_input(frame, chunks[1], state);
    render_triggers(frame, chunks[2], state.loading);
    app.max_scroll = render_response(frame, chunks[3], state, app.scroll);
    app.scroll = app.scroll.min(app.max_scroll);
    render_backend(frame, chunks[4], app.panel.base_url());

    if app.mode == AppMode::Help {
        widgets::render_help_overlay(frame);
    }
}

fn bordered() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "X-API",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .block(bordered())
    .centered();

    frame.render_widget(title, area);
}

fn render_input(frame: &mut Frame, area: Rect, state: &PanelState) {
    let label = Span::styled("Endpoint: ", Style::default().fg(Color::Cyan));
    let line = if state.endpoint.is_empty() {
        Line::from(vec![
            label,
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(vec![
            label,
            Span::raw(state.endpoint.as_str()),
            Span::styled("█", Style::default().fg(Color::Gray)),
        ])
    };

    frame.render_widget(Paragraph::new(line).block(bordered()), area);
}

fn render_triggers(frame: &mut Frame, area: Rect, loading: bool) {
    // Triggers stay live while loading; the hint only dims.
    let action = if loading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let keys = Style::default().fg(Color::Yellow);

    let triggers = Line::from(vec![
        Span::styled("[Enter]", keys),
        Span::styled(" Call API   ", action),
        Span::styled("[Ctrl+B]", keys),
        Span::styled(" Burst x20   ", action),
        Span::styled("[F1]", keys),
        Span::raw(" Help  "),
        Span::styled("[Esc]", keys),
        Span::raw(" Quit"),
    ]);

    frame.render_widget(Paragraph::new(triggers).block(bordered()), area);
}

/// Returns the largest useful scroll offset for the drawn content.
fn render_response(frame: &mut Frame, area: Rect, state: &PanelState, scroll: u16) -> u16 {
    let view = state.view();
    let block = bordered().title(Span::styled(
        " Response ",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
    let inner = block.inner(area);

    let (paragraph, max_scroll) = match &view {
        PanelView::Loading => (
            Paragraph::new(Line::from(Span::styled(
                view.text(),
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::SLOW_BLINK),
            )))
            .centered(),
            0,
        ),
        PanelView::Placeholder => (
            Paragraph::new(Span::styled(
                view.text(),
                Style::default().fg(Color::DarkGray),
            )),
            0,
        ),
        PanelView::Response(body) => {
            let paragraph = Paragraph::new(body.as_str()).wrap(Wrap { trim: false });
            // Wrapped rows, not source lines: one long value can span many rows.
            let rows = paragraph.line_count(inner.width);
            let max_scroll = u16::try_from(rows.saturating_sub(inner.height as usize))
                .unwrap_or(u16::MAX);
            (paragraph.scroll((scroll.min(max_scroll), 0)), max_scroll)
        }
    };

    frame.render_widget(paragraph.block(block), area);
    max_scroll
}

fn render_backend(frame: &mut Frame, area: Rect, base_url: &str) {
    let label = Paragraph::new(Line::from(Span::styled(
        format!("Backend URL: {}", base_url),
        Style::default().fg(Color::Gray),
    )))
    .block(bordered())
    .centered();

    frame.render_widget(label, area);
}
