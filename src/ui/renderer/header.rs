//! Header bar: logo, service endpoint, request indicator.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::state::AppState;
use crate::utils::{loading_dots, spinner_char};

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(26), // Logo
            Constraint::Min(20),    // Endpoint + activity
        ])
        .split(area);

    // Logo
    let pulse = if state.busy && state.tick_count % 2 == 0 {
        "○"
    } else {
        "●"
    };
    let logo = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(pulse, Style::default().fg(t.positive)),
        Span::styled(t!("app.name").to_string(), t.header_style()),
        Span::styled(
            format!(" v{}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(t.text_muted),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(logo, chunks[0]);

    let mut spans = Vec::new();
    if state.busy {
        spans.push(Span::styled(
            format!(
                " {} {}{} ",
                spinner_char(state.tick_count),
                t!("header.busy"),
                loading_dots(state.tick_count)
            ),
            Style::default()
                .fg(t.bg_dark)
                .bg(t.busy_accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        t!("header.server").to_string(),
        Style::default().fg(t.text_muted),
    ));
    spans.push(Span::styled(
        format!("{} ", state.server_url),
        Style::default().fg(t.text_dim),
    ));

    let endpoint = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style()),
        );
    frame.render_widget(endpoint, chunks[1]);
}
