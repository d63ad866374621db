//! History sidebar.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::state::{AppState, Focus};
use crate::utils::{single_line, truncate_chars};

pub fn render_history(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let focused = state.focus == Focus::History;

    let block = Block::default()
        .title(Span::styled(
            t!("title.history", count = state.history.len()).to_string(),
            t.section_title_style(),
        ))
        .borders(Borders::ALL)
        .border_style(if focused {
            t.border_highlight_style()
        } else {
            t.border_style()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.history.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            t!("history.empty").to_string(),
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(empty, inner);
        return;
    }

    // " Pos " + " " + text + " " + "HH:MM"
    let text_width = (inner.width as usize).saturating_sub(5 + 1 + 1 + 5 + 3);

    let lines: Vec<Line> = state
        .history
        .iter()
        .enumerate()
        .take(inner.height as usize)
        .map(|(i, entry)| {
            let selected = focused && i == state.history_selected;
            let text = truncate_chars(&single_line(&entry.text), text_width);
            let pad = (text_width + 3).saturating_sub(text.width());
            let text_style = if selected {
                t.row_selected()
            } else {
                Style::default().fg(t.text_primary)
            };
            Line::from(vec![
                Span::styled(
                    format!(" {} ", entry.sentiment.history_tag()),
                    t.sentiment_badge_style(entry.sentiment),
                ),
                Span::styled(format!(" {}{}", text, " ".repeat(pad)), text_style),
                Span::styled(
                    format!(" {}", entry.recorded_at.format("%H:%M")),
                    Style::default().fg(t.text_muted),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
