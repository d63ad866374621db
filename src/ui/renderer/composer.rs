//! Text input and the analyze button.

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::state::{AppState, Focus};

pub fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let focused = state.focus == Focus::Input;

    let block = Block::default()
        .title(Span::styled(
            t!("title.input").to_string(),
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

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if state.input.is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            t!("input.placeholder").to_string(),
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(placeholder, inner);
        if focused {
            frame.set_cursor_position(Position::new(inner.x, inner.y));
        }
        return;
    }

    let wrapped = state.input.wrap(inner.width);
    let (cursor_row, cursor_col) = wrapped.cursor;
    // Keep the cursor row on screen
    let scroll = cursor_row.saturating_sub(inner.height as usize - 1);

    let lines: Vec<Line> = wrapped
        .lines
        .into_iter()
        .skip(scroll)
        .take(inner.height as usize)
        .map(|l| Line::from(Span::styled(l, Style::default().fg(t.text_primary))))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);

    if focused {
        frame.set_cursor_position(Position::new(
            inner.x + cursor_col as u16,
            inner.y + (cursor_row - scroll) as u16,
        ));
    }
}

pub fn render_button(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let focused = state.focus == Focus::Button;

    let label_style = if state.busy {
        Style::default()
            .fg(t.busy_accent)
            .add_modifier(Modifier::ITALIC)
    } else if focused {
        Style::default()
            .fg(t.bg_dark)
            .bg(t.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
    };
    let border_style = if state.busy {
        Style::default().fg(t.text_muted)
    } else if focused {
        t.border_highlight_style()
    } else {
        t.border_style()
    };

    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", state.button_label()),
        label_style,
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(button, area);
}
