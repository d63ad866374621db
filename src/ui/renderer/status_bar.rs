//! Status bar at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::state::{AppState, Focus};
use crate::utils::single_line;

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    let badge = |key: &str, color: ratatui::style::Color| -> Span {
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(t.bg_dark)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };
    let dim =
        |text: &str| -> Span { Span::styled(text.to_string(), Style::default().fg(t.text_dim)) };

    let mut spans = vec![Span::raw(" ")];
    match state.focus {
        Focus::Input => {
            spans.push(badge("Ctrl+Enter", t.accent));
            spans.push(dim(&t!("status.analyze").to_string()));
            spans.push(badge("Ctrl+L", t.accent));
            spans.push(dim(&t!("status.clear").to_string()));
        }
        Focus::Button => {
            spans.push(badge("Enter", t.accent));
            spans.push(dim(&t!("status.analyze").to_string()));
        }
        Focus::History => {
            spans.push(badge("↑↓", t.accent));
            spans.push(dim(&t!("status.select").to_string()));
            spans.push(badge("Enter", t.accent));
            spans.push(dim(&t!("status.recall").to_string()));
        }
        Focus::Results => {
            spans.push(badge("↑↓", t.accent));
            spans.push(dim(&t!("status.scroll").to_string()));
        }
    }
    spans.push(badge("Tab", t.accent));
    spans.push(dim(&t!("status.focus").to_string()));
    if state.focus != Focus::Input {
        spans.push(badge("T", t.accent));
        spans.push(dim(&format!(" {} ", t.name)));
        spans.push(badge("L", t.accent));
        spans.push(dim(&format!(" {} ", state.current_lang.to_uppercase())));
    }
    spans.push(badge("F1", t.accent));
    spans.push(dim(&t!("status.help").to_string()));

    // Hovered history text, else the transient status message
    let message = if state.focus == Focus::History {
        state
            .history
            .get(state.history_selected)
            .map(|entry| format!("{}: {}", entry.sentiment_label, single_line(&entry.text)))
    } else {
        None
    };
    if let Some(msg) = message.as_deref().or(state.active_status()) {
        spans.push(Span::styled(
            format!("  {} ", msg),
            Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
        ));
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
