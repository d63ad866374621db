//! Popup overlays: notification modal and keyboard help.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::{HELP_POPUP_HEIGHT, HELP_POPUP_WIDTH, NOTIFICATION_POPUP_WIDTH};
use crate::ui::state::{AppState, NotificationLevel};

use super::helpers::centered_rect;

pub fn render_notification(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let Some(ref notification) = state.notification else {
        return;
    };

    let (title, color) = match notification.level {
        NotificationLevel::Warning => (t!("title.warning").to_string(), t.warning),
        NotificationLevel::Error => (t!("title.error").to_string(), t.danger),
    };

    let popup_width = NOTIFICATION_POPUP_WIDTH.min(area.width.saturating_sub(4));
    let text_width = popup_width.saturating_sub(4).max(1) as usize;
    let body_rows = textwrap::wrap(&notification.message, text_width).len() as u16;
    let popup_height = (body_rows + 5).min(area.height);
    let popup_area = centered_rect(popup_width, popup_height, area);

    frame.render_widget(Clear, popup_area);

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            notification.message.clone(),
            Style::default().fg(t.text_primary),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            t!("notify.dismiss").to_string(),
            Style::default().fg(t.text_muted),
        )),
    ];

    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    title,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(popup, popup_area);
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup_area = centered_rect(HELP_POPUP_WIDTH, HELP_POPUP_HEIGHT, area);

    frame.render_widget(Clear, popup_area);

    let help_entry = |key: &str, desc: String, color: ratatui::style::Color| -> Line {
        Line::from(vec![
            Span::styled(
                format!("  {:<20}", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(t.text_primary)),
        ])
    };
    let section = |text: String| -> Line {
        Line::from(Span::styled(
            format!("  {}", text),
            Style::default()
                .fg(t.accent_secondary)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let help_text = vec![
        section(t!("help.input").to_string()),
        help_entry("Ctrl+Enter / F5", t!("help.analyze").to_string(), t.accent),
        help_entry("Enter", t!("help.newline").to_string(), t.accent),
        help_entry("Ctrl+L", t!("help.clear").to_string(), t.accent),
        Line::raw(""),
        section(t!("help.navigation").to_string()),
        help_entry("Tab / Shift+Tab", t!("help.focus").to_string(), t.accent),
        help_entry("Enter / Space", t!("help.button").to_string(), t.accent),
        help_entry("Up/Down / j / k", t!("help.select").to_string(), t.accent),
        help_entry("Enter (history)", t!("help.recall").to_string(), t.accent),
        help_entry("PgUp / PgDn", t!("help.scroll").to_string(), t.accent),
        help_entry("Mouse click", t!("help.mouse").to_string(), t.accent),
        Line::raw(""),
        section(t!("help.general").to_string()),
        help_entry("T", t!("help.theme").to_string(), t.accent),
        help_entry("L", t!("help.lang").to_string(), t.accent),
        help_entry("F1 / ?", t!("help.toggle").to_string(), t.accent),
        help_entry("Esc", t!("help.close").to_string(), t.accent),
        help_entry("q / Ctrl+C", t!("help.quit").to_string(), t.warning),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(Span::styled(t!("title.help").to_string(), t.header_style()))
            .borders(Borders::ALL)
            .border_style(t.border_highlight_style()),
    );
    frame.render_widget(help, popup_area);
}
