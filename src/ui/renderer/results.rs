//! Result panels: summary, emotion bars, sentence breakdown.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::layout::ScreenLayout;
use crate::ui::result_view::ResultView;
use crate::ui::state::{AppState, Focus};
use crate::ui::widgets::EmotionBar;

use super::helpers::render_scrollbar_bordered;

pub fn render_results(frame: &mut Frame, layout: &ScreenLayout, state: &AppState, now: Instant) {
    let Some(view) = state.result.as_ref() else {
        render_placeholder(frame, layout.results, state);
        return;
    };

    if let Some(area) = layout.summary {
        render_summary(frame, area, state, view);
    }
    if let Some(area) = layout.emotions {
        render_emotions(frame, area, state, view, now);
    }
    if let Some(area) = layout.sentences {
        render_sentences(frame, area, state, view);
    }
}

fn panel_block<'a>(title: String, state: &AppState) -> Block<'a> {
    let t = &state.theme;
    Block::default()
        .title(Span::styled(title, t.section_title_style()))
        .borders(Borders::ALL)
        .border_style(if state.focus == Focus::Results {
            t.border_highlight_style()
        } else {
            t.border_style()
        })
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let text = Paragraph::new(vec![
        Line::raw(""),
        Line::from(Span::styled(
            t!("result.placeholder").to_string(),
            Style::default().fg(t.text_muted),
        )),
    ])
    .alignment(Alignment::Center)
    .block(panel_block(t!("title.results").to_string(), state));
    frame.render_widget(text, area);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &AppState, view: &ResultView) {
    let t = &state.theme;
    let label = |text: String| Span::styled(text, Style::default().fg(t.text_dim));
    let value = |text: String| {
        Span::styled(
            text,
            Style::default()
                .fg(t.text_primary)
                .add_modifier(Modifier::BOLD),
        )
    };

    let mut lines = vec![
        Line::from(vec![
            label(t!("result.sentiment").to_string()),
            Span::styled(
                format!(" {} ", view.sentiment_label),
                t.sentiment_badge_style(view.sentiment),
            ),
        ]),
        Line::from(vec![
            label(t!("result.polarity").to_string()),
            value(view.polarity.display()),
            Span::raw("   "),
            label(t!("result.subjectivity").to_string()),
            value(view.subjectivity.display()),
        ]),
    ];
    let text_label = t!("result.text").to_string();
    let width = area.width.saturating_sub(2);
    let preview_style = Style::default()
        .fg(t.text_primary)
        .add_modifier(Modifier::ITALIC);
    for (i, part) in view.preview_lines(&text_label, width).into_iter().enumerate() {
        // Label length on the first row, if the label survived wrapping
        let split = if i == 0 {
            part.strip_prefix(text_label.as_str())
                .or_else(|| part.strip_prefix(text_label.trim_end()))
                .map(|rest| part.len() - rest.len())
        } else {
            None
        };
        lines.push(match split {
            Some(n) => Line::from(vec![
                label(part[..n].to_string()),
                Span::styled(part[n..].to_string(), preview_style),
            ]),
            None => Line::from(Span::styled(part, preview_style)),
        });
    }

    let summary = Paragraph::new(lines)
        .block(panel_block(t!("title.results").to_string(), state));
    frame.render_widget(summary, area);
}

fn render_emotions(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    view: &ResultView,
    now: Instant,
) {
    let block = panel_block(t!("title.emotions").to_string(), state);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    for (i, row) in view.emotions.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let bar = EmotionBar::new(&row.name, row.percent, &row.label, &state.theme)
            .fill(row.bar.width_percent(now));
        frame.render_widget(bar, Rect::new(inner.x + 1, y, inner.width.saturating_sub(2), 1));
    }
}

fn render_sentences(frame: &mut Frame, area: Rect, state: &AppState, view: &ResultView) {
    let t = &state.theme;
    let block = panel_block(t!("title.sentences").to_string(), state);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Tag column is 5 wide: "pos" plus padding
    let text_width = (inner.width as usize).saturating_sub(7).max(1);
    let mut lines: Vec<Line> = Vec::new();
    for row in view.sentences.iter().skip(state.sentence_scroll) {
        let quoted = format!("\"{}\"", row.text);
        let wrapped = textwrap::wrap(&quoted, text_width);
        for (i, part) in wrapped.iter().enumerate() {
            let tag = if i == 0 {
                Span::styled(
                    format!(" {} ", row.sentiment.sentence_tag()),
                    t.sentiment_badge_style(row.sentiment),
                )
            } else {
                Span::raw("     ")
            };
            lines.push(Line::from(vec![
                Span::raw(" "),
                tag,
                Span::raw(" "),
                Span::styled(part.to_string(), Style::default().fg(t.text_primary)),
            ]));
        }
        lines.push(Line::from(vec![
            Span::raw("       "),
            Span::styled(
                format!("{} · {}", row.sentiment_label, row.emotion_summary),
                Style::default().fg(t.text_dim),
            ),
        ]));
        if lines.len() >= inner.height as usize {
            break;
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
    render_scrollbar_bordered(frame, area, view.sentences.len() * 2, state.sentence_scroll * 2);
}
