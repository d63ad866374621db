//! Screen geometry shared by the renderer and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::constants::{HISTORY_PANEL_WIDTH, SUMMARY_PANEL_HEIGHT};

use super::result_view::ResultView;
use super::state::AppState;

/// Rectangles for every panel of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub input: Rect,
    pub button: Rect,
    /// Whole result column below the button.
    pub results: Rect,
    pub summary: Option<Rect>,
    pub emotions: Option<Rect>,
    pub sentences: Option<Rect>,
    pub history: Rect,
    pub status: Rect,
}

const BUTTON_HEIGHT: u16 = 3;
const MIN_INPUT_HEIGHT: u16 = 3;

pub fn compute(area: Rect, state: &AppState) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Main
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(30),
            Constraint::Length(HISTORY_PANEL_WIDTH),
        ])
        .split(rows[1]);
    let left = columns[0];

    let input_height = input_height(state, left);
    let left_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(input_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(left);

    let results = left_rows[2];
    let (summary, emotions, sentences) = split_results(results, state);

    ScreenLayout {
        header: rows[0],
        input: left_rows[0],
        button: left_rows[1],
        results,
        summary,
        emotions,
        sentences,
        history: columns[1],
        status: rows[2],
    }
}

/// Bordered input grows with its wrapped content, up to half the column.
fn input_height(state: &AppState, column: Rect) -> u16 {
    let inner_width = column.width.saturating_sub(2);
    let wanted = state.input.desired_height(inner_width).saturating_add(2);
    let max = (column.height / 2).max(MIN_INPUT_HEIGHT);
    wanted.clamp(MIN_INPUT_HEIGHT, max)
}

fn split_results(area: Rect, state: &AppState) -> (Option<Rect>, Option<Rect>, Option<Rect>) {
    let Some(view) = state.result.as_ref() else {
        return (None, None, None);
    };

    let emotion_rows = if view.show_emotions() {
        view.emotions.len() as u16 + 2
    } else {
        0
    };
    // Last chunk holds the sentences, or absorbs the leftover space
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(summary_height(view, area.width)),
            Constraint::Length(emotion_rows),
            Constraint::Min(0),
        ])
        .split(area);

    let emotions = view.show_emotions().then_some(chunks[1]);
    let sentences = view.show_sentences().then_some(chunks[2]);
    (Some(chunks[0]), emotions, sentences)
}

/// Borders plus the sentiment and metric rows, then the wrapped preview.
fn summary_height(view: &ResultView, width: u16) -> u16 {
    let preview_rows = view
        .preview_lines(&t!("result.text"), width.saturating_sub(2))
        .len()
        .min(u16::MAX as usize) as u16;
    preview_rows.saturating_add(4).max(SUMMARY_PANEL_HEIGHT)
}

impl ScreenLayout {
    pub fn button_hit(&self, column: u16, row: u16) -> bool {
        self.button.contains(Position::new(column, row))
    }

    pub fn input_hit(&self, column: u16, row: u16) -> bool {
        self.input.contains(Position::new(column, row))
    }

    /// History entry under a mouse position, if any.
    pub fn history_row_at(&self, column: u16, row: u16, entries: usize) -> Option<usize> {
        let inner = Rect {
            x: self.history.x + 1,
            y: self.history.y + 1,
            width: self.history.width.saturating_sub(2),
            height: self.history.height.saturating_sub(2),
        };
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = (row - inner.y) as usize;
        (index < entries).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_SERVER_URL;
    use crate::ui::theme::Theme;
    use std::time::Instant;

    fn make_state() -> AppState {
        rust_i18n::set_locale("en");
        AppState::new(Theme::default_dark(), "en", DEFAULT_SERVER_URL)
    }

    fn with_result(state: &mut AppState, json: serde_json::Value) {
        let result = serde_json::from_value(json).unwrap();
        state.complete_request(&result, Instant::now());
    }

    #[test]
    fn empty_screen_has_no_result_panels() {
        let state = make_state();
        let l = compute(Rect::new(0, 0, 120, 40), &state);
        assert_eq!(l.header.height, 3);
        assert_eq!(l.status.height, 1);
        assert_eq!(l.input.height, 3);
        assert_eq!(l.button.height, 3);
        assert_eq!(l.history.width, HISTORY_PANEL_WIDTH);
        assert!(l.summary.is_none());
        assert!(l.emotions.is_none());
        assert!(l.sentences.is_none());
    }

    #[test]
    fn input_grows_then_caps() {
        let mut state = make_state();
        state.input.set_text("a\nb\nc\nd");
        let l = compute(Rect::new(0, 0, 120, 40), &state);
        assert_eq!(l.input.height, 6);

        state.input.set_text(&"line\n".repeat(60));
        let l = compute(Rect::new(0, 0, 120, 40), &state);
        // Main area is 36 rows tall
        assert_eq!(l.input.height, 18);
        assert_eq!(l.button.y, l.input.y + l.input.height);
    }

    #[test]
    fn result_sections_follow_content() {
        let mut state = make_state();
        with_result(
            &mut state,
            serde_json::json!({"text": "x", "sentiment": "Neutral", "polarity": 0}),
        );
        let l = compute(Rect::new(0, 0, 120, 40), &state);
        assert!(l.summary.is_some());
        assert!(l.emotions.is_none());
        assert!(l.sentences.is_none());

        with_result(
            &mut state,
            serde_json::json!({
                "text": "x", "sentiment": "Positive", "polarity": 0.5,
                "emotions": {"joy": 60, "trust": 40},
                "sentence_breakdown": [{"text": "x", "sentiment": "Positive"}]
            }),
        );
        let l = compute(Rect::new(0, 0, 120, 40), &state);
        assert_eq!(l.emotions.unwrap().height, 4);
        assert!(l.sentences.is_some());
    }

    #[test]
    fn summary_grows_with_wrapped_preview() {
        let mut state = make_state();
        with_result(
            &mut state,
            serde_json::json!({"text": "short", "sentiment": "Neutral", "polarity": 0}),
        );
        let l = compute(Rect::new(0, 0, 120, 40), &state);
        assert_eq!(l.summary.unwrap().height, SUMMARY_PANEL_HEIGHT);

        with_result(
            &mut state,
            serde_json::json!({"text": "a".repeat(120), "sentiment": "Neutral", "polarity": 0}),
        );
        let l = compute(Rect::new(0, 0, 80, 30), &state);
        let summary = l.summary.unwrap();
        let view = state.result.as_ref().unwrap();
        let rows = view.preview_lines(&t!("result.text"), summary.width - 2).len() as u16;
        assert!(rows > 2);
        assert_eq!(summary.height, rows + 4);
    }

    #[test]
    fn history_rows_map_to_entries() {
        let state = make_state();
        let l = compute(Rect::new(0, 0, 120, 40), &state);
        let x = l.history.x + 2;
        let first = l.history.y + 1;
        assert_eq!(l.history_row_at(x, first, 3), Some(0));
        assert_eq!(l.history_row_at(x, first + 2, 3), Some(2));
        assert_eq!(l.history_row_at(x, first + 3, 3), None);
        // Border row
        assert_eq!(l.history_row_at(x, l.history.y, 3), None);
        // Outside the panel
        assert_eq!(l.history_row_at(0, first, 3), None);
    }

    #[test]
    fn button_hit_test() {
        let state = make_state();
        let l = compute(Rect::new(0, 0, 120, 40), &state);
        assert!(l.button_hit(l.button.x + 1, l.button.y + 1));
        assert!(!l.button_hit(l.button.x + 1, l.input.y));
        assert!(l.input_hit(l.input.x + 1, l.input.y + 1));
    }
}
