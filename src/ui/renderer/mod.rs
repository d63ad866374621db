//! Renderer module: split into focused submodules.
//!
//! - `header`: Logo, endpoint, request indicator
//! - `composer`: Text input and analyze button
//! - `results`: Summary, emotion bars, sentence breakdown
//! - `history`: Recent analyses sidebar
//! - `status_bar`: Bottom status bar with keybinds and messages
//! - `overlays`: Notification modal and help
//! - `helpers`: Shared rendering utilities

mod composer;
mod header;
pub mod helpers;
mod history;
mod overlays;
mod results;
mod status_bar;

use std::time::Instant;

use ratatui::Frame;

use super::layout;
use super::state::AppState;

/// Top-level render function. Delegates to sub-renderers per panel.
pub fn render(frame: &mut Frame, state: &AppState) {
    let size = frame.area();
    let layout = layout::compute(size, state);
    let now = Instant::now();

    header::render_header(frame, layout.header, state);
    composer::render_input(frame, layout.input, state);
    composer::render_button(frame, layout.button, state);
    results::render_results(frame, &layout, state, now);
    history::render_history(frame, layout.history, state);
    status_bar::render_status_bar(frame, layout.status, state);

    if state.show_help {
        overlays::render_help_overlay(frame, size, state);
    }

    if state.notification.is_some() {
        overlays::render_notification(frame, size, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::AnalyzeError;
    use crate::constants::DEFAULT_SERVER_URL;
    use crate::ui::state::Focus;
    use crate::ui::theme::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Duration;

    fn make_state() -> AppState {
        rust_i18n::set_locale("en");
        AppState::new(Theme::default_dark(), "en", DEFAULT_SERVER_URL)
    }

    fn draw(state: &AppState) -> Buffer {
        draw_sized(state, 120, 40)
    }

    fn draw_sized(state: &AppState, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn sample_result(text: &str) -> crate::analysis::AnalysisResult {
        serde_json::from_value(serde_json::json!({
            "text": text,
            "sentiment": "Positive",
            "polarity": 0.73,
            "subjectivity": 0.4,
            "emotions": {"trust": 25, "joy": 40},
            "sentence_breakdown": [
                {"text": "I love it.", "sentiment": "Positive", "emotions": {"joy": 100}}
            ]
        }))
        .unwrap()
    }

    #[test]
    fn initial_screen_shows_button_and_empty_history() {
        let state = make_state();
        let text = screen_text(&draw(&state));
        assert!(text.contains("Analyze Sentiment"));
        assert!(text.contains("No analyses yet"));
        assert!(text.contains("Results will appear here"));
    }

    #[test]
    fn busy_button_label() {
        let mut state = make_state();
        state.input.set_text("hello");
        state.begin_submit().unwrap();
        let text = screen_text(&draw(&state));
        assert!(text.contains("Analyzing..."));
    }

    #[test]
    fn result_panels_render() {
        let mut state = make_state();
        let t0 = Instant::now() - Duration::from_secs(5);
        state.complete_request(&sample_result("I love it."), t0);
        state.advance_animations(Instant::now());

        let text = screen_text(&draw(&state));
        assert!(text.contains(" Positive "));
        assert!(text.contains("0.73"));
        assert!(text.contains("0.40"));
        assert!(text.contains("\"I love it.\""));
        assert!(text.contains("joy"));
        assert!(text.contains("40%"));
        assert!(text.contains(" pos "));
        assert!(text.contains("joy (100%)"));
        assert!(text.contains(" Pos "));

        // Ranked: joy above trust
        let joy = text.find("joy ").unwrap();
        let trust = text.find("trust").unwrap();
        assert!(joy < trust);
    }

    #[test]
    fn preview_ellipsis_visible_on_narrow_terminal() {
        let mut state = make_state();
        let text = format!("{}Z{}", "a".repeat(79), "b".repeat(40));
        state.complete_request(&sample_result(&text), Instant::now());
        let buf = draw_sized(&state, 80, 30);

        let summary = crate::ui::layout::compute(buf.area, &state).summary.unwrap();
        let mut joined = String::new();
        for y in summary.y + 1..summary.y + summary.height - 1 {
            let row: String = (summary.x + 1..summary.x + summary.width - 1)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect();
            joined.push_str(row.trim_end());
        }
        assert!(joined.contains("Z...\""), "summary was {:?}", joined);
        assert!(joined.contains(&"a".repeat(30)));
    }

    #[test]
    fn newlines_in_result_text_become_spaces() {
        let mut state = make_state();
        let result = serde_json::from_value(serde_json::json!({
            "text": "alpha\nbeta",
            "sentiment": "Neutral",
            "polarity": 0,
            "sentence_breakdown": [{"text": "gamma\ndelta", "sentiment": "Neutral"}]
        }))
        .unwrap();
        state.complete_request(&result, Instant::now());
        let text = screen_text(&draw(&state));
        assert!(text.contains("\"alpha beta\""));
        assert!(text.contains("\"gamma delta\""));
        assert!(!text.contains("alphabeta"));
    }

    #[test]
    fn notification_modal_renders_message() {
        let mut state = make_state();
        state.fail_request(&AnalyzeError::Status(reqwest::StatusCode::BAD_GATEWAY));
        let text = screen_text(&draw(&state));
        assert!(text.contains("An error occurred while analyzing"));
    }

    #[test]
    fn help_overlay_renders() {
        let mut state = make_state();
        state.show_help = true;
        let text = screen_text(&draw(&state));
        assert!(text.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn history_focus_shows_full_text_in_status() {
        let mut state = make_state();
        // Longer than the sidebar row, short enough for the status bar
        state.complete_request(&sample_result("the quick brown fox tail-marker"), Instant::now());
        state.focus = Focus::History;
        let buf = draw(&state);
        let last_row: String = (0..buf.area.width)
            .map(|x| buf[(x, buf.area.height - 1)].symbol().to_string())
            .collect();
        assert!(last_row.contains("tail-marker"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let state = make_state();
        let backend = TestBackend::new(20, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();
    }
}
