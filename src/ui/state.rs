use std::time::{Duration, Instant};

use crate::analysis::{AnalysisResult, AnalyzeError, FailureKind};
use crate::constants::*;
use crate::history::History;

use super::input::InputBuffer;
use super::result_view::ResultView;
use super::theme::Theme;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button,
    History,
    Results,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::History,
            Focus::History => Focus::Results,
            Focus::Results => Focus::Input,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Input => Focus::Results,
            Focus::Button => Focus::Input,
            Focus::History => Focus::Button,
            Focus::Results => Focus::History,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Warning,
    Error,
}

/// Modal message shown until dismissed.
#[derive(Debug, Clone)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// A submission that passed validation and should go on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: u64,
    pub text: String,
}

/// All view state, owned by the event loop and borrowed by the renderer.
pub struct AppState {
    pub theme: Theme,
    pub current_lang: String,
    pub server_url: String,

    // Input controller
    pub input: InputBuffer,
    pub focus: Focus,
    pub busy: bool,
    next_request_id: u64,

    // Result renderer
    pub result: Option<ResultView>,
    pub sentence_scroll: usize,

    // History tracker
    pub history: History,
    pub history_selected: usize,

    // Overlays / chrome
    pub notification: Option<Notification>,
    pub show_help: bool,
    pub status_message: Option<(String, Instant)>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(theme: Theme, lang: &str, server_url: &str) -> Self {
        Self {
            theme,
            current_lang: lang.to_string(),
            server_url: server_url.to_string(),
            input: InputBuffer::default(),
            focus: Focus::Input,
            busy: false,
            next_request_id: 1,
            result: None,
            sentence_scroll: 0,
            history: History::new(HISTORY_LIMIT),
            history_selected: 0,
            notification: None,
            show_help: false,
            status_message: None,
            tick_count: 0,
        }
    }

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
    }

    /// Cycle through available UI languages.
    pub fn cycle_lang(&mut self) {
        let idx = LANGUAGES
            .iter()
            .position(|&l| l == self.current_lang)
            .unwrap_or(0);
        let next = LANGUAGES[(idx + 1) % LANGUAGES.len()];
        self.current_lang = next.to_string();
        rust_i18n::set_locale(next);
    }

    /// Set a transient status message.
    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    /// Status message, if it hasn't expired yet.
    pub fn active_status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, when)| when.elapsed() < Duration::from_secs(STATUS_MESSAGE_TIMEOUT_SECS))
            .map(|(msg, _)| msg.as_str())
    }

    // ── Input controller ──────────────────────────────────────────

    /// Ready or busy label of the submit button.
    pub fn button_label(&self) -> String {
        if self.busy {
            t!("button.busy").to_string()
        } else {
            t!("button.ready").to_string()
        }
    }

    /// Validate the input and mark the control busy.
    ///
    /// Blank input raises a warning and refocuses the input; nothing is sent.
    /// The caller must not invoke this while `busy` (the control is disabled).
    pub fn begin_submit(&mut self) -> Result<PendingRequest, AnalyzeError> {
        let text = self.input.text().trim().to_string();
        if text.is_empty() {
            let err = AnalyzeError::EmptyInput;
            self.notify(NotificationLevel::Warning, err.user_message());
            self.focus = Focus::Input;
            return Err(err);
        }
        let id = self.next_request_id;
        self.next_request_id += 1;
        self.busy = true;
        Ok(PendingRequest { id, text })
    }

    /// Render a successful response and record it in history.
    pub fn complete_request(&mut self, result: &AnalysisResult, now: Instant) {
        self.busy = false;
        self.result = Some(ResultView::build(result, now));
        self.sentence_scroll = 0;
        self.history.record(result);
        self.history_selected = 0;
    }

    /// Raise the failure notification; result and history stay as they were.
    pub fn fail_request(&mut self, error: &AnalyzeError) {
        self.busy = false;
        let level = match error.kind() {
            FailureKind::Validation => NotificationLevel::Warning,
            FailureKind::Request => NotificationLevel::Error,
        };
        self.notify(level, error.user_message());
    }

    pub fn notify(&mut self, level: NotificationLevel, message: String) {
        self.notification = Some(Notification { level, message });
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    // ── Result renderer ───────────────────────────────────────────

    /// Step every running animation up to `now`.
    pub fn advance_animations(&mut self, now: Instant) {
        if let Some(view) = self.result.as_mut() {
            view.advance(now);
        }
    }

    pub fn scroll_sentences_up(&mut self, rows: usize) {
        self.sentence_scroll = self.sentence_scroll.saturating_sub(rows);
    }

    pub fn scroll_sentences_down(&mut self, rows: usize) {
        let max = self
            .result
            .as_ref()
            .map(|v| v.sentences.len().saturating_sub(1))
            .unwrap_or(0);
        self.sentence_scroll = (self.sentence_scroll + rows).min(max);
    }

    // ── History tracker ───────────────────────────────────────────

    pub fn history_up(&mut self) {
        self.history_selected = self.history_selected.saturating_sub(1);
    }

    pub fn history_down(&mut self) {
        if self.history_selected + 1 < self.history.len() {
            self.history_selected += 1;
        }
    }

    /// Copy a history entry's full text back into the input.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn recall_history(&mut self, index: usize) -> bool {
        let Some(entry) = self.history.get(index) else {
            return false;
        };
        let text = entry.text.clone();
        self.input.set_text(&text);
        self.history_selected = index;
        self.focus = Focus::Input;
        true
    }
}
