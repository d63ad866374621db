//! Application struct and event loop.
//!
//! Owns the terminal, state, analysis client and its result channel.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        MouseButton, MouseEvent, MouseEventKind, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tokio::sync::mpsc;

use crate::analysis::{AnalysisResult, AnalyzeError, AnalyzeEvent, AnalyzerClient};
use crate::config::Config;
use crate::constants::*;
use crate::metrics::SharedMetrics;
use crate::ui::{self, layout, AppState, Focus};

/// Main application struct.
///
/// Owns all runtime resources: state, HTTP client, request channel.
pub struct App {
    state: AppState,
    client: AnalyzerClient,

    // Channel
    analyze_tx: mpsc::UnboundedSender<AnalyzeEvent>,
    analyze_rx: mpsc::UnboundedReceiver<AnalyzeEvent>,

    // Prometheus
    shared_metrics: Option<SharedMetrics>,

    // Local loop state
    last_area: Rect,
    last_tick: Instant,
}

impl App {
    /// Create a new App: HTTP client, theme, optional Prometheus server.
    pub fn new(config: &Config, prometheus_addr: Option<&str>) -> Result<Self> {
        let client = AnalyzerClient::new(
            &config.server_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        tracing::info!(endpoint = client.endpoint(), "analysis client ready");

        let theme = ui::Theme::resolve(&config.theme);
        let state = AppState::new(theme, &config.lang, &config.server_url);

        let (analyze_tx, analyze_rx) = mpsc::unbounded_channel::<AnalyzeEvent>();

        let shared_metrics = match prometheus_addr {
            Some(addr) => match crate::metrics::start_server(addr) {
                Ok(m) => Some(m),
                Err(e) => {
                    tracing::warn!(error = %e, "prometheus exporter disabled");
                    None
                }
            },
            None => None,
        };

        Ok(Self {
            state,
            client,
            analyze_tx,
            analyze_rx,
            shared_metrics,
            last_area: Rect::default(),
            last_tick: Instant::now(),
        })
    }

    /// Run the main event loop. Returns when the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            EnableBracketedPaste
        )?;
        // Lets Ctrl+Enter arrive as a modified Enter where the terminal supports it.
        let enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        loop {
            let mut area = self.last_area;
            terminal.draw(|frame| {
                area = frame.area();
                ui::render(frame, &self.state);
            })?;
            self.last_area = area;

            self.drain_analyze_events();

            if event::poll(self.poll_timeout())? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            break; // quit requested
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Paste(text) => self.handle_paste(&text),
                    _ => {}
                }
            }

            self.tick(Instant::now());
        }

        // Cleanup
        if enhanced {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
        }
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;

        tracing::info!("shutting down");
        Ok(())
    }

    /// Fast polling only while something on screen moves.
    fn poll_timeout(&self) -> Duration {
        let animating = self
            .state
            .result
            .as_ref()
            .is_some_and(|view| view.is_animating(Instant::now()));
        if animating || self.state.busy {
            Duration::from_millis(EVENT_POLL_MS)
        } else {
            Duration::from_millis(IDLE_POLL_MS)
        }
    }

    fn tick(&mut self, now: Instant) {
        self.state.advance_animations(now);
        if now.duration_since(self.last_tick) >= Duration::from_millis(SPINNER_TICK_MS) {
            self.state.tick_count = self.state.tick_count.wrapping_add(1);
            self.last_tick = now;
        }
    }

    // ── Requests ─────────────────────────────────────────────────

    /// Validate the input and send it. Ignored while a request is in flight.
    fn submit(&mut self) {
        if self.state.busy {
            return;
        }
        match self.state.begin_submit() {
            Ok(request) => {
                tracing::info!(id = request.id, chars = request.text.chars().count(), "submitting");
                self.with_metrics(|m| m.record_request());
                self.client
                    .spawn_analyze(request.id, request.text, self.analyze_tx.clone());
            }
            Err(error) => {
                tracing::warn!("submit rejected: {}", error);
                self.with_metrics(|m| m.record_failure(&error));
            }
        }
    }

    fn drain_analyze_events(&mut self) {
        while let Ok(event) = self.analyze_rx.try_recv() {
            match event {
                AnalyzeEvent::Completed {
                    id,
                    result,
                    elapsed,
                } => self.on_completed(id, &result, elapsed),
                AnalyzeEvent::Failed { id, error } => self.on_failed(id, &error),
            }
        }
    }

    fn on_completed(&mut self, id: u64, result: &AnalysisResult, elapsed: Duration) {
        tracing::info!(
            id,
            sentiment = %result.sentiment,
            polarity = result.polarity,
            emotions = result.emotions.len(),
            ms = elapsed.as_millis() as u64,
            "analysis complete"
        );
        self.state.complete_request(result, Instant::now());
        self.state.set_status(
            t!(
                "status.analyzed",
                chars = result.text.chars().count(),
                ms = elapsed.as_millis()
            )
            .to_string(),
        );
        let history = self.state.history.len();
        self.with_metrics(|m| m.record_success(result, elapsed, history));
    }

    fn on_failed(&mut self, id: u64, error: &AnalyzeError) {
        tracing::error!(id, "analysis failed: {}", error);
        self.state.fail_request(error);
        self.with_metrics(|m| m.record_failure(error));
    }

    fn with_metrics(&self, f: impl FnOnce(&mut crate::metrics::MetricsSnapshot)) {
        if let Some(metrics) = &self.shared_metrics {
            if let Ok(mut snap) = metrics.lock() {
                f(&mut snap);
            }
        }
    }

    // ── Mouse handling ───────────────────────────────────────────

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_sentences_up(1),
            MouseEventKind::ScrollDown => self.state.scroll_sentences_down(1),
            MouseEventKind::Down(MouseButton::Left) => {
                if self.state.notification.is_some() {
                    self.state.dismiss_notification();
                    return;
                }
                if self.state.show_help {
                    self.state.show_help = false;
                    return;
                }

                let screen = layout::compute(self.last_area, &self.state);
                let (x, y) = (mouse.column, mouse.row);
                if screen.button_hit(x, y) {
                    self.state.focus = Focus::Button;
                    self.submit();
                } else if let Some(index) = screen.history_row_at(x, y, self.state.history.len())
                {
                    self.state.recall_history(index);
                } else if screen.input_hit(x, y) {
                    self.state.focus = Focus::Input;
                }
            }
            _ => {}
        }
    }

    fn handle_paste(&mut self, text: &str) {
        if self.state.notification.is_some() || self.state.show_help {
            return;
        }
        self.state.focus = Focus::Input;
        for c in text.chars() {
            match c {
                '\r' => {}
                '\n' => self.state.input.insert_newline(),
                c => self.state.input.insert_char(c),
            }
        }
    }

    // ── Keyboard handling ────────────────────────────────────────

    /// Handle a key event. Returns `true` if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Release/repeat events only arrive with keyboard enhancement on.
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C / Ctrl+Q quit from ANY mode
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
        {
            return true;
        }

        // Notification is modal
        if self.state.notification.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.state.dismiss_notification();
            }
            return false;
        }

        // Help overlay mode
        if self.state.show_help {
            return self.handle_key_help(key);
        }

        // Keys that work regardless of focus
        match key.code {
            KeyCode::F(1) => {
                self.state.show_help = true;
                return false;
            }
            KeyCode::F(5) => {
                self.submit();
                return false;
            }
            KeyCode::Tab => {
                self.state.focus = self.state.focus.next();
                return false;
            }
            KeyCode::BackTab => {
                self.state.focus = self.state.focus.prev();
                return false;
            }
            _ if is_submit_chord(&key) => {
                self.submit();
                return false;
            }
            _ => {}
        }

        match self.state.focus {
            Focus::Input => self.handle_key_input(key),
            Focus::Button => self.handle_key_button(key),
            Focus::History => self.handle_key_history(key),
            Focus::Results => self.handle_key_results(key),
        }
    }

    fn handle_key_help(&mut self, key: KeyEvent) -> bool {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            self.state.show_help = false;
        }
        false
    }

    fn handle_key_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input.clear();
            }
            KeyCode::Char(c)
                if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.input.insert_char(c);
            }
            KeyCode::Enter => self.state.input.insert_newline(),
            KeyCode::Backspace => self.state.input.backspace(),
            KeyCode::Delete => self.state.input.delete(),
            KeyCode::Left => self.state.input.move_left(),
            KeyCode::Right => self.state.input.move_right(),
            KeyCode::Home => self.state.input.move_home(),
            KeyCode::End => self.state.input.move_end(),
            KeyCode::Esc => self.state.focus = Focus::Button,
            _ => {}
        }
        false
    }

    /// Shortcuts shared by every non-input focus. Returns `Some(quit)` if handled.
    fn handle_key_common(&mut self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('q') => Some(true),
            KeyCode::Char('?') => {
                self.state.show_help = true;
                Some(false)
            }
            KeyCode::Char('T') => {
                self.state.cycle_theme();
                tracing::debug!(theme = %self.state.theme.name, "theme changed");
                Some(false)
            }
            KeyCode::Char('L') => {
                self.state.cycle_lang();
                tracing::debug!(lang = %self.state.current_lang, "language changed");
                Some(false)
            }
            KeyCode::Esc => {
                self.state.focus = Focus::Input;
                Some(false)
            }
            _ => None,
        }
    }

    fn handle_key_button(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.submit();
                false
            }
            _ => self.handle_key_common(key).unwrap_or(false),
        }
    }

    fn handle_key_history(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.history_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.history_down(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let index = self.state.history_selected;
                self.state.recall_history(index);
            }
            _ => return self.handle_key_common(key).unwrap_or(false),
        }
        false
    }

    fn handle_key_results(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_sentences_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_sentences_down(1),
            KeyCode::PageUp => self.state.scroll_sentences_up(PAGE_SIZE),
            KeyCode::PageDown => self.state.scroll_sentences_down(PAGE_SIZE),
            KeyCode::Home => self.state.sentence_scroll = 0,
            _ => return self.handle_key_common(key).unwrap_or(false),
        }
        false
    }
}

/// Ctrl+Enter (Cmd+Enter on macOS). Terminals without keyboard enhancement
/// report Ctrl+Enter as Ctrl+J.
fn is_submit_chord(key: &KeyEvent) -> bool {
    let modified = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    match key.code {
        KeyCode::Enter => modified,
        KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
