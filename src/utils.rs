//! Shared utility functions used across modules.

use crate::constants::SPINNER_CHARS;

/// Keep the first `max_chars` characters of `s`, appending "..." when
/// anything was cut. Counts chars, never splits a UTF-8 sequence.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Format an emotion percentage the way the service sends it:
/// `40` for whole numbers, `33.3` otherwise.
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

/// Collapse newlines and runs of whitespace into single spaces for one-line rows.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Get the spinner character for the current tick.
pub fn spinner_char(tick: u64) -> &'static str {
    SPINNER_CHARS[(tick % SPINNER_CHARS.len() as u64) as usize]
}

/// Get animated loading dots for the current tick.
pub fn loading_dots(tick: u64) -> &'static str {
    match tick % 4 {
        0 => "",
        1 => ".",
        2 => "..",
        _ => "...",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── truncate_chars ────────────────────────────────────────────

    #[test]
    fn truncate_chars_short_string_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn truncate_chars_exact_length() {
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn truncate_chars_appends_ellipsis_after_limit() {
        assert_eq!(truncate_chars("hello world", 5), "hello...");
    }

    #[test]
    fn truncate_chars_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll...");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語...");
    }

    #[test]
    fn truncate_chars_zero() {
        assert_eq!(truncate_chars("abc", 0), "...");
        assert_eq!(truncate_chars("", 0), "");
    }

    // ── format_percent ────────────────────────────────────────────

    #[test]
    fn format_percent_whole_number_has_no_fraction() {
        assert_eq!(format_percent(40.0), "40%");
        assert_eq!(format_percent(100.0), "100%");
    }

    #[test]
    fn format_percent_keeps_one_decimal() {
        assert_eq!(format_percent(33.3), "33.3%");
    }

    // ── single_line ───────────────────────────────────────────────

    #[test]
    fn single_line_collapses_whitespace() {
        assert_eq!(single_line("a\n  b\tc "), "a b c");
    }

    // ── spinner_char ──────────────────────────────────────────────

    #[test]
    fn spinner_char_cycles() {
        assert_eq!(spinner_char(0), "◐");
        assert_eq!(spinner_char(1), "◓");
        assert_eq!(spinner_char(2), "◑");
        assert_eq!(spinner_char(3), "◒");
        assert_eq!(spinner_char(4), "◐");
    }

    // ── loading_dots ──────────────────────────────────────────────

    #[test]
    fn loading_dots_cycles() {
        assert_eq!(loading_dots(0), "");
        assert_eq!(loading_dots(3), "...");
        assert_eq!(loading_dots(4), "");
    }
}
