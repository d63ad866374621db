use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::analysis::Sentiment;
use crate::constants::*;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["default", "gruvbox", "nord", "dracula"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from TOML files.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Brand / Primary ──────────────────────────────────────
    pub accent: Color,
    pub accent_secondary: Color,
    pub bg_dark: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Sentiment ────────────────────────────────────────────
    pub positive: Color,
    pub negative: Color,
    pub neutral: Color,

    // ── Notifications ────────────────────────────────────────
    pub warning: Color,
    pub danger: Color,

    // ── Emotion bars ─────────────────────────────────────────
    pub bar_soft: Color,
    pub bar_medium: Color,
    pub bar_strong: Color,
    pub bar_bg: Color,

    // ── Borders / selection ──────────────────────────────────
    pub border: Color,
    pub selected_bg: Color,

    // ── Busy indicator ───────────────────────────────────────
    pub busy_accent: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Default dark theme.
    pub fn default_dark() -> Self {
        Self {
            name: "default".to_string(),
            accent: Color::Rgb(99, 179, 237),
            accent_secondary: Color::Rgb(129, 230, 217),
            bg_dark: Color::Rgb(22, 22, 30),
            text_primary: Color::Rgb(220, 220, 235),
            text_dim: Color::Rgb(120, 120, 145),
            text_muted: Color::Rgb(80, 80, 100),
            positive: Color::Rgb(72, 199, 142),
            negative: Color::Rgb(255, 85, 85),
            neutral: Color::Rgb(160, 160, 180),
            warning: Color::Rgb(255, 193, 69),
            danger: Color::Rgb(255, 85, 85),
            bar_soft: Color::Rgb(129, 230, 217),
            bar_medium: Color::Rgb(99, 179, 237),
            bar_strong: Color::Rgb(217, 143, 255),
            bar_bg: Color::Rgb(45, 45, 58),
            border: Color::Rgb(55, 55, 75),
            selected_bg: Color::Rgb(40, 40, 60),
            busy_accent: Color::Rgb(217, 143, 255),
        }
    }

    /// Gruvbox dark palette.
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            accent: Color::Rgb(215, 153, 33),            // yellow
            accent_secondary: Color::Rgb(142, 192, 124), // green
            bg_dark: Color::Rgb(40, 40, 40),             // bg0
            text_primary: Color::Rgb(235, 219, 178),     // fg
            text_dim: Color::Rgb(168, 153, 132),         // fg4
            text_muted: Color::Rgb(102, 92, 84),         // bg4
            positive: Color::Rgb(184, 187, 38),          // green bright
            negative: Color::Rgb(251, 73, 52),           // red
            neutral: Color::Rgb(189, 174, 147),          // fg3
            warning: Color::Rgb(250, 189, 47),
            danger: Color::Rgb(251, 73, 52),
            bar_soft: Color::Rgb(131, 165, 152),   // blue
            bar_medium: Color::Rgb(254, 128, 25),  // orange
            bar_strong: Color::Rgb(211, 134, 155), // purple
            bar_bg: Color::Rgb(60, 56, 54),
            border: Color::Rgb(80, 73, 69),
            selected_bg: Color::Rgb(60, 56, 54),
            busy_accent: Color::Rgb(211, 134, 155),
        }
    }

    /// Nord palette.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            accent: Color::Rgb(136, 192, 208),           // nord8 frost
            accent_secondary: Color::Rgb(143, 188, 187), // nord7
            bg_dark: Color::Rgb(46, 52, 64),             // nord0
            text_primary: Color::Rgb(229, 233, 240),     // nord5
            text_dim: Color::Rgb(182, 191, 204),
            text_muted: Color::Rgb(107, 112, 127),
            positive: Color::Rgb(163, 190, 140), // nord14
            negative: Color::Rgb(191, 97, 106),  // nord11
            neutral: Color::Rgb(216, 222, 233),  // nord4
            warning: Color::Rgb(235, 203, 139),  // nord13
            danger: Color::Rgb(191, 97, 106),
            bar_soft: Color::Rgb(143, 188, 187),
            bar_medium: Color::Rgb(129, 161, 193), // nord9
            bar_strong: Color::Rgb(180, 142, 173), // nord15
            bar_bg: Color::Rgb(67, 76, 94),        // nord2
            border: Color::Rgb(76, 86, 106),       // nord3
            selected_bg: Color::Rgb(67, 76, 94),
            busy_accent: Color::Rgb(180, 142, 173),
        }
    }

    /// Dracula palette.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            accent: Color::Rgb(139, 233, 253),          // cyan
            accent_secondary: Color::Rgb(80, 250, 123), // green
            bg_dark: Color::Rgb(40, 42, 54),            // background
            text_primary: Color::Rgb(248, 248, 242),    // foreground
            text_dim: Color::Rgb(188, 188, 172),
            text_muted: Color::Rgb(98, 114, 164), // comment
            positive: Color::Rgb(80, 250, 123),
            negative: Color::Rgb(255, 85, 85),
            neutral: Color::Rgb(188, 188, 172),
            warning: Color::Rgb(241, 250, 140),
            danger: Color::Rgb(255, 85, 85),
            bar_soft: Color::Rgb(139, 233, 253),
            bar_medium: Color::Rgb(255, 184, 108),  // orange
            bar_strong: Color::Rgb(255, 121, 198),  // pink
            bar_bg: Color::Rgb(68, 71, 90),         // selection
            border: Color::Rgb(98, 114, 164),
            selected_bg: Color::Rgb(68, 71, 90),
            busy_accent: Color::Rgb(189, 147, 249), // purple
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_dark()),
            "gruvbox" => Some(Self::gruvbox()),
            "nord" => Some(Self::nord()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Cycle to the next built-in theme. Custom themes cycle back to the first.
    pub fn next_builtin(&self) -> Self {
        let next_idx = BUILTIN_THEME_NAMES
            .iter()
            .position(|&n| n == self.name)
            .map(|idx| (idx + 1) % BUILTIN_THEME_NAMES.len())
            .unwrap_or(0);
        Self::by_name(BUILTIN_THEME_NAMES[next_idx]).unwrap_or_default()
    }

    /// Load a custom theme from a TOML file, falling back to default for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        Some(
            file.into_theme(
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("custom"),
            ),
        )
    }

    /// Resolve a theme name: built-in first, then `~/.config/sentiscope/themes/<name>.toml`.
    pub fn resolve(name: &str) -> Self {
        Self::by_name(name)
            .or_else(|| Self::from_toml_file(&custom_theme_path(name)))
            .unwrap_or_else(|| {
                tracing::warn!(theme = name, "unknown theme, using default");
                Self::default()
            })
    }

    // ── Computed Styles ──────────────────────────────────────

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn section_title_style(&self) -> Style {
        Style::default()
            .fg(self.accent_secondary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn sentiment_color(&self, sentiment: Sentiment) -> Color {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }

    /// Filled badge for a sentiment label.
    pub fn sentiment_badge_style(&self, sentiment: Sentiment) -> Style {
        Style::default()
            .fg(self.bg_dark)
            .bg(self.sentiment_color(sentiment))
            .add_modifier(Modifier::BOLD)
    }

    /// Color for an emotion bar at `percent`.
    pub fn bar_color(&self, percent: f64) -> Color {
        if percent >= BAR_STRONG_PCT {
            self.bar_strong
        } else if percent >= BAR_MEDIUM_PCT {
            self.bar_medium
        } else {
            self.bar_soft
        }
    }

    pub fn row_selected(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_highlight_style(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional — missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    accent: Option<String>,
    accent_secondary: Option<String>,
    bg_dark: Option<String>,
    text_primary: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    positive: Option<String>,
    negative: Option<String>,
    neutral: Option<String>,
    warning: Option<String>,
    danger: Option<String>,
    bar_soft: Option<String>,
    bar_medium: Option<String>,
    bar_strong: Option<String>,
    bar_bg: Option<String>,
    border: Option<String>,
    selected_bg: Option<String>,
    busy_accent: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::default_dark();
        let pick = |value: &Option<String>, fallback: Color| parse_color(value).unwrap_or(fallback);
        Theme {
            name: name.to_string(),
            accent: pick(&self.accent, base.accent),
            accent_secondary: pick(&self.accent_secondary, base.accent_secondary),
            bg_dark: pick(&self.bg_dark, base.bg_dark),
            text_primary: pick(&self.text_primary, base.text_primary),
            text_dim: pick(&self.text_dim, base.text_dim),
            text_muted: pick(&self.text_muted, base.text_muted),
            positive: pick(&self.positive, base.positive),
            negative: pick(&self.negative, base.negative),
            neutral: pick(&self.neutral, base.neutral),
            warning: pick(&self.warning, base.warning),
            danger: pick(&self.danger, base.danger),
            bar_soft: pick(&self.bar_soft, base.bar_soft),
            bar_medium: pick(&self.bar_medium, base.bar_medium),
            bar_strong: pick(&self.bar_strong, base.bar_strong),
            bar_bg: pick(&self.bar_bg, base.bar_bg),
            border: pick(&self.border, base.border),
            selected_bg: pick(&self.selected_bg, base.selected_bg),
            busy_accent: pick(&self.busy_accent, base.busy_accent),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // ── parse_color ───────────────────────────────────────────────

    #[test]
    fn parse_color_with_and_without_hash() {
        assert_eq!(parse_color(&Some("#FF8800".into())), Some(Color::Rgb(255, 136, 0)));
        assert_eq!(parse_color(&Some("00ff00".into())), Some(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn parse_color_rejects_bad_input() {
        assert_eq!(parse_color(&None), None);
        assert_eq!(parse_color(&Some("#FFF".into())), None);
        assert_eq!(parse_color(&Some("#GGGGGG".into())), None);
        assert_eq!(parse_color(&Some("ééé".into())), None);
    }

    // ── lookup / cycling ──────────────────────────────────────────

    #[test]
    fn by_name_all_builtins() {
        for name in BUILTIN_THEME_NAMES {
            let theme = Theme::by_name(name).unwrap();
            assert_eq!(theme.name, *name);
        }
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("nope").is_none());
    }

    #[test]
    fn next_builtin_cycles_and_wraps() {
        let mut theme = Theme::default_dark();
        for expected in ["gruvbox", "nord", "dracula", "default"] {
            theme = theme.next_builtin();
            assert_eq!(theme.name, expected);
        }
    }

    #[test]
    fn custom_theme_cycles_to_first_builtin() {
        let mut custom = Theme::default_dark();
        custom.name = "mine".to_string();
        assert_eq!(custom.next_builtin().name, "default");
    }

    #[test]
    fn from_toml_file_overrides_only_given_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sunset.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "positive = \"#00FF00\"\nnegative = \"#FF0000\"").unwrap();

        let theme = Theme::from_toml_file(&path).unwrap();
        assert_eq!(theme.name, "sunset");
        assert_eq!(theme.positive, Color::Rgb(0, 255, 0));
        assert_eq!(theme.negative, Color::Rgb(255, 0, 0));
        assert_eq!(theme.accent, Theme::default_dark().accent);
    }

    // ── sentiment styles ──────────────────────────────────────────

    #[test]
    fn sentiment_colors_are_distinct() {
        let t = Theme::default_dark();
        assert_ne!(t.sentiment_color(Sentiment::Positive), t.sentiment_color(Sentiment::Negative));
        assert_ne!(t.sentiment_color(Sentiment::Positive), t.sentiment_color(Sentiment::Neutral));
        assert_eq!(
            t.sentiment_badge_style(Sentiment::Neutral).bg,
            Some(t.neutral)
        );
    }

    #[test]
    fn bar_color_thresholds() {
        let t = Theme::default_dark();
        assert_eq!(t.bar_color(10.0), t.bar_soft);
        assert_eq!(t.bar_color(30.0), t.bar_medium);
        assert_eq!(t.bar_color(75.0), t.bar_strong);
    }
}
