use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::constants::EMOTION_NAME_WIDTH;
use crate::utils::truncate_chars;

use super::theme::Theme;

/// One emotion row: name, horizontal bar filled to `fill_percent`, label.
///
/// The bar color follows the final `percent`, so a bar keeps its color while
/// it is still growing.
pub struct EmotionBar<'a> {
    pub name: &'a str,
    pub percent: f64,
    pub fill_percent: f64,
    pub label: &'a str,
    pub theme: &'a Theme,
}

impl<'a> EmotionBar<'a> {
    pub fn new(name: &'a str, percent: f64, label: &'a str, theme: &'a Theme) -> Self {
        Self {
            name,
            percent,
            fill_percent: percent.clamp(0.0, 100.0),
            label,
            theme,
        }
    }

    /// Current animated width, 0-100.
    pub fn fill(mut self, fill_percent: f64) -> Self {
        self.fill_percent = fill_percent.clamp(0.0, 100.0);
        self
    }
}

impl Widget for EmotionBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 1 {
            return;
        }

        let name_width = EMOTION_NAME_WIDTH as u16 + 1;
        let value_width = 8;
        let bar_width = area.width.saturating_sub(name_width + value_width);

        // Name
        let name = if self.name.chars().count() > EMOTION_NAME_WIDTH {
            truncate_chars(self.name, EMOTION_NAME_WIDTH - 3)
        } else {
            self.name.to_string()
        };
        buf.set_stringn(
            area.x,
            area.y,
            &name,
            (name_width as usize).min(area.width as usize),
            Style::default().fg(self.theme.text_primary),
        );

        if bar_width < 2 {
            return;
        }

        // Bar
        let bar_x = area.x + name_width;
        let exact = (self.fill_percent / 100.0) * bar_width as f64;
        let filled = exact as u16;
        let color = self.theme.bar_color(self.percent);

        for i in 0..bar_width {
            let (ch, style) = if i < filled {
                ('█', Style::default().fg(color))
            } else if i == filled && exact - filled as f64 > 0.5 {
                ('▌', Style::default().fg(color))
            } else {
                ('░', Style::default().fg(self.theme.bar_bg))
            };
            buf.set_string(bar_x + i, area.y, ch.to_string(), style);
        }

        // Label
        let value = format!("{:>7}", self.label);
        buf.set_string(
            bar_x + bar_width + 1,
            area.y,
            &value,
            Style::default().fg(color),
        );
    }
}
