//! Screen model of one analysis result.
//!
//! Built fresh on every successful response, so a new result fully replaces
//! the previous emotion and sentence rows.

use std::time::Instant;

use crate::analysis::{AnalysisResult, Sentiment};
use crate::constants::PREVIEW_MAX_CHARS;
use crate::utils::{format_percent, single_line, truncate_chars};

use super::animation::{BarFill, CountAnimation};

#[derive(Debug, Clone)]
pub struct EmotionRow {
    pub name: String,
    pub percent: f64,
    pub label: String,
    pub bar: BarFill,
}

#[derive(Debug, Clone)]
pub struct SentenceRow {
    pub text: String,
    pub sentiment_label: String,
    pub sentiment: Sentiment,
    pub emotion_summary: String,
}

#[derive(Debug, Clone)]
pub struct ResultView {
    pub sentiment_label: String,
    pub sentiment: Sentiment,
    /// Input text cut to the preview length.
    pub preview: String,
    pub polarity: CountAnimation,
    pub subjectivity: CountAnimation,
    /// Sorted by percentage, highest first.
    pub emotions: Vec<EmotionRow>,
    pub sentences: Vec<SentenceRow>,
}

impl ResultView {
    pub fn build(result: &AnalysisResult, now: Instant) -> Self {
        let emotions = result
            .emotions
            .ranked()
            .into_iter()
            .enumerate()
            .map(|(index, (name, percent))| EmotionRow {
                name: name.to_string(),
                percent,
                label: format_percent(percent),
                bar: BarFill::staggered(percent, index, now),
            })
            .collect();

        let sentences = result
            .sentence_breakdown
            .iter()
            .map(|s| SentenceRow {
                text: single_line(&s.text),
                sentiment_label: s.sentiment.clone(),
                sentiment: s.sentiment_class(),
                emotion_summary: s.emotions.summary(),
            })
            .collect();

        Self {
            sentiment_label: result.sentiment.clone(),
            sentiment: result.sentiment_class(),
            preview: preview_text(&result.text),
            polarity: CountAnimation::from_zero(result.polarity, now),
            subjectivity: CountAnimation::from_zero(result.subjectivity_or_zero(), now),
            emotions,
            sentences,
        }
    }

    pub fn advance(&mut self, now: Instant) {
        self.polarity.advance(now);
        self.subjectivity.advance(now);
    }

    pub fn show_emotions(&self) -> bool {
        !self.emotions.is_empty()
    }

    pub fn show_sentences(&self) -> bool {
        !self.sentences.is_empty()
    }

    /// `label` followed by the quoted preview, wrapped to `width` columns.
    pub fn preview_lines(&self, label: &str, width: u16) -> Vec<String> {
        let line = format!("{}\"{}\"", label, self.preview);
        textwrap::wrap(&line, (width as usize).max(1))
            .into_iter()
            .map(|part| part.into_owned())
            .collect()
    }

    /// Whether anything still moves at `now` (drives redraw pacing).
    pub fn is_animating(&self, now: Instant) -> bool {
        !self.polarity.is_finished()
            || !self.subjectivity.is_finished()
            || self.emotions.iter().any(|row| !row.bar.is_settled(now))
    }
}

/// First `PREVIEW_MAX_CHARS` characters, with "..." when cut, on one line.
pub fn preview_text(text: &str) -> String {
    single_line(&truncate_chars(text, PREVIEW_MAX_CHARS))
}
