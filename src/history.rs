//! Capped, most-recent-first list of past queries.
//!
//! Pure view state: nothing is deduplicated or persisted.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

use crate::analysis::{AnalysisResult, Sentiment};

/// One history row.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub text: String,
    pub sentiment_label: String,
    pub sentiment: Sentiment,
    pub recorded_at: DateTime<Local>,
}

#[derive(Debug)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    limit: usize,
}

impl History {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit + 1),
            limit,
        }
    }

    /// Insert at the head, evicting from the tail past the limit.
    pub fn record(&mut self, result: &AnalysisResult) {
        self.entries.push_front(HistoryEntry {
            text: result.text.clone(),
            sentiment_label: result.sentiment.clone(),
            sentiment: result.sentiment_class(),
            recorded_at: Local::now(),
        });
        while self.entries.len() > self.limit {
            if let Some(evicted) = self.entries.pop_back() {
                tracing::debug!(chars = evicted.text.chars().count(), "history entry evicted");
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
