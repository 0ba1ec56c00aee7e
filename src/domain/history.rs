use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::review::{ReviewResult, ReviewType};

/// Most recent successful reviews kept in memory.
pub const HISTORY_LIMIT: usize = 10;

/// Lightweight record of a past successful review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Millisecond timestamp, strictly increasing within one history.
    pub id: i64,
    pub filename: String,
    pub review_type: ReviewType,
    pub created_at: DateTime<Utc>,
    pub summary: String,
    pub issue_count: usize,
}

/// Bounded, most-recent-first log of successful reviews.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewHistory {
    entries: VecDeque<HistoryEntry>,
}

impl ReviewHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends an entry derived from `result`, evicting the oldest past the limit.
    pub fn record(
        &mut self,
        filename: &str,
        review_type: ReviewType,
        result: &ReviewResult,
        created_at: DateTime<Utc>,
    ) -> &HistoryEntry {
        let mut id = created_at.timestamp_millis();
        if let Some(newest) = self.entries.front() {
            id = id.max(newest.id + 1);
        }

        self.entries.push_front(HistoryEntry {
            id,
            filename: filename.to_string(),
            review_type,
            created_at,
            summary: result.summary.clone(),
            issue_count: result.issue_count(),
        });
        self.entries.truncate(HISTORY_LIMIT);
        &self.entries[0]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
