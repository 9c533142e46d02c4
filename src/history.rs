//! In-memory search history.
//!
//! Nothing here is persisted: the history exists to drive the frequent-routes
//! view and dies with the process.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::HISTORY_LIMIT;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRecord {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub search_count: u32,
    pub last_searched: DateTime<Utc>,
}

#[derive(Default)]
pub struct HistoryState {
    entries: Vec<SearchRecord>,
}

impl HistoryState {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record one search for a route. Repeat searches bump the count instead
    /// of inserting a duplicate; at capacity the least-searched route is
    /// evicted.
    pub fn record(&mut self, origin: &str, destination: &str) {
        if origin.is_empty() || destination.is_empty() {
            return;
        }

        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.origin == origin && e.destination == destination)
        {
            entry.search_count += 1;
            entry.last_searched = Utc::now();
            return;
        }

        if self.entries.len() >= HISTORY_LIMIT {
            if let Some(pos) = self
                .entries
                .iter()
                .enumerate()
                .min_by_key(|(_, e)| e.search_count)
                .map(|(i, _)| i)
            {
                self.entries.remove(pos);
            }
        }

        self.entries.push(SearchRecord {
            id: Uuid::new_v4().to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            search_count: 1,
            last_searched: Utc::now(),
        });
    }

    /// Entries sorted most-searched first.
    pub fn entries(&self) -> Vec<SearchRecord> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.search_count.cmp(&a.search_count));
        sorted
    }
}
