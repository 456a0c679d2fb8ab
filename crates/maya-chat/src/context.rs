//! Bounded conversational memory.
//!
//! Keeps the most recent exchanges in arrival order and evicts the oldest once
//! the configured capacity is exceeded.

use std::collections::VecDeque;

use chrono::Utc;
use maya_core::ContextEntry;

// =============================================================================
// ContextTracker
// =============================================================================

#[derive(Debug, Clone)]
pub struct ContextTracker {
    capacity: usize,
    entries: VecDeque<ContextEntry>,
}

impl ContextTracker {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append a completed exchange stamped with the current time.
    pub fn record(&mut self, user_text: &str, bot_text: &str, turn_index: u64) {
        self.push(ContextEntry {
            user_text: user_text.to_string(),
            bot_text: bot_text.to_string(),
            timestamp: Utc::now(),
            turn_index,
        });
    }

    fn push(&mut self, entry: ContextEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// The bot side of the most recent exchange.
    pub fn last_bot_text(&self) -> Option<&str> {
        self.entries.back().map(|e| e.bot_text.as_str())
    }

    /// Up to `n` most recent entries, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &ContextEntry> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContextEntry> {
        self.entries.iter()
    }

    /// Ordered copy of the log, oldest first.
    pub fn export(&self) -> Vec<ContextEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Replace the log. Only the newest `capacity` entries are kept.
    pub fn import(&mut self, entries: Vec<ContextEntry>) {
        self.entries.clear();
        for entry in entries {
            self.push(entry);
        }
    }

    /// Highest turn index in the log.
    pub fn last_turn_index(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.turn_index).max()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ContextTracker {
    fn default() -> Self {
        Self::new(5)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: u64) -> ContextEntry {
        ContextEntry {
            user_text: format!("user {}", i),
            bot_text: format!("bot {}", i),
            timestamp: Utc::now(),
            turn_index: i,
        }
    }

    // ---- Recording ----

    #[test]
    fn test_new_tracker_is_empty() {
        let tracker = ContextTracker::new(5);
        assert!(tracker.is_empty());
        assert!(tracker.last_bot_text().is_none());
        assert!(tracker.last_turn_index().is_none());
    }

    #[test]
    fn test_record_appends() {
        let mut tracker = ContextTracker::new(5);
        tracker.record("Saya lapar", "Jom makan!", 2);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.last_bot_text(), Some("Jom makan!"));
        assert_eq!(tracker.last_turn_index(), Some(2));
    }

    #[test]
    fn test_fifo_eviction() {
        let mut tracker = ContextTracker::new(3);
        for i in 1..=5 {
            tracker.record(&format!("user {}", i), &format!("bot {}", i), i);
        }
        assert_eq!(tracker.len(), 3);
        let turns: Vec<u64> = tracker.iter().map(|e| e.turn_index).collect();
        assert_eq!(turns, vec![3, 4, 5]);
        assert_eq!(tracker.last_bot_text(), Some("bot 5"));
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut tracker = ContextTracker::default();
        for i in 0..100 {
            tracker.record("u", "b", i);
            assert!(tracker.len() <= 5);
        }
    }

    #[test]
    fn test_zero_capacity_raised_to_one() {
        let mut tracker = ContextTracker::new(0);
        assert_eq!(tracker.capacity(), 1);
        tracker.record("a", "b", 1);
        tracker.record("c", "d", 2);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.last_bot_text(), Some("d"));
    }

    // ---- Queries ----

    #[test]
    fn test_recent_returns_newest_oldest_first() {
        let mut tracker = ContextTracker::new(5);
        for i in 1..=4 {
            tracker.record("u", &format!("bot {}", i), i);
        }
        let recent: Vec<&str> = tracker.recent(2).map(|e| e.bot_text.as_str()).collect();
        assert_eq!(recent, vec!["bot 3", "bot 4"]);
        assert_eq!(tracker.recent(10).count(), 4);
    }

    // ---- Export / import ----

    #[test]
    fn test_export_import_roundtrip() {
        let mut tracker = ContextTracker::new(5);
        tracker.record("a", "b", 1);
        tracker.record("c", "d", 2);
        let exported = tracker.export();

        let mut restored = ContextTracker::new(5);
        restored.import(exported.clone());
        assert_eq!(restored.export(), exported);
    }

    #[test]
    fn test_import_keeps_newest_within_capacity() {
        let mut tracker = ContextTracker::new(2);
        tracker.import((1..=4).map(entry).collect());
        let turns: Vec<u64> = tracker.iter().map(|e| e.turn_index).collect();
        assert_eq!(turns, vec![3, 4]);
    }

    #[test]
    fn test_import_replaces_existing() {
        let mut tracker = ContextTracker::new(5);
        tracker.record("old", "old", 9);
        tracker.import(vec![entry(1)]);
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.last_bot_text(), Some("bot 1"));
    }
}
