//! In-memory record of successful evaluations
//!
//! Bounded so a long session cannot grow it without limit. Nothing here is
//! written to disk; `to_json` exists for transcripts only.

use crate::core::Number;
use serde::Serialize;
use std::collections::VecDeque;

/// One successful `=` press
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// The buffer text that was evaluated
    pub expression: String,
    /// Value that replaced the buffer
    pub result: Number,
    /// When the evaluation happened (Unix epoch millis)
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Entry for an expression evaluated just now
    #[must_use]
    pub fn new(expression: String, result: Number) -> Self {
        Self {
            expression,
            result,
            timestamp: Self::current_timestamp(),
        }
    }

    /// Entry with a caller-chosen stamp, for replayed sessions and tests
    #[must_use]
    pub fn with_timestamp(expression: String, result: Number, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// `expression = result`, as shown in the session export
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded evaluation history, oldest first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Bound used by `History::new`
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// History keeping the last `DEFAULT_MAX_ENTRIES` evaluations
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// History keeping at most `max_entries` evaluations; zero records nothing
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest when full
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a successful `=` on `expression`
    pub fn record(&mut self, expression: &str, result: Number) {
        self.push(HistoryEntry::new(expression.to_string(), result));
    }

    /// Evaluations currently retained
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No evaluation has been retained yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retention bound set at construction
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Forgets past evaluations
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Retained evaluations in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Latest evaluation still retained
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Entries as a JSON array for `press --json` transcripts
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// One `expression = result` line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Number {
        Number::Integer(n)
    }

    #[test]
    fn test_history_entry_new() {
        let entry = HistoryEntry::new("2+2".into(), int(4));
        assert_eq!(entry.expression, "2+2");
        assert_eq!(entry.result, int(4));
        assert!(entry.timestamp > 0);
    }

    #[test]
    fn test_history_entry_display() {
        let entry = HistoryEntry::with_timestamp("7.5*2".into(), Number::Float(15.0), 1);
        assert_eq!(entry.display(), "7.5*2 = 15.0");
    }

    #[test]
    fn test_history_entry_serialize() {
        let entry = HistoryEntry::with_timestamp("12+7".into(), int(19), 1000);
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(
            json,
            r#"{"expression":"12+7","result":19,"timestamp":1000}"#
        );
    }

    #[test]
    fn test_history_new() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.max_entries(), History::DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_history_record() {
        let mut history = History::new();
        history.record("3+4", int(7));
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().expression, "3+4");
    }

    #[test]
    fn test_history_max_entries_enforcement() {
        let mut history = History::with_capacity(3);
        for n in 1..=4 {
            history.record(&n.to_string(), int(n));
        }
        let results: Vec<Number> = history.iter().map(|e| e.result).collect();
        assert_eq!(results, vec![int(2), int(3), int(4)]);
    }

    #[test]
    fn test_history_last_after_eviction() {
        let mut history = History::with_capacity(2);
        for expr in ["1+1", "2*3", "9/3"] {
            history.record(expr, int(0));
        }
        assert_eq!(history.max_entries(), 2);
        assert_eq!(history.last().unwrap().expression, "9/3");
        let kept: Vec<&str> = history.iter().map(|e| e.expression.as_str()).collect();
        assert_eq!(kept, ["2*3", "9/3"]);
    }

    #[test]
    fn test_history_zero_capacity_keeps_nothing() {
        let mut history = History::with_capacity(0);
        history.record("1", int(1));
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_clear() {
        let mut history = History::new();
        history.record("1", int(1));
        history.clear();
        assert!(history.is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn test_history_to_json() {
        let mut history = History::new();
        history.push(HistoryEntry::with_timestamp("1+1".into(), int(2), 1000));
        history.push(HistoryEntry::with_timestamp("1/2".into(), Number::Float(0.5), 2000));
        let json = history.to_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"result\":2,"));
        assert!(json.contains("\"result\":0.5,"));
    }

    #[test]
    fn test_history_export_formatted() {
        let mut history = History::new();
        history.push(HistoryEntry::with_timestamp("1+1".into(), int(2), 1000));
        history.push(HistoryEntry::with_timestamp("6/2".into(), Number::Float(3.0), 2000));
        assert_eq!(history.export_formatted(), "1+1 = 2\n6/2 = 3.0");
        assert_eq!(History::new().export_formatted(), "");
    }
}
