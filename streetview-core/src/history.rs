//! Ordered record of revealed locations.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A revealed location as it was shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub real_name: String,
    pub fantasy_name: String,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(
        url: impl Into<String>,
        real_name: impl Into<String>,
        fantasy_name: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            real_name: real_name.into(),
            fantasy_name: fantasy_name.into(),
        }
    }

    /// `"{fantasy} ({real})"`, or just the fantasy name when the real one is empty.
    #[must_use]
    pub fn display_label(&self) -> String {
        if self.real_name.is_empty() {
            self.fantasy_name.clone()
        } else {
            format!("{} ({})", self.fantasy_name, self.real_name)
        }
    }
}

/// Newest-first list of history entries. Entries are never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry as the most recent one. Duplicates are accepted.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
    }

    /// Entries, most recent first.
    #[must_use]
    pub fn all(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Every URL already recorded.
    #[must_use]
    pub fn urls(&self) -> HashSet<&str> {
        self.entries.iter().map(|entry| entry.url.as_str()).collect()
    }

    #[must_use]
    pub fn contains_url(&self, url: &str) -> bool {
        self.entries.iter().any(|entry| entry.url == url)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_prepends_newest_first() {
        let mut history = History::new();
        history.append(HistoryEntry::new("a", "A", "Alpha"));
        history.append(HistoryEntry::new("b", "B", "Beta"));
        let urls: Vec<&str> = history.all().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["b", "a"]);
        assert_eq!(history.get(1).map(|e| e.real_name.as_str()), Some("A"));
        assert!(history.get(2).is_none());
    }

    #[test]
    fn duplicates_are_kept() {
        let mut history = History::new();
        history.append(HistoryEntry::new("a", "A", "Alpha"));
        history.append(HistoryEntry::new("a", "A", "Alpha"));
        assert_eq!(history.len(), 2);
        assert_eq!(history.urls().len(), 1);
        assert!(history.contains_url("a"));
        assert!(!history.contains_url("A"));
    }

    #[test]
    fn display_label_omits_empty_real_name() {
        assert_eq!(
            HistoryEntry::new("u", "Lima", "Gran Valle ✨").display_label(),
            "Gran Valle ✨ (Lima)"
        );
        assert_eq!(
            HistoryEntry::new("u", "", "Gran Valle ✨").display_label(),
            "Gran Valle ✨"
        );
    }

    #[test]
    fn history_serializes_as_entry_list() {
        let mut history = History::new();
        history.append(HistoryEntry::new("a", "A", "Alpha"));
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"fantasy_name\":\"Alpha\""));
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
