//! Substring search over the row table
//!
//! The index is never maintained incrementally: every query change and every
//! change to the entry set recomputes the match list from scratch, so matches
//! always refer to valid rows of the current entries.

use crate::types::ConfigEntry;

/// Search query, matching rows and the current match cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    /// The query as typed (not trimmed; only the emptiness test trims)
    query: String,
    /// Ascending row indices whose key or value contains the query
    matches: Vec<usize>,
    /// Index into `matches` of the current match
    cursor: Option<usize>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query and recompute matches against `rows`
    pub fn set_query(&mut self, text: &str, rows: &[ConfigEntry]) {
        self.query = text.to_string();
        self.recompute(rows);
    }

    /// Recompute matches for the current query after the rows changed
    pub fn refresh(&mut self, rows: &[ConfigEntry]) {
        self.recompute(rows);
    }

    /// Drop the query and all matches
    pub fn clear(&mut self) {
        self.query.clear();
        self.matches.clear();
        self.cursor = None;
    }

    fn recompute(&mut self, rows: &[ConfigEntry]) {
        if self.query.trim().is_empty() {
            self.matches.clear();
            self.cursor = None;
            return;
        }

        let query = self.query.as_str();
        self.matches = rows
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.contains(query))
            .map(|(row, _)| row)
            .collect();
        self.cursor = if self.matches.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    /// Move to the next match (wraps around)
    pub fn next(&mut self) {
        if let Some(cursor) = self.cursor {
            self.cursor = Some((cursor + 1) % self.matches.len());
        }
    }

    /// Move to the previous match (wraps around)
    pub fn previous(&mut self) {
        if let Some(cursor) = self.cursor {
            let len = self.matches.len();
            self.cursor = Some((cursor + len - 1) % len);
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Row of the current match
    pub fn current_row(&self) -> Option<usize> {
        self.cursor.and_then(|c| self.matches.get(c).copied())
    }

    /// Whether `row` is any match
    pub fn is_match(&self, row: usize) -> bool {
        self.matches.binary_search(&row).is_ok()
    }

    /// `"{current}/{total}"` (1-based) or a zero-results indicator
    pub fn summary(&self) -> String {
        match self.cursor {
            Some(cursor) if !self.matches.is_empty() => {
                format!("{}/{}", cursor + 1, self.matches.len())
            }
            _ => "0 results".to_string(),
        }
    }
}
