//! Script name filtering for the selection prompt.
//!
//! Matching is a pure function over the catalog; the debounce pause that
//! coalesces keystrokes is layered on top so tests (and one-shot queries)
//! can bypass it entirely.

use crate::manifest::ScriptEntry;
use std::time::Duration;

/// Pause before recomputing filtered results, matching the original tool's
/// autocomplete behaviour.
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(330);

/// Return the entries whose name contains `query`, case-insensitively,
/// preserving catalog order. An empty query matches everything.
#[must_use]
pub fn filter_scripts<'a>(entries: &'a [ScriptEntry], query: &str) -> Vec<&'a ScriptEntry> {
    let query = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&query))
        .collect()
}

/// A substring filter with a configurable debounce pause.
pub struct DebouncedFilter {
    delay: Duration,
}

impl DebouncedFilter {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A filter with no pause, for tests and one-shot queries.
    #[must_use]
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Wait out the debounce interval, then filter.
    #[must_use]
    pub fn filter<'a>(&self, entries: &'a [ScriptEntry], query: &str) -> Vec<&'a ScriptEntry> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        filter_scripts(entries, query)
    }
}

impl Default for DebouncedFilter {
    fn default() -> Self {
        Self::new(DEBOUNCE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(names: &[&str]) -> Vec<ScriptEntry> {
        names
            .iter()
            .map(|name| ScriptEntry {
                name: (*name).to_string(),
                command: format!("echo {}", name),
            })
            .collect()
    }

    fn names<'a>(filtered: &[&'a ScriptEntry]) -> Vec<&'a str> {
        filtered.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_filter_substring_match() {
        let entries = entries(&["alpha", "beta", "gamma"]);
        let filtered = filter_scripts(&entries, "a");
        assert_eq!(names(&filtered), vec!["alpha", "beta", "gamma"]);

        let filtered = filter_scripts(&entries, "am");
        assert_eq!(names(&filtered), vec!["gamma"]);
    }

    #[test]
    fn test_filter_excludes_non_matches() {
        let entries = entries(&["alpha", "beta", "gamma"]);
        let filtered = filter_scripts(&entries, "alp");
        assert_eq!(names(&filtered), vec!["alpha"]);
    }

    #[test]
    fn test_filter_case_insensitive() {
        let entries = entries(&["Build", "test", "DEPLOY"]);
        let filtered = filter_scripts(&entries, "build");
        assert_eq!(names(&filtered), vec!["Build"]);

        let filtered = filter_scripts(&entries, "dep");
        assert_eq!(names(&filtered), vec!["DEPLOY"]);
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        let entries = entries(&["alpha", "beta"]);
        let filtered = filter_scripts(&entries, "");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_no_matches() {
        let entries = entries(&["alpha", "beta"]);
        let filtered = filter_scripts(&entries, "zzz");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_debounced_filter_immediate() {
        let entries = entries(&["alpha", "beta", "gamma"]);
        let filter = DebouncedFilter::immediate();
        let filtered = filter.filter(&entries, "a");
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_debounced_filter_waits() {
        let entries = entries(&["alpha"]);
        let filter = DebouncedFilter::new(Duration::from_millis(10));

        let start = std::time::Instant::now();
        let filtered = filter.filter(&entries, "al");
        assert!(start.elapsed() >= Duration::from_millis(10));
        assert_eq!(filtered.len(), 1);
    }
}
