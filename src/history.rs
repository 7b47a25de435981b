// history.rs

use tracing::debug;

/// Formatted records of completed operations, oldest first.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn add(&mut self, entry: String) {
        debug!(entry = entry.as_str(), "history entry added");
        self.entries.push(entry);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Empties the history and returns how many entries were dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        debug!(removed, "history cleared");
        removed
    }
    pub fn all(&self) -> &[String] {
        &self.entries
    }
}
