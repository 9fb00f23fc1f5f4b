//! Append-only log of raw input lines.
//!
//! Deliberately separate from the versioned model: this is replay-for-audit,
//! the snapshot history is replay-for-undo. Not persisted, not versioned.

#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successfully parsed raw line, verbatim.
    pub fn add(&mut self, raw: &str) {
        self.entries.push(raw.to_string());
    }

    /// Entries in submission order, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
