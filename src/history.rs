//! Undo/redo history of text snapshots
//!
//! A linear, branch-discarding model: recording while the cursor sits
//! before the tail throws away the entries after it. Exhausted undo/redo
//! is a silent no-op observable only through the returned `None`.

/// Ordered snapshot log with a cursor
///
/// The cursor is `None` when the store is empty ("no history"), otherwise
/// an index into the entries.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a snapshot at the cursor
    ///
    /// Entries after the cursor are discarded; the redo branch is lost.
    pub fn record(&mut self, snapshot: impl Into<String>) {
        match self.cursor {
            Some(index) => self.entries.truncate(index + 1),
            None => self.entries.clear(),
        }
        self.entries.push(snapshot.into());
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step the cursor back and return the entry now under it
    pub fn undo(&mut self) -> Option<&str> {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                self.entries.get(index - 1).map(String::as_str)
            }
            _ => None,
        }
    }

    /// Step the cursor forward and return the entry now under it
    pub fn redo(&mut self) -> Option<&str> {
        match self.cursor {
            Some(index) if index + 1 < self.entries.len() => {
                self.cursor = Some(index + 1);
                self.entries.get(index + 1).map(String::as_str)
            }
            _ => None,
        }
    }

    /// The entry under the cursor, if any
    pub fn current(&self) -> Option<&str> {
        self.cursor
            .and_then(|index| self.entries.get(index))
            .map(String::as_str)
    }

    /// Drop all entries and reset the cursor
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
