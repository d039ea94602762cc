//! Exercise library browser.

use crate::model::library::{self, LibraryEntry};
use crate::model::LibraryFilter;

/// Library overlay state: a filter chip row and a cursor into the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LibraryPicker {
    /// Active filter.
    pub filter: LibraryFilter,
    /// Cursor into `entries()`.
    pub cursor: usize,
}

impl LibraryPicker {
    /// Entries visible under the current filter.
    pub fn entries(&self) -> Vec<LibraryEntry> {
        library::for_filter(self.filter)
    }

    /// Entry under the cursor.
    pub fn selected(&self) -> Option<LibraryEntry> {
        self.entries().get(self.cursor).copied()
    }

    /// Next filter chip; the cursor goes back to the top.
    pub fn next_filter(&mut self) {
        self.filter = self.filter.next();
        self.cursor = 0;
    }

    /// Previous filter chip; the cursor goes back to the top.
    pub fn prev_filter(&mut self) {
        self.filter = self.filter.prev();
        self.cursor = 0;
    }

    /// Move the cursor down, stopping at the last entry.
    pub fn down(&mut self) {
        let len = self.entries().len();
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    /// Move the cursor up, stopping at the first entry.
    pub fn up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}
