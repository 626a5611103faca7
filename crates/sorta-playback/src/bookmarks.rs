//! Saved cursor positions within one log.

use std::collections::BTreeSet;

use crate::cursor::Cursor;

/// Step indices the user has flagged, kept in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks(BTreeSet<usize>);

impl Bookmarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `index` if absent, remove it if present. Returns whether it is now set.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.0.remove(&index) {
            false
        } else {
            self.0.insert(index);
            true
        }
    }

    /// Whether `index` is bookmarked.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// First bookmark strictly after `cursor`.
    pub fn next_after(&self, cursor: Cursor) -> Option<usize> {
        match cursor {
            Cursor::Start => self.0.first().copied(),
            Cursor::At(i) => i.checked_add(1).and_then(|n| self.0.range(n..).next().copied()),
        }
    }

    /// Last bookmark strictly before `cursor`.
    pub fn prev_before(&self, cursor: Cursor) -> Option<usize> {
        match cursor {
            Cursor::Start => None,
            Cursor::At(i) => self.0.range(..i).next_back().copied(),
        }
    }

    /// Remove every bookmark.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of bookmarks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no step is bookmarked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bookmarked indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }
}
