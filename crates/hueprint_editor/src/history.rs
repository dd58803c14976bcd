//! Bounded undo/redo history

use std::collections::VecDeque;

/// Default maximum number of undo steps
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Undo/redo container over whole snapshots.
///
/// Every [`set`](History::set) pushes the current snapshot onto the undo
/// stack (evicting the oldest beyond the limit) and discards the redo
/// stack. [`clear`](History::clear) returns to the snapshot the history was
/// created with.
#[derive(Clone, Debug)]
pub struct History<T: Clone> {
    initial: T,
    present: T,
    past: VecDeque<T>,
    future: VecDeque<T>,
    limit: usize,
}

impl<T: Clone> History<T> {
    pub fn new(initial: T) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(initial: T, limit: usize) -> Self {
        Self {
            present: initial.clone(),
            initial,
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit,
        }
    }

    pub fn present(&self) -> &T {
        &self.present
    }

    /// Record a new snapshot
    pub fn set(&mut self, next: T) {
        let previous = std::mem::replace(&mut self.present, next);
        self.past.push_back(previous);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Step back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.past.push_back(current);
        true
    }

    /// Drop all history and return to the initial snapshot
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
        self.present = self.initial.clone();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_undo_restores_previous() {
        let mut history = History::new("a");
        history.set("b");
        assert!(history.undo());
        assert_eq!(*history.present(), "a");
        assert!(history.redo());
        assert_eq!(*history.present(), "b");
    }

    #[test]
    fn underflow_is_a_no_op() {
        let mut history = History::new(1);
        assert!(!history.undo());
        assert!(!history.redo());
        assert_eq!(*history.present(), 1);
    }

    #[test]
    fn set_discards_redo() {
        let mut history = History::new(0);
        history.set(1);
        history.set(2);
        history.undo();
        assert!(history.can_redo());
        history.set(3);
        assert!(!history.can_redo());
        assert_eq!(history.past_len(), 2);
    }

    #[test]
    fn past_is_bounded() {
        let mut history = History::new(0);
        for i in 1..=60 {
            history.set(i);
        }
        assert_eq!(history.past_len(), 50);
        // Oldest ten snapshots (0..=9) were evicted
        while history.undo() {}
        assert_eq!(*history.present(), 10);
        assert_eq!(history.future_len(), 50);
    }

    #[test]
    fn custom_limit() {
        let mut history = History::with_limit('a', 2);
        history.set('b');
        history.set('c');
        history.set('d');
        assert_eq!(history.past_len(), 2);
        assert_eq!(history.limit(), 2);
    }

    #[test]
    fn clear_returns_to_initial() {
        let mut history = History::new(String::from("start"));
        history.set("one".into());
        history.set("two".into());
        history.undo();
        history.clear();
        assert_eq!(history.present(), "start");
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_redo_walks_in_order() {
        let mut history = History::new(0);
        for i in 1..=3 {
            history.set(i);
        }
        history.undo();
        history.undo();
        assert_eq!(*history.present(), 1);
        history.redo();
        assert_eq!(*history.present(), 2);
        history.redo();
        assert_eq!(*history.present(), 3);
        assert!(!history.redo());
    }
}
