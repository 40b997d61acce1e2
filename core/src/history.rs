//! Undo stack of snapshots.

/// Ordered sequence of snapshots supporting append and undo.
///
/// The newest snapshot is the active one. A history is never empty: undo
/// stops at the initial snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History<T> {
    past: Vec<T>,
    current: T,
}

impl<T> History<T> {
    /// Creates a single-entry history.
    #[must_use]
    pub const fn new(initial: T) -> Self {
        Self {
            past: Vec::new(),
            current: initial,
        }
    }

    /// Appends a snapshot, making it the active one.
    pub fn push(&mut self, snapshot: T) {
        let previous = std::mem::replace(&mut self.current, snapshot);
        self.past.push(previous);
    }

    /// Drops the active snapshot and returns its predecessor.
    ///
    /// Returns `None` and leaves the history untouched when only the initial
    /// snapshot remains.
    pub fn pop_undo(&mut self) -> Option<&T> {
        let previous = self.past.pop()?;
        self.current = previous;
        Some(&self.current)
    }

    /// Replaces the whole history with a single snapshot.
    pub fn reset(&mut self, snapshot: T) {
        self.past.clear();
        self.current = snapshot;
    }

    /// Active snapshot.
    #[must_use]
    pub const fn current(&self) -> &T {
        &self.current
    }

    /// Mutable access to the active snapshot.
    pub fn current_mut(&mut self) -> &mut T {
        &mut self.current
    }

    /// Number of snapshots retained, including the active one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.past.len() + 1
    }

    /// Reports whether [`History::pop_undo`] would change anything.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::History;

    #[test]
    fn undo_walks_back_to_the_first_push() {
        let mut history = History::new("seed");
        history.push("first");
        history.push("second");
        history.push("third");

        assert_eq!(history.pop_undo(), Some(&"second"));
        assert_eq!(history.pop_undo(), Some(&"first"));
        assert_eq!(history.current(), &"first");
        assert_eq!(history.depth(), 2);
    }

    #[test]
    fn undo_stops_at_initial_snapshot() {
        let mut history = History::new(1);
        history.push(2);

        assert_eq!(history.pop_undo(), Some(&1));
        assert_eq!(history.pop_undo(), None);
        assert_eq!(history.current(), &1);
        assert_eq!(history.depth(), 1);
        assert!(!history.can_undo());
    }

    #[test]
    fn reset_discards_everything_but_the_new_snapshot() {
        let mut history = History::new(0);
        history.push(1);
        history.push(2);

        history.reset(9);

        assert_eq!(history.depth(), 1);
        assert_eq!(history.current(), &9);
        assert_eq!(history.pop_undo(), None);
    }

    #[test]
    fn edits_to_current_do_not_leak_into_past_snapshots() {
        let mut history = History::new(vec![0]);
        history.push(vec![1]);
        history.current_mut().push(2);

        assert_eq!(history.current(), &vec![1, 2]);
        assert_eq!(history.pop_undo(), Some(&vec![0]));
    }
}
