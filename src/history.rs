use crate::color::CellColor;
use crate::grid::CellPos;

/// The color a bead had right before a paint or erase changed it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub pos: CellPos,
    pub previous: CellColor,
}

/// Undo stack of bead changes.
///
/// Entries are pushed by paint/erase and popped by undo. There is no redo
/// stack, and the log is never capped.
#[derive(Debug, Default, Clone)]
pub struct HistoryLog {
    undo_stack: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pos: CellPos, previous: CellColor) {
        self.undo_stack.push(HistoryEntry { pos, previous });
    }

    /// Removes and returns the most recent entry, if any.
    /// Applying it back to the grid is the caller's job.
    pub fn undo_last(&mut self) -> Option<HistoryEntry> {
        self.undo_stack.pop()
    }

    pub fn len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.undo_stack.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_undo_on_empty_history() {
        let mut history = HistoryLog::new();
        assert!(!history.can_undo());
        assert_eq!(history.undo_last(), None);
        assert_eq!(history.len(), 0);
    }

    #[test]
    fn test_entries_pop_in_reverse_order() {
        let mut history = HistoryLog::new();
        let green = CellColor::Painted(Rgb::new(0, 255, 0));
        history.record(CellPos::new(1, 1), CellColor::Empty);
        history.record(CellPos::new(1, 1), green);
        assert_eq!(history.len(), 2);

        let last = history.undo_last().unwrap();
        assert_eq!(last.pos, CellPos::new(1, 1));
        assert_eq!(last.previous, green);

        let first = history.undo_last().unwrap();
        assert_eq!(first.previous, CellColor::Empty);
        assert!(history.is_empty());
    }

    #[test]
    fn test_duplicate_entries_are_kept() {
        let mut history = HistoryLog::new();
        for _ in 0..1000 {
            history.record(CellPos::new(0, 0), CellColor::Empty);
        }
        assert_eq!(history.len(), 1000);
    }
}
