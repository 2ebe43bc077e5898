//! Undo history.
//!
//! Snapshots are kept in an `im::Vector`, so cloning a whole session (for a
//! hint search, say) shares the history instead of copying it.

use im::Vector;

use crate::piles::BoardState;

/// Bounded stack of board snapshots, oldest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vector<BoardState>,
    /// Maximum snapshots kept; 0 = unlimited.
    limit: usize,
}

impl History {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            snapshots: Vector::new(),
            limit,
        }
    }

    /// Record the state before an action. Drops the oldest snapshot once
    /// the limit is reached.
    pub fn push(&mut self, state: BoardState) {
        self.snapshots.push_back(state);
        if self.limit > 0 && self.snapshots.len() > self.limit {
            self.snapshots.pop_front();
        }
    }

    pub fn pop(&mut self) -> Option<BoardState> {
        self.snapshots.pop_back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(recycles: u32) -> BoardState {
        BoardState {
            piles: Vec::new(),
            recycles,
        }
    }

    #[test]
    fn test_push_pop() {
        let mut h = History::new(0);
        h.push(state(1));
        h.push(state(2));

        assert_eq!(h.len(), 2);
        assert_eq!(h.pop().unwrap().recycles, 2);
        assert_eq!(h.pop().unwrap().recycles, 1);
        assert!(h.pop().is_none());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut h = History::new(2);
        for r in 0..5 {
            h.push(state(r));
        }
        assert_eq!(h.len(), 2);
        assert_eq!(h.pop().unwrap().recycles, 4);
        assert_eq!(h.pop().unwrap().recycles, 3);
    }
}
