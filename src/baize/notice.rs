//! Notices queued for the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::PileId;

/// Something the player should be told about.
///
/// Notices accumulate on the `Baize` until taken with `take_notices`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// A drag moved `count` cards.
    CardsMoved { src: PileId, dst: PileId, count: usize },
    /// A recycle succeeded and a few are left.
    RecyclesRemaining(u32),
    /// The last recycle was just used.
    NoMoreRecycles,
    GameWon,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CardsMoved { count: 1, .. } => write!(f, "Moved 1 card"),
            Notice::CardsMoved { count, .. } => write!(f, "Moved {} cards", count),
            Notice::RecyclesRemaining(1) => write!(f, "1 recycle remaining"),
            Notice::RecyclesRemaining(n) => write!(f, "{} recycles remaining", n),
            Notice::NoMoreRecycles => write!(f, "No more recycles"),
            Notice::GameWon => write!(f, "Game complete"),
        }
    }
}

impl Notice {
    /// Notice for a recycle that left `remaining` recycles, if the count is
    /// low enough to be worth mentioning.
    #[must_use]
    pub fn after_recycle(remaining: u32) -> Option<Self> {
        match remaining {
            0 => Some(Notice::NoMoreRecycles),
            1..=9 => Some(Notice::RecyclesRemaining(remaining)),
            _ => None,
        }
    }
}
