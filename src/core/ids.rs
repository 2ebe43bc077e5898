//! Pile identification and board coordinates.
//!
//! Piles are stored in a `Vec` on the board and addressed by `PileId`, the
//! index at which the variant created them. A card's owner back-reference
//! is a `PileId`, never a pointer, so rebuilding the piles for a new deal
//! cannot leave a dangling reference behind.
//!
//! ```
//! use rust_patience::core::PileId;
//!
//! let stock = PileId::new(0);
//! assert_eq!(stock.index(), 0);
//! assert_eq!(format!("{}", stock), "Pile(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Handle to a pile on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PileId(pub u16);

impl PileId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Index into the board's pile list.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for PileId {
    fn from(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}

/// Board slot coordinate, in card-sized units.
///
/// Negative coordinates park a pile off-board (Freecell's Stock, for
/// example, exists only to hold the pack before dealing).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub x: i16,
    pub y: i16,
}

impl Slot {
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Slot used for piles that are never drawn.
    #[must_use]
    pub const fn hidden() -> Self {
        Self { x: -5, y: -5 }
    }

    #[must_use]
    pub const fn is_hidden(self) -> bool {
        self.x < 0 || self.y < 0
    }
}
