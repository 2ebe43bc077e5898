//! Engine error types.
//!
//! - `MoveError`: an illegal move or tap. Always recoverable: the board is
//!   left untouched and the `Display` text is shown to the player.
//! - `RestoreError`: a saved game could not be turned back into a board.
//! - `InvariantViolation`: the single-card/single-owner invariant broke.
//!   Never returned to callers; the engine logs it and panics.

use thiserror::Error;

use super::card::CardId;
use super::ids::PileId;
use crate::piles::Category;

/// Why a move, tap or recycle was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    // === Sequencing ===
    #[error("Cards must be in ascending sequence")]
    NotAscending,

    #[error("Cards must be in descending sequence")]
    NotDescending,

    #[error("Cards must go up in rank (Aces on Kings allowed)")]
    NotAscendingWrap,

    #[error("Cards must go down in rank (Kings on Aces allowed)")]
    NotDescendingWrap,

    #[error("Cards must be the same color")]
    NotSameColor,

    #[error("Cards must be in alternating colors")]
    NotAlternatingColor,

    #[error("Cards must be the same suit")]
    NotSameSuit,

    #[error("Cards must not be the same suit")]
    SameSuit,

    // === Destinations ===
    #[error("You cannot move cards to the {0}")]
    CannotMoveTo(Category),

    #[error("You cannot move cards from the {0}")]
    CannotMoveFrom(Category),

    #[error("The Waste can only accept cards from the Stock")]
    WasteFromStockOnly,

    #[error("Cannot move more than one card to a {0}")]
    SingleCardOnly(Category),

    #[error("Cannot move a face down card")]
    FaceDown,

    #[error("The Foundation is full")]
    FoundationFull,

    #[error("A Cell can only hold one card")]
    CellOccupied,

    #[error("Cannot move cards there")]
    Blocked,

    #[error("Can only accept {expected}, not {found}")]
    WrongRank { expected: String, found: String },

    #[error("Can only discard a full run of {0} cards")]
    PartialDiscard(usize),

    #[error("Can only discard starting from a King")]
    DiscardNotKing,

    #[error("Only enough space to move {0} cards, not {1}")]
    NotEnoughSpace(usize, usize),

    // === Selection ===
    #[error("That card cannot be moved")]
    NotMovable,

    #[error("Cannot move cards onto the same pile")]
    SamePile,

    #[error("No such pile: {0}")]
    NoSuchPile(PileId),

    #[error("{0} has no card at position {1}")]
    NoSuchCard(PileId, usize),

    #[error("No pile can accept {0}")]
    NoDestination(CardId),

    // === Stock ===
    #[error("The Stock is empty")]
    StockEmpty,

    #[error("All tableaux must contain cards before dealing")]
    EmptyTableau,

    #[error("The Waste is empty")]
    WasteEmpty,

    #[error("No more recycles")]
    NoMoreRecycles,

    // === Session ===
    #[error("Nothing to undo")]
    NothingToUndo,

    #[error("The game is already complete")]
    GameOver,
}

/// Why a saved game could not be restored.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("unknown variant \"{0}\"")]
    UnknownVariant(String),

    #[error("variant lays out {expected} piles, saved game has {found}")]
    PileCount { expected: usize, found: usize },

    #[error("saved game does not hold exactly one full deal")]
    CardSet,

    #[error("saved game could not be decoded: {0}")]
    Codec(#[from] bincode::Error),
}

/// A broken board invariant. Indicates a bug in the engine or a variant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("board holds {found} cards, expected {expected}")]
    CardCount { expected: usize, found: usize },

    #[error("card {0} appears more than once")]
    Duplicate(CardId),

    #[error("card {0} is missing from the board")]
    Missing(CardId),

    #[error("card {card} sits in {pile} but names {owner:?} as owner")]
    OwnerMismatch {
        card: CardId,
        pile: PileId,
        owner: Option<PileId>,
    },

    #[error("variant built {0} stock piles, expected exactly one")]
    StockCount(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_text() {
        assert_eq!(MoveError::NoMoreRecycles.to_string(), "No more recycles");
        assert_eq!(
            MoveError::CannotMoveTo(Category::Stock).to_string(),
            "You cannot move cards to the Stock"
        );
        assert_eq!(
            MoveError::WrongRank {
                expected: "Ace".into(),
                found: "Three".into()
            }
            .to_string(),
            "Can only accept Ace, not Three"
        );
    }

    #[test]
    fn test_invariant_text() {
        let v = InvariantViolation::CardCount { expected: 52, found: 51 };
        assert_eq!(v.to_string(), "board holds 51 cards, expected 52");
    }
}
