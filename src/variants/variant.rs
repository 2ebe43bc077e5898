//! The rule-set trait every game implements.
//!
//! A `Variant` is an immutable rule description. It lays out the board,
//! deals the opening position and answers legality questions; the `Baize`
//! owns the board and does the bookkeeping around each move.
//!
//! ## Implementation Notes
//!
//! - `build_piles` must create exactly one Stock
//! - `tail_move_error` judges a tail inside its source pile
//! - `tail_append_error` judges a tail against its destination; category
//!   rules (single card, face down, label) have already passed
//! - `after_move` runs after every committed move, deal and tap

use std::fmt::Debug;

use crate::core::{Card, MoveError, PileId};
use crate::piles::{Board, Category, Pile};

use super::script;

/// A solitaire rule set.
pub trait Variant: Send + Sync + Debug {
    // === Metadata ===

    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Patience_(game)"
    }

    /// Number of distinct card colours the game is drawn with (1, 2 or 4).
    fn card_colors(&self) -> u8 {
        2
    }

    fn packs(&self) -> usize {
        1
    }

    fn suits(&self) -> usize {
        4
    }

    /// Cards moved from Stock to Waste per Stock tap.
    fn draw(&self) -> usize {
        1
    }

    /// Waste-to-Stock recycles allowed per game.
    fn recycles(&self) -> u32 {
        0
    }

    // === Setup ===

    /// Create every pile the game uses.
    fn build_piles(&self, board: &mut Board);

    /// Deal the opening position from the (shuffled) Stock.
    fn start_game(&self, board: &mut Board);

    /// Hook run after every committed action.
    fn after_move(&self, _board: &mut Board) {}

    // === Legality ===

    /// May `tail` be picked up from `src` as it currently lies?
    fn tail_move_error(&self, board: &Board, src: PileId, tail: &[Card]) -> Result<(), MoveError>;

    /// May `tail` be appended to `dst`?
    fn tail_append_error(&self, board: &Board, dst: PileId, tail: &[Card]) -> Result<(), MoveError>;

    /// Adjacent pairs of `pile` that are out of order under the game's
    /// tableau rule.
    fn unsorted_pairs(&self, pile: &Pile) -> usize;

    // === Taps ===

    /// The player tapped the card at `index` of `pile`.
    fn tail_tapped(&self, board: &mut Board, pile: PileId, index: usize) -> Result<(), MoveError> {
        script::tail_tapped(self, board, pile, index)
    }

    /// The player tapped a pile with no card under the pointer.
    ///
    /// Tapping an empty Stock recycles the Waste.
    fn pile_tapped(&self, board: &mut Board, pile: PileId) -> Result<(), MoveError> {
        match board.category(pile) {
            Some(Category::Stock) if board.is_empty(pile) => board.recycle_waste_to_stock().map(|_| ()),
            Some(_) => Err(MoveError::NotMovable),
            None => Err(MoveError::NoSuchPile(pile)),
        }
    }

    // === Completion ===

    /// True once every pile has reached its finished state.
    fn complete(&self, board: &Board) -> bool {
        board.piles().iter().all(|p| p.category().complete(board, p))
    }
}
