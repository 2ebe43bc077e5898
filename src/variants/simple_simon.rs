//! Simple Simon: Spider without a Stock.

use serde::{Deserialize, Serialize};

use crate::compare::{unsorted_pairs, Compare};
use crate::core::{Card, MoveError, PileId, Slot};
use crate::piles::{Board, Category, FanType, MoveType, Pile};

use super::script;
use super::Variant;

/// All 52 cards dealt face up to ten tableaux (8, 8, 8, 7, 6 ... 1).
/// Any face-up tail may be picked up, but only a same-suit run may move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleSimon;

impl Variant for SimpleSimon {
    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Simple_Simon_(solitaire)"
    }

    fn card_colors(&self) -> u8 {
        4
    }

    fn build_piles(&self, board: &mut Board) {
        board.add_pile(Category::Stock, Slot::hidden(), FanType::None, MoveType::None);
        for x in 3..7 {
            board.add_pile(Category::Discard, Slot::new(x, 0), FanType::None, MoveType::None);
        }
        for x in 0..10 {
            board.add_pile(Category::Tableau, Slot::new(x, 1), FanType::Down, MoveType::Any);
        }
    }

    fn start_game(&self, board: &mut Board) {
        let tabs = board.tableaux().to_vec();
        let counts = [8, 8, 8, 7, 6, 5, 4, 3, 2, 1];
        for (&t, &n) in tabs.iter().zip(&counts) {
            for _ in 0..n {
                if board.deal_to(t, false).is_err() {
                    return;
                }
            }
        }
    }

    fn tail_move_error(&self, board: &Board, src: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(src) {
            Some(Category::Tableau) => Compare::DownSuit.run(tail),
            _ => Ok(()),
        }
    }

    fn tail_append_error(&self, board: &Board, dst: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(dst) {
            Some(Category::Discard) => script::discard_run(tail, Compare::DownSuit),
            Some(Category::Tableau) => script::append_onto(board, dst, tail, Compare::Down),
            Some(category) => Err(MoveError::CannotMoveTo(category)),
            None => Err(MoveError::NoSuchPile(dst)),
        }
    }

    fn unsorted_pairs(&self, pile: &Pile) -> usize {
        unsorted_pairs(pile.cards(), Compare::DownSuit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    #[test]
    fn test_deal_uses_whole_pack() {
        let mut board = Board::new();
        SimpleSimon.build_piles(&mut board);
        board.load_stock(CardId::full_deal(1, 4));
        SimpleSimon.start_game(&mut board);

        let lens: Vec<usize> = board.tableaux().iter().map(|&t| board.len(t)).collect();
        assert_eq!(lens, vec![8, 8, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(board.is_empty(board.stock().unwrap()));
        assert_eq!(board.discards().len(), 4);
        assert!(board.check_invariants().is_ok());
    }
}
