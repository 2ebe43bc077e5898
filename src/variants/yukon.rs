//! Yukon: any face-up tail can move, whatever its order.

use serde::{Deserialize, Serialize};

use crate::compare::{unsorted_pairs, Compare};
use crate::core::{Card, MoveError, PileId, Slot};
use crate::piles::{Board, Category, FanType, MoveType, Pile};

use super::script;
use super::Variant;

/// Face-up cards dealt on top of the face-down ones in tableaux 2..7.
const FACE_UP_ROWS: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yukon {
    pub extra_cells: usize,
}

impl Yukon {
    #[must_use]
    pub const fn new() -> Self {
        Self { extra_cells: 0 }
    }

    #[must_use]
    pub fn with_extra_cells(mut self, cells: usize) -> Self {
        self.extra_cells = cells;
        self
    }
}

impl Variant for Yukon {
    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Yukon_(solitaire)"
    }

    fn build_piles(&self, board: &mut Board) {
        board.add_pile(Category::Stock, Slot::hidden(), FanType::None, MoveType::None);
        for y in 0..4 {
            let f = board.add_pile(Category::Foundation, Slot::new(8, y), FanType::None, MoveType::None);
            board.set_label(f, "A");
        }
        for y in 0..self.extra_cells {
            board.add_pile(Category::Cell, Slot::new(9, y as i16), FanType::None, MoveType::One);
        }
        for x in 0..7 {
            let t = board.add_pile(Category::Tableau, Slot::new(x, 0), FanType::Down, MoveType::Any);
            board.set_label(t, "K");
        }
    }

    fn start_game(&self, board: &mut Board) {
        let tabs = board.tableaux().to_vec();
        for (i, &t) in tabs.iter().enumerate() {
            let (prone, up) = if i == 0 { (0, 1) } else { (i, FACE_UP_ROWS) };
            for n in 0..prone + up {
                if board.deal_to(t, n < prone).is_err() {
                    return;
                }
            }
        }
    }

    fn tail_move_error(&self, _board: &Board, _src: PileId, _tail: &[Card]) -> Result<(), MoveError> {
        Ok(())
    }

    fn tail_append_error(&self, board: &Board, dst: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(dst) {
            Some(Category::Foundation) => script::append_onto(board, dst, tail, Compare::UpSuit),
            Some(Category::Tableau) => script::append_onto(board, dst, tail, Compare::DownAltColor),
            Some(Category::Cell) => Ok(()),
            Some(category) => Err(MoveError::CannotMoveTo(category)),
            None => Err(MoveError::NoSuchPile(dst)),
        }
    }

    fn unsorted_pairs(&self, pile: &Pile) -> usize {
        unsorted_pairs(pile.cards(), Compare::DownAltColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    #[test]
    fn test_deal() {
        let yukon = Yukon::new().with_extra_cells(2);
        let mut board = Board::new();
        yukon.build_piles(&mut board);
        board.load_stock(CardId::full_deal(1, 4));
        yukon.start_game(&mut board);

        let lens: Vec<usize> = board.tableaux().iter().map(|&t| board.len(t)).collect();
        assert_eq!(lens, vec![1, 6, 7, 8, 9, 10, 11]);
        for (i, &t) in board.tableaux().iter().enumerate() {
            assert_eq!(board.cards(t).iter().filter(|c| c.prone()).count(), i);
        }
        assert!(board.is_empty(board.stock().unwrap()));
        assert_eq!(board.empty_cells(), 2);
    }
}
