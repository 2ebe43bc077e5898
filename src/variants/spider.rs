//! Spider in one, two and four suits.
//!
//! Complete King-to-Ace runs of one suit are removed to the discards. The
//! Stock deals one card to every tableau at once, and only when none of them
//! is empty.

use serde::{Deserialize, Serialize};

use crate::compare::{unsorted_pairs, Compare};
use crate::core::{Card, MoveError, PileId, Slot};
use crate::piles::{Board, Category, FanType, MoveType, Pile};

use super::script;
use super::Variant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spider {
    pub packs: usize,
    pub suits: usize,
}

impl Default for Spider {
    fn default() -> Self {
        Self::four_suits()
    }
}

impl Spider {
    #[must_use]
    pub const fn one_suit() -> Self {
        Self { packs: 8, suits: 1 }
    }

    #[must_use]
    pub const fn two_suits() -> Self {
        Self { packs: 4, suits: 2 }
    }

    #[must_use]
    pub const fn four_suits() -> Self {
        Self { packs: 2, suits: 4 }
    }
}

impl Variant for Spider {
    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Spider_(solitaire)"
    }

    fn card_colors(&self) -> u8 {
        self.suits as u8
    }

    fn packs(&self) -> usize {
        self.packs
    }

    fn suits(&self) -> usize {
        self.suits
    }

    fn build_piles(&self, board: &mut Board) {
        board.add_pile(Category::Stock, Slot::new(0, 0), FanType::None, MoveType::None);
        for x in 2..10 {
            board.add_pile(Category::Discard, Slot::new(x, 0), FanType::None, MoveType::None);
        }
        for x in 0..10 {
            board.add_pile(Category::Tableau, Slot::new(x, 1), FanType::Down, MoveType::OnePlus);
        }
    }

    fn start_game(&self, board: &mut Board) {
        let tabs = board.tableaux().to_vec();
        script::deal_counts(board, &tabs, &[6, 6, 6, 6, 5, 5, 5, 5, 5, 5]);
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

    fn tail_tapped(&self, board: &mut Board, pile: PileId, index: usize) -> Result<(), MoveError> {
        if board.category(pile) != Some(Category::Stock) {
            return script::tail_tapped(self, board, pile, index);
        }
        let tabs = board.tableaux().to_vec();
        if tabs.iter().any(|&t| board.is_empty(t)) {
            return Err(MoveError::EmptyTableau);
        }
        if board.is_empty(pile) {
            return Err(MoveError::StockEmpty);
        }
        for t in tabs {
            if board.deal_to(t, false).is_err() {
                break;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;

    fn dealt(variant: &Spider) -> Board {
        let mut board = Board::new();
        variant.build_piles(&mut board);
        board.load_stock(CardId::full_deal(variant.packs(), variant.suits()));
        variant.start_game(&mut board);
        board
    }

    #[test]
    fn test_card_sets() {
        for spider in [Spider::one_suit(), Spider::two_suits(), Spider::four_suits()] {
            let board = dealt(&spider);
            assert_eq!(board.total_cards(), 104);
            assert_eq!(board.len(board.stock().unwrap()), 50);
            assert!(board.check_invariants().is_ok());
        }
    }

    #[test]
    fn test_stock_deals_a_row() {
        let spider = Spider::default();
        let mut board = dealt(&spider);
        let stock = board.stock().unwrap();

        spider.tail_tapped(&mut board, stock, 0).unwrap();
        assert_eq!(board.len(stock), 40);
        assert!(board.tableaux().iter().all(|&t| !board.peek(t).unwrap().prone()));
    }

    #[test]
    fn test_stock_refuses_with_empty_tableau() {
        let spider = Spider::default();
        let mut board = dealt(&spider);
        let stock = board.stock().unwrap();
        let (a, b) = (board.tableaux()[0], board.tableaux()[1]);
        board.move_tail(a, 0, b);

        assert_eq!(spider.tail_tapped(&mut board, stock, 0), Err(MoveError::EmptyTableau));
        assert_eq!(board.len(stock), 50);
    }
}
