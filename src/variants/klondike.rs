//! Klondike and its draw/recycle variations.

use serde::{Deserialize, Serialize};

use crate::compare::{unsorted_pairs, Compare};
use crate::core::{Card, MoveError, PileId, Slot};
use crate::piles::{Board, Category, FanType, MoveType, Pile};

use super::script;
use super::Variant;

const WIKIPEDIA: &str = "https://en.wikipedia.org/wiki/Solitaire";

/// Klondike: seven tableaux of 1..7 cards, build down in alternating
/// colours, Kings into spaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Klondike {
    pub draw: usize,
    pub recycles: u32,
    /// Deal every tableau card face up. The Stock stays face down and is
    /// turned up a card at a time as usual.
    pub thoughtful: bool,
}

impl Default for Klondike {
    fn default() -> Self {
        Self {
            draw: 1,
            recycles: 2,
            thoughtful: false,
        }
    }
}

impl Klondike {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_draw(mut self, draw: usize) -> Self {
        self.draw = draw;
        self
    }

    #[must_use]
    pub fn with_recycles(mut self, recycles: u32) -> Self {
        self.recycles = recycles;
        self
    }

    #[must_use]
    pub fn with_thoughtful(mut self, thoughtful: bool) -> Self {
        self.thoughtful = thoughtful;
        self
    }
}

impl Variant for Klondike {
    fn wikipedia(&self) -> &str {
        WIKIPEDIA
    }

    fn draw(&self) -> usize {
        self.draw
    }

    fn recycles(&self) -> u32 {
        self.recycles
    }

    fn build_piles(&self, board: &mut Board) {
        board.add_pile(Category::Stock, Slot::new(0, 0), FanType::None, MoveType::None);
        board.add_pile(Category::Waste, Slot::new(1, 0), FanType::Right3, MoveType::One);
        for x in 3..7 {
            let f = board.add_pile(Category::Foundation, Slot::new(x, 0), FanType::None, MoveType::None);
            board.set_label(f, "A");
        }
        for x in 0..7 {
            let t = board.add_pile(Category::Tableau, Slot::new(x, 1), FanType::Down, MoveType::OnePlus);
            board.set_label(t, "K");
        }
    }

    fn start_game(&self, board: &mut Board) {
        let tabs = board.tableaux().to_vec();
        let counts: Vec<usize> = (1..=tabs.len()).collect();
        if self.thoughtful {
            for (&t, &n) in tabs.iter().zip(&counts) {
                for _ in 0..n {
                    if board.deal_to(t, false).is_err() {
                        return;
                    }
                }
            }
        } else {
            script::deal_counts(board, &tabs, &counts);
        }
    }

    fn tail_move_error(&self, board: &Board, src: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(src) {
            Some(Category::Tableau) => Compare::DownAltColor.run(tail),
            _ => Ok(()),
        }
    }

    fn tail_append_error(&self, board: &Board, dst: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(dst) {
            Some(Category::Foundation) => script::append_onto(board, dst, tail, Compare::UpSuit),
            Some(Category::Tableau) => script::append_onto(board, dst, tail, Compare::DownAltColor),
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

    fn dealt(variant: &Klondike) -> Board {
        let mut board = Board::new();
        variant.build_piles(&mut board);
        board.load_stock(CardId::full_deal(1, 4));
        variant.start_game(&mut board);
        board
    }

    #[test]
    fn test_layout() {
        let board = dealt(&Klondike::new());
        assert_eq!(board.foundations().len(), 4);
        assert_eq!(board.tableaux().len(), 7);
        assert!(board.waste().is_some());
        assert!(board.foundations().iter().all(|&f| board.pile(f).unwrap().label() == "A"));
    }

    #[test]
    fn test_deal() {
        let board = dealt(&Klondike::new());
        for (i, &t) in board.tableaux().iter().enumerate() {
            let cards = board.cards(t);
            assert_eq!(cards.len(), i + 1);
            assert!(!cards[i].prone());
            assert_eq!(cards.iter().filter(|c| c.prone()).count(), i);
        }
        assert_eq!(board.len(board.stock().unwrap()), 52 - 28);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_thoughtful_deals_face_up() {
        let board = dealt(&Klondike::new().with_thoughtful(true).with_recycles(32767));
        assert!(board
            .tableaux()
            .iter()
            .all(|&t| board.cards(t).iter().all(|c| !c.prone())));
        let stock = board.stock().unwrap();
        assert_eq!(board.len(stock), 52 - 28);
        assert!(board.cards(stock).iter().all(Card::prone));
    }

    #[test]
    fn test_builders() {
        let k = Klondike::new().with_draw(3).with_recycles(9);
        assert_eq!(k.draw(), 3);
        assert_eq!(k.recycles(), 9);
        assert_eq!(k.card_colors(), 2);
    }
}
