//! Freecell, its relatives, and Eight Off.
//!
//! All cards are dealt at the start; the Stock only exists to hold the pack
//! while dealing. Tails longer than one card are moved as a power move,
//! limited by the free cells and empty tableaux.

use serde::{Deserialize, Serialize};

use crate::compare::{unsorted_pairs, Compare};
use crate::core::{Card, MoveError, PileId, Slot};
use crate::piles::{Board, Category, FanType, MoveType, Pile};

use super::script;
use super::Variant;

/// Freecell with a configurable tableau rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Freecell {
    pub wikipedia: String,
    pub card_colors: u8,
    pub tab_compare: Compare,
    /// Deal the tableaux face down except for their top cards.
    pub blind: bool,
}

impl Default for Freecell {
    fn default() -> Self {
        Self {
            wikipedia: "https://en.wikipedia.org/wiki/FreeCell".to_string(),
            card_colors: 2,
            tab_compare: Compare::DownAltColor,
            blind: false,
        }
    }
}

impl Freecell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_wikipedia(mut self, url: &str) -> Self {
        self.wikipedia = url.to_string();
        self
    }

    #[must_use]
    pub fn with_card_colors(mut self, colors: u8) -> Self {
        self.card_colors = colors;
        self
    }

    #[must_use]
    pub fn with_tab_compare(mut self, compare: Compare) -> Self {
        self.tab_compare = compare;
        self
    }

    #[must_use]
    pub fn with_blind(mut self, blind: bool) -> Self {
        self.blind = blind;
        self
    }
}

impl Variant for Freecell {
    fn wikipedia(&self) -> &str {
        &self.wikipedia
    }

    fn card_colors(&self) -> u8 {
        self.card_colors
    }

    fn build_piles(&self, board: &mut Board) {
        board.add_pile(Category::Stock, Slot::hidden(), FanType::None, MoveType::None);
        for x in 0..4 {
            board.add_pile(Category::Cell, Slot::new(x, 0), FanType::None, MoveType::One);
        }
        for x in 4..8 {
            let f = board.add_pile(Category::Foundation, Slot::new(x, 0), FanType::None, MoveType::None);
            board.set_label(f, "A");
        }
        for x in 0..8 {
            board.add_pile(Category::Tableau, Slot::new(x, 1), FanType::Down, MoveType::OnePlus);
        }
    }

    fn start_game(&self, board: &mut Board) {
        let tabs = board.tableaux().to_vec();
        script::deal_rows(board, &tabs, 7, |_| self.blind);
        if self.blind {
            for &t in &tabs {
                board.flip_up_exposed(t);
            }
        }
    }

    fn tail_move_error(&self, board: &Board, src: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(src) {
            Some(Category::Tableau) => self.tab_compare.run(tail),
            _ => Ok(()),
        }
    }

    fn tail_append_error(&self, board: &Board, dst: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(dst) {
            Some(Category::Foundation) => script::append_onto(board, dst, tail, Compare::UpSuit),
            Some(Category::Tableau) => {
                script::check_power_move(board, dst, tail)?;
                script::append_onto(board, dst, tail, self.tab_compare)
            }
            Some(Category::Cell) => Ok(()),
            Some(category) => Err(MoveError::CannotMoveTo(category)),
            None => Err(MoveError::NoSuchPile(dst)),
        }
    }

    fn unsorted_pairs(&self, pile: &Pile) -> usize {
        unsorted_pairs(pile.cards(), self.tab_compare)
    }
}

/// Eight Off: eight cells, four of them filled at the deal; build down in
/// suit; only Kings fill a space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EightOff;

impl Variant for EightOff {
    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Eight_Off"
    }

    fn card_colors(&self) -> u8 {
        4
    }

    fn build_piles(&self, board: &mut Board) {
        board.add_pile(Category::Stock, Slot::hidden(), FanType::None, MoveType::None);
        for x in 0..8 {
            board.add_pile(Category::Cell, Slot::new(x, 0), FanType::None, MoveType::One);
        }
        for y in 0..4 {
            let f = board.add_pile(Category::Foundation, Slot::new(9, y), FanType::None, MoveType::None);
            board.set_label(f, "A");
        }
        for x in 0..8 {
            let t = board.add_pile(Category::Tableau, Slot::new(x, 1), FanType::Down, MoveType::OnePlus);
            board.set_label(t, "K");
        }
    }

    fn start_game(&self, board: &mut Board) {
        let tabs = board.tableaux().to_vec();
        script::deal_rows(board, &tabs, 6, |_| false);
        let cells: Vec<PileId> = board.cells().iter().copied().step_by(2).collect();
        script::deal_rows(board, &cells, 1, |_| false);
    }

    fn tail_move_error(&self, board: &Board, src: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(src) {
            Some(Category::Tableau) => Compare::DownSuit.run(tail),
            _ => Ok(()),
        }
    }

    fn tail_append_error(&self, board: &Board, dst: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(dst) {
            Some(Category::Foundation) => script::append_onto(board, dst, tail, Compare::UpSuit),
            Some(Category::Tableau) => {
                script::check_power_move(board, dst, tail)?;
                script::append_onto(board, dst, tail, Compare::DownSuit)
            }
            Some(Category::Cell) => Ok(()),
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

    fn dealt<V: Variant>(variant: &V) -> Board {
        let mut board = Board::new();
        variant.build_piles(&mut board);
        board.load_stock(CardId::full_deal(variant.packs(), variant.suits()));
        variant.start_game(&mut board);
        board
    }

    #[test]
    fn test_freecell_deal() {
        let board = dealt(&Freecell::new());
        let lens: Vec<usize> = board.tableaux().iter().map(|&t| board.len(t)).collect();
        assert_eq!(lens, vec![7, 7, 7, 7, 6, 6, 6, 6]);
        assert!(board.is_empty(board.stock().unwrap()));
        assert_eq!(board.empty_cells(), 4);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_blind_deal() {
        let board = dealt(&Freecell::new().with_blind(true));
        for &t in board.tableaux() {
            let cards = board.cards(t);
            assert!(!cards.last().unwrap().prone());
            assert!(cards[..cards.len() - 1].iter().all(Card::prone));
        }
    }

    #[test]
    fn test_eight_off_deal() {
        let board = dealt(&EightOff);
        assert!(board.tableaux().iter().all(|&t| board.len(t) == 6));
        assert_eq!(board.empty_cells(), 4);
        assert!(board.is_empty(board.stock().unwrap()));
    }

    #[test]
    fn test_eight_off_king_spaces_do_not_widen_power_move() {
        let mut board = Board::new();
        EightOff.build_piles(&mut board);
        board.load_stock(CardId::full_deal(1, 4));
        let stock = board.stock().unwrap();
        let cells = board.cells().to_vec();
        for &cell in &cells[1..] {
            board.move_card(stock, cell);
        }
        let t0 = board.tableaux()[0];
        board.move_card(stock, t0);

        // seven empty tableaux, but each only takes a King
        let tail: Vec<Card> = (7..=9)
            .rev()
            .map(|o| {
                let mut c = Card::new(CardId::new(0, crate::core::Suit::Heart, o));
                c.set_prone(false);
                c
            })
            .collect();
        assert_eq!(script::power_limit(&board, t0), 2);
        assert_eq!(
            script::check_power_move(&board, t0, &tail),
            Err(MoveError::NotEnoughSpace(2, 3))
        );
        assert!(script::check_power_move(&board, t0, &tail[1..]).is_ok());
    }
}
