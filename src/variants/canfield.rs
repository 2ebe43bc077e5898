//! Canfield and Storehouse.
//!
//! A thirteen-card Reserve feeds four tableaux. Foundations start from a
//! rank fixed at the deal and build up in suit, turning the corner from
//! King to Ace.

use serde::{Deserialize, Serialize};

use crate::compare::{unsorted_pairs, Compare};
use crate::core::{ordinal_short, Card, MoveError, PileId, Slot};
use crate::piles::{Board, Category, FanType, MoveType, Pile};

use super::script;
use super::Variant;

const RESERVE_SIZE: usize = 13;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canfield {
    pub card_colors: u8,
    pub draw: usize,
    pub recycles: u32,
    pub tab_compare: Compare,
    /// Foundation base rank chosen before the deal ("2" for Storehouse).
    /// `None` lets the first card dealt to a foundation decide.
    pub base: Option<u8>,
}

impl Default for Canfield {
    fn default() -> Self {
        Self {
            card_colors: 2,
            draw: 3,
            recycles: 32767,
            tab_compare: Compare::DownAltColorWrap,
            base: None,
        }
    }
}

impl Canfield {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storehouse: the four Twos start on the foundations.
    #[must_use]
    pub fn storehouse() -> Self {
        Self {
            card_colors: 4,
            draw: 1,
            recycles: 2,
            tab_compare: Compare::DownSuitWrap,
            base: Some(2),
        }
    }

    fn label_foundations(board: &mut Board, ordinal: u8) {
        for f in board.foundations().to_vec() {
            board.set_label(f, ordinal_short(ordinal));
        }
    }
}

impl Variant for Canfield {
    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Canfield_(solitaire)"
    }

    fn card_colors(&self) -> u8 {
        self.card_colors
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
        board.add_pile(Category::Reserve, Slot::new(0, 1), FanType::Down, MoveType::One);
        for x in 3..7 {
            board.add_pile(Category::Foundation, Slot::new(x, 0), FanType::None, MoveType::None);
        }
        for x in 3..7 {
            board.add_pile(Category::Tableau, Slot::new(x, 1), FanType::Down, MoveType::OnePlus);
        }
    }

    fn start_game(&self, board: &mut Board) {
        let foundations = board.foundations().to_vec();
        match self.base {
            Some(base) => {
                for &f in &foundations {
                    board.extract_to(f, |id| id.ordinal == base);
                }
                Self::label_foundations(board, base);
            }
            None => {
                if let Some(&first) = foundations.first() {
                    if let Ok(id) = board.deal_to(first, false) {
                        Self::label_foundations(board, id.ordinal);
                    }
                }
            }
        }
        if let Some(&reserve) = board.reserves().first() {
            for _ in 0..RESERVE_SIZE {
                if board.deal_to(reserve, true).is_err() {
                    break;
                }
            }
            board.flip_up_exposed(reserve);
        }
        let tabs = board.tableaux().to_vec();
        script::deal_rows(board, &tabs, 1, |_| false);
    }

    /// An empty tableau is refilled from the Reserve.
    fn after_move(&self, board: &mut Board) {
        let Some(&reserve) = board.reserves().first() else {
            return;
        };
        for t in board.tableaux().to_vec() {
            if board.is_empty(t) && board.move_card(reserve, t).is_some() {
                board.flip_up_exposed(t);
            }
        }
        board.flip_up_exposed(reserve);
    }

    fn tail_move_error(&self, board: &Board, src: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(src) {
            Some(Category::Tableau) => self.tab_compare.run(tail),
            _ => Ok(()),
        }
    }

    fn tail_append_error(&self, board: &Board, dst: PileId, tail: &[Card]) -> Result<(), MoveError> {
        match board.category(dst) {
            Some(Category::Foundation) => script::append_onto(board, dst, tail, Compare::UpSuitWrap),
            Some(Category::Tableau) => script::append_onto(board, dst, tail, self.tab_compare),
            Some(category) => Err(MoveError::CannotMoveTo(category)),
            None => Err(MoveError::NoSuchPile(dst)),
        }
    }

    fn unsorted_pairs(&self, pile: &Pile) -> usize {
        unsorted_pairs(pile.cards(), self.tab_compare)
    }
}
