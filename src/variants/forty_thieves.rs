//! The Forty Thieves family.
//!
//! One template covers a dozen named games; they differ only in the number
//! and position of foundations and tableaux, the cards dealt per tableau,
//! which rows are dealt face down, the tableau rule and how tails move.
//!
//! ```
//! use rust_patience::compare::Compare;
//! use rust_patience::variants::FortyThieves;
//!
//! let streets = FortyThieves::new().with_tab_compare(Compare::DownAltColor);
//! assert_eq!(streets.tabs.len(), 10);
//! assert_eq!(streets.cards_per_tab, 4);
//! ```

use serde::{Deserialize, Serialize};

use crate::compare::{unsorted_pairs, Compare};
use crate::core::{Card, MoveError, PileId, Slot, ACE};
use crate::piles::{Board, Category, FanType, MoveType, Pile};

use super::script;
use super::Variant;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortyThieves {
    pub card_colors: u8,
    pub packs: usize,
    /// Column of each foundation on the top row.
    pub founds: Vec<i16>,
    /// Column of each tableau on the second row.
    pub tabs: Vec<i16>,
    pub cards_per_tab: usize,
    /// Deal rows (0 = first row dealt) that go face down.
    pub prone_rows: Vec<usize>,
    pub tab_compare: Compare,
    pub move_type: MoveType,
    pub recycles: u32,
    /// Start with one Ace on each foundation.
    pub deal_aces: bool,
}

impl Default for FortyThieves {
    fn default() -> Self {
        Self {
            card_colors: 4,
            packs: 2,
            founds: (3..=10).collect(),
            tabs: (1..=10).collect(),
            cards_per_tab: 4,
            prone_rows: Vec::new(),
            tab_compare: Compare::DownSuit,
            move_type: MoveType::OnePlus,
            recycles: 0,
            deal_aces: false,
        }
    }
}

impl FortyThieves {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_card_colors(mut self, colors: u8) -> Self {
        self.card_colors = colors;
        self
    }

    #[must_use]
    pub fn with_packs(mut self, packs: usize) -> Self {
        self.packs = packs;
        self
    }

    #[must_use]
    pub fn with_founds(mut self, founds: impl IntoIterator<Item = i16>) -> Self {
        self.founds = founds.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_tabs(mut self, tabs: impl IntoIterator<Item = i16>) -> Self {
        self.tabs = tabs.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_cards_per_tab(mut self, n: usize) -> Self {
        self.cards_per_tab = n;
        self
    }

    #[must_use]
    pub fn with_prone_rows(mut self, rows: &[usize]) -> Self {
        self.prone_rows = rows.to_vec();
        self
    }

    #[must_use]
    pub fn with_tab_compare(mut self, compare: Compare) -> Self {
        self.tab_compare = compare;
        self
    }

    #[must_use]
    pub fn with_move_type(mut self, move_type: MoveType) -> Self {
        self.move_type = move_type;
        self
    }

    #[must_use]
    pub fn with_recycles(mut self, recycles: u32) -> Self {
        self.recycles = recycles;
        self
    }

    #[must_use]
    pub fn with_deal_aces(mut self, deal_aces: bool) -> Self {
        self.deal_aces = deal_aces;
        self
    }
}

impl Variant for FortyThieves {
    fn wikipedia(&self) -> &str {
        "https://en.wikipedia.org/wiki/Forty_Thieves_(solitaire)"
    }

    fn card_colors(&self) -> u8 {
        self.card_colors
    }

    fn packs(&self) -> usize {
        self.packs
    }

    fn recycles(&self) -> u32 {
        self.recycles
    }

    fn build_piles(&self, board: &mut Board) {
        board.add_pile(Category::Stock, Slot::new(0, 0), FanType::None, MoveType::None);
        board.add_pile(Category::Waste, Slot::new(1, 0), FanType::Right3, MoveType::One);
        for &x in &self.founds {
            let f = board.add_pile(Category::Foundation, Slot::new(x, 0), FanType::None, MoveType::None);
            board.set_label(f, "A");
        }
        for &x in &self.tabs {
            board.add_pile(Category::Tableau, Slot::new(x, 1), FanType::Down, self.move_type);
        }
    }

    fn start_game(&self, board: &mut Board) {
        if self.deal_aces {
            for f in board.foundations().to_vec() {
                board.extract_to(f, |id| id.ordinal == ACE);
            }
        }
        let tabs = board.tableaux().to_vec();
        script::deal_rows(board, &tabs, self.cards_per_tab, |row| self.prone_rows.contains(&row));
        if let Some(waste) = board.waste() {
            // an empty stock is not an error here
            let _ = board.deal_to(waste, false);
        }
    }

    fn after_move(&self, board: &mut Board) {
        if let Some(waste) = board.waste() {
            if board.is_empty(waste) {
                let _ = board.deal_to(waste, false);
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
                if self.move_type == MoveType::OnePlus {
                    script::check_power_move(board, dst, tail)?;
                }
                script::append_onto(board, dst, tail, self.tab_compare)
            }
            Some(category) => Err(MoveError::CannotMoveTo(category)),
            None => Err(MoveError::NoSuchPile(dst)),
        }
    }

    fn unsorted_pairs(&self, pile: &Pile) -> usize {
        unsorted_pairs(pile.cards(), self.tab_compare)
    }
}
