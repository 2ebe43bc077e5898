//! The board: every pile in a game and the primitives that move cards.
//!
//! The `Board` tracks which pile holds each card and keeps the card's owner
//! handle in step. It supports:
//! - Pile creation, with automatic grouping by category (`Layout`)
//! - Primitive top-card and tail relocation
//! - Waste-to-Stock recycling against a recycle budget
//! - Invariant checks (card conservation, single ownership)
//!
//! Legality is not checked here. Variants and the `Baize` decide whether a
//! move is allowed before asking the board to make it.
//!
//! ## Usage
//!
//! ```
//! use rust_patience::core::{CardId, Slot};
//! use rust_patience::piles::{Board, Category, FanType, MoveType};
//!
//! let mut board = Board::new();
//! let stock = board.add_pile(Category::Stock, Slot::new(0, 0), FanType::None, MoveType::None);
//! let waste = board.add_pile(Category::Waste, Slot::new(1, 0), FanType::Right3, MoveType::One);
//!
//! board.load_stock(CardId::full_deal(1, 4));
//! assert_eq!(board.pile(stock).unwrap().len(), 52);
//!
//! board.move_card(stock, waste);
//! assert!(!board.pile(waste).unwrap().peek().unwrap().prone());
//! assert!(board.check_invariants().is_ok());
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::pile::{FanType, MoveType, Pile};
use crate::core::{Card, CardId, InvariantViolation, MoveError, PileId, Slot};

/// Pile handles grouped by category, in creation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    pub stock: Option<PileId>,
    pub waste: Option<PileId>,
    pub foundations: Vec<PileId>,
    pub tableaux: Vec<PileId>,
    pub cells: Vec<PileId>,
    pub reserves: Vec<PileId>,
    pub discards: Vec<PileId>,
    stock_count: usize,
}

impl Layout {
    fn register(&mut self, id: PileId, category: Category) {
        match category {
            Category::Stock => {
                self.stock_count += 1;
                self.stock.get_or_insert(id);
            }
            Category::Waste => {
                self.waste.get_or_insert(id);
            }
            Category::Foundation => self.foundations.push(id),
            Category::Tableau => self.tableaux.push(id),
            Category::Cell => self.cells.push(id),
            Category::Reserve => self.reserves.push(id),
            Category::Discard => self.discards.push(id),
        }
    }
}

/// Face state and label of one pile, base card first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileState {
    pub cards: Vec<(CardId, bool)>,
    #[serde(default)]
    pub label: String,
}

/// Everything needed to put a board back exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    pub piles: Vec<PileState>,
    pub recycles: u32,
}

/// All piles of one game.
#[derive(Clone, Debug, Default)]
pub struct Board {
    piles: Vec<Pile>,
    layout: Layout,
    recycles: u32,
    /// Sorted ids of the full deal, for conservation checks.
    deal: Vec<CardId>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Piles ===

    /// Create a pile and file it under its category.
    pub fn add_pile(&mut self, category: Category, slot: Slot, fan: FanType, move_type: MoveType) -> PileId {
        let id = PileId::new(self.piles.len() as u16);
        self.piles.push(Pile::new(id, category, slot, fan, move_type));
        self.layout.register(id, category);
        id
    }

    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id.index())
    }

    /// Like `pile`, but reports an unknown handle as a `MoveError`.
    pub fn get(&self, id: PileId) -> Result<&Pile, MoveError> {
        self.pile(id).ok_or(MoveError::NoSuchPile(id))
    }

    pub(crate) fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        self.piles.get_mut(id.index())
    }

    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    #[must_use]
    pub fn category(&self, id: PileId) -> Option<Category> {
        self.pile(id).map(Pile::category)
    }

    /// Cards in a pile; empty for an unknown handle.
    #[must_use]
    pub fn cards(&self, id: PileId) -> &[Card] {
        self.pile(id).map(Pile::cards).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self, id: PileId) -> usize {
        self.cards(id).len()
    }

    #[must_use]
    pub fn is_empty(&self, id: PileId) -> bool {
        self.cards(id).is_empty()
    }

    #[must_use]
    pub fn peek(&self, id: PileId) -> Option<&Card> {
        self.cards(id).last()
    }

    pub fn set_label(&mut self, id: PileId, label: impl Into<String>) {
        if let Some(pile) = self.pile_mut(id) {
            pile.set_label(label);
        }
    }

    // === Layout ===

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub fn stock(&self) -> Option<PileId> {
        self.layout.stock
    }

    #[must_use]
    pub fn waste(&self) -> Option<PileId> {
        self.layout.waste
    }

    #[must_use]
    pub fn foundations(&self) -> &[PileId] {
        &self.layout.foundations
    }

    #[must_use]
    pub fn tableaux(&self) -> &[PileId] {
        &self.layout.tableaux
    }

    #[must_use]
    pub fn cells(&self) -> &[PileId] {
        &self.layout.cells
    }

    #[must_use]
    pub fn reserves(&self) -> &[PileId] {
        &self.layout.reserves
    }

    #[must_use]
    pub fn discards(&self) -> &[PileId] {
        &self.layout.discards
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.layout.cells.iter().filter(|&&id| self.is_empty(id)).count()
    }

    /// Number of empty tableaux that take any card, not counting `except`.
    ///
    /// A labelled space (Kings only, say) cannot park an arbitrary card
    /// and is left out.
    #[must_use]
    pub fn empty_tableaux(&self, except: Option<PileId>) -> usize {
        self.layout
            .tableaux
            .iter()
            .filter_map(|&id| self.pile(id))
            .filter(|p| Some(p.id()) != except && p.is_empty() && matches!(p.label(), "" | "*"))
            .count()
    }

    // === Cards ===

    /// Put a freshly created deal into the Stock, face down, in the given
    /// order (last id ends up on top).
    pub fn load_stock(&mut self, ids: Vec<CardId>) {
        let mut deal = ids.clone();
        deal.sort_unstable();
        self.deal = deal;
        let Some(stock) = self.layout.stock.and_then(|id| self.piles.get_mut(id.index())) else {
            return;
        };
        for id in ids {
            stock.push(Card::new(id));
        }
    }

    /// Number of cards in the full deal.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deal.len()
    }

    /// Number of cards currently on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// Move the top card of `src` to the top of `dst`.
    ///
    /// Cards entering the Stock are turned face down; cards leaving it are
    /// turned face up. Returns the moved card's id, or `None` if `src` was
    /// empty or either handle is unknown.
    pub fn move_card(&mut self, src: PileId, dst: PileId) -> Option<CardId> {
        let dst_category = self.category(dst)?;
        let src_category = self.category(src)?;
        let mut card = self.pile_mut(src)?.pop()?;
        if dst_category == Category::Stock {
            card.set_prone(true);
        } else if src_category == Category::Stock {
            card.set_prone(false);
        }
        let id = card.id();
        // dst was checked above
        if let Some(pile) = self.pile_mut(dst) {
            pile.push(card);
        }
        Some(id)
    }

    /// Move the tail of `src` starting at `index` onto `dst`, keeping order.
    ///
    /// Returns the number of cards moved.
    pub fn move_tail(&mut self, src: PileId, index: usize, dst: PileId) -> usize {
        if self.pile(dst).is_none() {
            return 0;
        }
        let tail = match self.pile_mut(src) {
            Some(pile) if index < pile.len() => pile.split_off(index),
            _ => return 0,
        };
        let moved = tail.len();
        if let Some(pile) = self.pile_mut(dst) {
            for card in tail {
                pile.push(card);
            }
        }
        moved
    }

    /// Deal the top Stock card to `dst`, face up unless `prone`.
    pub fn deal_to(&mut self, dst: PileId, prone: bool) -> Result<CardId, MoveError> {
        let stock = self.stock().ok_or(MoveError::StockEmpty)?;
        let id = self.move_card(stock, dst).ok_or(MoveError::StockEmpty)?;
        if let Some(card) = self.pile_mut(dst).and_then(Pile::top_mut) {
            card.set_prone(prone);
        }
        Ok(id)
    }

    /// Pull the first Stock card matching `pred` out to `dst`, face up.
    ///
    /// Used by variants that start with particular cards on the
    /// foundations (Lucas, Storehouse).
    pub fn extract_to(&mut self, dst: PileId, pred: impl Fn(&CardId) -> bool) -> Option<CardId> {
        let stock = self.stock()?;
        let pos = self.cards(stock).iter().rposition(|c| pred(&c.id()))?;
        let pile = self.pile_mut(stock)?;
        let mut rest = pile.split_off(pos);
        let mut card = rest.remove(0);
        for c in rest {
            pile.push(c);
        }
        card.set_prone(false);
        let id = card.id();
        self.pile_mut(dst)?.push(card);
        Some(id)
    }

    /// Turn a face-down top card face up. Returns true if a card flipped.
    pub fn flip_up_exposed(&mut self, id: PileId) -> bool {
        match self.pile_mut(id).and_then(Pile::top_mut) {
            Some(card) if card.prone() => {
                card.set_prone(false);
                true
            }
            _ => false,
        }
    }

    // === Recycling ===

    #[must_use]
    pub fn recycles(&self) -> u32 {
        self.recycles
    }

    pub fn set_recycles(&mut self, recycles: u32) {
        self.recycles = recycles;
    }

    /// Return every Waste card to the Stock and spend one recycle.
    ///
    /// Cards go back one at a time from the top of the Waste, which
    /// restores the Stock to the order it was dealt in. Returns the number
    /// of recycles left.
    pub fn recycle_waste_to_stock(&mut self) -> Result<u32, MoveError> {
        let (Some(stock), Some(waste)) = (self.stock(), self.waste()) else {
            return Err(MoveError::CannotMoveTo(Category::Stock));
        };
        if self.recycles == 0 {
            return Err(MoveError::NoMoreRecycles);
        }
        if self.is_empty(waste) {
            return Err(MoveError::WasteEmpty);
        }
        while self.move_card(waste, stock).is_some() {}
        self.recycles -= 1;
        Ok(self.recycles)
    }

    // === State capture ===

    #[must_use]
    pub fn capture(&self) -> BoardState {
        BoardState {
            piles: self
                .piles
                .iter()
                .map(|p| PileState {
                    cards: p.cards().iter().map(|c| (c.id(), c.prone())).collect(),
                    label: p.label().to_string(),
                })
                .collect(),
            recycles: self.recycles,
        }
    }

    /// Replace pile contents with a captured state.
    ///
    /// The state must come from a board with the same layout; extra or
    /// missing piles in `state` are ignored.
    pub fn apply(&mut self, state: &BoardState) {
        for (pile, saved) in self.piles.iter_mut().zip(&state.piles) {
            pile.clear();
            pile.set_label(saved.label.clone());
            for &(id, prone) in &saved.cards {
                let mut card = Card::new(id);
                card.set_prone(prone);
                pile.push(card);
            }
        }
        self.recycles = state.recycles;
    }

    // === Invariants ===

    /// Verify card conservation and single ownership.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.layout.stock_count != 1 {
            return Err(InvariantViolation::StockCount(self.layout.stock_count));
        }
        let found = self.card_count();
        if found != self.deal.len() {
            return Err(InvariantViolation::CardCount {
                expected: self.deal.len(),
                found,
            });
        }
        let mut counts: FxHashMap<CardId, i32> = FxHashMap::default();
        for id in &self.deal {
            *counts.entry(*id).or_default() -= 1;
        }
        for pile in &self.piles {
            for card in pile.cards() {
                if card.owner() != Some(pile.id()) {
                    return Err(InvariantViolation::OwnerMismatch {
                        card: card.id(),
                        pile: pile.id(),
                        owner: card.owner(),
                    });
                }
                *counts.entry(card.id()).or_default() += 1;
            }
        }
        // deterministic report order
        let mut off: Vec<_> = counts.into_iter().filter(|&(_, n)| n != 0).collect();
        off.sort_unstable();
        match off.first() {
            None => Ok(()),
            Some(&(id, n)) if n > 0 => Err(InvariantViolation::Duplicate(id)),
            Some(&(id, _)) => Err(InvariantViolation::Missing(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;

    fn stock_and_waste() -> (Board, PileId, PileId) {
        let mut board = Board::new();
        let stock = board.add_pile(Category::Stock, Slot::new(0, 0), FanType::None, MoveType::None);
        let waste = board.add_pile(Category::Waste, Slot::new(1, 0), FanType::Right3, MoveType::One);
        (board, stock, waste)
    }

    #[test]
    fn test_layout_groups() {
        let (mut board, stock, waste) = stock_and_waste();
        let f = board.add_pile(Category::Foundation, Slot::new(3, 0), FanType::None, MoveType::None);
        let t = board.add_pile(Category::Tableau, Slot::new(0, 1), FanType::Down, MoveType::Any);

        assert_eq!(board.stock(), Some(stock));
        assert_eq!(board.waste(), Some(waste));
        assert_eq!(board.foundations(), &[f]);
        assert_eq!(board.tableaux(), &[t]);
        assert!(board.cells().is_empty());
        assert_eq!(board.category(t), Some(Category::Tableau));
    }

    #[test]
    fn test_move_card_flips_around_stock() {
        let (mut board, stock, waste) = stock_and_waste();
        board.load_stock(CardId::full_deal(1, 4));

        let id = board.move_card(stock, waste).unwrap();
        assert_eq!(id, CardId::new(0, Suit::Spade, 13));
        assert!(!board.peek(waste).unwrap().prone());
        assert_eq!(board.peek(waste).unwrap().owner(), Some(waste));

        board.move_card(waste, stock);
        assert!(board.peek(stock).unwrap().prone());
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_move_card_empty_source() {
        let (mut board, stock, waste) = stock_and_waste();
        assert_eq!(board.move_card(waste, stock), None);
        assert_eq!(board.move_card(PileId::new(9), stock), None);
    }

    #[test]
    fn test_move_tail_keeps_order() {
        let (mut board, stock, _) = stock_and_waste();
        let t = board.add_pile(Category::Tableau, Slot::new(0, 1), FanType::Down, MoveType::Any);
        board.load_stock(CardId::full_deal(1, 4));

        let moved = board.move_tail(stock, 49, t);
        assert_eq!(moved, 3);
        let ords: Vec<u8> = board.cards(t).iter().map(Card::ordinal).collect();
        assert_eq!(ords, vec![11, 12, 13]);
        assert_eq!(board.move_tail(stock, 99, t), 0);
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_recycle_restores_stock_order() {
        let (mut board, stock, waste) = stock_and_waste();
        board.load_stock(CardId::full_deal(1, 4));
        board.set_recycles(1);
        let before: Vec<CardId> = board.cards(stock).iter().map(Card::id).collect();

        while board.move_card(stock, waste).is_some() {}
        assert_eq!(board.recycle_waste_to_stock(), Ok(0));

        let after: Vec<CardId> = board.cards(stock).iter().map(Card::id).collect();
        assert_eq!(before, after);
        assert!(board.cards(stock).iter().all(Card::prone));
    }

    #[test]
    fn test_recycle_rules() {
        let (mut board, stock, waste) = stock_and_waste();
        board.load_stock(CardId::full_deal(1, 4));

        board.move_card(stock, waste);
        assert_eq!(board.recycle_waste_to_stock(), Err(MoveError::NoMoreRecycles));

        board.set_recycles(3);
        assert_eq!(board.recycle_waste_to_stock(), Ok(2));
        assert_eq!(board.recycle_waste_to_stock(), Err(MoveError::WasteEmpty));
        assert_eq!(board.recycles(), 2);
    }

    #[test]
    fn test_extract_to() {
        let (mut board, stock, _) = stock_and_waste();
        let f = board.add_pile(Category::Foundation, Slot::new(3, 0), FanType::None, MoveType::None);
        board.load_stock(CardId::full_deal(1, 4));

        let id = board.extract_to(f, |id| id.ordinal == 1 && id.suit == Suit::Heart).unwrap();
        assert_eq!(id, CardId::new(0, Suit::Heart, 1));
        assert_eq!(board.len(stock), 51);
        assert!(!board.peek(f).unwrap().prone());
        assert!(board.check_invariants().is_ok());
    }

    #[test]
    fn test_invariants_detect_loss() {
        let (mut board, stock, _) = stock_and_waste();
        board.load_stock(CardId::full_deal(1, 4));
        board.pile_mut(stock).unwrap().pop();

        assert_eq!(
            board.check_invariants(),
            Err(InvariantViolation::CardCount { expected: 52, found: 51 })
        );
    }

    #[test]
    fn test_invariants_detect_owner_mismatch() {
        let (mut board, stock, waste) = stock_and_waste();
        board.load_stock(CardId::full_deal(1, 4));
        board.pile_mut(stock).unwrap().top_mut().unwrap().set_owner(Some(waste));

        assert!(matches!(
            board.check_invariants(),
            Err(InvariantViolation::OwnerMismatch { .. })
        ));
    }

    #[test]
    fn test_capture_and_apply() {
        let (mut board, stock, waste) = stock_and_waste();
        board.load_stock(CardId::full_deal(1, 4));
        board.set_recycles(2);
        let saved = board.capture();

        board.move_card(stock, waste);
        board.set_recycles(0);
        board.set_label(waste, "x");
        board.apply(&saved);

        assert_eq!(board.capture(), saved);
        assert_eq!(board.recycles(), 2);
        assert!(board.check_invariants().is_ok());
    }
}
