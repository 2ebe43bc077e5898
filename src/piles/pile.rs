//! A single pile of cards.
//!
//! Cards are ordered base first: index 0 is the bottom card, the last index
//! is the visible top. A *tail* is the suffix starting at some index.

use serde::{Deserialize, Serialize};

use super::category::Category;
use crate::core::{Card, PileId, Slot};

/// How cards fan out from the pile's slot. Presentation only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FanType {
    #[default]
    None,
    Down,
    Right,
    /// Only the top three cards are fanned.
    Right3,
}

/// Which tails of a pile may be picked up.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    /// Nothing can be dragged.
    #[default]
    None,
    /// Only the top card.
    One,
    /// Any suffix the variant accepts as a run.
    OnePlus,
    /// Any face-up suffix, whatever its order.
    Any,
}

/// An ordered pile of cards with its category and layout attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pile {
    id: PileId,
    category: Category,
    slot: Slot,
    fan: FanType,
    move_type: MoveType,
    label: String,
    cards: Vec<Card>,
}

impl Pile {
    #[must_use]
    pub fn new(id: PileId, category: Category, slot: Slot, fan: FanType, move_type: MoveType) -> Self {
        Self {
            id,
            category,
            slot,
            fan,
            move_type,
            label: String::new(),
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> PileId {
        self.id
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub const fn slot(&self) -> Slot {
        self.slot
    }

    #[must_use]
    pub const fn fan(&self) -> FanType {
        self.fan
    }

    #[must_use]
    pub const fn move_type(&self) -> MoveType {
        self.move_type
    }

    /// Rank label constraining what an empty pile accepts ("" = anything).
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// The suffix starting at `index`, or `None` if `index` is past the top.
    #[must_use]
    pub fn tail(&self, index: usize) -> Option<&[Card]> {
        if index < self.cards.len() {
            Some(&self.cards[index..])
        } else {
            None
        }
    }

    /// Add a card to the top, taking ownership of it.
    pub(crate) fn push(&mut self, mut card: Card) {
        card.set_owner(Some(self.id));
        self.cards.push(card);
    }

    /// Remove the top card, clearing its owner.
    pub(crate) fn pop(&mut self) -> Option<Card> {
        let mut card = self.cards.pop()?;
        card.set_owner(None);
        Some(card)
    }

    /// Remove the tail starting at `index`, in base-to-top order.
    pub(crate) fn split_off(&mut self, index: usize) -> Vec<Card> {
        let mut tail = self.cards.split_off(index);
        for card in &mut tail {
            card.set_owner(None);
        }
        tail
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub(crate) fn clear(&mut self) -> Vec<Card> {
        self.split_off(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, Suit};

    fn pile() -> Pile {
        Pile::new(PileId::new(2), Category::Tableau, Slot::new(1, 1), FanType::Down, MoveType::OnePlus)
    }

    #[test]
    fn test_push_sets_owner() {
        let mut p = pile();
        p.push(Card::new(CardId::new(0, Suit::Heart, 5)));

        assert_eq!(p.len(), 1);
        assert_eq!(p.peek().unwrap().owner(), Some(PileId::new(2)));
    }

    #[test]
    fn test_pop_clears_owner() {
        let mut p = pile();
        p.push(Card::new(CardId::new(0, Suit::Heart, 5)));

        let card = p.pop().unwrap();
        assert_eq!(card.owner(), None);
        assert!(p.is_empty());
        assert!(p.pop().is_none());
    }

    #[test]
    fn test_tail_and_split() {
        let mut p = pile();
        for o in [9, 8, 7] {
            p.push(Card::new(CardId::new(0, Suit::Club, o)));
        }

        assert_eq!(p.tail(1).unwrap().len(), 2);
        assert!(p.tail(3).is_none());

        let tail = p.split_off(1);
        assert_eq!(tail.iter().map(Card::ordinal).collect::<Vec<_>>(), vec![8, 7]);
        assert!(tail.iter().all(|c| c.owner().is_none()));
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_label() {
        let mut p = pile();
        assert_eq!(p.label(), "");
        p.set_label("K");
        assert_eq!(p.label(), "K");
    }
}
