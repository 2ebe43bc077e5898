//! Pile categories and their per-category behaviour.
//!
//! Every pile is one of a closed set of categories. Behaviour that differs
//! by category (what a pile accepts, which tails can be picked up, when it is
//! complete) is a `match` on `Category`; behaviour that differs by game is
//! delegated to the active `Variant`.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::pile::{MoveType, Pile};
use crate::core::{any_prone, label_long, ordinal_short, Card, MoveError, PileId, Slot};
use crate::variants::Variant;

/// Start indices of the tails that can be picked up from a pile.
pub type Tails = SmallVec<[usize; 8]>;

/// The closed set of pile kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Stock,
    Waste,
    Foundation,
    Tableau,
    Cell,
    Discard,
    Reserve,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Stock => "Stock",
            Category::Waste => "Waste",
            Category::Foundation => "Foundation",
            Category::Tableau => "Tableau",
            Category::Cell => "Cell",
            Category::Discard => "Discard",
            Category::Reserve => "Reserve",
        };
        f.write_str(name)
    }
}

/// Content-free description of an empty pile, for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    pub pile: PileId,
    pub category: Category,
    pub slot: Slot,
    /// Rank label to draw inside the outline, if any.
    pub label: String,
}

/// Check an empty pile's rank label against the card about to land on it.
///
/// An empty label (or `*`) accepts anything; `x` accepts nothing.
pub fn compare_empty(pile: &Pile, card: &Card) -> Result<(), MoveError> {
    match pile.label() {
        "" | "*" => Ok(()),
        "x" => Err(MoveError::Blocked),
        label => {
            let found = ordinal_short(card.ordinal());
            if found == label {
                Ok(())
            } else {
                Err(MoveError::WrongRank {
                    expected: label_long(label),
                    found: label_long(found),
                })
            }
        }
    }
}

impl Category {
    /// May the pile `dst` accept `tail`?
    ///
    /// Category rules run first; anything they allow is passed to the
    /// variant's append rule.
    pub fn can_accept_tail<V: Variant + ?Sized>(
        self,
        variant: &V,
        board: &Board,
        dst: PileId,
        tail: &[Card],
    ) -> Result<(), MoveError> {
        let pile = board.get(dst)?;
        let Some(lead) = tail.first() else {
            return Err(MoveError::NotMovable);
        };
        match self {
            Category::Stock => return Err(MoveError::CannotMoveTo(self)),
            Category::Waste => {
                if tail.len() > 1 {
                    return Err(MoveError::SingleCardOnly(self));
                }
                if lead.owner().is_none() || lead.owner() != board.stock() {
                    return Err(MoveError::WasteFromStockOnly);
                }
                // drawing is always allowed; the variant is not consulted
                return Ok(());
            }
            Category::Foundation => {
                if tail.len() > 1 {
                    return Err(MoveError::SingleCardOnly(self));
                }
                if any_prone(tail) {
                    return Err(MoveError::FaceDown);
                }
                if self.complete(board, pile) {
                    return Err(MoveError::FoundationFull);
                }
            }
            Category::Tableau => {
                if any_prone(tail) {
                    return Err(MoveError::FaceDown);
                }
            }
            Category::Cell | Category::Reserve => {
                if tail.len() > 1 {
                    return Err(MoveError::SingleCardOnly(self));
                }
                if self == Category::Cell && !pile.is_empty() {
                    return Err(MoveError::CellOccupied);
                }
                if any_prone(tail) {
                    return Err(MoveError::FaceDown);
                }
            }
            Category::Discard => {
                if !pile.is_empty() {
                    return Err(MoveError::Blocked);
                }
                let run = discard_size(board);
                if tail.len() != run {
                    return Err(MoveError::PartialDiscard(run));
                }
                if any_prone(tail) {
                    return Err(MoveError::FaceDown);
                }
            }
        }
        if pile.is_empty() {
            compare_empty(pile, lead)?;
        }
        variant.tail_append_error(board, dst, tail)
    }

    /// Start indices of the tails of `pile` that may currently be picked up,
    /// longest tail first.
    pub fn movable_tails<V: Variant + ?Sized>(self, variant: &V, board: &Board, pile: &Pile) -> Tails {
        let cards = pile.cards();
        let mut tails = Tails::new();
        if cards.is_empty() || self == Category::Stock {
            return tails;
        }
        let top = cards.len() - 1;
        match pile.move_type() {
            MoveType::None => {}
            MoveType::One => {
                if !cards[top].prone() {
                    tails.push(top);
                }
            }
            MoveType::OnePlus => {
                for index in (0..=top).rev() {
                    if cards[index].prone() {
                        break;
                    }
                    if variant.tail_move_error(board, pile.id(), &cards[index..]).is_err() {
                        break;
                    }
                    tails.push(index);
                }
                tails.reverse();
            }
            MoveType::Any => {
                let first_up = cards.iter().rposition(Card::prone).map_or(0, |i| i + 1);
                tails.extend(first_up..=top);
            }
        }
        tails
    }

    /// Is the pile's content fully in order under its own rule?
    #[must_use]
    pub fn conformant<V: Variant + ?Sized>(self, variant: &V, pile: &Pile) -> bool {
        match self {
            Category::Stock | Category::Reserve => pile.is_empty(),
            Category::Waste => pile.len() <= 1,
            Category::Foundation | Category::Cell | Category::Discard => true,
            Category::Tableau => variant.unsorted_pairs(pile) == 0,
        }
    }

    /// Has the pile reached its finished state?
    ///
    /// Foundations and discards are complete when they hold a full run;
    /// every other pile is complete when empty.
    #[must_use]
    pub fn complete(self, board: &Board, pile: &Pile) -> bool {
        match self {
            Category::Foundation => {
                let n = board.foundations().len();
                n > 0 && pile.len() == board.total_cards() / n
            }
            Category::Discard => pile.len() == discard_size(board),
            _ => pile.is_empty(),
        }
    }

    /// Descriptor for drawing the pile when it is empty.
    #[must_use]
    pub fn placeholder(self, pile: &Pile) -> Placeholder {
        Placeholder {
            pile: pile.id(),
            category: self,
            slot: pile.slot(),
            label: pile.label().to_string(),
        }
    }

    /// Default tap behaviour for a card at `index` in `pile`.
    ///
    /// Tapping the Stock draws to the Waste. Tapping a movable card sends it
    /// home: a single card to the first Foundation that accepts it, a full
    /// run to the first Discard that accepts it.
    pub fn tail_tapped<V: Variant + ?Sized>(
        self,
        variant: &V,
        board: &mut Board,
        pile: PileId,
        index: usize,
    ) -> Result<(), MoveError> {
        match self {
            Category::Stock => {
                let waste = board.waste().ok_or(MoveError::CannotMoveFrom(self))?;
                if board.is_empty(pile) {
                    return Err(MoveError::StockEmpty);
                }
                for _ in 0..variant.draw() {
                    if board.move_card(pile, waste).is_none() {
                        break;
                    }
                }
                Ok(())
            }
            Category::Foundation | Category::Discard => Err(MoveError::CannotMoveFrom(self)),
            _ => send_home(variant, board, pile, index),
        }
    }
}

/// Cards in one full Discard run.
pub(crate) fn discard_size(board: &Board) -> usize {
    match board.discards().len() {
        0 => 0,
        n => board.total_cards() / n,
    }
}

/// Move the tail at `index` to the first Foundation or Discard that takes it.
pub(crate) fn send_home<V: Variant + ?Sized>(
    variant: &V,
    board: &mut Board,
    src: PileId,
    index: usize,
) -> Result<(), MoveError> {
    let pile = board.get(src)?;
    let category = pile.category();
    if !category.movable_tails(variant, board, pile).contains(&index) {
        return Err(MoveError::NotMovable);
    }
    let tail = pile.tail(index).ok_or(MoveError::NoSuchCard(src, index))?;
    let lead = tail[0].id();
    let homes = if tail.len() == 1 {
        board.foundations()
    } else {
        board.discards()
    };
    let dst = homes.iter().copied().find(|&dst| {
        board
            .category(dst)
            .is_some_and(|c| c.can_accept_tail(variant, board, dst, tail).is_ok())
    });
    match dst {
        Some(dst) => {
            board.move_tail(src, index, dst);
            Ok(())
        }
        None => Err(MoveError::NoDestination(lead)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, Suit};
    use crate::piles::FanType;

    fn face_up(suit: Suit, ordinal: u8) -> Card {
        let mut c = Card::new(CardId::new(0, suit, ordinal));
        c.set_prone(false);
        c
    }

    fn labelled(label: &str) -> Pile {
        let mut p = Pile::new(PileId::new(1), Category::Cell, Slot::new(0, 0), FanType::None, MoveType::One);
        p.set_label(label);
        p
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::Foundation.to_string(), "Foundation");
        assert_eq!(Category::Stock.to_string(), "Stock");
    }

    #[test]
    fn test_compare_empty_wildcards() {
        let card = face_up(Suit::Club, 7);
        assert!(compare_empty(&labelled(""), &card).is_ok());
        assert!(compare_empty(&labelled("*"), &card).is_ok());
        assert_eq!(compare_empty(&labelled("x"), &card), Err(MoveError::Blocked));
    }

    #[test]
    fn test_compare_empty_rank() {
        assert!(compare_empty(&labelled("K"), &face_up(Suit::Heart, 13)).is_ok());
        assert_eq!(
            compare_empty(&labelled("A"), &face_up(Suit::Heart, 3)),
            Err(MoveError::WrongRank {
                expected: "Ace".into(),
                found: "Three".into()
            })
        );
    }

    #[test]
    fn test_placeholder() {
        let pile = labelled("A");
        let ph = Category::Cell.placeholder(&pile);
        assert_eq!(ph.label, "A");
        assert_eq!(ph.category, Category::Cell);
        assert_eq!(ph.pile, PileId::new(1));
    }
}
