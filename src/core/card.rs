//! Card identity and runtime card state.
//!
//! A `CardId` is fixed for the life of a deal: pack index, suit and ordinal
//! (1 = Ace ... 13 = King). A `Card` wraps its id with the two pieces of
//! state that change during play: whether it is face down (`prone`) and
//! which pile currently owns it.
//!
//! ## Usage
//!
//! ```
//! use rust_patience::core::{Card, CardId, Suit};
//!
//! let mut card = Card::new(CardId::new(0, Suit::Heart, 12));
//! assert!(card.prone());
//! assert!(!card.is_black());
//!
//! card.flip();
//! assert!(!card.prone());
//! assert_eq!(card.to_string(), "Q♥");
//! ```

use serde::{Deserialize, Serialize};

use super::ids::PileId;

/// Lowest ordinal in a suit.
pub const ACE: u8 = 1;

/// Highest ordinal in a suit.
pub const KING: u8 = 13;

/// Number of ranks in one suit of one pack.
pub const RANKS_PER_SUIT: usize = 13;

/// Card colour, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits in dealing order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Suits used by a game that plays with `count` suits.
    ///
    /// One-suit games use Spades, two-suit games Spades and Hearts, and
    /// anything else the full set.
    ///
    /// ```
    /// use rust_patience::core::Suit;
    ///
    /// assert_eq!(Suit::in_use(1), &[Suit::Spade]);
    /// assert_eq!(Suit::in_use(2), &[Suit::Spade, Suit::Heart]);
    /// assert_eq!(Suit::in_use(4).len(), 4);
    /// ```
    #[must_use]
    pub fn in_use(count: usize) -> &'static [Suit] {
        match count {
            1 => &[Suit::Spade],
            2 => &[Suit::Spade, Suit::Heart],
            _ => &Suit::ALL,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Club | Suit::Spade => Color::Black,
            Suit::Diamond | Suit::Heart => Color::Red,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

/// Short rank name used by pile labels ("A", "2" ... "10", "J", "Q", "K").
///
/// Returns an empty string for an out-of-range ordinal.
#[must_use]
pub fn ordinal_short(ordinal: u8) -> &'static str {
    const SHORT: [&str; 14] = ["", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"];
    SHORT.get(ordinal as usize).copied().unwrap_or("")
}

/// Long rank name for player-facing messages.
#[must_use]
pub fn ordinal_long(ordinal: u8) -> &'static str {
    const LONG: [&str; 14] = [
        "", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
        "Queen", "King",
    ];
    LONG.get(ordinal as usize).copied().unwrap_or("")
}

/// Long rank name for a short label, or the label itself if it is not a rank.
#[must_use]
pub fn label_long(label: &str) -> String {
    (ACE..=KING)
        .find(|&o| ordinal_short(o) == label)
        .map_or_else(|| label.to_string(), |o| ordinal_long(o).to_string())
}

/// Immutable identity of one physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub pack: u8,
    pub suit: Suit,
    pub ordinal: u8,
}

impl CardId {
    /// Create a card id.
    ///
    /// Panics if `ordinal` is outside 1..=13.
    #[must_use]
    pub fn new(pack: u8, suit: Suit, ordinal: u8) -> Self {
        assert!((ACE..=KING).contains(&ordinal), "ordinal {} out of range", ordinal);
        Self { pack, suit, ordinal }
    }

    /// Every card id in a deal of `packs` packs using `suits` suits.
    ///
    /// Ordered pack by pack, suit by suit, Ace to King.
    #[must_use]
    pub fn full_deal(packs: usize, suits: usize) -> Vec<CardId> {
        let suits = Suit::in_use(suits);
        let mut ids = Vec::with_capacity(packs * suits.len() * RANKS_PER_SUIT);
        for pack in 0..packs {
            for &suit in suits {
                for ordinal in ACE..=KING {
                    ids.push(CardId::new(pack as u8, suit, ordinal));
                }
            }
        }
        ids
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", ordinal_short(self.ordinal), self.suit.symbol())
    }
}

/// A card on the baize.
///
/// The owner is a non-owning handle: the pile holding the card is
/// authoritative, and whoever moves the card keeps `owner` in step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    prone: bool,
    owner: Option<PileId>,
}

impl Card {
    /// Create a face-down card that is not yet in any pile.
    #[must_use]
    pub const fn new(id: CardId) -> Self {
        Self { id, prone: true, owner: None }
    }

    #[must_use]
    pub const fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub const fn ordinal(&self) -> u8 {
        self.id.ordinal
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.id.suit
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.id.suit.color()
    }

    #[must_use]
    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    /// Is this card face down?
    #[must_use]
    pub const fn prone(&self) -> bool {
        self.prone
    }

    pub fn set_prone(&mut self, prone: bool) {
        self.prone = prone;
    }

    /// Turn the card over.
    pub fn flip(&mut self) {
        self.prone = !self.prone;
    }

    /// The pile currently holding this card.
    #[must_use]
    pub const fn owner(&self) -> Option<PileId> {
        self.owner
    }

    /// Reassign the owner handle. No validation.
    pub fn set_owner(&mut self, owner: Option<PileId>) {
        self.owner = owner;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// True if any card in the slice is face down.
#[must_use]
pub fn any_prone(cards: &[Card]) -> bool {
    cards.iter().any(Card::prone)
}
