//! # rust-patience
//!
//! A solitaire rule engine: one board model, many games.
//!
//! ## Design Principles
//!
//! 1. **Rules, not rendering**: The engine decides whether a proposed move is
//!    legal and keeps the resulting board. Drawing, input and timing belong
//!    to the caller.
//!
//! 2. **Data-driven variants**: Most games are a family template with
//!    different field values (`FortyThieves` alone covers thirteen named
//!    games).
//!
//! 3. **Explicit sessions**: A `Baize` is an ordinary value owned by the
//!    caller. There is no global board.
//!
//! ## Architecture
//!
//! - **Closed pile categories**: `Category` is an enum; per-category rules
//!   are a `match`, per-game rules go through the `Variant` trait.
//!
//! - **Handles, not pointers**: A card names its pile by `PileId`.
//!
//! - **Transactional moves**: A rejected action leaves the board exactly as
//!   it was; an accepted one is recorded for undo in an `im::Vector`.
//!
//! ## Modules
//!
//! - `core`: Cards, pile handles, RNG, configuration, errors
//! - `compare`: Card-pair comparators
//! - `piles`: Piles, categories and the board
//! - `variants`: The `Variant` trait, family templates and the registry
//! - `baize`: Game sessions, undo, notices and saved games

pub mod core;
pub mod compare;
pub mod piles;
pub mod variants;
pub mod baize;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, Color, Suit,
    PileId, Slot,
    DealRng, DealRngState,
    BaizeConfig,
    MoveError, RestoreError, InvariantViolation,
};

pub use crate::compare::{CardPair, Compare};

pub use crate::piles::{Board, BoardState, Category, FanType, MoveType, Pile, Placeholder};

pub use crate::variants::{
    Variant, Registry,
    Klondike, Freecell, EightOff, FortyThieves, Spider, SimpleSimon, Canfield, Yukon,
};

pub use crate::baize::{Baize, Notice, SavedBaize};
