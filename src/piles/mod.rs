//! Piles, pile categories and the board that holds them.
//!
//! ## Key Types
//!
//! - `Pile`: ordered cards plus layout attributes (slot, fan, move type, label)
//! - `Category`: the closed set of pile kinds with their shared rules
//! - `Board`: every pile in a game, grouped by category in a `Layout`
//! - `BoardState`: captured pile contents for undo and saved games

pub mod board;
pub mod category;
pub mod pile;

pub use board::{Board, BoardState, Layout, PileState};
pub use category::{compare_empty, Category, Placeholder, Tails};
pub use pile::{FanType, MoveType, Pile};
