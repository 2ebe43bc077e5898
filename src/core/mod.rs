//! Core engine types: cards, pile handles, RNG, configuration, errors.
//!
//! This module holds the building blocks shared by every variant. Nothing
//! here knows about particular games.

pub mod card;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

pub use card::{
    any_prone, label_long, ordinal_long, ordinal_short, Card, CardId, Color, Suit, ACE, KING, RANKS_PER_SUIT,
};
pub use config::BaizeConfig;
pub use error::{InvariantViolation, MoveError, RestoreError};
pub use ids::{PileId, Slot};
pub use rng::{DealRng, DealRngState};
