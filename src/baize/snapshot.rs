//! Saved games.
//!
//! A `SavedBaize` records the variant name, the deal seed, the session RNG
//! position and every pile's cards with their face state. It is plain serde
//! data; `to_bytes`/`from_bytes` give a compact bincode encoding.

use serde::{Deserialize, Serialize};

use crate::core::{DealRngState, RestoreError};
use crate::piles::BoardState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBaize {
    pub variant: String,
    /// Seed the current deal was shuffled with.
    pub seed: u64,
    /// Session RNG, for drawing the seeds of later deals.
    pub rng: DealRngState,
    pub state: BoardState,
}

impl SavedBaize {
    pub fn to_bytes(&self) -> Result<Vec<u8>, RestoreError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RestoreError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CardId, Suit};
    use crate::piles::PileState;

    #[test]
    fn test_bytes_round_trip() {
        let saved = SavedBaize {
            variant: "Klondike".into(),
            seed: 9,
            rng: DealRngState { seed: 9, word_pos: 16 },
            state: BoardState {
                piles: vec![PileState {
                    cards: vec![(CardId::new(0, Suit::Club, 1), true)],
                    label: "A".into(),
                }],
                recycles: 2,
            },
        };
        let bytes = saved.to_bytes().unwrap();
        assert_eq!(SavedBaize::from_bytes(&bytes).unwrap(), saved);
    }

    #[test]
    fn test_garbage_is_codec_error() {
        assert!(matches!(
            SavedBaize::from_bytes(&[0xff, 0xff]),
            Err(RestoreError::Codec(_))
        ));
    }
}
