//! Session configuration.
//!
//! `BaizeConfig` carries the knobs a caller may set when opening a game
//! session. Variant rules are not configured here; they live in the
//! variant records in `crate::variants`.

use serde::{Deserialize, Serialize};

/// Configuration for a `Baize` session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaizeConfig {
    /// Seed for the first deal. Later deals draw seeds from the session RNG.
    pub seed: u64,

    /// Maximum number of undo snapshots kept (0 = unlimited).
    pub history_limit: usize,

    /// Run `collect` automatically after every committed move.
    pub auto_collect: bool,
}

impl Default for BaizeConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            history_limit: 0,
            auto_collect: false,
        }
    }
}

impl BaizeConfig {
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    #[must_use]
    pub fn with_auto_collect(mut self, on: bool) -> Self {
        self.auto_collect = on;
        self
    }
}
