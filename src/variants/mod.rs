//! Game rule sets.
//!
//! ## Key Types
//!
//! - `Variant`: the rule-set trait (layout, deal, legality, taps)
//! - Family templates: `Klondike`, `Freecell`, `EightOff`, `FortyThieves`,
//!   `Spider`, `SimpleSimon`, `Canfield`, `Yukon`
//! - `Registry`: named catalog plus picker groups
//!
//! Most named games are one family template with different field values;
//! see `Registry::standard`.

pub mod canfield;
pub mod forty_thieves;
pub mod freecell;
pub mod klondike;
pub mod registry;
pub mod script;
pub mod simple_simon;
pub mod spider;
pub mod variant;
pub mod yukon;

pub use canfield::Canfield;
pub use forty_thieves::FortyThieves;
pub use freecell::{EightOff, Freecell};
pub use klondike::Klondike;
pub use registry::{Registry, ALL_GROUP};
pub use simple_simon::SimpleSimon;
pub use spider::Spider;
pub use variant::Variant;
pub use yukon::Yukon;
