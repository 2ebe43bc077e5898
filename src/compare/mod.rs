//! Comparator library for validating card sequences.
//!
//! ## Key Types
//!
//! - `CardPair`: two adjacent cards, base first
//! - `Compare`: the named comparator family (`Up`, `DownAltColor`,
//!   `DownSuitWrap`, ...)
//! - `unsorted_pairs`: progress metric over a run of cards

pub mod pair;

pub use pair::{pairs, unsorted_pairs, CardPair, Compare};
