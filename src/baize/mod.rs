//! Game sessions.
//!
//! ## Key Types
//!
//! - `Baize`: one game in progress (board, variant, undo history, notices)
//! - `Notice`: feedback queued for the presentation layer
//! - `SavedBaize`: everything needed to rebuild a session
//! - `History`: bounded undo stack

pub mod history;
pub mod notice;
pub mod session;
pub mod snapshot;

pub use history::History;
pub use notice::Notice;
pub use session::Baize;
pub use snapshot::SavedBaize;
