//! Core domain logic for the bowling series tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - The pin/roll/frame/game/series model, validated at construction
//! - Scoring: official ten-pin derivation with strike/spare lookahead
//! - Statistics: collection-wide rates and pin-combination coverage
//!
//! Everything here is pure computation over in-memory data; persistence
//! and presentation live in the surrounding crates.

mod frame;
mod game;
mod score;
mod series;
mod split;
mod stats;
pub mod types;

pub use frame::{Frame, FrameError, Roll};
pub use game::{Game, GameError};
pub use score::{GameScore, score};
pub use series::Series;
pub use split::is_split;
pub use stats::{Rate, SeriesStats, compute_stats, coverage};
pub use types::{Pin, SeriesId, SeriesTag, ValidationError};
