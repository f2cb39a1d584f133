//! Feed ranking
//!
//! Scores games by weighted signals and interleaves the result for
//! head-of-feed diversity.

pub mod config;
pub mod scoring;
pub mod variety;
pub mod interleave;

pub use config::{Campaign, GameConfig, GameMetadata};
pub use scoring::{score_game, score_games, FeedReason, ScoredGame};
pub use variety::daily_variety_boost;
pub use interleave::{interleave, BUCKET_ORDER};
