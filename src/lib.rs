//! Playdeck - core engines for a casual-games platform
//!
//! Experience and leveling, rating aggregation, and the feed ranking
//! pipeline that scores and interleaves the game catalog.

pub mod clock;
pub mod cache;
pub mod progression;
pub mod ratings;
pub mod feed;
pub mod store;
pub mod service;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use progression::{calculate_xp, CurveCache, LevelSummary, UserXpState};
pub use feed::{FeedReason, GameConfig, ScoredGame};
pub use service::{ExperienceService, FeedPage, FeedService};
pub use store::{MemoryStore, StoreError, UserProfile, UserStore};
