//! Platform services
//!
//! Request-scoped orchestration over the engines, the store, and the
//! external data sources.

pub mod experience;
pub mod feed;

pub use experience::{ExperienceService, XpAwardOutcome};
pub use feed::{
    CatalogSource, FeedPage, FeedService, RatingsSource, SourceError,
    StaticCatalog, StaticRatings, CATALOG_CACHE_TTL_MS,
};
