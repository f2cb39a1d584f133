//! Feed service
//!
//! Pulls the game catalog and rating aggregates, runs scoring and
//! interleaving, and shapes the ranked page. Source failures degrade
//! to absent data; a feed request never errors.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::TtlCache;
use crate::clock::SharedClock;
use crate::feed::{interleave, score_games, GameConfig, ScoredGame};
use crate::ratings::RatingAggregate;

/// Default catalog cache TTL: one minute
pub const CATALOG_CACHE_TTL_MS: i64 = 60 * 1000;

/// Why a feed input source produced nothing
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies the game catalog
pub trait CatalogSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<GameConfig>, SourceError>;
}

/// Supplies rating aggregates
pub trait RatingsSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<RatingAggregate>, SourceError>;
}

/// Fixed in-memory catalog, for tests and the demo
pub struct StaticCatalog(pub Vec<GameConfig>);

impl CatalogSource for StaticCatalog {
    fn fetch(&self) -> Result<Vec<GameConfig>, SourceError> {
        Ok(self.0.clone())
    }
}

/// Fixed in-memory ratings, for tests and the demo
pub struct StaticRatings(pub Vec<RatingAggregate>);

impl RatingsSource for StaticRatings {
    fn fetch(&self) -> Result<Vec<RatingAggregate>, SourceError> {
        Ok(self.0.clone())
    }
}

/// One ranked page of the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    /// Ranked entries, truncated to the requested limit
    pub entries: Vec<ScoredGame>,
    /// How many games were scored before truncation
    pub total: usize,
}

impl FeedPage {
    /// Game ids in rank order
    pub fn game_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.game_id.as_str()).collect()
    }
}

/// Computes ranked feeds from catalog and rating sources
pub struct FeedService {
    catalog: Box<dyn CatalogSource>,
    ratings: Box<dyn RatingsSource>,
    catalog_cache: TtlCache<Arc<Vec<GameConfig>>>,
    clock: SharedClock,
}

impl FeedService {
    pub fn new(
        catalog: Box<dyn CatalogSource>,
        ratings: Box<dyn RatingsSource>,
        clock: SharedClock,
    ) -> Self {
        Self::with_catalog_ttl(catalog, ratings, clock, CATALOG_CACHE_TTL_MS)
    }

    /// Full control over the catalog cache TTL, for tests
    pub fn with_catalog_ttl(
        catalog: Box<dyn CatalogSource>,
        ratings: Box<dyn RatingsSource>,
        clock: SharedClock,
        catalog_ttl_ms: i64,
    ) -> Self {
        Self {
            catalog,
            ratings,
            catalog_cache: TtlCache::new(catalog_ttl_ms),
            clock,
        }
    }

    /// Compute the ranked feed for one request.
    ///
    /// Catalog failure yields an empty page, ratings failure drops only
    /// the rating signals; neither surfaces as an error.
    pub fn compute_feed(
        &self,
        recent_game_ids: &[String],
        is_beta_tester: bool,
        limit: usize,
    ) -> FeedPage {
        let now_ms = self.clock.now_ms();
        let games = self.load_catalog(now_ms);
        let ratings = self.load_ratings();

        let scored = score_games(&games, &ratings, recent_game_ids, is_beta_tester, now_ms);
        let total = scored.len();
        let mut entries = interleave(scored);
        entries.truncate(limit);

        FeedPage { entries, total }
    }

    /// Drop the cached catalog so the next request refetches
    pub fn invalidate_catalog(&self) {
        self.catalog_cache.invalidate();
    }

    /// Catalog through its TTL cache; stale within the TTL is accepted
    fn load_catalog(&self, now_ms: i64) -> Arc<Vec<GameConfig>> {
        self.catalog_cache.get_or_refresh(now_ms, || {
            match self.catalog.fetch() {
                Ok(games) => Arc::new(games),
                Err(e) => {
                    log::warn!("Game catalog unavailable ({}), serving empty feed", e);
                    Arc::new(Vec::new())
                }
            }
        })
    }

    fn load_ratings(&self) -> HashMap<String, RatingAggregate> {
        match self.ratings.fetch() {
            Ok(aggregates) => aggregates
                .into_iter()
                .map(|agg| (agg.game_id.clone(), agg))
                .collect(),
            Err(e) => {
                log::warn!("Ratings unavailable ({}), scoring without rating signals", e);
                HashMap::new()
            }
        }
    }
}
