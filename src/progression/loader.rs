//! Level curve loading
//!
//! Loads the level schedule from an external override source, with
//! fallback to the generated default curve. Loaded tables are cached
//! process-wide with a TTL.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::TtlCache;
use super::curve::{generate_default_curve, CurveTable};

/// Default curve cache TTL: 5 minutes
pub const CURVE_CACHE_TTL_MS: i64 = 5 * 60 * 1000;

/// Why an override source could not supply a curve
#[derive(Debug, Error)]
pub enum CurveSourceError {
    #[error("curve source unavailable: {0}")]
    Unavailable(String),
    #[error("curve data malformed: {0}")]
    Malformed(String),
}

/// An external source of raw (level, required XP) pairs
pub trait CurveSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<(u32, u32)>, CurveSourceError>;
}

/// One row of a RON override file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverrideRow {
    pub level: u32,
    pub required_xp: u32,
}

/// Reads the level schedule from a RON file
pub struct RonCurveSource {
    path: PathBuf,
}

impl RonCurveSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl CurveSource for RonCurveSource {
    fn fetch(&self) -> Result<Vec<(u32, u32)>, CurveSourceError> {
        let content = fs::read_to_string(&self.path)
            .map_err(|e| CurveSourceError::Unavailable(e.to_string()))?;
        let rows: Vec<OverrideRow> = ron::from_str(&content)
            .map_err(|e| CurveSourceError::Malformed(e.to_string()))?;
        Ok(rows.into_iter().map(|r| (r.level, r.required_xp)).collect())
    }
}

/// Normalize raw override pairs into a well-formed table.
///
/// Filters out invalid pairs, dedupes by level keeping the first
/// occurrence, sorts ascending, and recomputes the cumulative column
/// from scratch — any stored cumulative value is ignored. Returns None
/// when no valid rows survive.
fn normalize(mut pairs: Vec<(u32, u32)>) -> Option<CurveTable> {
    pairs.retain(|&(level, required)| level >= 1 && required > 0);
    pairs.sort_by_key(|&(level, _)| level);
    pairs.dedup_by_key(|&mut (level, _)| level);
    if pairs.is_empty() {
        return None;
    }
    let required: Vec<u32> = pairs.iter().map(|&(_, req)| req).collect();
    Some(CurveTable::from_required(&required))
}

/// Process-wide curve cache with optional override source.
///
/// `get` never fails: a broken or empty override source degrades to the
/// generated default with a logged warning.
pub struct CurveCache {
    source: Option<Box<dyn CurveSource>>,
    cache: TtlCache<Arc<CurveTable>>,
}

impl CurveCache {
    /// Cache serving only the generated default curve
    pub fn new() -> Self {
        Self::with_ttl(None, CURVE_CACHE_TTL_MS)
    }

    /// Cache backed by an override source
    pub fn with_source(source: Box<dyn CurveSource>) -> Self {
        Self::with_ttl(Some(source), CURVE_CACHE_TTL_MS)
    }

    /// Full control over source and TTL, for tests
    pub fn with_ttl(source: Option<Box<dyn CurveSource>>, ttl_ms: i64) -> Self {
        Self {
            source,
            cache: TtlCache::new(ttl_ms),
        }
    }

    /// The curve active right now, loading on cache miss
    pub fn get(&self, now_ms: i64) -> Arc<CurveTable> {
        self.cache.get_or_refresh(now_ms, || Arc::new(self.load()))
    }

    /// Drop the cached table so the next get reloads
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    fn load(&self) -> CurveTable {
        let source = match &self.source {
            Some(source) => source,
            None => return generate_default_curve(),
        };
        match source.fetch() {
            Ok(pairs) => match normalize(pairs) {
                Some(table) => {
                    log::info!("Level curve loaded from override source ({} levels)", table.max_level());
                    table
                }
                None => {
                    log::warn!("Curve override source returned no valid rows, using default curve");
                    generate_default_curve()
                }
            },
            Err(e) => {
                log::warn!("Curve override source failed ({}), using default curve", e);
                generate_default_curve()
            }
        }
    }
}

impl Default for CurveCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::curve::MAX_LEVEL;

    struct StaticSource(Vec<(u32, u32)>);

    impl CurveSource for StaticSource {
        fn fetch(&self) -> Result<Vec<(u32, u32)>, CurveSourceError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    impl CurveSource for FailingSource {
        fn fetch(&self) -> Result<Vec<(u32, u32)>, CurveSourceError> {
            Err(CurveSourceError::Unavailable("connection refused".into()))
        }
    }

    #[test]
    fn test_no_source_serves_default() {
        let cache = CurveCache::new();
        let curve = cache.get(0);
        assert_eq!(curve.max_level(), MAX_LEVEL);
    }

    #[test]
    fn test_override_normalized_and_cumulative_recomputed() {
        // Unsorted, with an invalid row and a duplicate level
        let source = StaticSource(vec![(2, 250), (1, 100), (3, 0), (2, 999), (4, 400)]);
        let cache = CurveCache::with_ttl(Some(Box::new(source)), 1_000);
        let curve = cache.get(0);
        assert_eq!(curve.max_level(), 3);
        assert_eq!(curve.required_xp(1), 100);
        assert_eq!(curve.required_xp(2), 250);
        assert_eq!(curve.cumulative_xp(3), 100 + 250 + 400);
    }

    #[test]
    fn test_failing_source_falls_back_silently() {
        let cache = CurveCache::with_ttl(Some(Box::new(FailingSource)), 1_000);
        let curve = cache.get(0);
        assert_eq!(curve.max_level(), MAX_LEVEL);
    }

    #[test]
    fn test_empty_source_falls_back() {
        let source = StaticSource(vec![(0, 100), (5, 0)]);
        let cache = CurveCache::with_ttl(Some(Box::new(source)), 1_000);
        let curve = cache.get(0);
        assert_eq!(curve.max_level(), MAX_LEVEL);
    }

    #[test]
    fn test_cache_serves_same_table_within_ttl() {
        let source = StaticSource(vec![(1, 100)]);
        let cache = CurveCache::with_ttl(Some(Box::new(source)), 1_000);
        let first = cache.get(0);
        let second = cache.get(500);
        assert!(Arc::ptr_eq(&first, &second));
        // Expired: reloaded into a fresh allocation
        let third = cache.get(2_000);
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(*first, *third);
    }

    #[test]
    fn test_ron_source_roundtrip() {
        let dir = std::env::temp_dir().join("playdeck-curve-test");
        let _ = fs::create_dir_all(&dir);
        let path = dir.join("levels.ron");
        let rows = vec![
            OverrideRow { level: 1, required_xp: 10 },
            OverrideRow { level: 2, required_xp: 20 },
        ];
        let text = ron::ser::to_string_pretty(&rows, ron::ser::PrettyConfig::default()).unwrap();
        fs::write(&path, text).unwrap();

        let source = RonCurveSource::new(&path);
        assert_eq!(source.fetch().unwrap(), vec![(1, 10), (2, 20)]);
    }
}
