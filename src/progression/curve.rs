//! Level curve
//!
//! The monotonic schedule of XP required per level, generated from a
//! power-law formula or normalized from an external override table.

use serde::{Deserialize, Serialize};

/// Highest reachable level
pub const MAX_LEVEL: u32 = 100;

/// Flat XP floor for every level
pub const BASE: f64 = 1100.0;
/// Scale on the power term
pub const GROWTH_FACTOR: f64 = 140.0;
/// Exponent; > 1 keeps required XP strictly increasing
pub const CURVE: f64 = 1.35;

/// One row of the level schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRow {
    /// Level this row describes (1-based)
    pub level: u32,
    /// XP needed to clear this level
    pub required_xp: u32,
    /// XP needed to clear levels 1 through this one
    pub cumulative_xp: u64,
}

/// The full level schedule, one row per level, ascending and contiguous
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveTable {
    rows: Vec<LevelRow>,
}

/// XP needed to clear a single level under the default formula
pub fn required_xp_for_level(level: u32) -> u32 {
    (BASE + GROWTH_FACTOR * (level as f64).powf(CURVE)).round() as u32
}

/// Generate the default curve from the formula constants
pub fn generate_default_curve() -> CurveTable {
    let required: Vec<u32> = (1..=MAX_LEVEL).map(required_xp_for_level).collect();
    CurveTable::from_required(&required)
}

impl CurveTable {
    /// Build a table from per-level requirements, recomputing the
    /// running cumulative sum from scratch
    pub fn from_required(required: &[u32]) -> Self {
        let mut rows = Vec::with_capacity(required.len());
        let mut cumulative: u64 = 0;
        for (i, &req) in required.iter().enumerate() {
            cumulative += req as u64;
            rows.push(LevelRow {
                level: i as u32 + 1,
                required_xp: req,
                cumulative_xp: cumulative,
            });
        }
        Self { rows }
    }

    /// Number of levels in the table
    pub fn max_level(&self) -> u32 {
        self.rows.len() as u32
    }

    /// XP needed to clear the given level; out-of-range levels clamp
    /// to the nearest table edge
    pub fn required_xp(&self, level: u32) -> u32 {
        let idx = level.clamp(1, self.max_level()) as usize - 1;
        self.rows[idx].required_xp
    }

    /// XP needed to clear levels 1 through the given level
    pub fn cumulative_xp(&self, level: u32) -> u64 {
        if level == 0 {
            return 0;
        }
        let idx = level.clamp(1, self.max_level()) as usize - 1;
        self.rows[idx].cumulative_xp
    }

    /// All rows, ascending by level
    pub fn rows(&self) -> &[LevelRow] {
        &self.rows
    }
}

impl Default for CurveTable {
    fn default() -> Self {
        generate_default_curve()
    }
}
