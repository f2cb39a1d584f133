//! Level summary projection
//!
//! Pure read-side view of a user's experience state, shaped for
//! profile screens and post-award responses.

use serde::{Deserialize, Serialize};

use super::apply::UserXpState;
use super::curve::CurveTable;

/// Progress through the current level, ready for display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub level: u32,
    /// XP into the current level, clamped to the requirement
    pub progress: u32,
    /// XP the current level takes to clear
    pub required: u32,
    /// progress / required, clamped to [0, 1]
    pub percent: f64,
    /// XP still needed to clear the current level
    pub remaining: u32,
    /// Lifetime XP
    pub total: u64,
    pub last_updated: i64,
}

/// Project a summary from a state against the given curve.
///
/// The caller passes whatever curve is currently cached so summaries
/// stay consistent with the schedule active at last load.
pub fn build_summary(state: &UserXpState, curve: &CurveTable) -> LevelSummary {
    let required = curve.required_xp(state.level);
    let progress = state.progress.min(required);
    let percent = if required == 0 {
        0.0
    } else {
        (progress as f64 / required as f64).clamp(0.0, 1.0)
    };
    LevelSummary {
        level: state.level,
        progress,
        required,
        percent,
        remaining: required.saturating_sub(progress),
        total: state.total,
        last_updated: state.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::curve::generate_default_curve;

    #[test]
    fn test_summary_fields() {
        let curve = generate_default_curve();
        let req = curve.required_xp(4);
        let state = UserXpState {
            level: 4,
            progress: req / 2,
            total: 12_345,
            updated_at: 777,
        };
        let summary = build_summary(&state, &curve);
        assert_eq!(summary.level, 4);
        assert_eq!(summary.required, req);
        assert_eq!(summary.remaining, req - req / 2);
        assert!((summary.percent - 0.5).abs() < 0.01);
        assert_eq!(summary.total, 12_345);
        assert_eq!(summary.last_updated, 777);
    }

    #[test]
    fn test_overfull_progress_clamps() {
        // Progress above the requirement can appear when a smaller
        // override curve replaces the one the state was settled under
        let curve = CurveTable::from_required(&[100, 200]);
        let state = UserXpState {
            level: 1,
            progress: 150,
            total: 150,
            updated_at: 0,
        };
        let summary = build_summary(&state, &curve);
        assert_eq!(summary.progress, 100);
        assert_eq!(summary.percent, 1.0);
        assert_eq!(summary.remaining, 0);
    }
}
