//! Level-up state machine
//!
//! Applies an XP award to a user's (level, progress, total) state,
//! cascading through level-ups and clamping at the level cap.

use serde::{Deserialize, Serialize};

use super::curve::CurveTable;

/// A user's persisted experience state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserXpState {
    /// Current level, 1-based
    pub level: u32,
    /// XP earned within the current level
    pub progress: u32,
    /// Lifetime XP, including XP absorbed past the level cap
    pub total: u64,
    /// When this state was last rewritten (epoch ms)
    pub updated_at: i64,
}

impl UserXpState {
    /// Fresh level-1 state
    pub fn new(now_ms: i64) -> Self {
        Self {
            level: 1,
            progress: 0,
            total: 0,
            updated_at: now_ms,
        }
    }
}

impl Default for UserXpState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Apply an XP award, returning the settled state and the amount awarded.
///
/// Consumes XP level by level: finishing a level resets progress to 0 and
/// may cascade through several levels in one call. At the table's top
/// level, progress absorbs the remainder but clamps at that level's
/// requirement. Lifetime total grows by the full award either way.
/// A zero award is a no-op read: the state comes back untouched.
pub fn apply_xp(state: UserXpState, curve: &CurveTable, xp: u32, now_ms: i64) -> (UserXpState, u32) {
    if xp == 0 {
        return (state, 0);
    }

    let max_level = curve.max_level();
    let mut level = state.level.clamp(1, max_level);
    let mut progress = state.progress;
    let mut remaining = xp;

    while remaining > 0 {
        let required = curve.required_xp(level);
        if level >= max_level {
            progress = progress.saturating_add(remaining).min(required);
            break;
        }
        let to_next = required.saturating_sub(progress);
        if remaining >= to_next {
            remaining -= to_next;
            level += 1;
            progress = 0;
        } else {
            progress += remaining;
            remaining = 0;
        }
    }

    let settled = UserXpState {
        level,
        progress,
        total: state.total + xp as u64,
        updated_at: now_ms,
    };
    (settled, xp)
}
