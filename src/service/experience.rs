//! Experience service
//!
//! Wires score submissions through XP conversion, the level-up state
//! machine, and the user store's atomic update path.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clock::SharedClock;
use crate::progression::{apply_xp, build_summary, calculate_xp, CurveCache, LevelSummary};
use crate::store::{StoreError, UserStore};

/// Result of an XP award: the settled summary and what was granted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XpAwardOutcome {
    pub summary: LevelSummary,
    pub awarded: u32,
}

/// Applies XP to users and projects level summaries
pub struct ExperienceService {
    store: Arc<dyn UserStore>,
    curves: Arc<CurveCache>,
    clock: SharedClock,
}

impl ExperienceService {
    pub fn new(store: Arc<dyn UserStore>, curves: Arc<CurveCache>, clock: SharedClock) -> Self {
        Self {
            store,
            curves,
            clock,
        }
    }

    /// Convert a session score to XP and apply it to the user
    pub fn award_score(
        &self,
        user_id: &str,
        score: f64,
        multiplier: f64,
    ) -> Result<XpAwardOutcome, StoreError> {
        let xp = calculate_xp(score, multiplier);
        self.apply_xp(user_id, xp)
    }

    /// Apply a precomputed XP amount to the user.
    ///
    /// A zero award is a no-op read: the stored state is untouched but a
    /// summary of it still comes back. Either way a missing user fails
    /// with `UserNotFound`.
    pub fn apply_xp(&self, user_id: &str, xp: u32) -> Result<XpAwardOutcome, StoreError> {
        let now_ms = self.clock.now_ms();
        let curve = self.curves.get(now_ms);

        if xp == 0 {
            let profile = self
                .store
                .get(user_id)
                .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
            return Ok(XpAwardOutcome {
                summary: build_summary(&profile.xp, &curve),
                awarded: 0,
            });
        }

        let settled = self
            .store
            .update_xp(user_id, &|state| apply_xp(state, &curve, xp, now_ms).0)?;
        log::debug!("Awarded {} XP to {} (level {})", xp, user_id, settled.level);

        Ok(XpAwardOutcome {
            summary: build_summary(&settled, &curve),
            awarded: xp,
        })
    }

    /// Read-only level summary, None for an unknown user.
    /// Projected against the currently cached curve.
    pub fn get_summary(&self, user_id: &str) -> Option<LevelSummary> {
        let now_ms = self.clock.now_ms();
        let curve = self.curves.get(now_ms);
        let profile = self.store.get(user_id)?;
        Some(build_summary(&profile.xp, &curve))
    }
}
