//! User storage
//!
//! The persistence boundary for user profiles and XP state. Engines see
//! only the `UserStore` trait; the platform ships an in-memory store
//! and a JSON file-backed store.

pub mod memory;
pub mod file;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progression::UserXpState;

pub use memory::MemoryStore;
pub use file::FileStore;

/// Storage failures surfaced to the services
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("storage I/O error: {0}")]
    Io(String),
}

/// A stored user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    /// Grants visibility of beta-only catalog entries
    #[serde(default)]
    pub beta_tester: bool,
    pub xp: UserXpState,
    pub created_at: i64,
}

impl UserProfile {
    /// Fresh profile at level 1
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>, now_ms: i64) -> Self {
        let user_id = user_id.into();
        Self {
            user_id,
            display_name: display_name.into(),
            beta_tester: false,
            xp: UserXpState::new(now_ms),
            created_at: now_ms,
        }
    }
}

/// Store of user profiles keyed by user id.
///
/// `update_xp` is the one mutating path the experience engine uses: a
/// single conditional rewrite of the XP triple, guarded by existence.
/// A missing user fails with `UserNotFound` and is never retried.
pub trait UserStore: Send + Sync {
    /// Fetch a profile, if the user exists
    fn get(&self, user_id: &str) -> Option<UserProfile>;

    /// Create or replace a profile
    fn put(&self, profile: UserProfile);

    /// Atomically rewrite a user's XP state through `apply`.
    /// The read, transform, and write happen under one guard so
    /// concurrent submissions for the same user cannot lose updates.
    fn update_xp(
        &self,
        user_id: &str,
        apply: &dyn Fn(UserXpState) -> UserXpState,
    ) -> Result<UserXpState, StoreError>;
}
