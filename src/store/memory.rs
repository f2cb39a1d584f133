//! In-memory user store
//!
//! HashMap behind a RwLock; the default store for tests and the demo.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::progression::UserXpState;
use super::{StoreError, UserProfile, UserStore};

/// Process-local store of user profiles
#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

impl UserStore for MemoryStore {
    fn get(&self, user_id: &str) -> Option<UserProfile> {
        self.users.read().get(user_id).cloned()
    }

    fn put(&self, profile: UserProfile) {
        self.users.write().insert(profile.user_id.clone(), profile);
    }

    fn update_xp(
        &self,
        user_id: &str,
        apply: &dyn Fn(UserXpState) -> UserXpState,
    ) -> Result<UserXpState, StoreError> {
        // One write lock covers read-transform-write
        let mut users = self.users.write();
        let profile = users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
        profile.xp = apply(profile.xp);
        Ok(profile.xp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_roundtrip() {
        let store = MemoryStore::new();
        let profile = UserProfile::new("u1", "Alice", 0);
        store.put(profile.clone());
        assert_eq!(store.get("u1"), Some(profile));
        assert_eq!(store.get("u2"), None);
    }

    #[test]
    fn test_update_xp_missing_user() {
        let store = MemoryStore::new();
        let result = store.update_xp("ghost", &|xp| xp);
        assert!(matches!(result, Err(StoreError::UserNotFound(_))));
    }

    #[test]
    fn test_update_xp_rewrites_state() {
        let store = MemoryStore::new();
        store.put(UserProfile::new("u1", "Alice", 0));
        let updated = store
            .update_xp("u1", &|mut xp| {
                xp.total += 100;
                xp.progress += 100;
                xp
            })
            .unwrap();
        assert_eq!(updated.total, 100);
        assert_eq!(store.get("u1").unwrap().xp.total, 100);
    }
}
