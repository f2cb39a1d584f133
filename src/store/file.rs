//! JSON file-backed user store
//!
//! Persists the full profile map as one JSON snapshot in the platform
//! data directory, written through on every mutation. A corrupt or
//! missing snapshot starts the store empty with a logged warning.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::progression::UserXpState;
use super::{StoreError, UserProfile, UserStore};

/// Where the user snapshot lives by default
fn default_store_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "playdeck", "Playdeck") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("users.json");
        path
    } else {
        PathBuf::from("./users.json")
    }
}

/// Durable store of user profiles
pub struct FileStore {
    path: PathBuf,
    users: RwLock<HashMap<String, UserProfile>>,
}

impl FileStore {
    /// Open the store at the platform data directory
    pub fn open() -> Self {
        Self::open_at(default_store_path())
    }

    /// Open the store at an explicit path
    pub fn open_at(path: PathBuf) -> Self {
        let users = load_snapshot(&path);
        Self {
            path,
            users: RwLock::new(users),
        }
    }

    /// Write the current map to disk; called with the write lock held
    fn flush(&self, users: &HashMap<String, UserProfile>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(users).map_err(|e| StoreError::Io(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| StoreError::Io(e.to_string()))
    }
}

fn load_snapshot(path: &Path) -> HashMap<String, UserProfile> {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(users) => {
                    log::info!("User store loaded from {:?}", path);
                    return users;
                }
                Err(e) => {
                    log::warn!("Failed to parse user store: {}, starting empty", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read user store: {}, starting empty", e);
            }
        }
    }
    HashMap::new()
}

impl UserStore for FileStore {
    fn get(&self, user_id: &str) -> Option<UserProfile> {
        self.users.read().get(user_id).cloned()
    }

    fn put(&self, profile: UserProfile) {
        let mut users = self.users.write();
        users.insert(profile.user_id.clone(), profile);
        if let Err(e) = self.flush(&users) {
            log::warn!("Failed to persist user store: {}", e);
        }
    }

    fn update_xp(
        &self,
        user_id: &str,
        apply: &dyn Fn(UserXpState) -> UserXpState,
    ) -> Result<UserXpState, StoreError> {
        let mut users = self.users.write();
        let profile = users
            .get_mut(user_id)
            .ok_or_else(|| StoreError::UserNotFound(user_id.to_string()))?;
        profile.xp = apply(profile.xp);
        let updated = profile.xp;
        self.flush(&users)?;
        Ok(updated)
    }
}
