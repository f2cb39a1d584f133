//! TTL cache
//!
//! A small (value, expiry) cache used for the level curve and the game
//! catalog. Read-mostly; a refresh race between two requests is accepted
//! rather than serialized behind a lock.

use parking_lot::RwLock;

/// A single cached value with an expiry instant
pub struct TtlCache<T: Clone> {
    slot: RwLock<Option<Entry<T>>>,
    ttl_ms: i64,
}

#[derive(Clone)]
struct Entry<T> {
    value: T,
    expires_at: i64,
}

impl<T: Clone> TtlCache<T> {
    /// Create an empty cache with the given TTL
    pub fn new(ttl_ms: i64) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl_ms,
        }
    }

    /// Get the cached value if present and not expired
    pub fn get(&self, now_ms: i64) -> Option<T> {
        let slot = self.slot.read();
        match slot.as_ref() {
            Some(entry) if now_ms < entry.expires_at => Some(entry.value.clone()),
            _ => None,
        }
    }

    /// Store a value, stamping its expiry from the cache TTL
    pub fn store(&self, value: T, now_ms: i64) {
        let mut slot = self.slot.write();
        *slot = Some(Entry {
            value,
            expires_at: now_ms + self.ttl_ms,
        });
    }

    /// Drop the cached value so the next get misses
    pub fn invalidate(&self) {
        *self.slot.write() = None;
    }

    /// Get the value, or compute and cache a fresh one on miss.
    /// The lock is not held while `refresh` runs, so two concurrent
    /// misses may both refresh; last write wins.
    pub fn get_or_refresh(&self, now_ms: i64, refresh: impl FnOnce() -> T) -> T {
        if let Some(value) = self.get(now_ms) {
            return value;
        }
        let value = refresh();
        self.store(value.clone(), now_ms);
        value
    }
}
