//! Per-entity generation lock registry.
//!
//! Guarantees at most one in-flight generation per entity within this
//! process. A second invocation while one is outstanding is suppressed by
//! the caller, never by cancelling the in-flight one. A true cross-device
//! race can still produce duplicate content; that is an accepted
//! limitation.

use std::collections::HashSet;
use std::sync::Mutex;

/// Registry of entity keys with generation currently in flight.
///
/// Keys are caller-chosen, e.g. `course:{id}` or `module:{id}`.
#[derive(Default)]
pub struct GenerationLockRegistry {
    in_flight: Mutex<HashSet<String>>,
}

impl GenerationLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to mark a key as in flight.
    ///
    /// Returns a guard that releases the key on drop, or `None` when a
    /// generation for this key is already outstanding.
    pub fn try_acquire(&self, key: impl Into<String>) -> Option<GenerationGuard<'_>> {
        let key = key.into();
        let mut in_flight = self.in_flight.lock().unwrap();
        if !in_flight.insert(key.clone()) {
            return None;
        }
        Some(GenerationGuard {
            registry: self,
            key,
        })
    }

    /// Whether a generation is currently in flight for the key.
    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.lock().unwrap().contains(key)
    }

    fn release(&self, key: &str) {
        self.in_flight.lock().unwrap().remove(key);
    }
}

/// RAII guard for one in-flight generation. Dropping it releases the key.
pub struct GenerationGuard<'a> {
    registry: &'a GenerationLockRegistry,
    key: String,
}

impl Drop for GenerationGuard<'_> {
    fn drop(&mut self) {
        self.registry.release(&self.key);
    }
}
