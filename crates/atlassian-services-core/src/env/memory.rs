//! In-memory environment source

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::traits::EnvSource;

/// In-memory environment for tests and frozen snapshots
///
/// The resolver only ever reads from it; the mutating helpers exist so tests
/// and hosts can assemble a snapshot before handing it over.
///
/// # Thread Safety
///
/// The source uses `RwLock` internally and is safe to share between threads.
///
/// # Example
///
/// ```
/// use atlassian_services_core::env::{EnvSource, MemoryEnv};
///
/// let env = MemoryEnv::new()
///     .with("CONFLUENCE_URL", "https://wiki.example.com")
///     .with("CONFLUENCE_PERSONAL_TOKEN", "pat");
/// assert_eq!(env.value("CONFLUENCE_PERSONAL_TOKEN"), Some("pat".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Create a new empty environment
    pub fn new() -> Self {
        Self {
            vars: RwLock::new(HashMap::new()),
        }
    }

    /// Create an environment with initial variables
    pub fn with_vars(initial: HashMap<String, String>) -> Self {
        Self {
            vars: RwLock::new(initial),
        }
    }

    /// Copy `keys` out of another source
    ///
    /// Only keys the source knows about are copied, empty values included.
    pub fn capture(source: &dyn EnvSource, keys: &[&str]) -> Self {
        let vars = keys
            .iter()
            .filter_map(|key| source.get(key).map(|value| (key.to_string(), value)))
            .collect();
        Self::with_vars(vars)
    }

    /// Builder-style setter
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a variable
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.write().insert(key.into(), value.into());
    }

    /// Remove a variable, returning its previous value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.write().remove(key)
    }

    /// Remove every variable
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Number of variables held
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A writer that panicked cannot leave the map half-updated, so a poisoned
    // lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.vars.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.vars.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl EnvSource for MemoryEnv {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }
}

impl Clone for MemoryEnv {
    fn clone(&self) -> Self {
        Self::with_vars(self.read().clone())
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::with_vars(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
