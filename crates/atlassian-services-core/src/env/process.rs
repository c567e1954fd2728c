//! Process environment source

use std::env;

use super::memory::MemoryEnv;
use super::traits::EnvSource;

/// Environment source that reads the live process environment
///
/// Every lookup hits `std::env::var`, so a resolution that performs several
/// reads is not atomic if the host mutates its environment concurrently.
/// Use [`ProcessEnv::snapshot`] to freeze a consistent view first.
///
/// Values that are not valid Unicode are decoded lossily, so a non-empty
/// value always reads as set.
///
/// # Example
///
/// ```
/// use atlassian_services_core::env::{EnvSource, ProcessEnv};
///
/// let env = ProcessEnv::new();
/// let frozen = env.snapshot();
/// assert_eq!(frozen.name(), "memory");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv {
    _private: (),
}

impl ProcessEnv {
    /// Create a new process environment source
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Copy every variable of the process environment into memory
    pub fn snapshot(&self) -> MemoryEnv {
        env::vars_os()
            .map(|(key, value)| {
                (
                    key.to_string_lossy().into_owned(),
                    value.to_string_lossy().into_owned(),
                )
            })
            .collect()
    }
}

impl EnvSource for ProcessEnv {
    fn name(&self) -> &str {
        "process"
    }

    fn get(&self, key: &str) -> Option<String> {
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}
