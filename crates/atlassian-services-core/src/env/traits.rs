//! Core traits and types for environment lookup

use thiserror::Error;

/// Errors that can occur while loading an environment source
///
/// Lookups themselves never fail: a missing variable is `None`.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl EnvError {
    /// Create a parse error for a 1-based line number
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type EnvResult<T> = Result<T, EnvError>;

/// Read-only key-value lookup over environment variables
///
/// Implementations:
/// - Process environment (`ProcessEnv`)
/// - In-memory snapshot for testing or freezing (`MemoryEnv`)
/// - Parsed `.env` file (`DotenvEnv`)
/// - Ordered overlay of other sources (`ChainEnv`)
///
/// # Example
///
/// ```
/// use atlassian_services_core::env::{EnvSource, MemoryEnv};
///
/// let env = MemoryEnv::new().with("JIRA_URL", "https://example.atlassian.net");
/// assert!(env.has("JIRA_URL"));
/// assert_eq!(env.value("CONFLUENCE_URL"), None);
/// ```
pub trait EnvSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Check if this source can currently answer lookups
    fn is_available(&self) -> bool {
        true
    }

    /// Raw value of a variable, including empty strings
    fn get(&self, key: &str) -> Option<String>;

    /// Value of a variable, treating an empty string as unset
    fn value(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Check if a variable is set to a non-empty value
    fn has(&self, key: &str) -> bool {
        self.value(key).is_some()
    }
}

/// First non-empty value among `keys`, in order
pub fn first_value(env: &dyn EnvSource, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env.value(key))
}

/// Check that every key in `keys` has a non-empty value
pub fn all_present(env: &dyn EnvSource, keys: &[&str]) -> bool {
    keys.iter().all(|key| env.has(key))
}
