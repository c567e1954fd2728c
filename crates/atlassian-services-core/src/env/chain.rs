//! Chained environment source with overlay behavior

use std::sync::Arc;

use super::traits::EnvSource;

/// An environment source that layers several sources on top of each other
///
/// Lookups try each available source in order and return the first value
/// found. A source that holds a key with an empty value still answers, which
/// lets an override blank out a variable set further down the chain.
///
/// # Example
///
/// ```
/// use atlassian_services_core::env::{ChainEnv, EnvSource, MemoryEnv, ProcessEnv};
/// use std::sync::Arc;
///
/// let overrides = Arc::new(MemoryEnv::new().with("JIRA_URL", "https://jira.internal.corp"));
/// let chain = ChainEnv::new(vec![overrides, Arc::new(ProcessEnv::new())]);
///
/// assert_eq!(chain.get("JIRA_URL"), Some("https://jira.internal.corp".to_string()));
/// ```
#[derive(Default)]
pub struct ChainEnv {
    sources: Vec<Arc<dyn EnvSource>>,
}

impl ChainEnv {
    /// Create a chain; earlier sources take precedence
    pub fn new(sources: Vec<Arc<dyn EnvSource>>) -> Self {
        Self { sources }
    }

    /// Append a lower-precedence source
    pub fn push(&mut self, source: Arc<dyn EnvSource>) {
        self.sources.push(source);
    }

    /// Get the sources in this chain
    pub fn sources(&self) -> &[Arc<dyn EnvSource>] {
        &self.sources
    }

    /// Find the source that would answer a lookup for `key`
    pub fn find_source(&self, key: &str) -> Option<&Arc<dyn EnvSource>> {
        self.sources
            .iter()
            .find(|source| source.is_available() && source.get(key).is_some())
    }
}

impl EnvSource for ChainEnv {
    fn name(&self) -> &str {
        "chain"
    }

    fn is_available(&self) -> bool {
        self.sources.iter().any(|s| s.is_available())
    }

    fn get(&self, key: &str) -> Option<String> {
        self.sources
            .iter()
            .filter(|source| source.is_available())
            .find_map(|source| source.get(key))
    }
}

// Implement Debug manually since Arc<dyn EnvSource> doesn't implement Debug
impl std::fmt::Debug for ChainEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sources.iter().map(|s| s.name()).collect();
        f.debug_struct("ChainEnv").field("sources", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{DotenvEnv, MemoryEnv};

    struct Offline;

    impl EnvSource for Offline {
        fn name(&self) -> &str {
            "offline"
        }

        fn is_available(&self) -> bool {
            false
        }

        fn get(&self, _key: &str) -> Option<String> {
            Some("should never be read".to_string())
        }
    }

    #[test]
    fn test_chain_name() {
        assert_eq!(ChainEnv::default().name(), "chain");
    }

    #[test]
    fn test_chain_fallback() {
        let first = Arc::new(MemoryEnv::new());
        let second = Arc::new(MemoryEnv::new().with("KEY", "from_second"));

        let chain = ChainEnv::new(vec![first, second]);

        assert_eq!(chain.get("KEY"), Some("from_second".to_string()));
    }

    #[test]
    fn test_chain_priority() {
        let first = Arc::new(MemoryEnv::new().with("KEY", "from_first"));
        let second = Arc::new(MemoryEnv::new().with("KEY", "from_second"));

        let chain = ChainEnv::new(vec![first, second]);

        assert_eq!(chain.get("KEY"), Some("from_first".to_string()));
    }

    #[test]
    fn test_chain_empty_override_masks_lower_source() {
        let overrides = Arc::new(MemoryEnv::new().with("JIRA_PERSONAL_TOKEN", ""));
        let dotenv = Arc::new(DotenvEnv::parse_str("JIRA_PERSONAL_TOKEN=pat\n").unwrap());

        let chain = ChainEnv::new(vec![overrides, dotenv]);

        assert_eq!(chain.get("JIRA_PERSONAL_TOKEN"), Some(String::new()));
        assert!(!chain.has("JIRA_PERSONAL_TOKEN"));
    }

    #[test]
    fn test_chain_skips_unavailable() {
        let chain = ChainEnv::new(vec![
            Arc::new(Offline),
            Arc::new(MemoryEnv::new().with("KEY", "value")),
        ]);

        assert!(chain.is_available());
        assert_eq!(chain.get("KEY"), Some("value".to_string()));
        assert_eq!(chain.find_source("KEY").map(|s| s.name()), Some("memory"));
        assert_eq!(chain.get("OTHER"), None);
    }

    #[test]
    fn test_empty_chain() {
        let chain = ChainEnv::default();
        assert!(!chain.is_available());
        assert_eq!(chain.get("KEY"), None);
        assert!(chain.find_source("KEY").is_none());
    }

    #[test]
    fn test_chain_push_and_debug() {
        let mut chain = ChainEnv::new(vec![Arc::new(MemoryEnv::new())]);
        chain.push(Arc::new(DotenvEnv::parse_str("A=1\n").unwrap()));

        assert_eq!(chain.sources().len(), 2);
        assert_eq!(chain.find_source("A").map(|s| s.name()), Some("dotenv"));
        assert_eq!(format!("{:?}", chain), "ChainEnv { sources: [\"memory\", \"dotenv\"] }");
    }
}
