//! Atlassian Services Core
//!
//! Decides which Atlassian integrations (Confluence, Jira) are configured,
//! and how each will authenticate, from environment variables alone.
//! No network calls are made and nothing is persisted.
//!
//! ## Resolution
//!
//! The environment is injected, so hosts can resolve against the live
//! process, a `.env` file, a frozen snapshot, or any overlay of those:
//!
//! ```
//! use std::sync::Arc;
//! use atlassian_services_core::{ChainEnv, MemoryEnv, ProcessEnv, ServiceAvailabilityResolver};
//!
//! let overrides = MemoryEnv::new()
//!     .with("CONFLUENCE_URL", "https://example.atlassian.net/wiki")
//!     .with("ATLASSIAN_EMAIL", "me@example.com")
//!     .with("ATLASSIAN_API_TOKEN", "token");
//! let env = ChainEnv::new(vec![Arc::new(overrides), Arc::new(ProcessEnv::new())]);
//!
//! let available = ServiceAvailabilityResolver::new().resolve(&env);
//! assert!(available.confluence);
//! ```

pub mod env;
pub mod logging;
pub mod urls;
pub mod services;

// Re-export commonly used types
pub use env::{
    EnvSource, EnvError, EnvResult,
    ProcessEnv, MemoryEnv, DotenvEnv, ChainEnv,
    Truthy, is_truthy,
};

pub use logging::{Logger, SharedLogger, NoOpLogger, ConsoleLogger, TracingLogger, MemoryLogger};

pub use urls::{UrlClassifier, AtlassianUrlClassifier, is_atlassian_cloud_url};

pub use services::{
    Service, AuthMode, Deployment, ServiceSpec,
    ServiceStatus, ServiceReport, AvailableServices,
    ServiceAvailabilityResolver, get_available_services,
};
