//! Service availability resolution
//!
//! Decides, per service, which authentication mode the environment supports.
//! Rules are checked in precedence order and the first match wins:
//!
//! 1. No `<SERVICE>_URL`: minimal OAuth when `ATLASSIAN_OAUTH_ENABLE` is on,
//!    otherwise not configured.
//! 2. OAuth 2.0 (3LO) client credentials, on any deployment.
//! 3. OAuth 2.0 (3LO) pre-issued access token, on any deployment.
//! 4. Cloud: username + API token.
//! 5. Server/Data Center: personal access token, or username + API token.
//!
//! Missing configuration is never an error; it is reported through the
//! result and a single info log line per service. Configured services are
//! logged first, then the ones that are not configured.

use std::sync::Arc;

use crate::env::{all_present, first_value, is_truthy, vars, EnvSource, ProcessEnv};
use crate::log_info;
use crate::logging::{SharedLogger, TracingLogger};
use crate::urls::{AtlassianUrlClassifier, UrlClassifier};

use super::status::{AvailableServices, ServiceReport, ServiceStatus};
use super::types::{AuthMode, Deployment, ServiceSpec};

/// Resolves which Atlassian services are configured
///
/// Holds no state between calls; resolving twice against the same
/// environment yields the same result.
///
/// # Example
///
/// ```
/// use atlassian_services_core::env::MemoryEnv;
/// use atlassian_services_core::services::ServiceAvailabilityResolver;
///
/// let env = MemoryEnv::new()
///     .with("JIRA_URL", "https://jira.internal.corp")
///     .with("JIRA_PERSONAL_TOKEN", "pat");
///
/// let available = ServiceAvailabilityResolver::new().resolve(&env);
/// assert!(available.jira);
/// assert!(!available.confluence);
/// ```
pub struct ServiceAvailabilityResolver {
    classifier: Arc<dyn UrlClassifier>,
    logger: SharedLogger,
}

impl Default for ServiceAvailabilityResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceAvailabilityResolver {
    /// Create a resolver with the hostname-based classifier, logging through `tracing`
    pub fn new() -> Self {
        Self {
            classifier: Arc::new(AtlassianUrlClassifier::new()),
            logger: Arc::new(TracingLogger::new()),
        }
    }

    /// Replace the URL classifier
    pub fn with_classifier(mut self, classifier: impl UrlClassifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    /// Replace the logger
    pub fn with_logger(mut self, logger: SharedLogger) -> Self {
        self.logger = logger;
        self
    }

    /// Configured / not configured flag per service
    pub fn resolve(&self, env: &dyn EnvSource) -> AvailableServices {
        self.report(env).availability()
    }

    /// Selected mode and deployment per service
    pub fn report(&self, env: &dyn EnvSource) -> ServiceReport {
        let report = ServiceReport {
            confluence: self.classify(env, &ServiceSpec::CONFLUENCE),
            jira: self.classify(env, &ServiceSpec::JIRA),
        };

        let (configured, missing): (Vec<&ServiceStatus>, Vec<&ServiceStatus>) =
            report.iter().partition(|status| status.is_configured());
        for status in configured.into_iter().chain(missing) {
            log_info!(self.logger, "{}", status.describe());
        }

        report
    }

    /// Resolve one service and log the outcome
    pub fn resolve_service(&self, env: &dyn EnvSource, spec: &ServiceSpec) -> ServiceStatus {
        let status = self.classify(env, spec);
        log_info!(self.logger, "{}", status.describe());
        status
    }

    fn classify(&self, env: &dyn EnvSource, spec: &ServiceSpec) -> ServiceStatus {
        let Some(url) = env.value(spec.url_var) else {
            let mode = if is_truthy(env.get(vars::ATLASSIAN_OAUTH_ENABLE).as_deref()) {
                AuthMode::MinimalOAuth
            } else {
                AuthMode::NotConfigured
            };
            return ServiceStatus::new(spec.service, mode, None);
        };

        let deployment = if self.classifier.is_cloud(&url) {
            Deployment::Cloud
        } else {
            Deployment::Server
        };

        let mode = if all_present(env, &vars::OAUTH_CLIENT_CREDENTIALS) {
            AuthMode::OAuthClientCredentials
        } else if all_present(env, &vars::OAUTH_ACCESS_TOKEN) {
            AuthMode::OAuthAccessToken
        } else {
            match deployment {
                Deployment::Cloud if has_basic_auth(env, spec) => AuthMode::CloudBasicAuth,
                Deployment::Server if env.has(spec.personal_token_var) || has_basic_auth(env, spec) => {
                    AuthMode::ServerPatOrBasicAuth
                }
                _ => AuthMode::NotConfigured,
            }
        };

        ServiceStatus::new(spec.service, mode, Some(deployment))
    }
}

impl std::fmt::Debug for ServiceAvailabilityResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAvailabilityResolver").finish_non_exhaustive()
    }
}

fn has_basic_auth(env: &dyn EnvSource, spec: &ServiceSpec) -> bool {
    first_value(env, &spec.username_vars()).is_some() && first_value(env, &spec.token_vars()).is_some()
}

/// Resolve against the live process environment with default settings
pub fn get_available_services() -> AvailableServices {
    ServiceAvailabilityResolver::new().resolve(&ProcessEnv::new())
}
