//! Service identifiers, deployments and authentication modes

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::env::vars;

/// An Atlassian product this crate knows how to configure
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Confluence,
    Jira,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::Confluence, Service::Jira];

    /// Lowercase identifier, as used in result maps
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Confluence => "confluence",
            Service::Jira => "jira",
        }
    }

    /// Product name for log messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Service::Confluence => "Confluence",
            Service::Jira => "Jira",
        }
    }

    /// Environment variable names for this service
    pub fn spec(&self) -> &'static ServiceSpec {
        match self {
            Service::Confluence => &ServiceSpec::CONFLUENCE,
            Service::Jira => &ServiceSpec::JIRA,
        }
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown service name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown service: {0}")]
pub struct UnknownService(pub String);

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

/// Where an instance URL points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Deployment {
    /// Atlassian Cloud
    Cloud,
    /// Server or Data Center
    Server,
}

impl Deployment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Deployment::Cloud => "cloud",
            Deployment::Server => "server",
        }
    }
}

/// How a service will authenticate, in precedence order
///
/// At most one mode applies to a service. When variables for several modes
/// are set, the earliest variant wins and the rest are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// OAuth 2.0 (3LO) with client id, secret, redirect URI, scope and cloud id
    #[serde(rename = "oauth_client_credentials")]
    OAuthClientCredentials,
    /// OAuth 2.0 (3LO) with a pre-issued access token and cloud id
    #[serde(rename = "oauth_access_token")]
    OAuthAccessToken,
    /// Cloud username + API token
    CloudBasicAuth,
    /// Server/Data Center personal access token, or username + token
    ServerPatOrBasicAuth,
    /// No URL configured; OAuth tokens arrive per request via headers
    #[serde(rename = "minimal_oauth")]
    MinimalOAuth,
    NotConfigured,
}

impl AuthMode {
    /// Stable snake_case identifier, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthMode::OAuthClientCredentials => "oauth_client_credentials",
            AuthMode::OAuthAccessToken => "oauth_access_token",
            AuthMode::CloudBasicAuth => "cloud_basic_auth",
            AuthMode::ServerPatOrBasicAuth => "server_pat_or_basic_auth",
            AuthMode::MinimalOAuth => "minimal_oauth",
            AuthMode::NotConfigured => "not_configured",
        }
    }

    pub fn is_configured(&self) -> bool {
        !matches!(self, AuthMode::NotConfigured)
    }

    /// The log line announcing this mode for `service`
    pub fn describe(&self, service: Service) -> String {
        let name = service.display_name();
        match self {
            AuthMode::OAuthClientCredentials => {
                format!("Using {} OAuth 2.0 (3LO) authentication (Cloud-only features)", name)
            }
            AuthMode::OAuthAccessToken => format!(
                "Using {} OAuth 2.0 (3LO) authentication (Cloud-only features) with provided access token",
                name
            ),
            AuthMode::CloudBasicAuth => {
                format!("Using {} Cloud Basic Authentication (API Token)", name)
            }
            AuthMode::ServerPatOrBasicAuth => format!(
                "Using {} Server/Data Center authentication (PAT or Basic Auth)",
                name
            ),
            AuthMode::MinimalOAuth => format!(
                "Using {} minimal OAuth configuration - expecting user-provided tokens via headers",
                name
            ),
            AuthMode::NotConfigured => format!(
                "{} is not configured or required environment variables are missing.",
                name
            ),
        }
    }
}

/// The service-specific variable names the resolver reads
///
/// Shared `ATLASSIAN_*` variables are not listed here; they are the same for
/// every service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSpec {
    pub service: Service,
    pub url_var: &'static str,
    pub username_var: &'static str,
    pub token_var: &'static str,
    pub personal_token_var: &'static str,
}

impl ServiceSpec {
    pub const CONFLUENCE: ServiceSpec = ServiceSpec {
        service: Service::Confluence,
        url_var: vars::CONFLUENCE_URL,
        username_var: vars::CONFLUENCE_USERNAME,
        token_var: vars::CONFLUENCE_API_TOKEN,
        personal_token_var: vars::CONFLUENCE_PERSONAL_TOKEN,
    };

    pub const JIRA: ServiceSpec = ServiceSpec {
        service: Service::Jira,
        url_var: vars::JIRA_URL,
        username_var: vars::JIRA_USERNAME,
        token_var: vars::JIRA_API_TOKEN,
        personal_token_var: vars::JIRA_PERSONAL_TOKEN,
    };

    /// Basic auth username candidates, first non-empty wins
    pub fn username_vars(&self) -> [&'static str; 3] {
        [self.username_var, vars::ATLASSIAN_EMAIL, vars::ATLASSIAN_USERNAME]
    }

    /// Basic auth API token candidates, first non-empty wins
    pub fn token_vars(&self) -> [&'static str; 2] {
        [self.token_var, vars::ATLASSIAN_API_TOKEN]
    }
}
