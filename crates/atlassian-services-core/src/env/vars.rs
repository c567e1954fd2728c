//! Names of every environment variable the resolver reads
//!
//! | Variable | Purpose |
//! |----------|---------|
//! | `CONFLUENCE_URL` / `JIRA_URL` | Base URL of the instance |
//! | `ATLASSIAN_OAUTH_CLIENT_ID` | OAuth 2.0 (3LO) client id |
//! | `ATLASSIAN_OAUTH_CLIENT_SECRET` | OAuth 2.0 (3LO) client secret |
//! | `ATLASSIAN_OAUTH_REDIRECT_URI` | OAuth 2.0 (3LO) redirect URI |
//! | `ATLASSIAN_OAUTH_SCOPE` | OAuth 2.0 (3LO) scopes |
//! | `ATLASSIAN_OAUTH_CLOUD_ID` | Cloud site id, required by both OAuth modes |
//! | `ATLASSIAN_OAUTH_ACCESS_TOKEN` | Pre-issued OAuth access token |
//! | `ATLASSIAN_OAUTH_ENABLE` | Accept per-request OAuth tokens when no URL is set |
//! | `<SERVICE>_USERNAME`, `ATLASSIAN_EMAIL`, `ATLASSIAN_USERNAME` | Basic auth user, in fallback order |
//! | `<SERVICE>_API_TOKEN`, `ATLASSIAN_API_TOKEN` | Basic auth API token, in fallback order |
//! | `<SERVICE>_PERSONAL_TOKEN` | Server/Data Center personal access token |

pub const CONFLUENCE_URL: &str = "CONFLUENCE_URL";
pub const CONFLUENCE_USERNAME: &str = "CONFLUENCE_USERNAME";
pub const CONFLUENCE_API_TOKEN: &str = "CONFLUENCE_API_TOKEN";
pub const CONFLUENCE_PERSONAL_TOKEN: &str = "CONFLUENCE_PERSONAL_TOKEN";

pub const JIRA_URL: &str = "JIRA_URL";
pub const JIRA_USERNAME: &str = "JIRA_USERNAME";
pub const JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
pub const JIRA_PERSONAL_TOKEN: &str = "JIRA_PERSONAL_TOKEN";

pub const ATLASSIAN_OAUTH_CLIENT_ID: &str = "ATLASSIAN_OAUTH_CLIENT_ID";
pub const ATLASSIAN_OAUTH_CLIENT_SECRET: &str = "ATLASSIAN_OAUTH_CLIENT_SECRET";
pub const ATLASSIAN_OAUTH_REDIRECT_URI: &str = "ATLASSIAN_OAUTH_REDIRECT_URI";
pub const ATLASSIAN_OAUTH_SCOPE: &str = "ATLASSIAN_OAUTH_SCOPE";
pub const ATLASSIAN_OAUTH_CLOUD_ID: &str = "ATLASSIAN_OAUTH_CLOUD_ID";
pub const ATLASSIAN_OAUTH_ACCESS_TOKEN: &str = "ATLASSIAN_OAUTH_ACCESS_TOKEN";
pub const ATLASSIAN_OAUTH_ENABLE: &str = "ATLASSIAN_OAUTH_ENABLE";

pub const ATLASSIAN_EMAIL: &str = "ATLASSIAN_EMAIL";
pub const ATLASSIAN_USERNAME: &str = "ATLASSIAN_USERNAME";
pub const ATLASSIAN_API_TOKEN: &str = "ATLASSIAN_API_TOKEN";

/// Variables that must all be set for the OAuth client-credentials flow
pub const OAUTH_CLIENT_CREDENTIALS: [&str; 5] = [
    ATLASSIAN_OAUTH_CLIENT_ID,
    ATLASSIAN_OAUTH_CLIENT_SECRET,
    ATLASSIAN_OAUTH_REDIRECT_URI,
    ATLASSIAN_OAUTH_SCOPE,
    ATLASSIAN_OAUTH_CLOUD_ID,
];

/// Variables that must all be set to use a pre-issued OAuth access token
pub const OAUTH_ACCESS_TOKEN: [&str; 2] = [ATLASSIAN_OAUTH_ACCESS_TOKEN, ATLASSIAN_OAUTH_CLOUD_ID];

/// Every variable consumed, for freezing with `MemoryEnv::capture`
pub const ALL: [&str; 18] = [
    CONFLUENCE_URL,
    JIRA_URL,
    ATLASSIAN_OAUTH_CLIENT_ID,
    ATLASSIAN_OAUTH_CLIENT_SECRET,
    ATLASSIAN_OAUTH_REDIRECT_URI,
    ATLASSIAN_OAUTH_SCOPE,
    ATLASSIAN_OAUTH_CLOUD_ID,
    ATLASSIAN_OAUTH_ACCESS_TOKEN,
    ATLASSIAN_OAUTH_ENABLE,
    CONFLUENCE_USERNAME,
    JIRA_USERNAME,
    ATLASSIAN_EMAIL,
    ATLASSIAN_USERNAME,
    CONFLUENCE_API_TOKEN,
    JIRA_API_TOKEN,
    ATLASSIAN_API_TOKEN,
    CONFLUENCE_PERSONAL_TOKEN,
    JIRA_PERSONAL_TOKEN,
];
