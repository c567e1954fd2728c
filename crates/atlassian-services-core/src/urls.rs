//! Cloud vs. Server/Data Center classification of instance URLs

use url::{Host, Url};

/// Host fragments that identify an Atlassian Cloud site
const CLOUD_HOST_MARKERS: [&str; 5] = [
    ".atlassian.net",
    ".jira.com",
    ".jira-dev.com",
    "api.atlassian.com",
    ".atlassian-us-gov-mod.net",
];

/// Decides whether an instance URL points at Atlassian Cloud
///
/// Closures of type `Fn(&str) -> bool` implement this trait, so tests can
/// inject a fixed answer:
///
/// ```
/// use atlassian_services_core::urls::UrlClassifier;
///
/// let always_cloud = |_: &str| true;
/// assert!(always_cloud.is_cloud("https://jira.internal.corp"));
/// ```
pub trait UrlClassifier: Send + Sync {
    /// `true` for Atlassian Cloud, `false` for Server/Data Center
    fn is_cloud(&self, url: &str) -> bool;
}

impl<F> UrlClassifier for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_cloud(&self, url: &str) -> bool {
        self(url)
    }
}

/// Classifier based on the hostname of the URL
#[derive(Debug, Default, Clone, Copy)]
pub struct AtlassianUrlClassifier;

impl AtlassianUrlClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl UrlClassifier for AtlassianUrlClassifier {
    fn is_cloud(&self, url: &str) -> bool {
        is_atlassian_cloud_url(url)
    }
}

/// Check whether `url` is an Atlassian Cloud URL
///
/// Local and private-network hosts are never cloud. Otherwise the host must
/// contain one of the Atlassian Cloud domains. Unparseable input is treated
/// as Server/Data Center.
///
/// ```
/// use atlassian_services_core::urls::is_atlassian_cloud_url;
///
/// assert!(is_atlassian_cloud_url("https://example.atlassian.net/wiki"));
/// assert!(!is_atlassian_cloud_url("https://jira.internal.corp"));
/// assert!(!is_atlassian_cloud_url("http://localhost:8090"));
/// ```
pub fn is_atlassian_cloud_url(url: &str) -> bool {
    if url.is_empty() {
        return false;
    }

    let host = match Url::parse(url) {
        Ok(parsed) => match parsed.host() {
            Some(Host::Domain(domain)) => domain.to_string(),
            Some(Host::Ipv4(addr)) => addr.to_string(),
            // IPv6 literals never carry a cloud domain
            Some(Host::Ipv6(_)) | None => return false,
        },
        Err(_) => return false,
    };

    if is_local_host(&host) {
        return false;
    }

    CLOUD_HOST_MARKERS.iter().any(|marker| host.contains(marker))
}

fn is_local_host(host: &str) -> bool {
    host == "localhost"
        || host.starts_with("127.")
        || host.starts_with("192.168.")
        || host.starts_with("10.")
        || is_private_172(host)
}

// 172.16.0.0/12
fn is_private_172(host: &str) -> bool {
    let Some(rest) = host.strip_prefix("172.") else {
        return false;
    };
    let Some((octet, _)) = rest.split_once('.') else {
        return false;
    };
    matches!(octet.parse::<u8>(), Ok(16..=31)) && octet.len() == 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloud_urls() {
        for url in [
            "https://example.atlassian.net",
            "https://example.atlassian.net/wiki",
            "https://EXAMPLE.Atlassian.NET/",
            "https://legacy.jira.com",
            "https://dev.jira-dev.com/browse/X-1",
            "https://api.atlassian.com/ex/jira/abc",
            "https://agency.atlassian-us-gov-mod.net",
        ] {
            assert!(is_atlassian_cloud_url(url), "{} should be cloud", url);
        }
    }

    #[test]
    fn test_server_urls() {
        for url in [
            "https://jira.internal.corp",
            "https://confluence.example.com/confluence",
            "https://atlassian.net.example.com",
            "http://localhost:8080",
            "http://127.0.0.1:8090",
            "http://192.168.1.10",
            "http://10.0.0.5:8080",
            "http://172.16.0.1",
            "http://172.31.255.255",
            "http://[::1]:8080",
        ] {
            assert!(!is_atlassian_cloud_url(url), "{} should not be cloud", url);
        }
    }

    #[test]
    fn test_private_prefixes_on_domain_names() {
        assert!(!is_atlassian_cloud_url("https://10.sites.atlassian.net"));
        assert!(!is_atlassian_cloud_url("https://172.20.mirror.atlassian.net"));
        assert!(is_atlassian_cloud_url("https://172.32.mirror.atlassian.net"));
    }

    #[test]
    fn test_unparseable_and_empty() {
        assert!(!is_atlassian_cloud_url(""));
        assert!(!is_atlassian_cloud_url("example.atlassian.net"));
        assert!(!is_atlassian_cloud_url("not a url"));
    }

    #[test]
    fn test_is_private_172() {
        assert!(is_private_172("172.16.0.1"));
        assert!(is_private_172("172.31.0.1"));
        assert!(!is_private_172("172.15.0.1"));
        assert!(!is_private_172("172.32.0.1"));
        assert!(!is_private_172("172.016.0.1"));
        assert!(!is_private_172("172.16"));
    }

    #[test]
    fn test_classifier_trait_objects() {
        let classifiers: Vec<Box<dyn UrlClassifier>> = vec![
            Box::new(AtlassianUrlClassifier::new()),
            Box::new(|url: &str| url.ends_with("/cloud")),
        ];

        assert!(classifiers[0].is_cloud("https://x.atlassian.net"));
        assert!(!classifiers[0].is_cloud("https://x.internal"));
        assert!(classifiers[1].is_cloud("https://x.internal/cloud"));
    }
}
