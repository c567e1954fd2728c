//! Resolution results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{AuthMode, Deployment, Service};

/// Outcome of resolving a single service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub service: Service,
    pub mode: AuthMode,
    /// `None` when no instance URL was set
    pub deployment: Option<Deployment>,
}

impl ServiceStatus {
    pub fn new(service: Service, mode: AuthMode, deployment: Option<Deployment>) -> Self {
        Self {
            service,
            mode,
            deployment,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.mode.is_configured()
    }

    /// The log line for this outcome
    pub fn describe(&self) -> String {
        self.mode.describe(self.service)
    }
}

/// Per-service outcome of one resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceReport {
    pub confluence: ServiceStatus,
    pub jira: ServiceStatus,
}

impl ServiceReport {
    pub fn get(&self, service: Service) -> &ServiceStatus {
        match service {
            Service::Confluence => &self.confluence,
            Service::Jira => &self.jira,
        }
    }

    /// Iterate statuses in `Service::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = &ServiceStatus> {
        [&self.confluence, &self.jira].into_iter()
    }

    /// Reduce to the configured / not configured flags
    pub fn availability(&self) -> AvailableServices {
        AvailableServices {
            confluence: self.confluence.is_configured(),
            jira: self.jira.is_configured(),
        }
    }
}

/// Which services are configured
///
/// Serializes as `{"confluence": bool, "jira": bool}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableServices {
    pub confluence: bool,
    pub jira: bool,
}

impl AvailableServices {
    pub fn is_configured(&self, service: Service) -> bool {
        match service {
            Service::Confluence => self.confluence,
            Service::Jira => self.jira,
        }
    }

    /// Services that are configured, in `Service::ALL` order
    pub fn configured(&self) -> impl Iterator<Item = Service> + '_ {
        Service::ALL
            .into_iter()
            .filter(move |service| self.is_configured(*service))
    }

    pub fn any(&self) -> bool {
        self.confluence || self.jira
    }

    /// Flags keyed by service name
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        Service::ALL
            .into_iter()
            .map(|service| (service.as_str().to_string(), self.is_configured(service)))
            .collect()
    }
}

impl From<ServiceReport> for AvailableServices {
    fn from(report: ServiceReport) -> Self {
        report.availability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> ServiceReport {
        ServiceReport {
            confluence: ServiceStatus::new(Service::Confluence, AuthMode::NotConfigured, None),
            jira: ServiceStatus::new(
                Service::Jira,
                AuthMode::ServerPatOrBasicAuth,
                Some(Deployment::Server),
            ),
        }
    }

    #[test]
    fn test_report_availability() {
        let available = AvailableServices::from(report());
        assert_eq!(
            available,
            AvailableServices {
                confluence: false,
                jira: true
            }
        );
        assert!(available.any());
        assert!(!AvailableServices::default().any());
    }

    #[test]
    fn test_report_get_and_iter() {
        let report = report();
        assert_eq!(report.get(Service::Jira).mode, AuthMode::ServerPatOrBasicAuth);

        let services: Vec<Service> = report.iter().map(|s| s.service).collect();
        assert_eq!(services, Service::ALL.to_vec());
    }

    #[test]
    fn test_configured_iterator() {
        let available = AvailableServices {
            confluence: true,
            jira: false,
        };
        assert_eq!(available.configured().collect::<Vec<_>>(), vec![Service::Confluence]);
    }

    #[test]
    fn test_to_map() {
        let map = report().availability().to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["confluence"], false);
        assert_eq!(map["jira"], true);
    }

    #[test]
    fn test_available_services_json_shape() {
        let json = serde_json::to_value(report().availability()).unwrap();
        assert_eq!(json, serde_json::json!({"confluence": false, "jira": true}));

        let back: AvailableServices = serde_json::from_value(json).unwrap();
        assert!(back.jira);
    }

    #[test]
    fn test_status_json_shape() {
        let json = serde_json::to_value(report().jira).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service": "jira",
                "mode": "server_pat_or_basic_auth",
                "deployment": "server"
            })
        );
    }
}
