//! Service availability
//!
//! Maps an environment to the set of Atlassian services that can be
//! registered, and the authentication mode each one will use.

mod types;
mod status;
mod resolver;

pub use types::{AuthMode, Deployment, Service, ServiceSpec, UnknownService};
pub use status::{AvailableServices, ServiceReport, ServiceStatus};
pub use resolver::{ServiceAvailabilityResolver, get_available_services};
