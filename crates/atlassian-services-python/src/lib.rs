//! Python bindings for Atlassian service availability via PyO3

use pyo3::prelude::*;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use std::sync::Arc;

use atlassian_services_core::env::{ChainEnv, DotenvEnv, EnvSource, MemoryEnv, ProcessEnv};
use atlassian_services_core::logging::{ConsoleLogger, NoOpLogger, SharedLogger};
use atlassian_services_core::services::{
    Service, ServiceAvailabilityResolver, ServiceStatus as CoreServiceStatus,
};

// ============================================================================
// Result Types
// ============================================================================

#[pyclass]
#[derive(Clone)]
pub struct ServiceStatus {
    #[pyo3(get)]
    pub service: String,
    #[pyo3(get)]
    pub mode: String,
    #[pyo3(get)]
    pub deployment: Option<String>,
    #[pyo3(get)]
    pub configured: bool,
    #[pyo3(get)]
    pub message: String,
}

#[pymethods]
impl ServiceStatus {
    fn __repr__(&self) -> String {
        format!(
            "ServiceStatus(service='{}', mode='{}', deployment={}, configured={})",
            self.service,
            self.mode,
            self.deployment.as_deref().map(|d| format!("'{}'", d)).unwrap_or_else(|| "None".to_string()),
            if self.configured { "True" } else { "False" },
        )
    }
}

impl From<CoreServiceStatus> for ServiceStatus {
    fn from(status: CoreServiceStatus) -> Self {
        Self {
            service: status.service.as_str().to_string(),
            mode: status.mode.as_str().to_string(),
            deployment: status.deployment.map(|d| d.as_str().to_string()),
            configured: status.is_configured(),
            message: status.describe(),
        }
    }
}

// ============================================================================
// Environment assembly
// ============================================================================

/// Overrides first, then the dotenv file, then the process environment
fn build_env(
    overrides: Option<HashMap<String, String>>,
    dotenv_path: Option<PathBuf>,
) -> PyResult<ChainEnv> {
    let mut sources: Vec<Arc<dyn EnvSource>> = Vec::new();
    if let Some(vars) = overrides {
        sources.push(Arc::new(MemoryEnv::with_vars(vars)));
    }
    if let Some(path) = dotenv_path {
        let dotenv = DotenvEnv::from_path(&path)
            .map_err(|e| PyRuntimeError::new_err(format!("{}: {}", path.display(), e)))?;
        sources.push(Arc::new(dotenv));
    }
    sources.push(Arc::new(ProcessEnv::new()));
    Ok(ChainEnv::new(sources))
}

fn build_resolver(verbose: bool) -> ServiceAvailabilityResolver {
    let logger: SharedLogger = if verbose {
        Arc::new(ConsoleLogger::new())
    } else {
        Arc::new(NoOpLogger::new())
    };
    ServiceAvailabilityResolver::new().with_logger(logger)
}

// ============================================================================
// Functions
// ============================================================================

/// Which services are configured, as {"confluence": bool, "jira": bool}
#[pyfunction]
#[pyo3(signature = (overrides=None, dotenv_path=None, verbose=false))]
pub fn get_available_services(
    overrides: Option<HashMap<String, String>>,
    dotenv_path: Option<PathBuf>,
    verbose: bool,
) -> PyResult<BTreeMap<String, bool>> {
    let env = build_env(overrides, dotenv_path)?;
    Ok(build_resolver(verbose).resolve(&env).to_map())
}

/// Selected authentication mode per service
#[pyfunction]
#[pyo3(signature = (overrides=None, dotenv_path=None, verbose=false))]
pub fn get_service_report(
    overrides: Option<HashMap<String, String>>,
    dotenv_path: Option<PathBuf>,
    verbose: bool,
) -> PyResult<Vec<ServiceStatus>> {
    let env = build_env(overrides, dotenv_path)?;
    let report = build_resolver(verbose).report(&env);
    Ok(report.iter().copied().map(ServiceStatus::from).collect())
}

/// Selected authentication mode for one service ("confluence" or "jira")
#[pyfunction]
#[pyo3(signature = (service, overrides=None, dotenv_path=None, verbose=false))]
pub fn get_service_status(
    service: &str,
    overrides: Option<HashMap<String, String>>,
    dotenv_path: Option<PathBuf>,
    verbose: bool,
) -> PyResult<ServiceStatus> {
    let service: Service = service
        .parse()
        .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
    let env = build_env(overrides, dotenv_path)?;
    let status = build_resolver(verbose).resolve_service(&env, service.spec());
    Ok(ServiceStatus::from(status))
}

#[pyfunction]
pub fn is_atlassian_cloud_url(url: &str) -> bool {
    atlassian_services_core::urls::is_atlassian_cloud_url(url)
}

// ============================================================================
// Module Definition
// ============================================================================

#[pymodule]
fn atlassian_services(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ServiceStatus>()?;

    m.add_function(wrap_pyfunction!(get_available_services, m)?)?;
    m.add_function(wrap_pyfunction!(get_service_report, m)?)?;
    m.add_function(wrap_pyfunction!(get_service_status, m)?)?;
    m.add_function(wrap_pyfunction!(is_atlassian_cloud_url, m)?)?;

    Ok(())
}
