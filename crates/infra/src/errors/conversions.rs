//! Conversions from external infrastructure errors into domain errors.

use irqdash_domain::DashboardError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DashboardError);

impl From<InfraError> for DashboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DashboardError> for InfraError {
    fn from(value: DashboardError) -> Self {
        InfraError(value)
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        let err = if value.is_timeout() {
            DashboardError::Network(format!("request timed out: {value}"))
        } else if value.is_connect() {
            DashboardError::Network(format!("connection failed: {value}"))
        } else if value.is_status() {
            let status = value.status().map_or_else(String::new, |s| s.to_string());
            DashboardError::Upstream(format!("upstream returned {status}"))
        } else if value.is_builder() || value.is_request() {
            DashboardError::InvalidInput(format!("invalid request: {value}"))
        } else {
            DashboardError::Network(value.to_string())
        };
        InfraError(err)
    }
}
