//! CSV fetcher for the configured upstream sheet URL
//!
//! One fetch, no retries: a failure surfaces to the caller immediately
//! and the next refresh cycle tries again. Requests carry `no-store`
//! cache semantics because the sheet is edited live.

use async_trait::async_trait;
use irqdash_core::SheetSource;
use irqdash_domain::{DashboardError, Result};
use reqwest::header::{HeaderValue, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::Method;

use crate::http::HttpClient;

/// An upstream response body with its content type preserved for
/// proxying.
#[derive(Debug, Clone)]
pub struct SheetBody {
    pub content_type: String,
    pub body: String,
}

/// Fetches the configured CSV export.
#[derive(Clone)]
pub struct SheetFetcher {
    client: HttpClient,
    csv_url: String,
}

impl SheetFetcher {
    /// Create a fetcher for the given upstream URL. An empty URL is
    /// accepted here and reported as a configuration error per request.
    pub fn new(client: HttpClient, csv_url: impl Into<String>) -> Self {
        Self { client, csv_url: csv_url.into() }
    }

    /// Fetch the upstream document, preserving its content type.
    ///
    /// # Errors
    /// - `DashboardError::Config` when no URL is configured
    /// - `DashboardError::Upstream` on a non-2xx status or an empty body
    /// - `DashboardError::Network` on transport failures
    pub async fn fetch(&self) -> Result<SheetBody> {
        if self.csv_url.is_empty() {
            return Err(DashboardError::Config("SHEET_CSV_URL is not configured".to_string()));
        }

        let request = self
            .client
            .request(Method::GET, &self.csv_url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .header(PRAGMA, HeaderValue::from_static("no-cache"));

        let response = self.client.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Upstream(format!("upstream returned {status}")));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("text/csv")
            .to_string();

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::Network(format!("failed to read upstream body: {e}")))?;

        if body.trim().is_empty() {
            return Err(DashboardError::Upstream("upstream returned an empty body".to_string()));
        }

        Ok(SheetBody { content_type, body })
    }
}

#[async_trait]
impl SheetSource for SheetFetcher {
    async fn fetch_csv(&self) -> Result<String> {
        Ok(self.fetch().await?.body)
    }
}
