//! Application context - dependency injection container

use std::sync::Arc;
use std::time::Duration;

use irqdash_core::{DashboardState, RefreshService};
use irqdash_domain::{Config, Result};
use irqdash_infra::{HttpClient, IpAllowlist, SheetFetcher, TokenSigner};
use parking_lot::RwLock;
use tracing::{debug, warn};

/// Shared application state handed to every handler.
pub struct AppContext {
    pub config: Config,
    pub signer: TokenSigner,
    pub allowlist: IpAllowlist,
    pub fetcher: SheetFetcher,
    pub refresh: RefreshService,
    pub state: RwLock<DashboardState>,
}

impl AppContext {
    /// Wire up all services from loaded configuration.
    ///
    /// # Errors
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let client = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("irqdash")
            .build()?;

        let fetcher = SheetFetcher::new(client, config.sheet.csv_url.clone());
        let refresh = RefreshService::new(
            Arc::new(fetcher.clone()),
            Duration::from_millis(config.sheet.confirm_delay_ms),
        );

        Ok(Self {
            signer: TokenSigner::new(&config.auth.secret),
            allowlist: IpAllowlist::new(&config.auth.allowed_ips),
            fetcher,
            refresh,
            state: RwLock::new(DashboardState::new()),
            config,
        })
    }

    /// Run one refresh cycle and fold the outcome into view state.
    pub async fn refresh_now(&self) {
        let outcome = self.refresh.refresh().await;
        if let Err(err) = &outcome.result {
            warn!(error = %err, cycle_id = outcome.cycle_id, "refresh cycle failed");
        }
        let applied = self.state.write().apply(outcome);
        if !applied {
            debug!("discarded refresh outcome from a superseded cycle");
        }
    }
}
