//! IrqDash - sales dashboard service
//!
//! Main entry point: loads configuration, wires the application context,
//! starts the background refresh timer, and serves the router.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use irqdash_server::{router, AppContext};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(e) => warn!(error = %e, "could not load .env file"),
    }

    let config = irqdash_infra::config::load()?;
    let bind_addr = config.server.bind_addr.clone();
    let refresh_interval = Duration::from_secs(config.sheet.refresh_interval_seconds.max(1));

    let ctx = Arc::new(AppContext::new(config)?);

    // Periodic refresh keeps the snapshot warm between requests.
    let refresher = ctx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh_interval);
        loop {
            interval.tick().await;
            refresher.refresh_now().await;
        }
    });

    let app = router(ctx);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "irqdash listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
