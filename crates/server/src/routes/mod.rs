//! HTTP routes

pub mod auth;
pub mod dashboard;
pub mod sheet;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use irqdash_domain::DashboardError;
use serde_json::json;

use crate::context::AppContext;
use crate::gate;

/// Build the application router. Dashboard and data endpoints sit behind
/// the access gate; the login surface and the liveness probe do not.
pub fn router(ctx: Arc<AppContext>) -> Router {
    let gated = Router::new()
        .route("/", get(dashboard::dashboard_page))
        .route("/api/sheet", get(sheet::proxy_sheet))
        .route("/api/dashboard", get(dashboard::dashboard_report))
        .layer(middleware::from_fn_with_state(ctx.clone(), gate::require_auth));

    Router::new()
        .merge(gated)
        .route("/login", get(auth::login_form))
        .route("/api/login", post(auth::login_json))
        .route("/api/auth", post(auth::login_submit))
        .route("/healthz", get(healthz))
        .with_state(ctx)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Map a domain error onto the response status contract: missing
/// configuration and network exceptions are 500s, upstream failures 502.
pub(crate) fn error_status(err: &DashboardError) -> StatusCode {
    match err {
        DashboardError::Upstream(_) => StatusCode::BAD_GATEWAY,
        DashboardError::Auth(_) => StatusCode::UNAUTHORIZED,
        DashboardError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        DashboardError::NotFound(_) => StatusCode::NOT_FOUND,
        DashboardError::Config(_) | DashboardError::Network(_) | DashboardError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn error_response(err: &DashboardError) -> Response {
    (error_status(err), Json(json!({ "error": err.to_string() }))).into_response()
}
