//! Computed dashboard endpoints

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::Utc;
use irqdash_core::build_report;
use irqdash_domain::{ContextDate, DashboardError};
use serde::Deserialize;

use super::error_response;
use crate::context::AppContext;

#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Optional `YYYY-MM` context month; live mode when omitted.
    pub month: Option<String>,
}

/// `GET /api/dashboard` - the full computed report for one context month.
pub async fn dashboard_report(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let today = Utc::now().date_naive();
    let context = match &query.month {
        Some(raw) => match parse_context_month(raw) {
            Ok(context) => context,
            Err(err) => return error_response(&err),
        },
        None => ContextDate::live(today),
    };

    // Lazy first load; afterwards the background timer keeps it warm.
    if ctx.state.read().snapshot().is_none() {
        ctx.refresh_now().await;
    }

    let state = ctx.state.read();
    match state.snapshot() {
        Some(snapshot) => Json(build_report(snapshot, context, today)).into_response(),
        // The stored error keeps its variant so config failures stay 500
        // while upstream failures map to 502.
        None => match state.last_error() {
            Some(err) => error_response(err),
            None => error_response(&DashboardError::Upstream(
                "no sheet snapshot available".to_string(),
            )),
        },
    }
}

/// `GET /` - minimal dashboard shell; rendering happens client-side off
/// the JSON endpoint.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(
        "<!doctype html>\
         <html><head><title>IrqDash</title></head>\
         <body><h1>IrqDash</h1>\
         <p>Sales dashboard. Data: <a href=\"/api/dashboard\">/api/dashboard</a>, \
         raw export: <a href=\"/api/sheet\">/api/sheet</a>.</p>\
         </body></html>",
    )
}

fn parse_context_month(raw: &str) -> Result<ContextDate, DashboardError> {
    let invalid =
        || DashboardError::InvalidInput(format!("month must be YYYY-MM, got {raw:?}"));
    let (year, month) = raw.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    ContextDate::selected(year, month)
}
