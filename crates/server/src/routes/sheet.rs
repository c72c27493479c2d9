//! Raw CSV proxy endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};

use super::error_response;
use crate::context::AppContext;

/// `GET /api/sheet` - proxy the configured upstream CSV export as-is,
/// with no-store caching. Errors map per the status contract; there is
/// no retry.
pub async fn proxy_sheet(State(ctx): State<Arc<AppContext>>) -> Response {
    match ctx.fetcher.fetch().await {
        Ok(sheet) => (
            [
                (CONTENT_TYPE, sheet.content_type),
                (CACHE_CONTROL, "no-store".to_string()),
            ],
            sheet.body,
        )
            .into_response(),
        Err(err) => error_response(&err),
    }
}
