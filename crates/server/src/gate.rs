//! Access-gate middleware
//!
//! Two states only: a request is authenticated when it carries a valid
//! signed `irq_auth` cookie or originates from an allowlisted IP.
//! Everything else is redirected to the login form with the originally
//! requested path preserved.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use irqdash_domain::constants::AUTH_COOKIE_NAME;
use tracing::debug;

use crate::context::AppContext;

/// Middleware guarding the dashboard and data endpoints.
pub async fn require_auth(
    State(ctx): State<Arc<AppContext>>,
    request: Request,
    next: Next,
) -> Response {
    if is_authenticated(&ctx, &request) {
        return next.run(request).await;
    }

    let requested = request.uri().path();
    debug!(path = requested, "unauthenticated request, redirecting to login");
    let target = format!("/login?next={}", urlencoding::encode(requested));
    Redirect::to(&target).into_response()
}

fn is_authenticated(ctx: &AppContext, request: &Request) -> bool {
    if let Some(token) = cookie_value(request, AUTH_COOKIE_NAME) {
        if ctx.signer.verify(&token, Utc::now()).is_ok() {
            return true;
        }
    }

    client_ip(request).is_some_and(|ip| ctx.allowlist.contains(ip))
}

/// Pull a cookie value out of the request headers.
fn cookie_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|header| header.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Best-effort client IP: the first `X-Forwarded-For` hop when present
/// (the service runs behind a proxy), else the socket peer address.
fn client_ip(request: &Request) -> Option<IpAddr> {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .and_then(|v| v.trim().parse::<IpAddr>().ok());
    if forwarded.is_some() {
        return forwarded;
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip())
}
