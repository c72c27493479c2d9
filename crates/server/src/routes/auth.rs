//! Login surface
//!
//! Two submission paths exist for historical clients: a JSON login that
//! answers 200/401, and a form login that redirects. Both set the same
//! signed cookie on success.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Redirect, Response};
use axum::Form;
use chrono::Utc;
use irqdash_domain::constants::AUTH_COOKIE_NAME;
use irqdash_domain::Result;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::error_response;
use crate::context::AppContext;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub err: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthForm {
    pub username: String,
    pub password: String,
    pub next: Option<String>,
}

/// `GET /login` - minimal HTML login form.
pub async fn login_form(Query(query): Query<LoginQuery>) -> Html<String> {
    let banner = if query.err.is_some() {
        "<p class=\"error\">Invalid username or password.</p>"
    } else {
        ""
    };
    let next = escape_attr(query.next.as_deref().unwrap_or("/"));

    Html(format!(
        "<!doctype html>\
         <html><head><title>IrqDash login</title></head><body>\
         <h1>Sign in</h1>{banner}\
         <form method=\"post\" action=\"/api/auth\">\
         <input type=\"hidden\" name=\"next\" value=\"{next}\">\
         <label>Username <input name=\"username\" autocomplete=\"username\"></label>\
         <label>Password <input name=\"password\" type=\"password\"></label>\
         <button type=\"submit\">Sign in</button>\
         </form></body></html>"
    ))
}

/// `POST /api/login` - JSON credential check; 200 + cookie or 401.
pub async fn login_json(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<LoginBody>,
) -> Response {
    if !credentials_match(&ctx, &body.username, &body.password) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "invalid credentials" })))
            .into_response();
    }

    match issue_cookie(&ctx) {
        Ok(cookie) => {
            info!(username = %body.username, "login succeeded");
            ([(SET_COOKIE, cookie)], Json(json!({ "ok": true }))).into_response()
        }
        Err(err) => error_response(&err),
    }
}

/// `POST /api/auth` - form credential check; redirect to `next` or back
/// to the login form with an error flag.
pub async fn login_submit(
    State(ctx): State<Arc<AppContext>>,
    Form(form): Form<AuthForm>,
) -> Response {
    // Only same-site paths are honored as redirect targets.
    let next = form
        .next
        .filter(|n| n.starts_with('/') && !n.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());

    if !credentials_match(&ctx, &form.username, &form.password) {
        let target = format!("/login?err=1&next={}", urlencoding::encode(&next));
        return Redirect::to(&target).into_response();
    }

    match issue_cookie(&ctx) {
        Ok(cookie) => {
            info!(username = %form.username, "login succeeded");
            ([(SET_COOKIE, cookie)], Redirect::to(&next)).into_response()
        }
        Err(err) => error_response(&err),
    }
}

fn credentials_match(ctx: &AppContext, username: &str, password: &str) -> bool {
    username == ctx.config.auth.username && password == ctx.config.auth.password
}

fn issue_cookie(ctx: &AppContext) -> Result<String> {
    let ttl_hours = ctx.config.auth.token_ttl_hours;
    let token = ctx.signer.sign(&ctx.config.auth.username, ttl_hours, Utc::now())?;
    Ok(format!(
        "{AUTH_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        ttl_hours * 3600
    ))
}

fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}
