//! Request handlers.

pub mod admin;
pub mod auth;
pub mod checkout;
pub mod dashboard;
pub mod preferences;
pub mod public;

use axum::{
    Json,
    http::{HeaderMap, HeaderName, StatusCode, Uri, header},
    response::{AppendHeaders, IntoResponse},
};
use serde_json::json;

use crate::{page::PageContext, templates::ErrorTemplate};

/// Liveness probe.
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok", "version": crate::BUILD_VERSION }))
}

/// Fallback for unknown URLs.
pub async fn not_found(ctx: PageContext) -> impl IntoResponse {
    let page = ErrorTemplate {
        page: ctx.chrome("Page Not Found - IPTV Pro"),
        status: 404,
        message: "The page you are looking for does not exist.".to_string(),
    };
    (StatusCode::NOT_FOUND, page)
}

/// A single `Set-Cookie` header.
pub(crate) fn set_cookie(value: String) -> AppendHeaders<[(HeaderName, String); 1]> {
    AppendHeaders([(header::SET_COOKIE, value)])
}

/// Path of the referring page, or `fallback`. Only the path is kept so a
/// forged `Referer` cannot redirect off-site, and any previous notice is
/// dropped.
pub(crate) fn referer_path(headers: &HeaderMap, fallback: &str) -> String {
    headers
        .get(header::REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<Uri>().ok())
        .and_then(|uri| uri.path_and_query().map(ToString::to_string))
        .filter(|path| path.starts_with('/') && !path.starts_with("//"))
        .map_or_else(|| fallback.to_string(), |path| strip_notice(&path))
}

/// `path` without its `notice` query parameter.
pub(crate) fn strip_notice(path: &str) -> String {
    let Some((base, query)) = path.split_once('?') else {
        return path.to_string();
    };
    let kept: Vec<&str> = query.split('&').filter(|pair| !pair.starts_with("notice=")).collect();
    if kept.is_empty() { base.to_string() } else { format!("{base}?{}", kept.join("&")) }
}
