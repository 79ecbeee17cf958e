//! Error types for the site.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use iptv_catalog::CatalogError;
use tracing::{error, warn};

use crate::{page::PageContext, templates::ErrorTemplate};

/// Result type for handlers.
pub type SiteResult<T> = Result<T, SiteError>;

/// Errors that end a request with an error page.
#[derive(thiserror::Error, Debug)]
pub enum SiteError {
    /// A catalog lookup or mutation failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Nothing lives at this URL.
    #[error("page not found")]
    NotFound,

    #[error("failed to render template: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to serialize response: {0}")]
    Json(#[from] serde_json::Error),
}

impl SiteError {
    pub fn status(&self) -> StatusCode {
        match self {
            SiteError::NotFound
            | SiteError::Catalog(
                CatalogError::UserNotFound(_)
                | CatalogError::SubscriptionNotFound(_)
                | CatalogError::PlanNotFound(_)
                | CatalogError::PlanUnavailable(_)
                | CatalogError::OrderNotFound(_)
                | CatalogError::FavoriteNotFound(_),
            ) => StatusCode::NOT_FOUND,
            SiteError::Catalog(CatalogError::EmailTaken(_)) => StatusCode::CONFLICT,
            SiteError::Render(_) | SiteError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(error = %self, "request rejected");
        }

        let message = match status {
            StatusCode::NOT_FOUND => "The page you are looking for does not exist.".to_string(),
            _ if status.is_server_error() => "Something went wrong. Please try again.".to_string(),
            _ => self.to_string(),
        };
        let page = ErrorTemplate {
            page: PageContext::default().chrome(status.canonical_reason().unwrap_or("Error")),
            status: status.as_u16(),
            message,
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(_) => (status, "Something went wrong").into_response(),
        }
    }
}
