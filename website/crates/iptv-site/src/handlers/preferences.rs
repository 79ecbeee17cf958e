//! Language and theme preferences, kept in cookies.

use axum::{
    Form,
    extract::Path,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tracing::debug;

use super::{referer_path, set_cookie};
use crate::{
    error::SiteError,
    i18n::{Lang, Theme},
    session::{LANG_COOKIE, THEME_COOKIE, cookie, preference_cookie},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeForm {
    /// Theme to switch to; empty toggles the current one.
    pub theme: String,
}

/// Switches the interface language and returns to the previous page.
pub async fn language(Path(code): Path<String>, headers: HeaderMap) -> Result<Response, SiteError> {
    let lang: Lang = code.parse().map_err(|_| SiteError::NotFound)?;
    debug!(%lang, "switching language");
    Ok((
        set_cookie(preference_cookie(LANG_COOKIE, lang.code())),
        Redirect::to(&referer_path(&headers, "/")),
    )
        .into_response())
}

/// Switches between light and dark mode.
pub async fn theme(headers: HeaderMap, Form(form): Form<ThemeForm>) -> impl IntoResponse {
    let theme = form.theme.parse::<Theme>().unwrap_or_else(|_| {
        cookie(&headers, THEME_COOKIE)
            .and_then(|current| current.parse::<Theme>().ok())
            .unwrap_or_default()
            .toggled()
    });
    (
        set_cookie(preference_cookie(THEME_COOKIE, theme.as_str())),
        Redirect::to(&referer_path(&headers, "/")),
    )
}
