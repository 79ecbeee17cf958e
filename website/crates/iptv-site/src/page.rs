//! Per-request page context: preferences, signed-in names and the pending notice.

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::{
    i18n::{Lang, Theme},
    notice::{Notice, Toast},
    session::{ADMIN_COOKIE, AUTH_COOKIE, LANG_COOKIE, THEME_COOKIE, cookie},
    state::AppState,
    templates::{Chrome, LangOption},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NoticeQuery {
    notice: Option<String>,
}

/// Everything the shared page chrome needs to know about the request.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub lang: Lang,
    pub theme: Theme,
    /// Display name of the signed-in customer.
    pub customer: Option<String>,
    /// Display name of the signed-in admin.
    pub admin: Option<String>,
    pub notice: Option<Notice>,
    pub path: String,
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let lang = cookie(&parts.headers, LANG_COOKIE)
            .and_then(|code| code.parse().ok())
            .unwrap_or_default();
        let theme = cookie(&parts.headers, THEME_COOKIE)
            .and_then(|code| code.parse().ok())
            .unwrap_or_default();

        let customer_id = match cookie(&parts.headers, AUTH_COOKIE) {
            Some(token) => state.sessions().read().await.customer(&token).map(|i| i.user_id.clone()),
            None => None,
        };
        let customer = match customer_id {
            Some(id) => state.catalog().await.user(&id).map(|u| u.name.clone()),
            None => None,
        };
        let admin = match cookie(&parts.headers, ADMIN_COOKIE) {
            Some(token) => state.sessions().read().await.admin(&token).map(|a| a.name.clone()),
            None => None,
        };

        let notice = Query::<NoticeQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.notice)
            .and_then(|slug| Notice::from_slug(&slug));

        Ok(Self {
            lang,
            theme,
            customer,
            admin,
            notice,
            path: parts.uri.path().to_string(),
        })
    }
}

impl PageContext {
    /// Chrome for a page titled `title`, showing the pending notice if any.
    pub fn chrome(&self, title: impl Into<String>) -> Chrome {
        Chrome {
            title: title.into(),
            lang: self.lang.code(),
            dir: self.lang.dir(),
            theme: self.theme.as_str(),
            next_theme: self.theme.toggled().as_str(),
            t: self.lang.strings(),
            languages: Lang::ALL
                .iter()
                .map(|lang| LangOption {
                    code: lang.code(),
                    name: lang.native_name(),
                    current: *lang == self.lang,
                })
                .collect(),
            customer: self.customer.clone(),
            admin: self.admin.clone(),
            toast: self.notice.map(Notice::toast),
            path: self.path.clone(),
            version: crate::BUILD_VERSION,
        }
    }

    /// Chrome for a page re-rendered after a POST, showing `toast` inline.
    pub fn chrome_with(&self, title: impl Into<String>, toast: Toast) -> Chrome {
        Chrome { toast: Some(toast), ..self.chrome(title) }
    }
}
