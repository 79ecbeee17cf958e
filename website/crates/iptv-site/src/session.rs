//! Sign-in sessions.
//!
//! A session is an opaque random token kept in a cookie and mapped to the
//! signed-in identity by the in-memory [`SessionStore`]. Customer and admin
//! sessions use separate cookies and are checked independently.

use std::collections::HashMap;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
    response::Redirect,
};
use iptv_types::{AdminUser, UserId};
use tracing::debug;

use crate::state::AppState;

pub const AUTH_COOKIE: &str = "auth_token";
pub const ADMIN_COOKIE: &str = "admin_token";
pub const LANG_COOKIE: &str = "lang";
pub const THEME_COOKIE: &str = "theme";

/// One year, for preference cookies.
const PREFERENCE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

/// Who a customer token belongs to.
///
/// `email` is the address the customer signed in with, which may differ from
/// the catalog record when login fell back to the demo account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerIdentity {
    pub user_id: UserId,
    pub email: String,
}

/// Live sessions, keyed by token.
#[derive(Debug, Default)]
pub struct SessionStore {
    customers: HashMap<String, CustomerIdentity>,
    admins: HashMap<String, AdminUser>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a customer session and returns its token.
    ///
    /// Earlier tokens issued to the same identity are dropped.
    pub fn sign_in_customer(&mut self, identity: CustomerIdentity) -> String {
        self.customers.retain(|_, existing| *existing != identity);
        let token = generate_token("cus");
        self.customers.insert(token.clone(), identity);
        token
    }

    pub fn customer(&self, token: &str) -> Option<&CustomerIdentity> {
        self.customers.get(token)
    }

    /// Starts an admin session and returns its token, replacing any earlier one.
    pub fn sign_in_admin(&mut self, admin: AdminUser) -> String {
        self.admins.retain(|_, existing| existing.id != admin.id);
        let token = generate_token("adm");
        self.admins.insert(token.clone(), admin);
        token
    }

    pub fn admin(&self, token: &str) -> Option<&AdminUser> {
        self.admins.get(token)
    }

    /// Drops a token of either kind. Returns whether it existed.
    pub fn sign_out(&mut self, token: &str) -> bool {
        self.customers.remove(token).is_some() || self.admins.remove(token).is_some()
    }

    /// Drops every session of a deleted customer. Returns how many were live.
    pub fn sign_out_user(&mut self, user_id: &UserId) -> usize {
        let before = self.customers.len();
        self.customers.retain(|_, identity| &identity.user_id != user_id);
        before - self.customers.len()
    }

    /// Keeps the displayed address in step after a profile edit.
    pub fn update_customer_email(&mut self, user_id: &UserId, email: &str) {
        for identity in self.customers.values_mut().filter(|i| &i.user_id == user_id) {
            identity.email = email.to_string();
        }
    }

    pub fn len(&self) -> usize {
        self.customers.len() + self.admins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generates an unguessable session token.
fn generate_token(prefix: &str) -> String {
    use rand::Rng;
    use std::fmt::Write;
    let mut rng = rand::thread_rng();
    let bytes: [u8; 16] = rng.r#gen();
    let mut hex = String::with_capacity(32);
    for b in bytes {
        let _ = write!(hex, "{b:02x}");
    }
    format!("{prefix}-{hex}")
}

// ============================================================================
// Cookies
// ============================================================================

/// Value of the named cookie from any `Cookie` header.
pub fn cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

pub fn session_cookie(name: &str, token: &str) -> String {
    format!("{name}={token}; HttpOnly; SameSite=Lax; Path=/")
}

pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; SameSite=Lax; Path=/; Max-Age=0")
}

pub fn preference_cookie(name: &str, value: &str) -> String {
    format!("{name}={value}; SameSite=Lax; Path=/; Max-Age={PREFERENCE_MAX_AGE}")
}

// ============================================================================
// Extractors
// ============================================================================

/// A signed-in customer. Rejects with a redirect to `/login`.
#[derive(Debug, Clone)]
pub struct CustomerSession {
    pub token: String,
    pub user_id: UserId,
    pub email: String,
}

impl FromRequestParts<AppState> for CustomerSession {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let to_login = || Redirect::to("/login");

        let token = cookie(&parts.headers, AUTH_COOKIE).ok_or_else(to_login)?;
        let identity = state.sessions().read().await.customer(&token).cloned();
        let Some(identity) = identity else {
            debug!("unknown customer token");
            return Err(to_login());
        };

        // The account may have been deleted from the admin panel.
        if state.catalog().await.user(&identity.user_id).is_none() {
            state.sessions().write().await.sign_out(&token);
            return Err(to_login());
        }

        Ok(Self { token, user_id: identity.user_id, email: identity.email })
    }
}

/// A signed-in admin. Rejects with a redirect to `/admin/login`.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub token: String,
    pub admin: AdminUser,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let to_login = || Redirect::to("/admin/login");

        let token = cookie(&parts.headers, ADMIN_COOKIE).ok_or_else(to_login)?;
        let admin = state.sessions().read().await.admin(&token).cloned();
        match admin {
            Some(admin) => Ok(Self { token, admin }),
            None => {
                debug!("unknown admin token");
                Err(to_login())
            }
        }
    }
}
