//! Application State
//!
//! Arc-wrapped state shared across handlers.

use std::sync::Arc;

use iptv_catalog::Catalog;
use iptv_types::{AdminRole, AdminUser};
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use crate::{
    config::{MockOp, SiteConfig},
    session::SessionStore,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    config: SiteConfig,
    catalog: RwLock<Catalog>,
    sessions: RwLock<SessionStore>,
}

impl AppState {
    /// State backed by the seeded mock catalog.
    pub fn new(config: SiteConfig) -> Self {
        Self::with_catalog(config, Catalog::seeded())
    }

    pub fn with_catalog(config: SiteConfig, catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(InnerState {
                config,
                catalog: RwLock::new(catalog),
                sessions: RwLock::new(SessionStore::new()),
            }),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Shared access to the catalog. Do not hold across an `.await`.
    pub async fn catalog(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.catalog.read().await
    }

    /// Exclusive access to the catalog. Do not hold across an `.await`.
    pub async fn catalog_mut(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.inner.catalog.write().await
    }

    pub fn sessions(&self) -> &RwLock<SessionStore> {
        &self.inner.sessions
    }

    /// The admin account accepted by the admin login, if the credentials match.
    pub fn admin_for(&self, email: &str, password: &str) -> Option<AdminUser> {
        let config = self.config();
        (email.trim().eq_ignore_ascii_case(&config.admin_email) && password == config.admin_password)
            .then(|| AdminUser {
                id: "admin1".to_string(),
                name: "Super Admin".to_string(),
                email: config.admin_email.clone(),
                role: AdminRole::SuperAdmin,
                permissions: vec!["all".to_string()],
                avatar: None,
            })
    }

    /// Waits as long as the mock backend call `op` pretends to take.
    pub async fn simulate(&self, op: MockOp) {
        let delay = self.config().latency(op);
        if !delay.is_zero() {
            debug!(?op, ?delay, "simulating backend latency");
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
