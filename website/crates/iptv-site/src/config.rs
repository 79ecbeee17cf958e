//! Site configuration.
//!
//! Parsed from the command line with environment fallbacks. Tests build
//! configurations through [`SiteConfig::default`] and the `with_*` methods.

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use clap::Parser;

/// Default bind address.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Credentials of the built-in admin account.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@iptvpro.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Configuration for the website server.
#[derive(Debug, Clone, Parser)]
#[command(name = "iptv-site", version, about = "IPTV Pro website, customer dashboard and admin panel")]
pub struct SiteConfig {
    /// Address to listen on.
    #[arg(long, env = "IPTV_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Directory served under `/public`.
    #[arg(long, env = "IPTV_PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Skip the artificial delays of mock operations.
    #[arg(long, env = "IPTV_NO_LATENCY")]
    pub no_latency: bool,

    /// Email accepted by the admin login.
    #[arg(long, env = "IPTV_ADMIN_EMAIL", default_value = DEFAULT_ADMIN_EMAIL)]
    pub admin_email: String,

    /// Password accepted by the admin login.
    #[arg(long, env = "IPTV_ADMIN_PASSWORD", default_value = DEFAULT_ADMIN_PASSWORD, hide_env_values = true)]
    pub admin_password: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            public_dir: PathBuf::from("public"),
            no_latency: false,
            admin_email: DEFAULT_ADMIN_EMAIL.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_public_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.public_dir = dir.into();
        self
    }

    /// Disables mock latency.
    pub fn without_latency(mut self) -> Self {
        self.no_latency = true;
        self
    }

    pub fn with_admin_credentials(
        mut self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.admin_email = email.into();
        self.admin_password = password.into();
        self
    }

    /// How long the given mock operation pretends to take.
    pub fn latency(&self, op: MockOp) -> Duration {
        if self.no_latency {
            Duration::ZERO
        } else {
            op.duration()
        }
    }
}

/// Operations that simulate a round trip to a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockOp {
    /// Login, registration, admin login and profile updates.
    Auth,
    /// Contact form and password reset.
    Contact,
    Checkout,
    /// A message to one customer.
    DirectMessage,
    /// Broadcasts and promotions.
    BulkMessage,
}

impl MockOp {
    pub fn duration(self) -> Duration {
        match self {
            MockOp::Auth | MockOp::DirectMessage => Duration::from_secs(1),
            MockOp::Contact | MockOp::BulkMessage => Duration::from_secs(2),
            MockOp::Checkout => Duration::from_secs(3),
        }
    }
}
