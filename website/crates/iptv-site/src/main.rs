//! IPTV Pro Website
//!
//! Marketing site, customer dashboard and admin panel for IPTV Pro.

use clap::Parser;
use iptv_site::config::SiteConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "iptv_site=debug,iptv_catalog=info,tower_http=debug".parse().expect("valid filter")
        }))
        .with(fmt::layer())
        .init();

    let config = SiteConfig::parse();
    tracing::info!(version = iptv_site::BUILD_VERSION, "Starting IPTV Pro website server");

    iptv_site::run(config).await
}
