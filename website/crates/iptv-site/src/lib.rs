//! IPTV Pro Website Library
//!
//! Marketing pages, the customer dashboard and the admin panel, served from
//! an in-memory mock catalog.

pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod i18n;
pub mod notice;
pub mod page;
pub mod router;
pub mod session;
pub mod state;
pub mod templates;

use tokio::net::TcpListener;
use tracing::info;

use crate::{config::SiteConfig, router::create_router, state::AppState};

/// Build identifier stamped by `build.rs`, used to bust asset caches.
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Run the website server until Ctrl+C.
pub async fn run(config: SiteConfig) -> anyhow::Result<()> {
    let addr = config.bind;
    if config.no_latency {
        info!("mock latency disabled");
    }

    let app = create_router(AppState::new(config));
    let listener = TcpListener::bind(addr).await?;

    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install CTRL+C signal handler");
        std::future::pending::<()>().await;
    }
    info!("Shutting down gracefully...");
}

#[cfg(test)]
mod tests;
