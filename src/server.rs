//! HTTP server initialization and runtime setup.
//!
//! Builds the outbound HTTP client, gateway implementations, services, and
//! the Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;

use crate::application::services::{CatalogService, PurchaseService, RelayService};
use crate::config::Config;
use crate::domain::catalog::Catalog;
use crate::infrastructure::audio::DriveAudioSource;
use crate::infrastructure::email::ResendMailer;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The bundled catalog
/// - A shared outbound HTTP client with the configured bounded timeout
/// - Resend mailer and Drive audio source gateways
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.upstream_timeout_seconds))
        .build()
        .context("Failed to create HTTP client")?;

    let catalog = Arc::new(Catalog::bundled());
    tracing::info!("Catalog loaded: {} tracks", catalog.len());

    let mailer = Arc::new(ResendMailer::new(
        http.clone(),
        config.resend_api_key.clone(),
        config.resend_from_email.clone(),
        config.resend_to_email.clone(),
    ));
    let audio_source = Arc::new(DriveAudioSource::new(http, config.drive_base_url.clone()));

    let state = AppState::new(
        Arc::new(CatalogService::new(catalog)),
        Arc::new(PurchaseService::new(mailer)),
        Arc::new(RelayService::new(audio_source)),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
