//! Interactive audit service entry point.
//!
//! Fails fast when `GEMINI_API_KEY` is missing: the key is loaded once at
//! startup and held immutably for the process lifetime.

use std::sync::Arc;

use anyhow::Context;
use siteaudit_core::{AuditConfig, GeminiAnalyzer};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;

use app::{AppState, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let analyzer = GeminiAnalyzer::from_env().context("GEMINI_API_KEY must be set")?;
    let state = Arc::new(AppState { analyzer, config: AuditConfig::default() });

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("Failed to bind port {port}"))?;

    info!(port, "siteaudit server listening");

    axum::serve(listener, app(state)).await.context("Server error")?;

    Ok(())
}
