mod config;
mod document;
mod errors;
mod generation;
mod models;
mod render;
mod routes;
mod state;
mod template;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::render::DocxEngine;
use crate::routes::build_router;
use crate::state::AppState;
use crate::template::{default_template_style, TemplateStyle};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV document service v{}", env!("CARGO_PKG_VERSION"));

    // Template style: house defaults plus configured header/footer
    let style = TemplateStyle {
        chrome: config.page_chrome().await?,
        ..default_template_style()
    };
    info!(
        "Template style: {} {}pt, logo: {}",
        style.font_family,
        style.body_size / 2,
        if style.chrome.logo.is_some() { "yes" } else { "no" }
    );

    let engine = Arc::new(DocxEngine::new(&style));

    let state = AppState {
        engine,
        style: Arc::new(style),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("DOCX service listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
