//! Trust-Aware Decision Server
//!
//! HTTP boundary around the decision core.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   DECISION SERVER                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────┐  ┌──────────────────────┐ │
//! │  │  API      │  │  Validation  │  │  Classifier          │ │
//! │  │  (Axum)   │─►│  (length,    │─►│  (ModelHandle,       │ │
//! │  │           │  │   threshold) │  │   blocking pool)     │ │
//! │  └───────────┘  └──────────────┘  └──────────┬───────────┘ │
//! │                                              ▼              │
//! │                         ┌─────────────────────────────────┐ │
//! │                         │  decision-core: risk + explain  │ │
//! │                         └─────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;

use axum::{
    Router,
    routing::{get, post},
};
use decision_core::{ModelHandle, RiskThresholds};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "decision_server=debug,decision_core=info,tower_http=debug".into());
    if config.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Trust-Aware Decision Server starting...");

    let thresholds = config.risk_thresholds()?;
    tracing::info!(
        "Thresholds: confidence={:.2} margin={:.2}",
        thresholds.confidence,
        thresholds.margin
    );

    let model = ModelHandle::lexicon(config.model_name.clone());
    if config.preload_model {
        let warm = model.clone();
        tokio::task::spawn_blocking(move || {
            warm.get();
        })
        .await?;
    }

    // Build application state
    let state = AppState {
        model,
        thresholds,
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub model: ModelHandle,
    pub thresholds: RiskThresholds,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/analyze", post(handlers::analyze::analyze))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
