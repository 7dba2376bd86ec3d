//! # packer-api: Axum API Services for the Pack Planner
//!
//! HTTP front end over the pack size registry and the order optimizer.
//!
//! ## API Surface
//!
//! | Path | Module | Domain |
//! |------|--------|--------|
//! | `/order/*` | [`routes::order`] | Order planning |
//! | `/pack/*`, `/packs` | [`routes::packs`] | Pack size catalogue |
//! | `/health/*` | this module | Probes |
//! | `/metrics` | this module | Prometheus scrape |
//! | `/openapi.json` | [`openapi`] | OpenAPI document |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → BodyLimit → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;

use anyhow::Context;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::{Extension, Router};
use tower_http::trace::TraceLayer;

use crate::middleware::metrics::ApiMetrics;
use crate::state::{AppConfig, AppState};

/// Maximum accepted request body.
pub const BODY_LIMIT: usize = 64 * 1024;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let metrics = ApiMetrics::new();
    let metrics_on = state.config.metrics_enabled;

    let mut router = Router::new()
        .merge(routes::order::router())
        .merge(routes::packs::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    if metrics_on {
        router = router
            .route("/metrics", axum::routing::get(prometheus_metrics))
            .layer(from_fn(middleware::metrics::metrics_middleware))
            .layer(Extension(metrics));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Bind the configured port and serve until Ctrl-C.
pub async fn serve(config: AppConfig) -> anyhow::Result<()> {
    let port = config.port;
    let strategy = config.strategy;
    let state = AppState::bootstrap(config).context("failed to build application state")?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, %strategy, "packer API listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("packer API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

/// GET /metrics: Prometheus metrics scrape endpoint.
async fn prometheus_metrics(
    State(state): State<AppState>,
    Extension(metrics): Extension<ApiMetrics>,
) -> impl IntoResponse {
    metrics
        .pack_sizes()
        .set(state.store.list_sizes().len() as f64);

    match metrics.gather_and_encode() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: returns 200 once the registry answers a listing.
async fn readiness(State(state): State<AppState>) -> &'static str {
    let sizes = state.store.list_sizes().len();
    tracing::trace!(sizes, "readiness check");
    "ready"
}
