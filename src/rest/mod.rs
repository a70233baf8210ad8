// rest/mod.rs — Public REST API server.
//
// Axum HTTP server exposing the task CRUD surface.
//
// Endpoints:
//   GET    /api/tasks
//   POST   /api/tasks
//   PATCH  /api/tasks/{id}
//   PATCH  /api/tasks/{id}/toggle
//   DELETE /api/tasks/{id}
//   GET    /api/health

pub mod envelope;
pub mod routes;

use anyhow::Result;
use axum::{
    http::HeaderValue,
    routing::{get, patch},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("REST API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let cors = cors_layer(&ctx.config.cors_origins);
    Router::new()
        // Health (no envelope — infrastructure, not a task resource)
        .route("/api/health", get(routes::health::health))
        // Tasks
        .route(
            "/api/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            patch(routes::tasks::update_task).delete(routes::tasks::delete_task),
        )
        .route("/api/tasks/{id}/toggle", patch(routes::tasks::toggle_task))
        .layer(cors)
        .with_state(ctx)
}

/// Permissive CORS when no origins are configured (development default);
/// otherwise restrict to the configured list.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods(Any)
        .allow_headers(Any)
}
