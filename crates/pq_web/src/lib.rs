use axum::{
    routing::{get, post, put},
    Router,
};
use pq_state::AppCoordinator;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::WebState;

pub fn create_app(coordinator: Arc<AppCoordinator>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/state", get(handlers::get_state))
        .route("/api/bias-map", get(handlers::get_bias_map))
        .route("/api/articles/refresh", post(handlers::refresh_articles))
        .route("/api/articles/:id/analyze", post(handlers::analyze_article))
        .route("/api/comparison/select/:id", post(handlers::select_for_comparison))
        .route(
            "/api/comparison",
            post(handlers::compare_selected).delete(handlers::clear_comparison),
        )
        .route("/api/filters", put(handlers::set_filters))
        .layer(cors)
        .with_state(Arc::new(WebState { coordinator }))
}

/// Serves the API until the listener fails.
pub async fn serve(addr: &str, coordinator: Arc<AppCoordinator>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, create_app(coordinator)).await
}

pub mod prelude {
    pub use pq_core::{Article, Result, Error};
    pub use crate::WebState;
}
