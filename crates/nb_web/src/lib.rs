use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/news", get(handlers::scrape_news))
        .route("/api/news/analysis", get(handlers::analyze_topic))
        .route("/api/analysis", post(handlers::analyze_articles))
        .layer(cors)
        .with_state(Arc::new(state))
}
