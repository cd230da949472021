pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health, also used by the load balancer
        .route("/", get(handlers::health::health_check))
        // Topics
        .route("/create-topic", post(handlers::topics::create_topic))
        .route("/delete-topic", post(handlers::topics::delete_topic))
        // Subscriptions
        .route("/subscribe", post(handlers::subscriptions::subscribe))
        .route("/unsubscribe", post(handlers::subscriptions::unsubscribe))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
