//! API route definitions

mod analyze;
mod health;

use axum::{routing::get, Json, Router};

use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .merge(analyze::routes())
        .merge(health::routes())
}

/// GET / - Service banner
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "News Pulse API Running" }))
}
