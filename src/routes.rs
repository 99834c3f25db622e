use std::sync::Arc;

use axum::{routing::get, Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    handler::{docs::docs_handler, properties::property_handler, users::users_handler},
    AppState,
};

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "message": "Server is running"
    }))
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(docs_handler())
        .nest("/user", users_handler())
        .nest("/property", property_handler())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(app_state))
}
