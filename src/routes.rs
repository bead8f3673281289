use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    docs,
    handlers::{create_stock, delete_stock, get_all_stock, get_stock, update_stock},
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api-docs/openapi.json", get(docs::openapi))
        .route("/api/stock", post(create_stock).get(get_all_stock))
        .route(
            "/api/stock/:id",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "OK"
}
