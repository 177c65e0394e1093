use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use axum_tracing_opentelemetry::middleware::{OtelAxumLayer, OtelInResponseLayer};
use tower_http::cors::CorsLayer;

use crate::handlers::{create_product, delete_product, get_all_products, get_product};
use crate::state::AppState;

/// Browser access for the catalog front end. Any origin is allowed when
/// `allowed_origin` is `None`.
pub fn cors_layer(allowed_origin: Option<HeaderValue>) -> CorsLayer {
    match allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .max_age(Duration::from_secs(3600)),
        None => CorsLayer::permissive(),
    }
}

pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api/products", get(get_all_products).post(create_product))
        .route("/api/products/{id}", get(get_product).delete(delete_product))
        .layer(cors)
        .layer(OtelInResponseLayer)
        .layer(OtelAxumLayer::default())
        .with_state(state)
}
