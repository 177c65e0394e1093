use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::ProductRequest;
use crate::state::AppState;

pub async fn get_all_products(State(state): State<AppState>) -> ProductResult<impl IntoResponse> {
    let products = state.service.get_all_products().await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(body): Json<ProductRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = state.service.create_product(body).await?;
    state.products_created_counter.add(1, &[]);

    tracing::info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ProductResult<impl IntoResponse> {
    let product = state.service.get_product(id).await?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ProductResult<impl IntoResponse> {
    state.service.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
