//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::error::Result;
use crate::models::Product;
use crate::state::AppState;

/// Add-product request body.
#[derive(Debug, Deserialize)]
pub struct AddProductRequest {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub thumbnail_url: Option<String>,
}

/// List all products.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.catalog().list_products().await?;
    Ok(Json(products))
}

/// Add a product to the catalog.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<AddProductRequest>,
) -> Result<impl IntoResponse> {
    let product = state
        .catalog()
        .add_product(
            &req.name,
            &req.category,
            req.price,
            req.thumbnail_url.as_deref(),
        )
        .await?;

    tracing::info!(name = %product.name, "Product added");

    Ok((StatusCode::CREATED, Json(product)))
}

/// Delete a product by name.
pub async fn remove(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode> {
    state.catalog().delete_product(&name).await?;

    tracing::info!(name = %name, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
