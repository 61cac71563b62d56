//! Purchase route handlers.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use galleria_core::{AccountId, ProductId};

use crate::error::Result;
use crate::models::Purchase;
use crate::state::AppState;

/// Create-purchase request body.
///
/// The purchase time is assigned server-side, so there is no timestamp
/// field here; the buyer address travels with the purchase and may differ
/// from the account's stored address.
#[derive(Debug, Deserialize)]
pub struct CreatePurchaseRequest {
    pub buyer_id: AccountId,
    pub product_id: ProductId,
    pub payment_status: String,
    pub buyer_address: String,
}

/// List all purchases.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Purchase>>> {
    let purchases = state.orders().list_purchases().await?;
    Ok(Json(purchases))
}

/// Record a purchase.
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreatePurchaseRequest>,
) -> Result<impl IntoResponse> {
    let purchase = state
        .orders()
        .create_purchase(
            req.buyer_id,
            req.product_id,
            &req.payment_status,
            &req.buyer_address,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(purchase)))
}
