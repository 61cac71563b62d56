//! User route handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::error::Result;
use crate::models::Account;
use crate::state::AppState;

/// Update-profile request body.
///
/// Only the mutable profile fields appear here; role and username are not
/// reachable from this path.
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub full_name: String,
    pub address: Option<String>,
    pub payment_info: Option<String>,
}

/// List all accounts. Credentials are excluded by construction.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<Account>>> {
    let accounts = state.accounts().list_all().await?;
    Ok(Json(accounts))
}

/// Overwrite the mutable profile fields of an account.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<StatusCode> {
    state
        .accounts()
        .update_profile(
            &req.username,
            &req.full_name,
            req.address.as_deref(),
            req.payment_info.as_deref(),
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
