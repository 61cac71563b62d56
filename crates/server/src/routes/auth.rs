//! Authentication route handlers.
//!
//! Registration and login. The login handler is a POST: the original demo
//! accepted credentials as GET query parameters, which leaks them into
//! URLs and access logs.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;

use galleria_core::Role;

use crate::error::Result;
use crate::models::Account;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub full_name: String,
    pub address: Option<String>,
    pub payment_info: Option<String>,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Handle registration.
///
/// Returns the created account; the credential is hashed on the way in and
/// never part of any response.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let account: Account = state
        .accounts()
        .register(
            &req.username,
            &req.password,
            req.role,
            &req.full_name,
            req.address.as_deref(),
            req.payment_info.as_deref(),
        )
        .await?;

    tracing::info!(username = %account.username, "Account registered");

    Ok((StatusCode::CREATED, Json(account)))
}

/// Handle login.
///
/// Returns the account on success. An unknown username and a wrong password
/// produce the same `invalid_credentials` answer.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<Account>> {
    let account = state
        .accounts()
        .authenticate(&req.username, &req.password)
        .await?;

    Ok(Json(account))
}
