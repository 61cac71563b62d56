//! HTTP route handlers for the shop API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (DB ping)
//!
//! # Auth
//! POST /auth/register          - Register an account
//! POST /auth/login             - Authenticate (POST so credentials never
//!                                land in URLs or access logs)
//!
//! # Products
//! GET    /products             - Product listing
//! POST   /products             - Add a product
//! DELETE /products/{name}      - Delete a product by name
//!
//! # Purchases
//! GET  /purchases              - All purchases, ordered by id
//! POST /purchases              - Record a purchase
//!
//! # Users
//! GET  /users                  - All accounts (credentials excluded)
//! POST /users/profile          - Update profile fields
//! ```
//!
//! Identity is caller-supplied per request (buyer id in the purchase body,
//! username in the profile body); the server keeps no session state.

pub mod auth;
pub mod products;
pub mod purchases;
pub mod users;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route("/{name}", axum::routing::delete(products::remove))
}

/// Create the purchase routes router.
pub fn purchase_routes() -> Router<AppState> {
    Router::new().route("/", get(purchases::index).post(purchases::create))
}

/// Create the user routes router.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(users::index))
        .route("/profile", post(users::update_profile))
}

/// Create all routes for the shop API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/products", product_routes())
        .nest("/purchases", purchase_routes())
        .nest("/users", user_routes())
}
