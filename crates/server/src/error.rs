//! Unified error handling for the HTTP surface.
//!
//! Provides a unified `AppError` type that every route handler returns.
//! Each failure maps to a stable machine-readable code plus a
//! human-readable message; raw storage error text never reaches the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::{AccountError, CatalogError, OrderError};

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Account operation failed.
    #[error("account error: {0}")]
    Account(#[from] AccountError),

    /// Catalog operation failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Order operation failed.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// Database operation failed outside a service.
    #[error("database error: {0}")]
    Database(#[from] RepositoryError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Stable machine-readable code.
    error: &'static str,
    /// Human-readable description.
    message: String,
}

impl AppError {
    /// Stable error code for the response body.
    fn code(&self) -> &'static str {
        match self {
            Self::Account(err) => match err {
                AccountError::DuplicateUsername => "duplicate_username",
                AccountError::InvalidCredentials => "invalid_credentials",
                AccountError::NotFound => "not_found",
                AccountError::InvalidUsername(_) | AccountError::WeakPassword(_) => {
                    "invalid_argument"
                }
                AccountError::PasswordHash | AccountError::Repository(_) => "internal",
            },
            Self::Catalog(err) => match err {
                CatalogError::DuplicateName => "duplicate_product_name",
                CatalogError::NotFound => "not_found",
                CatalogError::InvalidPrice(_) => "invalid_argument",
                CatalogError::InUse => "product_in_use",
                CatalogError::Repository(_) => "internal",
            },
            Self::Order(err) => match err {
                OrderError::BuyerNotFound | OrderError::ProductNotFound => "not_found",
                OrderError::Repository(_) => "internal",
            },
            Self::Database(_) | Self::Internal(_) => "internal",
        }
    }

    /// HTTP status for the response.
    fn status(&self) -> StatusCode {
        match self {
            Self::Account(err) => match err {
                AccountError::DuplicateUsername => StatusCode::CONFLICT,
                AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AccountError::NotFound => StatusCode::NOT_FOUND,
                AccountError::InvalidUsername(_) | AccountError::WeakPassword(_) => {
                    StatusCode::BAD_REQUEST
                }
                AccountError::PasswordHash | AccountError::Repository(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Catalog(err) => match err {
                CatalogError::DuplicateName | CatalogError::InUse => StatusCode::CONFLICT,
                CatalogError::NotFound => StatusCode::NOT_FOUND,
                CatalogError::InvalidPrice(_) => StatusCode::BAD_REQUEST,
                CatalogError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Order(err) => match err {
                OrderError::BuyerNotFound | OrderError::ProductNotFound => StatusCode::NOT_FOUND,
                OrderError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error carries storage-level detail that must not leak.
    fn is_internal(&self) -> bool {
        self.status() == StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "Request error");
        }

        let status = self.status();
        let code = self.code();

        // Don't expose internal error details to clients
        let message = if self.is_internal() {
            "Internal server error".to_string()
        } else {
            match &self {
                Self::Account(err) => err.to_string(),
                Self::Catalog(err) => err.to_string(),
                Self::Order(err) => err.to_string(),
                Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            }
        };

        (
            status,
            Json(ErrorBody {
                error: code,
                message,
            }),
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            get_status(AppError::Account(AccountError::DuplicateUsername)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Account(AccountError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::NotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Order(OrderError::ProductNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            AppError::Account(AccountError::DuplicateUsername).code(),
            "duplicate_username"
        );
        assert_eq!(
            AppError::Catalog(CatalogError::DuplicateName).code(),
            "duplicate_product_name"
        );
        assert_eq!(
            AppError::Catalog(CatalogError::InvalidPrice(
                galleria_core::PriceError::Negative(-1.0)
            ))
            .code(),
            "invalid_argument"
        );
        assert_eq!(AppError::Order(OrderError::BuyerNotFound).code(), "not_found");
    }

    #[test]
    fn test_internal_message_is_generic() {
        let err = AppError::Database(RepositoryError::DataCorruption(
            "secret table detail".to_string(),
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
