//! Core types for Galleria.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod role;
pub mod username;

pub use id::*;
pub use price::{Price, PriceError};
pub use role::{PolicyParseError, ProductDeletePolicy, Role, RoleParseError};
pub use username::{Username, UsernameError};
