//! Account role and store policy enums.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`Role`] from a string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid role: {0}")]
pub struct RoleParseError(pub String);

/// Account role with different permission levels.
///
/// The backend stores the role and returns it to the caller; menu gating on
/// top of it is the dashboard's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Store management: add/remove products, inspect users and purchases.
    Admin,
    /// Regular shopper account.
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(RoleParseError(s.to_owned())),
        }
    }
}

/// Error returned when parsing a [`ProductDeletePolicy`] from a string.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid product delete policy: {0} (expected orphan, restrict, or cascade)")]
pub struct PolicyParseError(pub String);

/// What happens to purchases referencing a product when it is deleted.
///
/// `Orphan` matches the historical behaviour: purchase rows keep pointing at
/// a product id that no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductDeletePolicy {
    /// Delete the product only; referencing purchases are left in place.
    #[default]
    Orphan,
    /// Refuse to delete a product that purchases still reference.
    Restrict,
    /// Delete referencing purchases together with the product.
    Cascade,
}

impl std::fmt::Display for ProductDeletePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Orphan => write!(f, "orphan"),
            Self::Restrict => write!(f, "restrict"),
            Self::Cascade => write!(f, "cascade"),
        }
    }
}

impl std::str::FromStr for ProductDeletePolicy {
    type Err = PolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "orphan" => Ok(Self::Orphan),
            "restrict" => Ok(Self::Restrict),
            "cascade" => Ok(Self::Cascade),
            _ => Err(PolicyParseError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display_from_str_roundtrip() {
        for role in [Role::Admin, Role::User] {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_from_str_invalid() {
        assert!("superuser".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serde_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
        let parsed: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, Role::User);
    }

    #[test]
    fn test_policy_default_is_orphan() {
        assert_eq!(ProductDeletePolicy::default(), ProductDeletePolicy::Orphan);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "restrict".parse::<ProductDeletePolicy>().unwrap(),
            ProductDeletePolicy::Restrict
        );
        assert_eq!(
            "cascade".parse::<ProductDeletePolicy>().unwrap(),
            ProductDeletePolicy::Cascade
        );
        assert!("drop".parse::<ProductDeletePolicy>().is_err());
    }
}
