use crate::{AuthError, Result as AuthErrorResult};

use hc_core::{ErrorLocation, IdentityClaims};

use std::panic::Location;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// JWT claim set embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity record id)
    pub sub: String,
    /// Login identifier
    pub unique_name: String,
    /// Display name
    pub name: String,
    /// Plain string role claim, kept for consumers that expect a scalar
    pub role: String,
    /// Role claim list, duplicate of `role` for compatibility
    #[serde(default)]
    pub roles: Vec<String>,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    pub fn from_identity(identity: &IdentityClaims, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: identity.id.to_string(),
            unique_name: identity.identifier.clone(),
            name: identity.display_name.clone(),
            role: identity.role.as_str().to_string(),
            roles: vec![identity.role.as_str().to_string()],
            iat: issued_at.timestamp(),
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.sub.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "sub".to_string(),
                message: "sub (identity id) cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.unique_name.is_empty() {
            return Err(AuthError::InvalidClaim {
                claim: "unique_name".to_string(),
                message: "unique_name cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
