use crate::{AuthError, Claims, Result as AuthErrorResult};

use hc_config::AuthConfig;
use hc_core::{ErrorLocation, IdentityClaims};

use std::panic::Location;

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Turns verified identity claims into signed HS512 bearer tokens.
///
/// Tokens are stateless and unrevocable; expiry is the only lifecycle
/// control, and logout is a client-side discard.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    /// Build an issuer from injected configuration. A missing signing secret
    /// is fatal to the call that needed the token, not to the process.
    #[track_caller]
    pub fn from_config(config: &AuthConfig) -> AuthErrorResult<Self> {
        let secret =
            config
                .token_secret
                .as_deref()
                .ok_or_else(|| AuthError::ConfigurationMissing {
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(config.token_ttl_hours),
        })
    }

    /// Sign a claim set expiring `ttl` from now (24h by default).
    #[track_caller]
    pub fn issue(&self, identity: &IdentityClaims) -> AuthErrorResult<String> {
        let claims = Claims::from_identity(identity, Utc::now(), self.ttl);

        encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
