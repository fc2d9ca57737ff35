use crate::{AuthError, Claims, Result as AuthErrorResult};

use hc_config::AuthConfig;
use hc_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies issued tokens: signature first, then expiry, then claim shape.
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    /// Create validator with HS512 (symmetric secret)
    pub fn with_hs512(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Same secret as the issuer; symmetric scheme.
    #[track_caller]
    pub fn from_config(config: &AuthConfig) -> AuthErrorResult<Self> {
        let secret =
            config
                .token_secret
                .as_deref()
                .ok_or_else(|| AuthError::ConfigurationMissing {
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(Self::with_hs512(secret.as_bytes()))
    }

    /// Validate a token and return its claims.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
