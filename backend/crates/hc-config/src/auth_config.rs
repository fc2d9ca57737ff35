use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_HOURS, MIN_TOKEN_SECRET_BYTES,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS512 signing secret. Absence is tolerated at load time and only
    /// becomes an error when token issuance is attempted.
    pub token_secret: Option<String>,
    /// Token lifetime in hours.
    pub token_ttl_hours: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: None,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.token_secret
            && secret.len() < MIN_TOKEN_SECRET_BYTES
        {
            return Err(ConfigError::auth(format!(
                "auth.token_secret must be at least {} bytes, got {}",
                MIN_TOKEN_SECRET_BYTES,
                secret.len()
            )));
        }

        if self.token_ttl_hours <= 0 {
            return Err(ConfigError::auth(format!(
                "auth.token_ttl_hours must be positive, got {}",
                self.token_ttl_hours
            )));
        }

        Ok(())
    }
}
