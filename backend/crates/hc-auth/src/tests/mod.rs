
use crate::Authenticator;

use hc_config::AuthConfig;
use hc_db::{CredentialRepository, open_in_memory};

/// Fresh in-memory store; the returned repository shares the pool with the
/// authenticator so tests can inspect persisted state directly.
pub(crate) async fn setup_authenticator() -> (Authenticator, CredentialRepository) {
    let pool = open_in_memory().await.expect("Failed to open test database");
    let repo = CredentialRepository::new(pool.clone());
    (Authenticator::new(CredentialRepository::new(pool)), repo)
}

pub(crate) const TEST_SECRET: &str = "test-signing-secret-at-least-32-bytes";

pub(crate) fn test_auth_config() -> AuthConfig {
    AuthConfig {
        token_secret: Some(TEST_SECRET.to_string()),
        token_ttl_hours: 24,
    }
}
