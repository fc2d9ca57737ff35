use crate::{AuthError, Result as AuthErrorResult, password};

use hc_core::{ErrorLocation, IdentityClaims, Role, User};
use hc_db::CredentialRepository;

use std::panic::Location;

use log::{debug, info};

/// The only component that ever sees a plaintext secret.
///
/// Each call runs within one request's control flow; the repository's pool
/// provides whatever connection discipline the storage layer has, and no
/// extra locking is added on top.
pub struct Authenticator {
    repo: CredentialRepository,
}

impl Authenticator {
    pub fn new(repo: CredentialRepository) -> Self {
        Self { repo }
    }

    /// Register a new identity: fresh salt, HMAC-SHA512 hash, persisted as
    /// active. A duplicate identifier surfaces from the storage-level unique
    /// constraint; there is no separate pre-check to race against.
    pub async fn register(
        &self,
        identifier: &str,
        secret: &str,
        display_name: &str,
        role: Role,
    ) -> AuthErrorResult<User> {
        let identifier = normalize(identifier);
        if identifier.is_empty() {
            return Err(validation("identifier must not be empty"));
        }
        if secret.is_empty() {
            return Err(validation("secret must not be empty"));
        }

        let mut user = User::new(&identifier, display_name, role);
        user.secret_salt = password::generate_salt();
        user.secret_hash = password::hash_secret(secret, &user.secret_salt);

        self.repo.create(&user).await?;

        info!("registered identity {} ({})", user.id, user.role.as_str());

        Ok(user)
    }

    /// Verify a claimed identifier against its stored hash.
    ///
    /// Unknown identifier, deactivated record and wrong secret all return
    /// the same `InvalidCredentials`, so the caller cannot enumerate which
    /// identifiers exist. A successful login does not mutate the record.
    pub async fn verify(&self, identifier: &str, secret: &str) -> AuthErrorResult<IdentityClaims> {
        let identifier = normalize(identifier);

        let Some(user) = self.repo.find_by_identifier(&identifier).await? else {
            debug!("credential verification failed");
            return Err(invalid_credentials());
        };

        if !user.active {
            debug!("credential verification failed");
            return Err(invalid_credentials());
        }

        if !password::verify_secret(secret, &user.secret_salt, &user.secret_hash) {
            debug!("credential verification failed");
            return Err(invalid_credentials());
        }

        Ok(IdentityClaims::from(&user))
    }

    /// Rotate the secret: verify the current one, then write a fresh
    /// salt/hash pair. The old salt is never reused.
    pub async fn change_secret(
        &self,
        identifier: &str,
        current_secret: &str,
        new_secret: &str,
    ) -> AuthErrorResult<()> {
        if new_secret.is_empty() {
            return Err(validation("secret must not be empty"));
        }

        let claims = self.verify(identifier, current_secret).await?;

        let salt = password::generate_salt();
        let hash = password::hash_secret(new_secret, &salt);

        // Record gone between verify and update means the credentials are no
        // longer valid; report it the uniform way.
        if !self.repo.update_secret(claims.id, &hash, &salt).await? {
            return Err(invalid_credentials());
        }

        info!("rotated secret for identity {}", claims.id);

        Ok(())
    }

    /// Deactivate a record. Subsequent `verify` calls fail even with the
    /// correct secret; the record itself is never deleted by this flow.
    pub async fn deactivate(&self, identifier: &str) -> AuthErrorResult<()> {
        let identifier = normalize(identifier);

        let Some(user) = self.repo.find_by_identifier(&identifier).await? else {
            return Err(validation("unknown identifier"));
        };

        self.repo.set_active(user.id, false).await?;

        info!("deactivated identity {}", user.id);

        Ok(())
    }
}

fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

#[track_caller]
fn invalid_credentials() -> AuthError {
    AuthError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn validation(message: &str) -> AuthError {
    AuthError::Validation {
        message: message.to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
}
