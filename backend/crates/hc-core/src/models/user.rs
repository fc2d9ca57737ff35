use crate::Role;

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A persisted identity record.
///
/// `identifier` is stored lowercase; lookups are case-insensitive against it.
/// `secret_hash`/`secret_salt` are filled in by the authenticator at
/// registration and rotated together on every secret change.
#[derive(Clone)]
pub struct User {
    pub id: Uuid,
    pub identifier: String,
    pub display_name: String,
    pub secret_hash: Vec<u8>,
    pub secret_salt: Vec<u8>,
    pub role: Role,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(identifier: &str, display_name: &str, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            identifier: identifier.trim().to_lowercase(),
            display_name: display_name.to_string(),
            secret_hash: Vec::new(),
            secret_salt: Vec::new(),
            role,
            active: true,
            created_at: Utc::now(),
        }
    }
}

// Manual impl: hash and salt must never end up in logs.
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("identifier", &self.identifier)
            .field("display_name", &self.display_name)
            .field("secret_hash", &"<redacted>")
            .field("secret_salt", &"<redacted>")
            .field("role", &self.role)
            .field("active", &self.active)
            .field("created_at", &self.created_at)
            .finish()
    }
}
