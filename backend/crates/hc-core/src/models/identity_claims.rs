use crate::{Role, User};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The verified-identity claim set handed from the authenticator to the
/// token issuer. Carries no secret material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityClaims {
    pub id: Uuid,
    pub identifier: String,
    pub display_name: String,
    pub role: Role,
}

impl From<&User> for IdentityClaims {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            identifier: user.identifier.clone(),
            display_name: user.display_name.clone(),
            role: user.role,
        }
    }
}
