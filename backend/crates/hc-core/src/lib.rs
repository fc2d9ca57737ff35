pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use error_location::ErrorLocation;
pub use models::identity_claims::IdentityClaims;
pub use models::role::Role;
pub use models::user::User;

#[cfg(test)]
mod tests;
