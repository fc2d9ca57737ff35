pub mod authenticator;
pub mod claims;
pub mod error;
pub mod password;
pub mod token_issuer;
pub mod token_validator;

pub use authenticator::Authenticator;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use token_issuer::TokenIssuer;
pub use token_validator::TokenValidator;

#[cfg(test)]
mod tests;
