pub mod identity_claims;
pub mod role;
pub mod user;
