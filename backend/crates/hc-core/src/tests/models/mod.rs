mod identity_claims;
mod role;
mod user;
