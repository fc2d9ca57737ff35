pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{open_database, open_in_memory};
pub use error::{DbError, Result};
pub use repositories::credential_repository::CredentialRepository;

#[cfg(test)]
mod tests;
