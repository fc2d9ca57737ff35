use hc_core::ErrorLocation;
use hc_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Covers unknown identifier, deactivated record and wrong secret alike,
    /// so the failure never reveals which check tripped.
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Identifier already registered: {identifier} {location}")]
    DuplicateIdentifier {
        identifier: String,
        location: ErrorLocation,
    },

    #[error("Token signing secret is not configured {location}")]
    ConfigurationMissing { location: ErrorLocation },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage error: {source} {location}")]
    Storage {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        match source {
            // The unique constraint is the single duplicate signal; carry it
            // through unchanged.
            DbError::DuplicateIdentifier {
                identifier,
                location,
            } => Self::DuplicateIdentifier {
                identifier,
                location,
            },
            other => Self::Storage {
                source: other,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
