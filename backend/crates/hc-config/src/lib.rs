mod auth_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Shorter secrets are brute-forceable against HS512 signatures.
const MIN_TOKEN_SECRET_BYTES: usize = 32;

#[cfg(test)]
mod tests;
