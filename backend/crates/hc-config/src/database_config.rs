use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME};

use serde::Deserialize;

/// Where the credential store lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file name, resolved against the config directory by
    /// [`Config::database_path`](crate::Config::database_path).
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_FILENAME.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// The path must stay inside the config directory.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let path = std::path::Path::new(&self.path);
        if path.is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
