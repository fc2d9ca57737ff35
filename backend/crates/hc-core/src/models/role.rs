use crate::{CoreError, CoreResult, ErrorLocation};

use std::panic::Location;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Authorization role attached to every identity record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Provider,
    Family,
    Administrator,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Patient => "patient",
            Self::Provider => "provider",
            Self::Family => "family",
            Self::Administrator => "administrator",
        }
    }

    /// All roles a registration may choose from.
    pub fn all() -> &'static [Role] {
        &[
            Self::Patient,
            Self::Provider,
            Self::Family,
            Self::Administrator,
        ]
    }
}

impl FromStr for Role {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "patient" => Ok(Self::Patient),
            "provider" => Ok(Self::Provider),
            "family" => Ok(Self::Family),
            "administrator" => Ok(Self::Administrator),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
