//! Request configuration.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Which user to look up and how many ranked games to return.
///
/// Deserializes from camelCase keys so it can live in an application's own
/// config file:
///
/// ```json
/// { "user": "robinwalker", "limit": 5 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Vanity handle, the `<user>` in `/id/<user>`.
    pub user: String,

    /// Maximum number of games in the recently-played view.
    /// `None` or `Some(0)` means no limit.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Config {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Limit passed to the ranker; 0 means no limit.
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(0)
    }

    /// Rejects an empty or whitespace-only user handle.
    pub fn validate(&self) -> Result<(), Error> {
        if self.user.trim().is_empty() {
            return Err(Error::InvalidUser);
        }
        Ok(())
    }
}
