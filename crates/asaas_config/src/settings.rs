//! The persisted CLI settings record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Settings stored in the per-user configuration file.
///
/// # Example JSON
///
/// ```json
/// {
///   "api_key": "$aact_...",
///   "sandbox": false
/// }
/// ```
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Asaas API key. Empty means not configured.
    #[serde(default)]
    pub api_key: String,

    /// Whether commands target the sandbox environment.
    #[serde(default)]
    pub sandbox: bool,
}

impl Settings {
    /// Returns true when an API key has been stored.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_key_set", &self.has_api_key())
            .field("sandbox", &self.sandbox)
            .finish()
    }
}
