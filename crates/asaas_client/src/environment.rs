//! Asaas API hosts.

use std::fmt;

#[cfg(test)]
#[path = "environment_tests.rs"]
mod tests;

/// Base URL of the live Asaas API.
pub const PRODUCTION_BASE_URL: &str = "https://api.asaas.com/v3";

/// Base URL of the Asaas sandbox API.
pub const SANDBOX_BASE_URL: &str = "https://api-sandbox.asaas.com/v3";

/// The Asaas environment a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live account, real money
    #[default]
    Production,
    /// Test account
    Sandbox,
}

impl Environment {
    /// Picks the environment from a sandbox flag.
    pub fn from_sandbox(sandbox: bool) -> Self {
        if sandbox {
            Self::Sandbox
        } else {
            Self::Production
        }
    }

    /// Returns the API base URL for this environment, without a trailing slash.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Sandbox => write!(f, "sandbox"),
        }
    }
}
