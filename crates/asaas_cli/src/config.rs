//! Configuration resolution for the Asaas CLI.
//!
//! Every command starts from the persisted settings in [`ConfigStore`]. Two
//! per-invocation overrides apply on top of them:
//!
//! - the `ASAAS_API_KEY` environment variable replaces the stored API key
//! - the `--sandbox` flag forces the sandbox environment
//!
//! The result is a [`ClientConfig`] that is built once and passed to the client.

use asaas_client::{ClientConfig, Environment};
use asaas_config::ConfigStore;
use tracing::{debug, info};

use crate::errors::Error;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV_VAR: &str = "ASAAS_API_KEY";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Returns the settings store at `config_path`, or at the default location in
/// the home directory when no path is given.
pub fn get_config_store(config_path: Option<&str>) -> Result<ConfigStore, Error> {
    let store = match config_path {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::default_location()?,
    };

    debug!(path = ?store.path(), "Using config file");
    Ok(store)
}

/// Reads the API key override from the environment, ignoring empty values.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV_VAR)
        .ok()
        .filter(|key| !key.is_empty())
}

/// Determines which Asaas environment to use.
///
/// The `--sandbox` flag wins; otherwise the stored setting decides.
pub fn resolve_environment(store: &ConfigStore, sandbox_flag: bool) -> Result<Environment, Error> {
    if sandbox_flag {
        return Ok(Environment::Sandbox);
    }

    Ok(Environment::from_sandbox(store.is_sandbox()?))
}

/// Determines the API key to use.
///
/// A non-empty override wins; otherwise the stored key is required.
///
/// # Errors
///
/// Returns `asaas_config::Error::NotConfigured` (wrapped) when neither source has a key.
pub fn resolve_api_key(
    store: &ConfigStore,
    api_key_override: Option<String>,
) -> Result<String, Error> {
    match api_key_override.filter(|key| !key.is_empty()) {
        Some(key) => {
            debug!("Using API key from {}", API_KEY_ENV_VAR);
            Ok(key)
        }
        None => Ok(store.get_api_key()?),
    }
}

/// Builds the client configuration for one invocation.
pub fn build_client_config(
    store: &ConfigStore,
    sandbox_flag: bool,
    api_key_override: Option<String>,
) -> Result<ClientConfig, Error> {
    let api_key = resolve_api_key(store, api_key_override)?;
    let environment = resolve_environment(store, sandbox_flag)?;

    info!(
        environment = %environment,
        base_url = environment.base_url(),
        "Resolved Asaas environment"
    );
    Ok(ClientConfig::new(environment, api_key))
}
