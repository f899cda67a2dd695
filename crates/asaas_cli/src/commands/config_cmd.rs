use asaas_client::Environment;
use asaas_config::ConfigStore;
use clap::{ArgAction, Subcommand};
use tracing::{debug, error, info, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "config_cmd_tests.rs"]
mod tests;

/// Subcommands for the config command
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Store the Asaas API key
    SetToken {
        /// API key issued by Asaas
        api_key: String,
    },

    /// Choose whether commands target the sandbox environment
    SetSandbox {
        /// `true` for sandbox, `false` for production
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },

    /// Show current configuration
    Show,
}

/// Execute the config command and return the text to print
#[instrument(skip_all)]
pub fn execute(cmd: &ConfigCommands, store: &ConfigStore) -> Result<String, Error> {
    match cmd {
        ConfigCommands::SetToken { api_key } => set_token(store, api_key),
        ConfigCommands::SetSandbox { enabled } => set_sandbox(store, *enabled),
        ConfigCommands::Show => show_config(store),
    }
}

/// Store the API key
fn set_token(store: &ConfigStore, api_key: &str) -> Result<String, Error> {
    debug!(message = "Setting API key", path = ?store.path());

    if let Err(e) = store.set_api_key(api_key) {
        error!(message = "Failed to save API key", path = ?store.path(), error = ?e);
        return Err(e.into());
    }

    info!(message = "API key updated", path = ?store.path());
    Ok(format!("API key saved to {}", store.path().display()))
}

/// Store the sandbox flag
fn set_sandbox(store: &ConfigStore, enabled: bool) -> Result<String, Error> {
    debug!(message = "Setting sandbox", path = ?store.path(), sandbox = enabled);

    if let Err(e) = store.set_sandbox(enabled) {
        error!(message = "Failed to save sandbox setting", path = ?store.path(), error = ?e);
        return Err(e.into());
    }

    info!(message = "Sandbox setting updated", sandbox = enabled);
    Ok(format!(
        "Sandbox mode {}",
        if enabled { "enabled" } else { "disabled" }
    ))
}

/// Show the stored configuration with the API key masked
fn show_config(store: &ConfigStore) -> Result<String, Error> {
    let settings = store.load()?;

    let api_key = if settings.has_api_key() {
        mask_api_key(&settings.api_key)
    } else {
        "(not set)".to_string()
    };

    Ok(format!(
        "Config file: {}\nAPI key: {}\nSandbox: {}\nEnvironment: {}",
        store.path().display(),
        api_key,
        settings.sandbox,
        Environment::from_sandbox(settings.sandbox)
    ))
}

/// Hide all but the edges of an API key.
///
/// Keys of up to 8 characters are fully hidden.
pub fn mask_api_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
