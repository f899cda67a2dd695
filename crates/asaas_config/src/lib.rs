//! Persisted settings for the Asaas CLI.
//!
//! Settings live in a small JSON file in the user's home directory and hold the
//! API key and whether the sandbox environment should be used. A missing file
//! is treated as an empty configuration.
//!
//! ```rust,no_run
//! use asaas_config::ConfigStore;
//!
//! # fn example() -> Result<(), asaas_config::Error> {
//! let store = ConfigStore::default_location()?;
//! store.set_sandbox(true)?;
//! let api_key = store.get_api_key()?;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub use errors::Error;

pub mod settings;
pub use settings::Settings;

pub mod store;
pub use store::{ConfigStore, CONFIG_FILE_NAME};
