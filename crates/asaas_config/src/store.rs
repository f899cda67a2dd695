//! File-backed storage for [`Settings`].
//!
//! The store performs plain read-modify-write cycles without locking. Two CLI
//! invocations writing at the same time race, and the last writer wins.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, instrument};

use crate::{errors::Error, settings::Settings};

/// Name of the settings file inside the user's home directory.
pub const CONFIG_FILE_NAME: &str = "asaascli.conf";

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

/// Reads and writes the settings file at a fixed path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store backed by `~/asaascli.conf`.
    ///
    /// # Errors
    ///
    /// Returns `Error::HomeDirectoryNotFound` if the home directory cannot be determined.
    pub fn default_location() -> Result<Self, Error> {
        let home = dirs::home_dir().ok_or(Error::HomeDirectoryNotFound)?;
        Ok(Self::new(home.join(CONFIG_FILE_NAME)))
    }

    /// Path of the backing settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the settings.
    ///
    /// A missing file yields `Settings::default()`.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if the file exists but cannot be read
    /// - `Error::Parse` if the file is not valid settings JSON
    #[instrument(skip(self), fields(path = ?self.path))]
    pub fn load(&self) -> Result<Settings, Error> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Config file not found, using defaults");
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    action: "read",
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let settings: Settings =
            serde_json::from_slice(&content).map_err(|source| Error::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(settings = ?settings, "Loaded config file");
        Ok(settings)
    }

    /// Saves the settings as indented JSON, readable and writable by the owner only.
    ///
    /// Creates the parent directory if it is missing and overwrites any existing file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the directory or file cannot be written.
    #[instrument(skip(self, settings), fields(path = ?self.path))]
    pub fn save(&self, settings: &Settings) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| Error::Io {
                    action: "create directory for",
                    path: self.path.clone(),
                    source,
                })?;
            }
        }

        let content = serde_json::to_vec_pretty(settings).map_err(Error::Serialize)?;

        write_owner_only(&self.path, &content).map_err(|source| Error::Io {
            action: "write",
            path: self.path.clone(),
            source,
        })?;

        info!("Config saved");
        Ok(())
    }

    /// Stores a new API key, keeping the other settings.
    #[instrument(skip(self, api_key))]
    pub fn set_api_key(&self, api_key: &str) -> Result<(), Error> {
        let mut settings = self.load()?;
        settings.api_key = api_key.to_string();
        self.save(&settings)
    }

    /// Stores the sandbox flag, keeping the other settings.
    #[instrument(skip(self))]
    pub fn set_sandbox(&self, sandbox: bool) -> Result<(), Error> {
        let mut settings = self.load()?;
        settings.sandbox = sandbox;
        self.save(&settings)
    }

    /// Returns the stored API key.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConfigured` if the stored key is empty, or any `load()` error.
    pub fn get_api_key(&self) -> Result<String, Error> {
        let settings = self.load()?;
        if !settings.has_api_key() {
            return Err(Error::NotConfigured);
        }

        Ok(settings.api_key)
    }

    /// Returns the stored sandbox flag, `false` when unset.
    pub fn is_sandbox(&self) -> Result<bool, Error> {
        Ok(self.load()?.sandbox)
    }
}

fn write_owner_only(path: &Path, content: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // The mode above only applies to newly created files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(content)?;
    file.flush()
}
