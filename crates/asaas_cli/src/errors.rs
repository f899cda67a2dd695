use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the Asaas CLI application.
///
/// The CLI adds no failure modes of its own; it wraps the errors of the API
/// client and the configuration store so every command can use `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// The Asaas API request failed.
    ///
    /// Transport, status and decode failures stay distinguishable through the
    /// wrapped [`asaas_client::Error`].
    #[error("{0}")]
    Api(#[from] asaas_client::Error),

    /// Loading or saving the CLI settings failed, or no API key is configured.
    #[error("Configuration error: {0}")]
    Config(#[from] asaas_config::Error),
}

impl Error {
    /// Returns true when the error is caused by a missing API key.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Error::Config(asaas_config::Error::NotConfigured))
    }
}
