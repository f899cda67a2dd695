//! Error types for Asaas client operations.
//!
//! Callers need to tell apart a request that never got a response, a response
//! with an unexpected status, and a successful response that could not be
//! decoded, so each of these is its own variant.

use reqwest::StatusCode;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while talking to the Asaas webhook API.
///
/// ## Examples
///
/// ```rust,ignore
/// use asaas_client::{Error, WebhookClient};
///
/// match client.list_webhooks().await {
///     Ok(webhooks) => println!("Found {} webhooks", webhooks.len()),
///     Err(Error::Status { status, .. }) => eprintln!("Asaas rejected the request: {}", status),
///     Err(Error::Transport { .. }) => eprintln!("Could not reach Asaas"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be completed at the transport level.
    ///
    /// Covers connection refusals, DNS failures, transport timeouts and failures
    /// while reading the response body. No HTTP status was received.
    #[error("Failed to {context}: failed to execute request: {source}")]
    Transport {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status other than `200 OK`.
    ///
    /// The response body is not inspected, even when it holds valid JSON.
    #[error("Failed to {context}: request failed with status: {status}")]
    Status { context: String, status: StatusCode },

    /// The API answered `200 OK` but the body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized to JSON.
    #[error("Failed to marshal request body: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl Error {
    /// Returns the HTTP status for [`Error::Status`], `None` for every other kind.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
