//! Crate for managing webhooks through the Asaas REST API.
//!
//! This crate provides a client that lists webhook subscriptions, changes their
//! callback URL and pauses or resumes their delivery queue. Every call is a single
//! authenticated request/response exchange with no retries.

use std::fmt;

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, error, info, instrument};

pub mod environment;
pub use environment::{Environment, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

pub mod errors;
pub use errors::Error;

pub use reqwest::StatusCode;

pub mod models;
pub use models::{Webhook, WebhookListResponse, WebhookSyncUpdate, WebhookUrlUpdate};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Header Asaas reads the API key from.
pub const ACCESS_TOKEN_HEADER: &str = "access_token";

const WEBHOOKS_ENDPOINT: &str = "/webhooks";

/// Everything needed to talk to one Asaas environment.
///
/// Built once per invocation and handed to [`AsaasWebhookClient::new`].
#[derive(Clone)]
pub struct ClientConfig {
    /// API base URL, e.g. [`PRODUCTION_BASE_URL`]. Endpoint paths are appended as-is.
    pub base_url: String,

    /// Value sent in the `access_token` header.
    pub api_key: String,

    /// Transport used for every request. Any timeout is whatever this client enforces.
    pub http_client: reqwest::Client,
}

impl ClientConfig {
    /// Creates a configuration for the given environment with a default transport.
    pub fn new(environment: Environment, api_key: impl Into<String>) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Creates a configuration for an arbitrary base URL with a default transport.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Webhook operations offered by Asaas.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    /// Lists the first page of webhooks, in server order.
    ///
    /// # Errors
    ///
    /// - `Error::Transport` if no response was received
    /// - `Error::Status` for any status other than `200 OK`
    /// - `Error::Decode` if the body is not a webhook list
    async fn list_webhooks(&self) -> Result<Vec<Webhook>, Error>;

    /// Points a webhook at a new callback URL and returns the record Asaas echoes back.
    ///
    /// # Errors
    ///
    /// Same as [`WebhookClient::list_webhooks`]; status failures name the webhook and URL.
    async fn update_webhook_url(&self, id: &str, new_url: &str) -> Result<Webhook, Error>;

    /// Resumes (`enabled = true`) or pauses (`enabled = false`) a webhook's delivery queue.
    ///
    /// Sends `{"interrupted": !enabled}` and returns the record Asaas echoes back.
    ///
    /// # Errors
    ///
    /// Same as [`WebhookClient::list_webhooks`]; status failures name the webhook and state.
    async fn toggle_webhook_sync(&self, id: &str, enabled: bool) -> Result<Webhook, Error>;
}

/// A [`WebhookClient`] backed by HTTP requests to the Asaas API.
#[derive(Debug, Clone)]
pub struct AsaasWebhookClient {
    config: ClientConfig,
}

impl AsaasWebhookClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Starts an authenticated request to `endpoint`, relative to the base URL.
    fn create_request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!(method = %method, url = %url, "Creating request");

        self.config
            .http_client
            .request(method, url)
            .header(ACCESS_TOKEN_HEADER, &self.config.api_key)
    }

    /// Sends the request and returns the raw body of a `200 OK` response.
    async fn execute_request(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<Vec<u8>, Error> {
        let response = request.send().await.map_err(|source| {
            error!(context = context, error = %source, "Failed to execute request");
            Error::Transport {
                context: context.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!(context = context, status = %status, "Request failed");
            return Err(Error::Status {
                context: context.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| {
            error!(context = context, error = %source, "Failed to read response body");
            Error::Transport {
                context: context.to_string(),
                source,
            }
        })?;

        Ok(body.to_vec())
    }

    /// Sends `body` as JSON and returns the raw body of a `200 OK` response.
    async fn send_json<B: Serialize + Sync>(
        &self,
        method: Method,
        endpoint: &str,
        body: &B,
        context: &str,
    ) -> Result<Vec<u8>, Error> {
        let payload = serde_json::to_vec(body).map_err(Error::Serialization)?;

        let request = self
            .create_request(method, endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);

        self.execute_request(request, context).await
    }
}

#[async_trait]
impl WebhookClient for AsaasWebhookClient {
    #[instrument(skip(self))]
    async fn list_webhooks(&self) -> Result<Vec<Webhook>, Error> {
        let request = self.create_request(Method::GET, WEBHOOKS_ENDPOINT);
        let body = self.execute_request(request, "list webhooks").await?;

        let response: WebhookListResponse = decode_response(&body)?;

        info!(
            count = response.data.len(),
            total_count = response.total_count,
            has_more = response.has_more,
            "Retrieved webhooks"
        );

        Ok(response.data)
    }

    #[instrument(skip(self), fields(id = %id, new_url = %new_url))]
    async fn update_webhook_url(&self, id: &str, new_url: &str) -> Result<Webhook, Error> {
        let endpoint = format!("{}/{}", WEBHOOKS_ENDPOINT, id);
        let context = format!("update webhook {} with new url {}", id, new_url);
        let payload = WebhookUrlUpdate { url: new_url };

        let body = self
            .send_json(Method::PUT, &endpoint, &payload, &context)
            .await?;
        let webhook: Webhook = decode_response(&body)?;

        info!(id = %webhook.id, url = %webhook.url, "Updated webhook URL");
        Ok(webhook)
    }

    #[instrument(skip(self), fields(id = %id, enabled = enabled))]
    async fn toggle_webhook_sync(&self, id: &str, enabled: bool) -> Result<Webhook, Error> {
        let endpoint = format!("{}/{}", WEBHOOKS_ENDPOINT, id);
        let context = format!("update webhook {} to enabled {}", id, enabled);
        let payload = WebhookSyncUpdate::from_enabled(enabled);

        let body = self
            .send_json(Method::PUT, &endpoint, &payload, &context)
            .await?;
        let webhook: Webhook = decode_response(&body)?;

        info!(
            id = %webhook.id,
            interrupted = webhook.interrupted,
            "Updated webhook sync state"
        );
        Ok(webhook)
    }
}

fn decode_response<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_json::from_slice(body).map_err(|e| {
        error!(error = %e, "Failed to decode response");
        Error::Decode(e)
    })
}
