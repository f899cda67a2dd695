//! Data models for the Asaas webhook API.
//!
//! Asaas sends camelCase JSON and may omit fields or send `null` for them.
//! Every field therefore decodes to its zero value when absent.

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A webhook subscription as known to Asaas.
///
/// # Examples
///
/// ```rust
/// use asaas_client::Webhook;
///
/// let webhook_json = r#"{
///     "id": "wh_1",
///     "name": "Orders",
///     "url": "https://old.example/hook",
///     "email": "ops@example.com",
///     "enabled": true,
///     "interrupted": false,
///     "apiVersion": 3,
///     "hasAuthToken": false,
///     "sendType": "SEQUENTIALLY",
///     "events": ["PAYMENT_CREATED", "PAYMENT_RECEIVED"]
/// }"#;
///
/// let webhook: Webhook = serde_json::from_str(webhook_json).unwrap();
/// assert_eq!(webhook.id, "wh_1");
/// assert_eq!(webhook.events.len(), 2);
/// assert!(webhook.is_delivering());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    /// Server-assigned identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,

    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Callback URL events are delivered to
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,

    /// Address notified when delivery fails
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    /// Whether the subscription is configured to deliver events
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,

    /// Whether Asaas has suspended the delivery queue
    #[serde(default, deserialize_with = "null_as_default")]
    pub interrupted: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub api_version: u32,

    #[serde(default, deserialize_with = "null_as_default")]
    pub has_auth_token: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub send_type: String,

    /// Subscribed event names, in server order
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: Vec<String>,
}

impl Webhook {
    /// Returns true when the delivery queue is running.
    ///
    /// This client treats sync as enabled exactly when the webhook is not
    /// interrupted.
    pub fn is_delivering(&self) -> bool {
        !self.interrupted
    }
}

/// One page of webhooks returned by `GET /webhooks`.
///
/// `has_more` is decoded but never followed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub object: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub has_more: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub offset: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Webhook>,
}

/// Request body for changing a webhook's callback URL.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WebhookUrlUpdate<'a> {
    pub url: &'a str,
}

/// Request body for pausing or resuming a webhook's delivery queue.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WebhookSyncUpdate {
    pub interrupted: bool,
}

impl WebhookSyncUpdate {
    /// Builds the payload for the requested sync state.
    ///
    /// `interrupted` is always the negation of `enabled`.
    pub fn from_enabled(enabled: bool) -> Self {
        Self {
            interrupted: !enabled,
        }
    }
}

/// Decodes a missing or `null` value as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
