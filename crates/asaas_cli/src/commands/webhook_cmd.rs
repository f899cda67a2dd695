//! Webhook commands for the Asaas CLI.
//!
//! These commands call a [`WebhookClient`] and render its result for the
//! terminal. Rendering is kept separate from printing so the output can be
//! checked against an in-memory client.
//!
//! # Examples
//!
//! ```bash
//! # List webhooks
//! asaas-cli list
//!
//! # Point a webhook at a new URL
//! asaas-cli update-webhook-url wh_123 --new-url https://example.com/hook
//!
//! # Pause a webhook's delivery queue
//! asaas-cli toggle-webhook-sync wh_123 false
//! ```

use asaas_client::{Webhook, WebhookClient};
use clap::{ArgAction, Subcommand};
use colored::Colorize;
use tracing::{debug, instrument};

use crate::errors::Error;

#[cfg(test)]
#[path = "webhook_cmd_tests.rs"]
mod tests;

/// Webhook subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum WebhookCommands {
    /// List all webhooks
    List,

    /// Update the URL of a webhook
    UpdateWebhookUrl {
        /// Identifier of the webhook to update
        webhook_id: String,

        /// New callback URL
        #[arg(long = "new-url", alias = "newurl")]
        new_url: String,
    },

    /// Enable or disable a webhook sync queue
    ToggleWebhookSync {
        /// Identifier of the webhook to toggle
        webhook_id: String,

        /// `true` to resume delivery, `false` to pause it
        #[arg(action = ArgAction::Set)]
        enabled: bool,
    },
}

/// Executes a webhook command and returns the text to print.
#[instrument(skip(client))]
pub async fn execute(
    cmd: &WebhookCommands,
    client: &dyn WebhookClient,
) -> Result<String, Error> {
    match cmd {
        WebhookCommands::List => list_webhooks(client).await,
        WebhookCommands::UpdateWebhookUrl {
            webhook_id,
            new_url,
        } => update_webhook_url(client, webhook_id, new_url).await,
        WebhookCommands::ToggleWebhookSync {
            webhook_id,
            enabled,
        } => toggle_webhook_sync(client, webhook_id, *enabled).await,
    }
}

/// Lists webhooks in the order the API returned them.
pub async fn list_webhooks(client: &dyn WebhookClient) -> Result<String, Error> {
    let webhooks = client.list_webhooks().await?;
    debug!(count = webhooks.len(), "Listed webhooks");

    Ok(format_webhook_list(&webhooks))
}

pub async fn update_webhook_url(
    client: &dyn WebhookClient,
    webhook_id: &str,
    new_url: &str,
) -> Result<String, Error> {
    let webhook = client.update_webhook_url(webhook_id, new_url).await?;

    Ok(format!(
        "Webhook ID: {} updated with new URL: {}",
        webhook.id, webhook.url
    ))
}

pub async fn toggle_webhook_sync(
    client: &dyn WebhookClient,
    webhook_id: &str,
    enabled: bool,
) -> Result<String, Error> {
    let webhook = client.toggle_webhook_sync(webhook_id, enabled).await?;

    Ok(format!(
        "Webhook ID: {} is now {}",
        webhook.id,
        sync_state(&webhook)
    ))
}

/// Renders one line per webhook, or a notice when there are none.
pub fn format_webhook_list(webhooks: &[Webhook]) -> String {
    if webhooks.is_empty() {
        return "No webhooks found".to_string();
    }

    webhooks
        .iter()
        .map(|webhook| {
            format!(
                "ID: {}, Name: {}, URL: {}, Sync: {}",
                webhook.id,
                webhook.name.bold(),
                webhook.url,
                sync_state(webhook)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn sync_state(webhook: &Webhook) -> String {
    if webhook.is_delivering() {
        "enabled".green().to_string()
    } else {
        "disabled".red().to_string()
    }
}
