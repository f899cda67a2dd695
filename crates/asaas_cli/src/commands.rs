//! Command modules for the Asaas CLI.
//!
//! - `config_cmd`: manage the stored API key and sandbox setting
//! - `webhook_cmd`: list, re-point and pause or resume webhooks

pub mod config_cmd;
pub mod webhook_cmd;
