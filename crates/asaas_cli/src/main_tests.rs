use super::*;
use asaas_config::{Settings, CONFIG_FILE_NAME};
use clap::CommandFactory;
use tempfile::TempDir;

#[test]
fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "asaas-cli",
        "list",
        "--sandbox",
        "--config",
        "/tmp/asaascli.conf",
    ])
    .unwrap();

    assert!(cli.sandbox);
    assert_eq!(cli.config.as_deref(), Some("/tmp/asaascli.conf"));
    assert!(matches!(cli.command, Commands::Webhook(WebhookCommands::List)));
}

#[test]
fn test_webhook_commands_are_top_level() {
    let cli = Cli::try_parse_from(["asaas-cli", "toggle-webhook-sync", "wh_1", "false"]).unwrap();

    assert!(!cli.sandbox);
    assert!(matches!(
        cli.command,
        Commands::Webhook(WebhookCommands::ToggleWebhookSync { enabled: false, .. })
    ));
}

#[test]
fn test_config_subcommands() {
    let cli = Cli::try_parse_from(["asaas-cli", "config", "set-sandbox", "true"]).unwrap();

    assert!(matches!(
        cli.command,
        Commands::Config(ConfigCommands::SetSandbox { enabled: true })
    ));
}

#[tokio::test]
async fn test_run_version() {
    let cli = Cli::try_parse_from(["asaas-cli", "version"]).unwrap();

    let output = run(&cli).await.unwrap();
    assert_eq!(
        output,
        format!("asaas-cli version {}", env!("CARGO_PKG_VERSION"))
    );
}

#[tokio::test]
async fn test_run_config_uses_config_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
    let config_arg = config_path.to_str().unwrap();

    let cli = Cli::try_parse_from([
        "asaas-cli",
        "--config",
        config_arg,
        "config",
        "set-sandbox",
        "true",
    ])
    .unwrap();
    run(&cli).await.unwrap();

    let saved = asaas_config::ConfigStore::new(&config_path).load().unwrap();
    assert_eq!(
        saved,
        Settings {
            api_key: String::new(),
            sandbox: true
        }
    );
}
