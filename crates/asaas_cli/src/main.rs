use asaas_cli::{
    commands::{
        config_cmd::{self, ConfigCommands},
        webhook_cmd::{self, WebhookCommands},
    },
    config::{api_key_from_env, build_client_config, get_config_store},
    errors::Error,
};
use asaas_client::{AsaasWebhookClient, Environment};
use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter, e.g. `ASAAS_CLI_LOG=debug`.
const LOG_ENV_VAR: &str = "ASAAS_CLI_LOG";

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Asaas CLI: Manage webhooks on the Asaas payment API
#[derive(Parser, Debug)]
#[command(name = "asaas-cli")]
#[command(about = "Manage webhooks on the Asaas payment API", long_about = None)]
struct Cli {
    /// Use the sandbox environment for this invocation
    #[arg(long, global = true)]
    sandbox: bool,

    /// Path to the configuration file (defaults to ~/asaascli.conf)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Webhook(WebhookCommands),

    /// Manage the stored configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Show the CLI version
    Version,
}

async fn run(cli: &Cli) -> Result<String, Error> {
    match &cli.command {
        Commands::Webhook(cmd) => {
            let store = get_config_store(cli.config.as_deref())?;
            let client_config = build_client_config(&store, cli.sandbox, api_key_from_env())?;
            if client_config.base_url == Environment::Sandbox.base_url() {
                eprintln!("Using sandbox environment");
            }

            let client = AsaasWebhookClient::new(client_config);
            webhook_cmd::execute(cmd, &client).await
        }
        Commands::Config(cmd) => {
            let store = get_config_store(cli.config.as_deref())?;
            config_cmd::execute(cmd, &store)
        }
        Commands::Version => Ok(format!("asaas-cli version {}", env!("CARGO_PKG_VERSION"))),
    }
}

#[tokio::main]
async fn main() {
    // Initialize logging. Silent unless ASAAS_CLI_LOG is set.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("off")))
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!(error = ?e, "Command failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
