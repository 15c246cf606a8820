//! Process bootstrap: command line, environment, configuration and credentials

use anyhow::Context;
use clap::Parser;
use content_client::auth::{StdinPrompt, discover_credentials};
use content_client::{Authenticator, ClientConfig, ConfigDir, Endpoints};
use std::path::PathBuf;
use std::sync::Arc;

use crate::logger;
use crate::workflow::OrdersWorkflow;

#[derive(Debug, Parser)]
#[command(
    name = "orders-workflow",
    version,
    about = "Walk a sandbox test order through its whole lifecycle"
)]
pub struct Cli {
    /// Configuration directory (defaults to $HOME/shopping-samples)
    #[arg(long, value_name = "DIR")]
    pub config_path: Option<PathBuf>,

    /// Tracing filter directives, overriding RUST_LOG
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

/// Load `.env` and install the logger
pub fn setup_environment(cli: &Cli) {
    dotenvy::dotenv().ok();
    logger::init_logger_with(cli.log_level.as_deref(), cli.log_json);
}

/// Resolve configuration and credentials, then run the workflow against the sandbox
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_dir = match &cli.config_path {
        Some(path) => ConfigDir::new(path),
        None => ConfigDir::from_home()?,
    };
    let mut info = config_dir.load_merchant_info()?;
    tracing::info!(
        merchant_id = info.merchant_id,
        config = %config_dir.path().display(),
        "Loaded merchant info"
    );

    let endpoints = Endpoints::from_env()?;

    let http = reqwest::Client::new();
    let credentials = discover_credentials(&config_dir, &mut info, &http, &mut StdinPrompt)
        .await
        .context("Failed to obtain credentials")?;
    let auth = Arc::new(Authenticator::with_http_client(credentials, http));

    let mut config = ClientConfig::new(endpoints.sandbox.clone());
    if let Some(name) = &info.application_name {
        config = config.with_application_name(name.clone());
    }
    let sandbox = config.build(auth)?;
    tracing::info!(endpoint = sandbox.base_url(), "Using sandbox endpoint");

    let mut workflow = OrdersWorkflow::new(&sandbox, info.merchant_id, std::io::stdout());
    let report = workflow.run().await?;

    tracing::info!(
        order_id = %report.order_id,
        listed = report.listed_order_ids.len(),
        operations = report.operations_issued,
        "Finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["orders-workflow"]).unwrap();
        assert!(cli.config_path.is_none());
        assert!(cli.log_level.is_none());
        assert!(!cli.log_json);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "orders-workflow",
            "--config-path",
            "/tmp/samples",
            "--log-level",
            "debug",
            "--log-json",
        ])
        .unwrap();
        assert_eq!(cli.config_path, Some(PathBuf::from("/tmp/samples")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.log_json);
    }

    #[test]
    fn test_cli_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["orders-workflow", "extra"]).is_err());
    }
}
