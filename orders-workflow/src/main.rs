use clap::Parser;
use orders_workflow::{Cli, run, setup_environment};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. .env and logging
    setup_environment(&cli);

    tracing::info!("Orders workflow starting...");

    // 2. Config, credentials, workflow
    if let Err(e) = run(cli).await {
        tracing::error!("Workflow failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}
