use activity_proxy::utils::{logger, validation::Validate};
use activity_proxy::{start_server, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.json_logs);

    tracing::info!("Starting activity-proxy");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = start_server(&config).await {
        tracing::error!("❌ Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
