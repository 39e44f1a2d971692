use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use backend_infrastructure::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "armory-backend")]
#[command(about = "Armory Steam inventory import server", long_about = None)]
struct Args {
    /// Path to config file
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(config) = args.config {
        std::env::set_var("ARMORY_CONFIG", config);
    }

    let config = AppConfig::load().await?;
    let _log_guard = backend_bootstrap::init_tracing(config.log_dir.as_deref().map(Path::new))?;
    info!("configuration loaded, binding {}", config.bind_addr);

    backend_bootstrap::run_standalone(config).await
}
