use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use conductor_server::delegate::{build_chain, DelegateKeys};
use conductor_server::server::{run_server, ServerConfig};

#[derive(Parser, Debug)]
struct CliArgs {
    /// The port to listen on.
    #[clap(short, long, default_value_t = 8000)]
    pub port: u16,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Timeout in seconds for each remote analysis provider.
    #[clap(long, default_value_t = 8)]
    pub remote_timeout_sec: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let keys = DelegateKeys::from_env();
    let chain = build_chain(keys, Duration::from_secs(cli_args.remote_timeout_sec));
    if chain.is_empty() {
        info!("No remote analyst keys configured, answering with the local engine only");
    } else {
        info!(analysts = chain.len(), "Remote analyst chain configured");
    }

    let config = ServerConfig {
        port: cli_args.port,
        frontend_dir_path: cli_args.frontend_dir_path,
    };

    run_server(config, chain).await
}
