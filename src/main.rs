// src/main.rs

use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use taskdeck_mcp::api::ApiClient;
use taskdeck_mcp::config::Config;
use taskdeck_mcp::server;

#[derive(Parser)]
#[command(name = "taskdeck-mcp")]
#[command(about = "MCP server for the Taskdeck project-management API")]
#[command(version)]
struct Cli {
    /// Override TASKDECK_BASE_URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Override TASKDECK_TIMEOUT_SECS.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Log more than warnings to stderr.
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Quiet by default: stdout is the MCP channel, stderr the diagnostics.
    let log_level = if cli.verbose { Level::INFO } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Startup failed: {}", e);
            return Err(e);
        }
    };
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url.trim_end_matches('/').to_string();
    }
    if let Some(timeout_secs) = cli.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    info!("Backend: {}", config.base_url);

    let api = ApiClient::new(&config)?;
    server::run_stdio_server(api).await
}
