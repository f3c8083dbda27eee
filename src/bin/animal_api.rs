use clap::Parser;
use fleet_registry::app::http::shutdown_signal;
use fleet_registry::utils::{logger, validation::Validate};
use fleet_registry::{serve, InMemoryRegistry, ServerConfig, SharedRepository};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(name = "animal-api")]
#[command(about = "In-memory CRUD service for animals and their visits")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Override the listen host from config
    #[arg(long)]
    host: Option<String>,

    /// Override the listen port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match ServerConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => ServerConfig::default(),
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.verbose {
        config.logging.level = Some("debug".to_string());
    }

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    logger::init_server_logger(config.log_level(), config.json_logs());

    let repo: SharedRepository = Arc::new(InMemoryRegistry::new());
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Animal API listening on {}", listener.local_addr()?);

    serve(listener, repo, shutdown_signal()).await?;

    tracing::info!("Server stopped");
    Ok(())
}
