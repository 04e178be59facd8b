/// Usuario Server - user registry keyed by national identifier
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use usuario_server::{api, config::ServerConfig, state::AppState};
use usuario_storage::SqliteRecordStore;

#[derive(Parser)]
#[command(name = "usuario-server")]
#[command(about = "User registry HTTP server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Port to listen on, overrides the configuration
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },
    /// Print the OpenAPI document as JSON
    Openapi {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "usuario_server=info,usuario_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => serve(None, None).await?,
        Some(Commands::Serve { config, port }) => serve(config, port).await?,
        Some(Commands::Openapi { config }) => print_openapi(config)?,
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let mut config = ServerConfig::load_from(config_path.as_deref())?;
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!("Starting Usuario Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize record store
    let store = SqliteRecordStore::connect(&config.storage.database_url).await?;
    tracing::info!("Record store ready ({})", config.storage.database_url);

    // Build application state and router
    let app_state = AppState::new(Arc::new(store));
    let app = api::create_router(app_state, &config.docs);

    if config.docs.enabled {
        tracing::info!(
            "API docs at {} (OpenAPI document at {})",
            config.docs.path,
            config.docs.openapi_path
        );
    }

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn print_openapi(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = ServerConfig::load_from(config_path.as_deref())?;
    let doc = api::docs::openapi(&config.docs.server_url);

    println!("{}", doc.to_pretty_json()?);

    Ok(())
}
