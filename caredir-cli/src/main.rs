//! caredir - HTTP query gateway over the clinic directory database
//!
//! Serves read-only patient and provider listings from MySQL as HTML
//! tables. Configuration comes from the environment (`DB_HOST`, `DB_USER`,
//! `DB_PASSWORD`, `DB_NAME`, `PORT`), with `.env` support for development.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use caredir_core::GatewayConfig;
use caredir_server::{create_pool, run_server, AppState, MySqlDirectory, ServerConfig};

mod tracing_setup;

/// HTTP query gateway over the clinic directory database.
#[derive(Parser, Debug)]
#[command(name = "caredir")]
#[command(about = "Serve patient and provider listings as HTML tables")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP gateway (default)
    Serve(ServeArgs),

    /// Check configuration validity without connecting to the database
    CheckConfig,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen port
    #[arg(long, short = 'p', env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; deployed environments set variables directly
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command.unwrap_or(Command::Serve(ServeArgs { port: None })) {
        Command::Serve(args) => run_serve(args).await,
        Command::CheckConfig => check_config(),
    }
}

/// Run the HTTP gateway
async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = GatewayConfig::from_env().context("Configuration error")?;
    if let Some(port) = args.port {
        config.port = port;
    }

    // The gateway must not serve traffic without a working data store:
    // a failed connection aborts startup before the listener binds.
    let pool = match create_pool(&config.db).await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("Error connecting to MySQL: {}", err);
            std::process::exit(1);
        }
    };
    tracing::info!("Connected to MySQL");

    let state = AppState::new(Arc::new(MySqlDirectory::new(pool)));
    let server_config = ServerConfig {
        bind_addr: SocketAddr::from(([0, 0, 0, 0], config.port)),
    };

    run_server(state, server_config).await.context("Server error")?;
    Ok(())
}

/// Print the effective configuration with the password redacted
fn check_config() -> Result<()> {
    let config = GatewayConfig::from_env().context("Configuration error")?;

    println!("db host: {}", config.db.host);
    println!("db user: {}", config.db.user);
    println!("db name: {}", config.db.database);
    println!("port:    {}", config.port);
    println!("configuration OK");

    Ok(())
}
