//! happy-day-server
//!
//! A protobuf mock backend built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌───────────────────────────────────────────────────┐
//!                     │                 HAPPY-DAY SERVER                  │
//!                     │                                                   │
//!  Client Request     │  ┌─────────┐    ┌──────────┐    ┌─────────────┐   │
//!  ───────────────────┼─▶│  http   │───▶│ dispatch │───▶│   routing   │   │
//!                     │  │ server  │    │ pipeline │    │    table    │   │
//!                     │  └─────────┘    └────┬─────┘    └─────────────┘   │
//!                     │                      │                            │
//!                     │                      ▼                            │
//!  Client Response    │                 ┌──────────┐    ┌─────────────┐   │
//!  ◀──────────────────┼─────────────────│ handlers │◀───│   schema    │   │
//!                     │  protobuf body  │          │    │  registry   │   │
//!                     │                 └──────────┘    └─────────────┘   │
//!                     └───────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use happy_day_server::config::{resolve_config, ConfigError, Overrides, ServerConfig};
use happy_day_server::dispatch::Pipeline;
use happy_day_server::handlers;
use happy_day_server::http::HttpServer;
use happy_day_server::lifecycle::{wait_for_signal, Shutdown};
use happy_day_server::observability::init_logging;
use happy_day_server::schema::SchemaRegistry;

#[derive(Parser)]
#[command(name = "happy-day-server")]
#[command(about = "Protobuf mock backend for the happy-day contract", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the configuration.
    #[arg(short, long)]
    bind: Option<String>,

    /// Path to the `.proto` schema, overriding the configuration.
    #[arg(short, long)]
    proto: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let overrides = Overrides {
            bind_address: self.bind,
            proto_path: self.proto,
        };
        resolve_config(self.config.as_deref(), overrides)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    init_logging(&config.observability.log_filter);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        proto_path = %config.schema.proto_path.display(),
        "Configuration loaded"
    );

    let schema = SchemaRegistry::load(&config.schema.proto_path)?;
    let routes = handlers::route_table(&schema)?;
    tracing::info!(
        routes = ?routes.paths().collect::<Vec<_>>(),
        "Routes registered"
    );

    let server = HttpServer::new(Pipeline::new(routes));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(wait_for_signal(shutdown));

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
