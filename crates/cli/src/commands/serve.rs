//! Serve command implementation
//!
//! This module implements the `fruitstand serve` command, which runs the
//! fruit HTTP API until Ctrl+C or SIGTERM.

use anyhow::{Context, Result};
use clap::Args;
use fruitstand_adapters::http_server::DEFAULT_PORT;
use fruitstand_adapters::{HttpServer, ServerConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Default tracing filter for the server
pub const DEFAULT_LOG_FILTER: &str = "fruitstand=debug,info";

/// Arguments for the serve command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// Tracing filter directives
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl ServeArgs {
    /// Server configuration described by these arguments
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            listen_addr: SocketAddr::new(self.host, self.port),
        }
    }
}

/// Execute the serve command
pub async fn execute_serve_command(args: ServeArgs) -> Result<()> {
    let filter = EnvFilter::try_new(&args.log_filter)
        .with_context(|| format!("Invalid log filter: {}", args.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = args.server_config();
    println!("🍉 Starting fruitstand on http://{}", config.listen_addr);

    let server = HttpServer::new(config);
    server
        .run(wait_for_shutdown())
        .await
        .context("Fruitstand server failed")?;

    info!("shutdown complete");
    println!("✅ Fruitstand stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn wait_for_shutdown() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_from_args() {
        let args = ServeArgs {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        };

        let config = args.server_config();
        assert_eq!(config.listen_addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
