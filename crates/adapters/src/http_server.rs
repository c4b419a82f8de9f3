//! HTTP server.
//!
//! Binds the configured address and serves the fruit router until the
//! shutdown future resolves.

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::router::build_router;
use crate::state::AppState;

/// Default port the service listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
        }
    }
}

/// HTTP server owning the application state.
pub struct HttpServer {
    config: ServerConfig,
    state: AppState,
}

impl HttpServer {
    /// Creates a new [`HttpServer`] over an empty fruit store.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_state(config, AppState::new())
    }

    /// Creates a new [`HttpServer`] over existing state.
    pub fn with_state(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Access the shared state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router serving this server's state.
    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    /// Bind and serve until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.listen_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.listen_addr))?;

        self.serve(listener, shutdown).await
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener
            .local_addr()
            .context("Failed to read listener address")?;
        info!(%local_addr, "fruitstand listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server error")?;

        info!("fruitstand stopped");
        Ok(())
    }
}
