use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::api::handlers::AppState;
use crate::api::router::build_router;
use crate::api::shutdown::ShutdownManager;
use crate::config::ServerConfig;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

pub struct CalculatorServer {
    addr: SocketAddr,
    /// Bound before `run()` so callers can learn the port (e.g. when binding `:0`).
    listener: TcpListener,
    state: AppState,
    shutdown: Arc<ShutdownManager>,
}

impl CalculatorServer {
    /// Binds the configured address. The listener is held until [`run`](Self::run).
    pub async fn bind(config: &ServerConfig) -> Result<Self, ServerError> {
        let requested: SocketAddr =
            config
                .bind_addr
                .parse()
                .map_err(|source| ServerError::InvalidBindAddr {
                    addr: config.bind_addr.clone(),
                    source,
                })?;

        let listener = TcpListener::bind(requested)
            .await
            .map_err(|source| ServerError::Bind {
                addr: requested,
                source,
            })?;
        let addr = listener.local_addr()?;
        tracing::info!("Calculator server bound to {}", addr);

        Ok(Self {
            addr,
            listener,
            state: AppState::new(config.service_name.clone()),
            shutdown: Arc::new(ShutdownManager::new()),
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serves until a shutdown signal arrives.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!("Starting calculator server on {}", self.addr);

        let app = build_router(self.state);
        let shutdown = self.shutdown.clone();
        axum::serve(self.listener, app)
            .with_graceful_shutdown(async move {
                shutdown.wait_for_shutdown().await;
            })
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
