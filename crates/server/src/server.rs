use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use bare_http::connection::HttpConnection;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::{AcquireError, Semaphore};
use tracing::{debug, error, info};

use crate::config::ServerConfig;
use crate::files::FileStore;
use crate::router::Router;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind {address}: {source}")]
    Bind { address: SocketAddr, source: io::Error },

    #[error("failed to accept connection: {0}")]
    Accept(io::Error),

    #[error("invalid route: {0}")]
    Route(#[from] matchit::InsertError),

    /// Acquiring a connection permit failed. `Server` never closes its
    /// semaphore, so `run` does not return this in practice; tokio's acquire
    /// is fallible and the error is propagated rather than unwrapped.
    #[error("connection limiter closed")]
    LimiterClosed(#[from] AcquireError),
}

/// A bound listener serving the [`Router`] on one task per connection.
///
/// At most `max_connections` connections are served at once; further clients
/// wait in the listen backlog until a running connection ends.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    router: Arc<Router>,
    connection_limit: Arc<Semaphore>,
}

impl Server {
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] if the address can't be bound.
    pub async fn bind(config: ServerConfig) -> Result<Self, ServerError> {
        let router = Router::new(FileStore::new(config.directory))?;

        let listener = TcpListener::bind(config.address)
            .await
            .map_err(|source| ServerError::Bind { address: config.address, source })?;

        info!(
            address = %config.address,
            max_connections = config.max_connections.get(),
            directory = ?router.files().root(),
            "start listening"
        );

        Ok(Self {
            listener,
            router: Arc::new(router),
            connection_limit: Arc::new(Semaphore::new(config.max_connections.get())),
        })
    }

    /// # Errors
    ///
    /// Returns an error if the bound address can't be read back from the socket.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until accepting fails.
    ///
    /// # Errors
    ///
    /// Any accept error is returned and ends the loop. Connection errors only
    /// end their own connection.
    pub async fn run(self) -> Result<(), ServerError> {
        loop {
            let permit = Arc::clone(&self.connection_limit).acquire_owned().await?;

            let (tcp_stream, remote_addr) = self.listener.accept().await.map_err(|e| {
                error!(cause = %e, "failed to accept");
                ServerError::Accept(e)
            })?;

            debug!(
                %remote_addr,
                available_permits = self.connection_limit.available_permits(),
                "connection accepted"
            );

            let router = Arc::clone(&self.router);

            tokio::spawn(async move {
                let (reader, writer) = tcp_stream.into_split();
                let connection = HttpConnection::new(reader, writer);
                match connection.process(router).await {
                    Ok(()) => {
                        info!(%remote_addr, "finished process, connection shutdown");
                    }
                    Err(e) => {
                        error!(%remote_addr, "service has error, cause {}, connection shutdown", e);
                    }
                }
                drop(permit);
            });
        }
    }
}
