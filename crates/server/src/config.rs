use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;

/// A small HTTP/1.1 server answering echo, user-agent and file requests.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Directory `/files/*` reads from and writes into. File requests fail without it.
    #[arg(long)]
    pub directory: Option<PathBuf>,

    /// IP address to listen on.
    #[arg(long, default_value = "0.0.0.0")]
    pub address: IpAddr,

    /// Port number to listen on.
    #[arg(short, long, default_value_t = 4221)]
    pub port: u16,

    /// Maximum number of connections served at the same time.
    #[arg(long, default_value = "1024")]
    pub max_connections: NonZeroUsize,

    /// Most verbose log level written to stdout.
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

/// Everything [`Server::bind`](crate::Server::bind) needs.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: SocketAddr,
    pub directory: Option<PathBuf>,
    pub max_connections: NonZeroUsize,
}

impl ServerConfig {
    pub fn new(address: SocketAddr, directory: Option<PathBuf>) -> Self {
        Self { address, directory, max_connections: DEFAULT_MAX_CONNECTIONS }
    }

    #[must_use]
    pub fn with_max_connections(mut self, max_connections: NonZeroUsize) -> Self {
        self.max_connections = max_connections;
        self
    }
}

const DEFAULT_MAX_CONNECTIONS: NonZeroUsize = NonZeroUsize::new(1024).unwrap();

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            address: SocketAddr::new(args.address, args.port),
            directory: args.directory,
            max_connections: args.max_connections,
        }
    }
}
