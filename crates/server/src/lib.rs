//! A small HTTP/1.1 server on top of the `bare-http` protocol engine.
//!
//! It answers four kinds of request:
//!
//! - `/` with an empty `200 OK`
//! - `GET /echo/{text}` with `text`, gzip compressed when the client accepts it
//! - `GET /user-agent` with the client's `User-Agent`
//! - `GET` and `POST` on `/files/{name}` to read and write files in a directory
//!
//! ```no_run
//! use bare_http_server::{Server, ServerConfig, ServerError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ServerError> {
//!     let config = ServerConfig::new("127.0.0.1:4221".parse().unwrap(), Some("/tmp".into()));
//!     Server::bind(config).await?.run().await
//! }
//! ```

pub mod config;
pub mod encoding;
pub mod files;
pub mod router;
mod server;

pub use config::{Args, ServerConfig};
pub use router::Router;
pub use server::{Server, ServerError};
