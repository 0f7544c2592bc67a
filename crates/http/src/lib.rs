//! A hand-written HTTP/1.1 protocol engine
//!
//! This crate parses requests straight from a byte stream and serializes
//! responses byte for byte, without relying on a general purpose HTTP parser.
//! It is built on tokio and `tokio-util` codecs.
//!
//! # Features
//!
//! - Request line, header block and Content-Length body decoding by hand
//! - Byte-exact status lines and response headers
//! - Persistent connections with `Connection: close` support
//! - Recognized request headers: Host, User-Agent, Accept, Content-Type,
//!   Content-Length, Connection and Accept-Encoding
//!
//! # Example
//!
//! ```no_run
//! use std::io;
//! use std::sync::Arc;
//! use bare_http::connection::HttpConnection;
//! use bare_http::handler::make_handler;
//! use bare_http::protocol::{Request, Response};
//! use tokio::net::TcpListener;
//! use tracing::{error, info};
//!
//! #[tokio::main]
//! async fn main() -> io::Result<()> {
//!     let tcp_listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let handler = Arc::new(make_handler(hello_world));
//!
//!     loop {
//!         let (tcp_stream, _remote_addr) = tcp_listener.accept().await?;
//!         let handler = Arc::clone(&handler);
//!
//!         tokio::spawn(async move {
//!             let (reader, writer) = tcp_stream.into_split();
//!             let connection = HttpConnection::new(reader, writer);
//!             match connection.process(handler).await {
//!                 Ok(()) => info!("finished process, connection shutdown"),
//!                 Err(e) => error!("service has error, cause {}, connection shutdown", e),
//!             }
//!         });
//!     }
//! }
//!
//! async fn hello_world(request: Request) -> Result<Option<Response>, io::Error> {
//!     info!("request path {}", request.path());
//!     Ok(Some(Response::ok().with_body(mime::TEXT_PLAIN, "Hello World!")))
//! }
//! ```
//!
//! # Architecture
//!
//! - [`connection`]: the per-connection read/dispatch/respond loop
//! - [`protocol`]: request, response, coding and error types
//! - [`codec`]: request decoding and response encoding
//! - [`handler`]: the request handler trait and utilities
//!
//! # Limitations
//!
//! - HTTP/1.1 only, no chunked transfer encoding
//! - No TLS support (use a reverse proxy for HTTPS)
//! - Maximum request line size: 8KB
//! - Maximum header block size: 8KB

pub mod codec;
pub mod connection;
pub mod handler;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
