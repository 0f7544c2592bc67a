//! HTTP connection handling module
//!
//! # Components
//!
//! - [`HttpConnection`]: Main connection handler that:
//!   - Decodes requests one after the other from the same stream
//!   - Dispatches each request to a [`Handler`](crate::handler::Handler)
//!   - Writes and flushes one response per request
//!   - Keeps the connection open until the client closes it or asks to

mod http_connection;

pub use http_connection::HttpConnection;
