//! Core HTTP protocol types.
//!
//! # Architecture
//!
//! - **Request Processing** (`request`): the parsed request line, the record
//!   of recognized headers and the assembled [`Request`]
//! - **Response Processing** (`response`): [`Response`], the value the
//!   response encoder serializes
//! - **Content Codings** (`coding`): [`ContentCoding`], the compression
//!   schemes a client may ask for and the server can apply
//! - **Error Handling** (`error`):
//!   - [`HttpError`]: Top-level error type
//!   - [`ParseError`]: Request parsing errors
//!   - [`SendError`]: Response sending errors

mod coding;
pub use coding::ContentCoding;

mod request;
pub use request::Request;
pub use request::RequestHeaders;
pub use request::RequestLine;

mod response;
pub use response::Response;

mod error;
pub use error::HttpError;
pub use error::ParseError;
pub use error::SendError;
