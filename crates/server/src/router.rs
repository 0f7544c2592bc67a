//! Maps a request's method and path onto one of the server's routes.
//!
//! | route              | methods   | response                                   |
//! |--------------------|-----------|--------------------------------------------|
//! | `/`                | any       | `200 OK`, no body                          |
//! | `/echo/{text}`     | GET       | `text` as `text/plain`, negotiated coding  |
//! | `/echo/`           | GET       | empty `text/plain`, negotiated coding      |
//! | `/user-agent`      | GET       | the `User-Agent` value, never compressed   |
//! | `/files/{*name}`   | GET, POST | read or write a file under the root        |
//!
//! Any other GET or POST gets `404 Not Found`. Other methods outside `/` are
//! left unanswered.

use std::io;

use async_trait::async_trait;
use bare_http::handler::Handler;
use bare_http::protocol::{Request, Response};
use bytes::Bytes;
use http::Method;
use mime::Mime;
use tracing::{error, warn};

use crate::encoding::encode_body;
use crate::files::FileStore;

type InnerRouter<T> = matchit::Router<T>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Root,
    Echo,
    UserAgent,
    Files,
}

#[derive(Debug)]
pub struct Router {
    inner_router: InnerRouter<Route>,
    files: FileStore,
}

impl Router {
    /// # Errors
    ///
    /// Returns an error if the route table can't be built.
    pub fn new(files: FileStore) -> Result<Self, matchit::InsertError> {
        let mut inner_router = InnerRouter::new();
        inner_router.insert("/", Route::Root)?;
        inner_router.insert("/echo/", Route::Echo)?;
        inner_router.insert("/echo/{text}", Route::Echo)?;
        inner_router.insert("/user-agent", Route::UserAgent)?;
        inner_router.insert("/files/{*name}", Route::Files)?;

        Ok(Self { inner_router, files })
    }

    pub fn files(&self) -> &FileStore {
        &self.files
    }

    /// Produces the response for `request`, or `None` when the request is left
    /// unanswered.
    ///
    /// # Errors
    ///
    /// Fails only when compressing a response body fails.
    pub async fn dispatch(&self, request: &Request) -> io::Result<Option<Response>> {
        let close = request.headers().is_close();
        let method = request.method();

        let Ok(matched) = self.inner_router.at(request.path()) else {
            return Ok(not_found(method).map(|response| response.with_close(close)));
        };

        let response = match (*matched.value, method) {
            (Route::Root, _) => Some(Response::ok()),

            (Route::Echo, &Method::GET) => {
                let text = matched.params.get("text").unwrap_or_default();
                Some(encoded(request, mime::TEXT_PLAIN, text.to_owned().into())?)
            }

            (Route::UserAgent, &Method::GET) => {
                let user_agent = request.headers().user_agent().unwrap_or_default();
                Some(Response::ok().with_body(mime::TEXT_PLAIN, user_agent.to_owned()))
            }

            (Route::Files, &Method::GET) => {
                let name = matched.params.get("name").unwrap_or_default();
                match self.files.read(name).await {
                    Ok(contents) => Some(encoded(request, mime::APPLICATION_OCTET_STREAM, contents)?),
                    Err(e) if e.is_not_found() => {
                        warn!(cause = %e, "requested file is not available");
                        Some(Response::not_found())
                    }
                    Err(e) => {
                        error!(cause = %e, "failed to read file");
                        Some(Response::internal_server_error())
                    }
                }
            }

            (Route::Files, &Method::POST) => {
                let name = matched.params.get("name").unwrap_or_default();
                match self.files.write(name, request.body()).await {
                    Ok(()) => Some(Response::created()),
                    Err(e) => {
                        error!(cause = %e, "failed to write file");
                        Some(Response::internal_server_error())
                    }
                }
            }

            _ => not_found(method),
        };

        Ok(response.map(|response| response.with_close(close)))
    }
}

/// A `200 OK` carrying `body` compressed with the coding the client prefers.
fn encoded(request: &Request, content_type: Mime, body: Bytes) -> io::Result<Response> {
    let encoded = encode_body(request.headers().accept_encoding(), body)?;
    let response = Response::ok().with_body(content_type, encoded.body);

    Ok(match encoded.coding {
        Some(coding) => response.with_content_encoding(coding),
        None => response,
    })
}

fn not_found(method: &Method) -> Option<Response> {
    match *method {
        Method::GET | Method::POST => Some(Response::not_found()),
        _ => None,
    }
}

#[async_trait]
impl Handler for Router {
    type Error = io::Error;

    async fn call(&self, request: Request) -> Result<Option<Response>, Self::Error> {
        self.dispatch(&request).await
    }
}
