use std::error::Error;
use std::sync::Arc;

use futures::{SinkExt, StreamExt};
use http::StatusCode;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::codec::{RequestDecoder, ResponseEncoder};
use crate::handler::Handler;
use crate::protocol::{HttpError, Request, Response};

use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{error, info, warn};

/// An HTTP connection that runs the read/dispatch/respond loop
///
/// `HttpConnection` handles the full lifecycle of a persistent connection:
/// - Reading and decoding one request at a time
/// - Handing each request to the [`Handler`]
/// - Writing the response and deciding whether to keep the connection open
///
/// The connection ends when the client closes its side between requests,
/// after a request carrying `Connection: close`, or on the first protocol or
/// I/O error. Both stream halves are dropped on every exit path.
///
/// # Type Parameters
///
/// * `R`: The async readable stream type
/// * `W`: The async writable stream type
///
#[derive(Debug)]
pub struct HttpConnection<R, W> {
    framed_read: FramedRead<R, RequestDecoder>,
    framed_write: FramedWrite<W, ResponseEncoder>,
}

impl<R, W> HttpConnection<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            framed_read: FramedRead::with_capacity(reader, RequestDecoder::new(), 8 * 1024),
            framed_write: FramedWrite::new(writer, ResponseEncoder::new()),
        }
    }

    /// Serves requests until the connection is done.
    ///
    /// # Errors
    ///
    /// Returns the parse error that ended the connection (after a `400 Bad
    /// Request` was written for malformed requests), or the I/O error that
    /// prevented a response from being written.
    pub async fn process<H>(mut self, handler: Arc<H>) -> Result<(), HttpError>
    where
        H: Handler,
    {
        loop {
            match self.framed_read.next().await {
                Some(Ok(request)) => {
                    let close = request.headers().is_close();
                    self.do_process(request, handler.as_ref()).await?;
                    if close {
                        info!("client sent connection close, break this connection down");
                        return Ok(());
                    }
                }

                Some(Err(e)) if e.is_bad_request() => {
                    error!(cause = %e, "bad request, answer 400 and close");
                    self.framed_write.send(Response::status(StatusCode::BAD_REQUEST)).await?;
                    return Err(e.into());
                }

                Some(Err(e)) => {
                    error!("can't receive next request, cause {}", e);
                    return Err(e.into());
                }

                None => {
                    info!("cant read more request, break this connection down");
                    return Ok(());
                }
            }
        }
    }

    async fn do_process<H>(&mut self, request: Request, handler: &H) -> Result<(), HttpError>
    where
        H: Handler,
    {
        let method = request.method().clone();
        let path = request.path().to_owned();

        let response = match handler.call(request).await {
            Ok(Some(response)) => response,
            Ok(None) => {
                warn!(%method, path = %path, "no response for request");
                return Ok(());
            }
            Err(e) => {
                let cause: Box<dyn Error + Send + Sync> = e.into();
                error!(%method, path = %path, "handle request error, cause: {}", cause);
                Response::status(StatusCode::INTERNAL_SERVER_ERROR)
            }
        };

        info!(%method, path = %path, status = response.status_code().as_u16(), "send response");
        self.framed_write.send(response).await?;
        Ok(())
    }
}
