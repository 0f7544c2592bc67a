//! Request handler abstraction.
//!
//! A [`Handler`] turns one decoded [`Request`] into the [`Response`] the
//! connection writes back. Handlers may decline to answer by returning
//! `Ok(None)`, in which case nothing is written for that request.

use std::error::Error;
use std::future::Future;

use async_trait::async_trait;

use crate::protocol::{Request, Response};

#[async_trait]
pub trait Handler: Send + Sync {
    type Error: Into<Box<dyn Error + Send + Sync>>;

    async fn call(&self, request: Request) -> Result<Option<Response>, Self::Error>;
}

#[derive(Debug)]
pub struct HandlerFn<F> {
    f: F,
}

#[async_trait]
impl<Err, F, Fut> Handler for HandlerFn<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Err: Into<Box<dyn Error + Send + Sync>>,
    Fut: Future<Output = Result<Option<Response>, Err>> + Send,
{
    type Error = Err;

    async fn call(&self, request: Request) -> Result<Option<Response>, Self::Error> {
        (self.f)(request).await
    }
}

/// Wraps an async function into a [`Handler`].
pub fn make_handler<F, Err, Ret>(f: F) -> HandlerFn<F>
where
    Err: Into<Box<dyn Error + Send + Sync>>,
    Ret: Future<Output = Result<Option<Response>, Err>>,
    F: Fn(Request) -> Ret,
{
    HandlerFn { f }
}
