//! Handler composition.
//!
//! A [`Handler`] is an async function from a request context to a response or
//! an [`AppError`]. An [`Interceptor`] takes a handler and returns a new one
//! that runs extra logic around it. [`compose`] folds a list of interceptors
//! over a base handler, left to right, so the **last** interceptor in the list
//! ends up outermost:
//!
//! ```text
//! compose(base, [a, b])  ==  b(a(base))
//!
//! b: before -> a: before -> base -> a: after -> b: after
//! ```
//!
//! The chain adds nothing of its own: no buffering, retries, or error
//! translation. Whatever the innermost handler returns reaches the caller
//! unchanged unless an interceptor explicitly decides otherwise.
//!
//! An interceptor may change the context type on its way in: the auth gate is
//! an `Interceptor<RequestContext, AuthContext>`, turning a handler that needs
//! claims into one the router can mount.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;
use coursebook_core::AppError;

pub type HandlerResult = Result<Response, AppError>;

pub type HandlerFuture = Pin<Box<dyn Future<Output = HandlerResult> + Send + 'static>>;

/// Type-erased async request handler, cheap to clone and safe to call from
/// any number of concurrent requests.
pub struct Handler<C> {
    call: Arc<dyn Fn(C) -> HandlerFuture + Send + Sync>,
}

impl<C> Clone for Handler<C> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

impl<C: Send + 'static> Handler<C> {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(C) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HandlerResult> + Send + 'static,
    {
        Self {
            call: Arc::new(move |ctx| -> HandlerFuture { Box::pin(f(ctx)) }),
        }
    }

    pub fn call(&self, ctx: C) -> HandlerFuture {
        (self.call)(ctx)
    }
}

/// Decorates a `Handler<Inner>` into a `Handler<Outer>`.
pub struct Interceptor<Outer, Inner = Outer> {
    wrap: Arc<dyn Fn(Handler<Inner>) -> Handler<Outer> + Send + Sync>,
}

impl<Outer, Inner> Clone for Interceptor<Outer, Inner> {
    fn clone(&self) -> Self {
        Self {
            wrap: Arc::clone(&self.wrap),
        }
    }
}

impl<Outer, Inner> Interceptor<Outer, Inner> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Handler<Inner>) -> Handler<Outer> + Send + Sync + 'static,
    {
        Self { wrap: Arc::new(f) }
    }

    pub fn wrap(&self, next: Handler<Inner>) -> Handler<Outer> {
        (self.wrap)(next)
    }
}

/// Wraps `base` with `interceptors`, last one outermost.
///
/// Application code should not call this directly: handlers are composed
/// when a [`RouteTable`](super::routes::RouteTable) is mounted, which keeps
/// every composed handler reachable from a route.
#[must_use = "a composed handler does nothing until it is mounted"]
pub fn compose<C>(base: Handler<C>, interceptors: &[Interceptor<C>]) -> Handler<C> {
    interceptors
        .iter()
        .fold(base, |handler, interceptor| interceptor.wrap(handler))
}

/// Status the client will see for `result`.
pub fn status_of(result: &HandlerResult) -> StatusCode {
    match result {
        Ok(response) => response.status(),
        Err(err) => err.status,
    }
}
