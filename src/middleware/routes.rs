//! Route registration.
//!
//! A [`RouteTable`] collects `(method, path, handler)` entries. Handlers are
//! composed with the global interceptors only inside [`RouteTable::into_router`],
//! at the moment they are mounted, so there is no way to build a composed
//! handler that no route can reach.

use axum::Router;
use axum::extract::rejection::RawPathParamsRejection;
use axum::extract::{RawPathParams, Request, State};
use axum::http::Method;
use axum::routing::{MethodFilter, MethodRouter, on};
use tracing::debug;

use crate::middleware::chain::{Handler, Interceptor, compose};
use crate::middleware::context::RequestContext;
use crate::state::AppState;

struct Route {
    method: Method,
    filter: MethodFilter,
    path: String,
    handler: Handler<RequestContext>,
}

#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(mut self, path: &str, handler: Handler<RequestContext>) -> Self {
        self.routes.push(Route {
            method: Method::GET,
            filter: MethodFilter::GET,
            path: path.to_string(),
            handler,
        });
        self
    }

    /// Moves every route of `other` under `prefix`. A nested `/` becomes the
    /// prefix itself, without a trailing slash.
    pub fn nest(mut self, prefix: &str, other: RouteTable) -> Self {
        for mut route in other.routes {
            route.path = if route.path == "/" {
                prefix.to_string()
            } else {
                format!("{prefix}{}", route.path)
            };
            self.routes.push(route);
        }
        self
    }

    /// Registered `(method, path)` pairs in registration order.
    pub fn routes(&self) -> Vec<(Method, String)> {
        self.routes
            .iter()
            .map(|route| (route.method.clone(), route.path.clone()))
            .collect()
    }

    /// Composes each handler with `interceptors` and mounts it.
    ///
    /// # Panics
    ///
    /// Like [`Router::route`], panics if two entries share a method and path.
    pub fn into_router(self, interceptors: &[Interceptor<RequestContext>]) -> Router<AppState> {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, route| {
                debug!(method = %route.method, path = %route.path, "Mounting route");
                let handler = compose(route.handler, interceptors);
                router.route(&route.path, bridge(route.filter, handler))
            })
    }
}

/// Adapts a chain handler to an axum method router.
///
/// Path parameters that fail to decode are not rejected here: the context
/// gets an empty parameter list and the handler reports its own JSON error,
/// after every interceptor has seen the request.
fn bridge(filter: MethodFilter, handler: Handler<RequestContext>) -> MethodRouter<AppState> {
    on(
        filter,
        move |State(state): State<AppState>,
              params: Result<RawPathParams, RawPathParamsRejection>,
              request: Request| {
            let handler = handler.clone();
            async move {
                let params = params
                    .inspect_err(|rejection| {
                        debug!(uri = %request.uri(), error = %rejection, "Undecodable path params")
                    })
                    .ok();
                handler
                    .call(RequestContext::new(state, request, params.as_ref()))
                    .await
            }
        },
    )
}
