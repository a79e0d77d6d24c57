//! Request processing: the handler chain and the interceptors built on it.
//!
//! # Modules
//!
//! - [`chain`]: `Handler`, `Interceptor` and `compose`
//! - [`context`]: `RequestContext`, the value every handler receives
//! - [`routes`]: `RouteTable`, where handlers are composed and mounted
//! - [`auth`]: the bearer-token gate and `AuthContext`
//! - [`logging`]: request and access log interceptors
//!
//! # Request Flow
//!
//! 1. axum matches a route and the bridge builds a `RequestContext`
//! 2. Global interceptors run outermost-first (access log, request log, metrics)
//! 3. For protected routes the auth gate verifies the bearer token and hands an
//!    `AuthContext` to the handler
//! 4. The handler's `Result` is turned into a response at the bridge
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthContext, auth_gate};
//! use crate::middleware::chain::Handler;
//! use crate::middleware::routes::RouteTable;
//!
//! async fn whoami(ctx: AuthContext) -> HandlerResult { /* ... */ }
//!
//! let routes = RouteTable::new().get("/whoami", auth_gate().wrap(Handler::new(whoami)));
//! ```

pub mod auth;
pub mod chain;
pub mod context;
pub mod logging;
pub mod routes;
