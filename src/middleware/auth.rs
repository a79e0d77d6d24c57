use axum::http::header;
use coursebook_auth::{AuthError, Claims, bearer_token, verify_token};
use tracing::debug;

use crate::middleware::chain::{Handler, Interceptor};
use crate::middleware::context::RequestContext;

/// Request context of a handler behind [`auth_gate`].
///
/// Only exists once the bearer token has been verified, so a handler taking
/// an `AuthContext` can read `claims` without re-checking anything.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub request: RequestContext,
    pub claims: Claims,
}

/// Verifies the request's bearer token against the shared secret.
pub fn authenticate(ctx: &RequestContext) -> Result<Claims, AuthError> {
    let token = bearer_token(ctx.header(header::AUTHORIZATION))?;
    verify_token(token, &ctx.state.jwt_config)
}

/// Interceptor that admits only requests carrying a valid bearer token.
///
/// On failure the wrapped handler is never invoked and the request fails with
/// 401; the body carries only the generic category message. On success the
/// wrapped handler receives an [`AuthContext`] holding the decoded claims.
pub fn auth_gate() -> Interceptor<RequestContext, AuthContext> {
    Interceptor::new(|next: Handler<AuthContext>| {
        Handler::new(move |ctx: RequestContext| {
            let next = next.clone();
            async move {
                let claims = authenticate(&ctx).map_err(|err| {
                    debug!(
                        request_id = %ctx.request_id,
                        error = %err,
                        "Authentication failed"
                    );
                    err.into_app_error()
                })?;

                next.call(AuthContext {
                    request: ctx,
                    claims,
                })
                .await
            }
        })
    })
}
