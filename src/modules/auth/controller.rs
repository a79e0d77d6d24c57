use axum::Json;
use axum::response::IntoResponse;
use coursebook_auth::AuthError;
use tracing::instrument;

use crate::middleware::auth::AuthContext;
use crate::middleware::chain::HandlerResult;
use crate::modules::auth::model::Message;

/// `GET /auth/test`: echoes the `name` claim of the verified token.
///
/// A token without a `name` claim fails with 401 `malformed jwt`.
#[instrument(skip(ctx), fields(request_id = %ctx.request.request_id))]
pub async fn auth_test(ctx: AuthContext) -> HandlerResult {
    let name = ctx
        .claims
        .get("name")
        .map_err(AuthError::into_app_error)?;

    Ok(Json(Message {
        data: name.to_string(),
    })
    .into_response())
}
