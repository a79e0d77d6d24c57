use axum::Json;
use axum::response::IntoResponse;
use coursebook_models::UserFilterParams;
use tracing::instrument;

use crate::middleware::chain::HandlerResult;
use crate::middleware::context::RequestContext;
use crate::modules::users::service::UserService;

/// `GET /api/v1/users`
#[instrument(skip(ctx), fields(request_id = %ctx.request_id))]
pub async fn get_users(ctx: RequestContext) -> HandlerResult {
    let params: UserFilterParams = ctx.query()?;
    let users = UserService::get_users(ctx.directory(), &params);
    Ok(Json(users).into_response())
}

/// `GET /api/v1/users/{id}`
#[instrument(skip(ctx), fields(request_id = %ctx.request_id))]
pub async fn get_user(ctx: RequestContext) -> HandlerResult {
    let id = ctx.path_id("id")?;
    let user = UserService::get_user_by_id(ctx.directory(), id)?;
    Ok(Json(user).into_response())
}
