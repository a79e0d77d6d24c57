use axum::Json;
use axum::response::IntoResponse;
use coursebook_models::InstructorFilterParams;
use tracing::instrument;

use crate::middleware::chain::HandlerResult;
use crate::middleware::context::RequestContext;
use crate::modules::instructors::service::InstructorService;

/// `GET /api/v1/instructors`
#[instrument(skip(ctx), fields(request_id = %ctx.request_id))]
pub async fn get_instructors(ctx: RequestContext) -> HandlerResult {
    let params: InstructorFilterParams = ctx.query()?;
    let instructors = InstructorService::get_instructors(ctx.directory(), &params);
    Ok(Json(instructors).into_response())
}

/// `GET /api/v1/instructors/{id}`
#[instrument(skip(ctx), fields(request_id = %ctx.request_id))]
pub async fn get_instructor(ctx: RequestContext) -> HandlerResult {
    let id = ctx.path_id("id")?;
    let instructor = InstructorService::get_instructor_by_id(ctx.directory(), id)?;
    Ok(Json(instructor).into_response())
}
