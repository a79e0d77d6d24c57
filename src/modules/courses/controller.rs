use axum::Json;
use axum::response::IntoResponse;
use coursebook_models::CourseFilterParams;
use tracing::instrument;

use crate::middleware::chain::HandlerResult;
use crate::middleware::context::RequestContext;
use crate::modules::courses::service::CourseService;

/// `GET /api/v1/courses`
#[instrument(skip(ctx), fields(request_id = %ctx.request_id))]
pub async fn get_courses(ctx: RequestContext) -> HandlerResult {
    let params: CourseFilterParams = ctx.query()?;
    let courses = CourseService::get_courses(ctx.directory(), &params);
    Ok(Json(courses).into_response())
}

/// `GET /api/v1/courses/{id}`
#[instrument(skip(ctx), fields(request_id = %ctx.request_id))]
pub async fn get_course(ctx: RequestContext) -> HandlerResult {
    let id = ctx.path_id("id")?;
    let course = CourseService::get_course_by_id(ctx.directory(), id)?;
    Ok(Json(course).into_response())
}
