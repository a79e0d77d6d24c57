use anyhow::anyhow;
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::response::IntoResponse;
use coursebook_core::AppError;
use tower_http::cors::CorsLayer;

use crate::metrics::record_metrics;
use crate::middleware::chain::Interceptor;
use crate::middleware::context::RequestContext;
use crate::middleware::logging::{access_logger, request_logger};
use crate::middleware::routes::RouteTable;
use crate::modules::auth::init_auth_routes;
use crate::modules::courses::init_courses_routes;
use crate::modules::instructors::init_instructors_routes;
use crate::modules::users::init_users_routes;
use crate::state::AppState;

/// Every application route, before composition.
pub fn init_routes() -> RouteTable {
    RouteTable::new()
        .nest(
            "/api/v1",
            RouteTable::new()
                .nest("/users", init_users_routes())
                .nest("/instructors", init_instructors_routes())
                .nest("/courses", init_courses_routes()),
        )
        .nest("/auth", init_auth_routes())
}

/// Interceptors applied to every route. The last entry is outermost, so the
/// access log sees the final status and the full latency.
pub fn global_interceptors() -> Vec<Interceptor<RequestContext>> {
    vec![record_metrics(), request_logger(), access_logger()]
}

pub fn init_router(state: AppState) -> Router {
    let routes = init_routes();
    for (method, path) in routes.routes() {
        tracing::info!(%method, %path, "Route registered");
    }

    routes
        .into_router(&global_interceptors())
        .fallback(|| async { AppError::not_found(anyhow!("route not found")).into_response() })
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::AUTHORIZATION, header::ACCEPT])
        })
}
