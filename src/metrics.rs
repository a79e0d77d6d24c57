use axum::{Router, routing::get};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::middleware::chain::{Handler, Interceptor, status_of};
use crate::middleware::context::RequestContext;

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via OBSERVABILITY_ENABLED env var
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Installs the Prometheus recorder and its upkeep task.
/// Returns None if observability is disabled or the recorder cannot be installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if !is_observability_enabled() {
        return None;
    }

    let installed = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0],
        )
        .and_then(|builder| builder.install_recorder());

    let handle = match installed {
        Ok(handle) => handle,
        Err(e) => {
            warn!(error = %e, "Failed to install Prometheus recorder, metrics disabled");
            return None;
        }
    };

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Some(handle)
}

/// Holds one unit of `http_requests_active` until dropped, so requests whose
/// future is abandoned (client gone) are still counted out.
struct ActiveRequestGuard;

impl ActiveRequestGuard {
    fn new() -> Self {
        gauge!("http_requests_active").increment(1.0);
        Self
    }
}

impl Drop for ActiveRequestGuard {
    fn drop(&mut self) {
        gauge!("http_requests_active").decrement(1.0);
    }
}

/// Interceptor recording request count, latency and in-flight requests.
pub fn record_metrics() -> Interceptor<RequestContext> {
    Interceptor::new(|next: Handler<RequestContext>| {
        Handler::new(move |ctx: RequestContext| {
            let next = next.clone();
            async move {
                if !is_observability_enabled() {
                    return next.call(ctx).await;
                }

                let start = Instant::now();
                let method = ctx.method.as_str().to_owned();
                let path = ctx.matched_path.clone();

                let _active = ActiveRequestGuard::new();

                let result = next.call(ctx).await;

                let latency = start.elapsed().as_secs_f64();
                let status = status_of(&result).as_u16().to_string();

                counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
                histogram!("http_request_duration_seconds", "method" => method, "path" => path)
                    .record(latency);

                result
            }
        })
    })
}

/// Router exposing the Prometheus scrape endpoint.
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::task::{Context, Waker};

    use axum::body::Body;
    use axum::extract::Request;
    use coursebook_config::{CorsConfig, JwtConfig};
    use coursebook_data::Directory;

    use crate::middleware::chain::HandlerResult;
    use crate::state::AppState;

    fn context() -> RequestContext {
        let state = AppState::new(Directory::default(), JwtConfig::default(), CorsConfig::default());
        let request = Request::builder().uri("/api/v1/users").body(Body::empty()).unwrap();
        RequestContext::new(state, request, None)
    }

    fn active_line(handle: &PrometheusHandle) -> Option<String> {
        handle
            .render()
            .lines()
            .find(|line| line.starts_with("http_requests_active "))
            .map(str::to_string)
    }

    #[test]
    fn test_abandoned_request_leaves_active_gauge() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            let stalled = Handler::new(|_ctx: RequestContext| std::future::pending::<HandlerResult>());
            let handler = record_metrics().wrap(stalled);

            let mut in_flight = handler.call(context());
            let mut cx = Context::from_waker(Waker::noop());
            assert!(in_flight.as_mut().poll(&mut cx).is_pending());
            assert_eq!(active_line(&handle).as_deref(), Some("http_requests_active 1"));

            drop(in_flight);
            assert_eq!(active_line(&handle).as_deref(), Some("http_requests_active 0"));
        });
    }
}
