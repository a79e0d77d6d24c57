use std::time::Instant;

use tracing::{error, info, warn};

use crate::middleware::chain::{Handler, Interceptor, status_of};
use crate::middleware::context::RequestContext;

/// Logs the request URI before delegating.
pub fn request_logger() -> Interceptor<RequestContext> {
    Interceptor::new(|next: Handler<RequestContext>| {
        Handler::new(move |ctx: RequestContext| {
            let next = next.clone();
            async move {
                info!(request_id = %ctx.request_id, uri = %ctx.uri, "Incoming request");
                next.call(ctx).await
            }
        })
    })
}

/// Access log line with status and latency, written after the inner chain
/// returns. Register it last so the latency covers every other interceptor.
pub fn access_logger() -> Interceptor<RequestContext> {
    Interceptor::new(|next: Handler<RequestContext>| {
        Handler::new(move |ctx: RequestContext| {
            let next = next.clone();
            async move {
                let start = Instant::now();
                let method = ctx.method.clone();
                let path = ctx.matched_path.clone();
                let request_id = ctx.request_id.clone();

                let result = next.call(ctx).await;
                let latency = start.elapsed();
                let status = status_of(&result);

                match status.as_u16() {
                    400..=499 => {
                        warn!(
                            request_id = %request_id,
                            method = %method,
                            path = %path,
                            status = %status.as_u16(),
                            latency_ms = %latency.as_millis(),
                            "Client error"
                        );
                    }
                    500..=599 => {
                        error!(
                            request_id = %request_id,
                            method = %method,
                            path = %path,
                            status = %status.as_u16(),
                            latency_ms = %latency.as_millis(),
                            "Server error"
                        );
                    }
                    _ => {
                        info!(
                            request_id = %request_id,
                            method = %method,
                            path = %path,
                            status = %status.as_u16(),
                            latency_ms = %latency.as_millis(),
                            "Request completed"
                        );
                    }
                }

                result
            }
        })
    })
}
