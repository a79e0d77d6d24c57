use std::fs;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: a compact console layer filtered by
/// `RUST_LOG`, plus a daily-rolled JSON file under `LOG_DIR`
/// (default `storage/logs`).
///
/// If the log directory cannot be created the file layer is skipped and only
/// console output remains.
pub fn init_tracing() {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "storage/logs".to_string());

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("coursebook=info,coursebook_data=info,tower_http=warn,hyper=info")
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    // JSON file layer for structured logs (can be ingested by Loki)
    let json_layer = match fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let json_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "coursebook.json");
            Some(
                fmt::layer()
                    .json()
                    .with_writer(json_appender)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new("info")),
            )
        }
        Err(e) => {
            eprintln!("⚠️  Could not create log directory {log_dir}: {e}. Logging to console only");
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .init();
}
