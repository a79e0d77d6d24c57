use coursebook::logging::init_tracing;
use coursebook::metrics::{init_metrics, metrics_app};
use coursebook::router::init_router;
use coursebook::state::init_app_state;
use coursebook_config::ServerConfig;
use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();

    let state = match init_app_state(&server_config) {
        Ok(state) => state,
        Err(e) => {
            error!(error = ?e, data_dir = %server_config.data_dir.display(), "Failed to load directory");
            std::process::exit(1);
        }
    };

    let mut app = init_router(state);
    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_app(handle));
    }

    let address = server_config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(error = %e, %address, "Failed to bind listener");
            std::process::exit(1);
        }
    };

    info!(%address, "🚀 Server running");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "Server error");
        std::process::exit(1);
    }
}
