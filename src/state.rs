use std::sync::Arc;

use anyhow::Result;
use coursebook_config::{CorsConfig, JwtConfig, ServerConfig};
use coursebook_data::Directory;

#[derive(Clone, Debug)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(directory: Directory, jwt_config: JwtConfig, cors_config: CorsConfig) -> Self {
        Self {
            directory: Arc::new(directory),
            jwt_config,
            cors_config,
        }
    }
}

/// Loads the directory from `server.data_dir` and reads the remaining
/// configuration from the environment.
pub fn init_app_state(server: &ServerConfig) -> Result<AppState> {
    Ok(AppState::new(
        Directory::load(&server.data_dir)?,
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    ))
}
