//! Browser origins allowed to call the API.
//!
//! - `ALLOWED_ORIGINS`: comma-separated origins (default: the local dev
//!   frontends on ports 3000 and 5173)

use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Origins echoed by the CORS layer. Entries that are not valid header values
/// are skipped when the layer is built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        Self::from_list(&env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string()))
    }

    /// Parses a comma-separated origin list, trimming whitespace and dropping
    /// empty entries.
    pub fn from_list(origins: &str) -> Self {
        Self {
            allowed_origins: origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}
