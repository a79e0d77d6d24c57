use std::env;

pub const DEFAULT_SECRET: &str = "very-secret";

/// Shared-secret token settings.
///
/// The same secret signs and verifies every token; it is read once at startup
/// and never changes while the server runs.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Lifetime in seconds of tokens minted by the CLI.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string()),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: DEFAULT_SECRET.to_string(),
            access_token_expiry: 3600,
        }
    }
}
