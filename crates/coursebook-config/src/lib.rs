//! # Coursebook Config
//!
//! Configuration types for the Coursebook API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Shared-secret token configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: Listener address and data directory
//!
//! # Example
//!
//! ```ignore
//! use coursebook_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
