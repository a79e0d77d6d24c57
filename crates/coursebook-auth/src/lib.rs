//! # Coursebook Auth
//!
//! Bearer token handling for the Coursebook API.
//!
//! This crate provides:
//!
//! - [`claims`]: The decoded claim set and its typed accessors
//! - [`error`]: [`AuthError`] and its mapping onto HTTP failures
//! - [`jwt`]: Header parsing, token signing and verification
//!
//! Tokens are signed with a single shared secret using an HMAC algorithm.
//! Verification refuses any token whose header names a non-HMAC algorithm
//! before the signature is even looked at.
//!
//! # Example
//!
//! ```ignore
//! use coursebook_auth::{Claims, bearer_token, sign_token, verify_token};
//! use coursebook_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = sign_token(&Claims::new().with("name", "alice"), &config)?;
//!
//! let header = format!("Bearer {token}");
//! let claims = verify_token(bearer_token(Some(&header))?, &config)?;
//! assert_eq!(claims.get_str("name")?, "alice");
//! ```

pub mod claims;
pub mod error;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{ClaimValue, Claims};
pub use error::AuthError;
pub use jwt::{bearer_token, issue_token, sign_token, verify_token};
