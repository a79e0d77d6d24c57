//! # Coursebook CLI
//!
//! Operator helpers used by the `coursebook-cli` binary.
//!
//! ## Usage
//!
//! ```ignore
//! use coursebook_cli::{parse_claim, mint_token};
//!
//! let extra = vec![parse_claim("role=admin")?];
//! let token = mint_token("alice", extra, None, &JwtConfig::from_env())?;
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use coursebook_auth::{ClaimValue, Claims, issue_token};
use coursebook_config::JwtConfig;
use coursebook_data::Directory;

/// Parses a `key=value` claim argument.
///
/// The value is read as JSON when it parses (`7`, `true`, `["a","b"]`),
/// otherwise it is kept as a plain string.
pub fn parse_claim(arg: &str) -> Result<(String, ClaimValue)> {
    let Some((key, value)) = arg.split_once('=') else {
        bail!("invalid claim `{arg}`, expected key=value");
    };
    if key.is_empty() {
        bail!("invalid claim `{arg}`, empty key");
    }

    let value = serde_json::from_str::<ClaimValue>(value)
        .unwrap_or_else(|_| ClaimValue::String(value.to_string()));

    Ok((key.to_string(), value))
}

/// Signs a token for `name` with the shared secret.
///
/// `expires_in` overrides the configured lifetime in seconds.
pub fn mint_token(
    name: &str,
    extra: Vec<(String, ClaimValue)>,
    expires_in: Option<i64>,
    jwt_config: &JwtConfig,
) -> Result<String> {
    let mut jwt_config = jwt_config.clone();
    if let Some(secs) = expires_in {
        jwt_config.access_token_expiry = secs;
    }

    let claims = extra
        .into_iter()
        .fold(Claims::new(), |claims, (key, value)| claims.with(key, value));

    issue_token(name, claims, &jwt_config).context("Failed to sign token")
}

/// Record counts of a data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSummary {
    pub users: usize,
    pub instructors: usize,
    pub courses: usize,
}

/// Loads `dir` the same way the server does at startup.
pub fn check_data(dir: &Path) -> Result<DataSummary> {
    let directory = Directory::load(dir)?;

    Ok(DataSummary {
        users: directory.users().len(),
        instructors: directory.instructors().len(),
        courses: directory.courses().len(),
    })
}
