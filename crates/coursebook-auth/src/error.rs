//! Authentication failures.
//!
//! [`AuthError`] keeps the precise cause for logs; [`AuthError::public_message`]
//! is the only text that ever reaches a client.

use anyhow::anyhow;
use coursebook_core::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    /// The `Authorization` header is absent or not of the form `<scheme> <token>`.
    #[error("no valid token found")]
    MissingCredentials,

    /// The token header names an algorithm outside the HMAC family.
    #[error("unexpected signing method: {0}")]
    UnexpectedSigningMethod(String),

    /// Malformed, expired, or signed with a different secret.
    #[error("invalid token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("missing claim: {0}")]
    MissingClaim(String),

    #[error("claim {name} is not a {expected}")]
    WrongClaimType { name: String, expected: &'static str },

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// Generic, client-safe description of the failure category.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "no valid token found",
            AuthError::UnexpectedSigningMethod(_) | AuthError::InvalidToken(_) => "unauthorized",
            AuthError::MissingClaim(_) | AuthError::WrongClaimType { .. } => "malformed jwt",
            AuthError::Signing(_) => "failed to sign token",
        }
    }

    /// Converts into the HTTP error returned to the framework.
    ///
    /// Every verification failure is a 401; only signing (a server-side
    /// operation) maps to 500.
    pub fn into_app_error(self) -> AppError {
        let message = self.public_message();
        match self {
            AuthError::Signing(_) => AppError::internal(anyhow!(message)),
            _ => AppError::unauthorized(anyhow!(message)),
        }
    }
}
