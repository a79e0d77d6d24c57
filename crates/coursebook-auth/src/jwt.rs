//! Bearer header parsing, token signing and verification.
//!
//! # Verification rules
//!
//! - The header must name an HMAC algorithm (HS256, HS384, HS512). Anything
//!   else is rejected with [`AuthError::UnexpectedSigningMethod`] without
//!   checking the signature, so a token crafted for an asymmetric key can never
//!   be validated against the shared secret.
//! - The signature is checked with the configured shared secret.
//! - `exp` and `nbf` are enforced when present. No registered claim is
//!   required and the audience is not inspected.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, decode_header, encode,
};

use coursebook_config::JwtConfig;

use crate::claims::Claims;
use crate::error::AuthError;

/// Algorithms accepted by [`verify_token`].
pub const HMAC_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// Extracts the token from an `Authorization` header value.
///
/// The value must be exactly two space-separated parts, `<scheme> <token>`.
/// The scheme word itself is not inspected.
///
/// # Errors
///
/// [`AuthError::MissingCredentials`] for a missing header or any other shape
/// (no space, or more than one space).
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let mut parts = header.unwrap_or_default().split(' ');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(_scheme), Some(token), None) => Ok(token),
        _ => Err(AuthError::MissingCredentials),
    }
}

/// Verifies `token` against the shared secret and returns its claim set.
///
/// # Errors
///
/// - [`AuthError::UnexpectedSigningMethod`] when the header algorithm is not HMAC
/// - [`AuthError::InvalidToken`] when the token is malformed, expired, not yet
///   valid, or signed with another secret
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AuthError> {
    let header = decode_header(token).map_err(AuthError::InvalidToken)?;

    if !HMAC_ALGORITHMS.contains(&header.alg) {
        return Err(AuthError::UnexpectedSigningMethod(format!("{:?}", header.alg)));
    }

    let mut validation = Validation::new(header.alg);
    validation.required_spec_claims.clear();
    validation.validate_nbf = true;
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(AuthError::InvalidToken)
}

/// Signs `claims` with HS256 and the shared secret.
pub fn sign_token(claims: &Claims, jwt_config: &JwtConfig) -> Result<String, AuthError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(AuthError::Signing)
}

/// Mints a token carrying `name`, `iat` and `exp` (now + configured expiry),
/// plus any `extra` claims.
pub fn issue_token(
    name: &str,
    extra: Claims,
    jwt_config: &JwtConfig,
) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();

    let mut claims = extra;
    claims.insert("name", name);
    claims.insert("iat", now);
    claims.insert("exp", now + jwt_config.access_token_expiry);

    sign_token(&claims, jwt_config)
}
