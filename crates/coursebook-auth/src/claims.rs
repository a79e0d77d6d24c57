//! Decoded token claims.
//!
//! A token payload is an arbitrary JSON object, so [`Claims`] keeps it as a map
//! from claim name to a tagged [`ClaimValue`]. Reads go through fallible,
//! typed accessors; nothing is coerced silently.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// A single claim value as found in the token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClaimValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    List(Vec<ClaimValue>),
    Object(BTreeMap<String, ClaimValue>),
}

impl ClaimValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClaimValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ClaimValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ClaimValue::Null)
    }
}

/// Strings render verbatim; everything else renders as JSON.
impl fmt::Display for ClaimValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClaimValue::Null => f.write_str("null"),
            ClaimValue::Bool(b) => write!(f, "{b}"),
            ClaimValue::Number(n) => write!(f, "{n}"),
            ClaimValue::String(s) => f.write_str(s),
            ClaimValue::List(_) | ClaimValue::Object(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::String(value.to_string())
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::String(value)
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Number(value.into())
    }
}

impl From<bool> for ClaimValue {
    fn from(value: bool) -> Self {
        ClaimValue::Bool(value)
    }
}

/// Claim set of a verified token.
///
/// Owned by a single request; never cached or shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(BTreeMap<String, ClaimValue>);

impl Claims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for minting tokens.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ClaimValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ClaimValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Returns the claim named `name`.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingClaim`] when the claim is absent or explicitly `null`.
    pub fn get(&self, name: &str) -> Result<&ClaimValue, AuthError> {
        match self.0.get(name) {
            Some(value) if !value.is_null() => Ok(value),
            _ => Err(AuthError::MissingClaim(name.to_string())),
        }
    }

    /// Returns the claim named `name` as a string.
    ///
    /// # Errors
    ///
    /// [`AuthError::MissingClaim`] when absent, [`AuthError::WrongClaimType`]
    /// when present but not a string.
    pub fn get_str(&self, name: &str) -> Result<&str, AuthError> {
        self.get(name)?
            .as_str()
            .ok_or_else(|| AuthError::WrongClaimType {
                name: name.to_string(),
                expected: "string",
            })
    }

    pub fn get_i64(&self, name: &str) -> Result<i64, AuthError> {
        self.get(name)?
            .as_i64()
            .ok_or_else(|| AuthError::WrongClaimType {
                name: name.to_string(),
                expected: "integer",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_deserialize_mixed_values() {
        let json = r#"{"name":"alice","admin":true,"exp":9999999999,"org":null,"aud":["a","b"]}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert!(matches!(claims.get("org"), Err(AuthError::MissingClaim(_))));
        assert_eq!(claims.get_str("name").unwrap(), "alice");
        assert_eq!(claims.get("admin").unwrap(), &ClaimValue::Bool(true));
        assert_eq!(claims.get_i64("exp").unwrap(), 9999999999);
        assert!(matches!(claims.get("aud").unwrap(), ClaimValue::List(v) if v.len() == 2));
    }

    #[test]
    fn test_null_claim_counts_as_missing() {
        let claims: Claims = serde_json::from_str(r#"{"name":null}"#).unwrap();
        assert_eq!(claims, Claims::new().with("name", ClaimValue::Null));
        assert!(matches!(claims.get("name"), Err(AuthError::MissingClaim(n)) if n == "name"));
    }

    #[test]
    fn test_absent_claim() {
        let claims = Claims::new().with("sub", "42");
        assert!(matches!(claims.get_str("name"), Err(AuthError::MissingClaim(_))));
    }

    #[test]
    fn test_wrong_type() {
        let claims = Claims::new().with("name", 7i64);
        assert!(matches!(
            claims.get_str("name"),
            Err(AuthError::WrongClaimType { expected: "string", .. })
        ));
        assert_eq!(claims.get("name").unwrap().to_string(), "7");
    }

    #[test]
    fn test_display() {
        assert_eq!(ClaimValue::from("alice").to_string(), "alice");
        assert_eq!(ClaimValue::from(true).to_string(), "true");
        assert_eq!(ClaimValue::Null.to_string(), "null");
        let list = ClaimValue::List(vec!["a".into(), 1i64.into()]);
        assert_eq!(list.to_string(), r#"["a",1]"#);
    }

    #[test]
    fn test_serialize_round_trips_through_json_object() {
        let claims = Claims::new().with("name", "bob").with("admin", false);
        let json = serde_json::to_string(&claims).unwrap();
        assert_eq!(json, r#"{"admin":false,"name":"bob"}"#);
    }
}
