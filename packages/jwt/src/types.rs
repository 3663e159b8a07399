//! Header, claim set and decoded-token types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// `alg` value of every header this crate produces
pub const HEADER_ALGORITHM: &str = "HS256";

/// `typ` value of every header this crate produces
pub const HEADER_TYPE: &str = "JWT";

/// Issuer claim name
pub const ISSUER: &str = "iss";

/// Expiration claim name (unix seconds)
pub const EXPIRATION: &str = "exp";

/// Issued-at claim name (unix seconds)
pub const ISSUED_AT: &str = "iat";

/// Claim set: insertion-ordered map of claim name to any JSON value
pub type Claims = Map<String, Value>;

/// Token header.
///
/// Always `{"alg":"HS256","typ":"JWT"}` when built by this crate. Headers of
/// received tokens are never carried over into a [`crate::Token`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    alg: String,
    typ: String,
}

impl Header {
    /// Signing algorithm
    #[must_use]
    pub fn alg(&self) -> &str {
        &self.alg
    }

    /// Token type
    #[must_use]
    pub fn typ(&self) -> &str {
        &self.typ
    }

    pub(crate) fn to_value(&self) -> Value {
        json!({ "alg": self.alg, "typ": self.typ })
    }
}

impl Default for Header {
    fn default() -> Self {
        Self {
            alg: HEADER_ALGORITHM.to_string(),
            typ: HEADER_TYPE.to_string(),
        }
    }
}

/// Header and payload of a verified token, as decoded JSON.
///
/// Neither value is checked against the [`Header`] or [`Claims`] shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedParts {
    /// Decoded first segment
    pub header: Value,
    /// Decoded second segment
    pub payload: Value,
}
