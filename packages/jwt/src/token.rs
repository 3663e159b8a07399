//! Token entity: a fixed header plus an insertion-ordered claim set
//!
//! A [`Token`] never holds a secret. Signing and every check on received
//! tokens take the hex secret per call, and the decoded key bytes are wiped
//! when the call returns.

use crate::codec;
use crate::compact;
use crate::crypto::hmac_sha256;
use crate::error::JwtResult;
use crate::keys::secret_bytes;
use crate::types::{Claims, DecodedParts, EXPIRATION, Header, ISSUED_AT, ISSUER};
use crate::verifier;
use chrono::{Duration, Utc};
use hsjwt_common::Logging;
use serde_json::Value;

/// A claim set under construction, or one recovered from a verified token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Token {
    header: Header,
    claims: Claims,
}

impl Token {
    /// Create a token with the default header and no claims
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a token seeded with registered claims.
    ///
    /// `iss` and `exp` are set when given. `iat` is only written when both
    /// of them are present, using `issued_at` or else the current time.
    #[must_use]
    pub fn with_registered(
        issuer: Option<&str>,
        expiration: Option<i64>,
        issued_at: Option<i64>,
    ) -> Self {
        let mut token = Self::new();
        if let Some(iss) = issuer {
            token.set_claim(ISSUER, iss);
        }
        if let Some(exp) = expiration {
            token.set_claim(EXPIRATION, exp);
        }
        if issuer.is_some() && expiration.is_some() {
            let iat = issued_at.unwrap_or_else(|| Utc::now().timestamp());
            token.set_claim(ISSUED_AT, iat);
        }
        token
    }

    /// Start building a token with registered claims
    #[must_use]
    pub fn builder() -> TokenBuilder {
        TokenBuilder::default()
    }

    /// Set a claim, replacing any previous value under `name`
    #[must_use]
    pub fn add_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_claim(name, value);
        self
    }

    /// Set a claim in place, replacing any previous value under `name`.
    ///
    /// A replaced claim keeps its original position in the payload.
    pub fn set_claim(&mut self, name: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.claims.insert(name.into(), value.into());
        self
    }

    /// Look up a claim. `None` means the claim was never set.
    #[must_use]
    pub fn get_claim(&self, name: &str) -> Option<&Value> {
        self.claims.get(name)
    }

    /// The header this token will be signed with
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// All claims in payload order
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// `iss`, if set to a string
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.claims.get(ISSUER).and_then(Value::as_str)
    }

    /// `exp`, if set to an integer
    #[must_use]
    pub fn expiration(&self) -> Option<i64> {
        self.claims.get(EXPIRATION).and_then(Value::as_i64)
    }

    /// `iat`, if set to an integer
    #[must_use]
    pub fn issued_at(&self) -> Option<i64> {
        self.claims.get(ISSUED_AT).and_then(Value::as_i64)
    }

    /// Encode and sign this token.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidSecret` if `secret_hex` is not hex digits
    pub fn sign(&self, secret_hex: &str) -> JwtResult<String> {
        let key = secret_bytes(secret_hex)?;
        let header = codec::encode(&self.header.to_value());
        let payload = codec::encode(&Value::Object(self.claims.clone()));
        let signing_input = [header.as_str(), payload.as_str()].join(".");
        let signature = hmac_sha256::sign(signing_input.as_bytes(), &key)?;
        Ok(compact::assemble(&header, &payload, &signature))
    }

    /// Check that `token` has three segments and a valid signature.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidSecret` if `secret_hex` is not hex digits,
    /// before the token is looked at
    pub fn verify(token: &str, secret_hex: &str) -> JwtResult<bool> {
        let key = secret_bytes(secret_hex)?;
        verifier::verify(token, &key)
    }

    /// Verify `token` and return its decoded header and payload.
    ///
    /// Returns `Ok(None)` if verification fails or either segment does not
    /// decode to JSON. The header is returned as found, not as a [`Header`].
    ///
    /// # Errors
    /// Returns `JwtError::InvalidSecret` if `secret_hex` is not hex digits
    pub fn unwrap(token: &str, secret_hex: &str) -> JwtResult<Option<DecodedParts>> {
        let key = secret_bytes(secret_hex)?;
        let Some(parts) = verifier::verified_parts(token, &key)? else {
            return Ok(None);
        };

        let decoded = decode_segment(token, parts.header)
            .zip(decode_segment(token, parts.payload))
            .map(|(header, payload)| DecodedParts { header, payload });
        Ok(decoded)
    }

    /// Verify `token` and rebuild a [`Token`] from its payload.
    ///
    /// The result has the default header whatever the received one said, and
    /// every payload claim added in payload order. Returns `Ok(None)` if
    /// verification fails or the payload is not a JSON object.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidSecret` if `secret_hex` is not hex digits
    pub fn from_token(token: &str, secret_hex: &str) -> JwtResult<Option<Self>> {
        let key = secret_bytes(secret_hex)?;
        let Some(parts) = verifier::verified_parts(token, &key)? else {
            return Ok(None);
        };

        match decode_segment(token, parts.payload) {
            Some(Value::Object(claims)) => Ok(Some(
                claims
                    .into_iter()
                    .fold(Self::new(), |rebuilt, (name, value)| rebuilt.add_claim(name, value)),
            )),
            Some(_) => {
                tracing::debug!(
                    token = %Logging::fingerprint(token),
                    "rejected token: payload is not a JSON object"
                );
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Whether `token` should be treated as expired right now.
    ///
    /// See [`Token::expired_at`].
    ///
    /// # Errors
    /// Returns `JwtError::InvalidSecret` if `secret_hex` is not hex digits
    pub fn expired(token: &str, secret_hex: &str) -> JwtResult<bool> {
        Self::expired_at(token, secret_hex, Utc::now().timestamp())
    }

    /// Whether `token` should be treated as expired at unix time `now`.
    ///
    /// A token is expired when `now >= exp`. Tokens that fail verification,
    /// have an undecodable payload, or carry no numeric `exp` are always
    /// reported expired.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidSecret` if `secret_hex` is not hex digits
    pub fn expired_at(token: &str, secret_hex: &str, now: i64) -> JwtResult<bool> {
        let key = secret_bytes(secret_hex)?;
        let Some(parts) = verifier::verified_parts(token, &key)? else {
            return Ok(true);
        };

        let reached = decode_segment(token, parts.payload)
            .as_ref()
            .and_then(|payload| payload.get(EXPIRATION))
            .and_then(|exp| has_passed(exp, now));

        match reached {
            Some(reached) => Ok(reached),
            None => {
                tracing::debug!(
                    token = %Logging::fingerprint(token),
                    "treating token as expired: no numeric exp claim"
                );
                Ok(true)
            }
        }
    }
}

/// `now >= exp` for a numeric `exp`, `None` for anything else
#[allow(clippy::cast_precision_loss)]
fn has_passed(exp: &Value, now: i64) -> Option<bool> {
    match exp.as_i64() {
        Some(exp) => Some(now >= exp),
        None => exp.as_f64().map(|exp| now as f64 >= exp),
    }
}

fn decode_segment(token: &str, segment: &str) -> Option<Value> {
    codec::decode(segment)
        .map_err(|e| {
            tracing::debug!(
                token = %Logging::fingerprint(token),
                error = %e,
                "rejected token: undecodable segment"
            );
        })
        .ok()
}

/// Builder for a [`Token`] seeded with registered claims
#[derive(Debug, Clone, Default)]
pub struct TokenBuilder {
    issuer: Option<String>,
    expiration: Option<i64>,
    issued_at: Option<i64>,
}

impl TokenBuilder {
    /// Set the issuer (`iss`)
    #[must_use]
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the expiration (`exp`) as unix seconds
    #[must_use]
    pub fn expires_at(mut self, exp: i64) -> Self {
        self.expiration = Some(exp);
        self
    }

    /// Set the expiration (`exp`) relative to now
    #[must_use]
    pub fn expires_in(mut self, dur: Duration) -> Self {
        self.expiration = Some((Utc::now() + dur).timestamp());
        self
    }

    /// Set the issued-at time (`iat`) as unix seconds.
    ///
    /// Ignored unless both issuer and expiration are set.
    #[must_use]
    pub fn issued_at(mut self, iat: i64) -> Self {
        self.issued_at = Some(iat);
        self
    }

    /// Build the token
    #[must_use]
    pub fn build(self) -> Token {
        Token::with_registered(self.issuer.as_deref(), self.expiration, self.issued_at)
    }
}
