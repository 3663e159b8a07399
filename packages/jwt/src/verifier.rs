//! Signature verification of compact tokens

use crate::compact::{self, Parts};
use crate::crypto::hmac_sha256;
use crate::error::JwtResult;
use hsjwt_common::Logging;

/// Split `token` and check its signature under `key`.
///
/// Returns the segments only when the shape is right and the recomputed
/// signature matches exactly.
///
/// # Errors
/// Returns `JwtError::InvalidSecret` if the MAC rejects the key
pub fn verified_parts<'a>(token: &'a str, key: &[u8]) -> JwtResult<Option<Parts<'a>>> {
    let Some(parts) = compact::split(token) else {
        tracing::debug!(
            token = %Logging::fingerprint(token),
            "rejected token: expected three segments"
        );
        return Ok(None);
    };

    if !hmac_sha256::verify(parts.signing_input().as_bytes(), key, parts.signature)? {
        tracing::debug!(
            token = %Logging::fingerprint(token),
            "rejected token: signature mismatch"
        );
        return Ok(None);
    }

    Ok(Some(parts))
}

/// Check the shape and signature of `token` under `key`
///
/// # Errors
/// Returns `JwtError::InvalidSecret` if the MAC rejects the key
pub fn verify(token: &str, key: &[u8]) -> JwtResult<bool> {
    Ok(verified_parts(token, key)?.is_some())
}
