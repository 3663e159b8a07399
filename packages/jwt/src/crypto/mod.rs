//! Signature primitives
//!
//! [`hmac_sha256`] works on raw key bytes; [`sign`] is the hex-secret entry
//! point used by the token layer.

pub mod hmac_sha256;

use crate::error::JwtResult;
use crate::keys::secret_bytes;

/// Sign `message` with a hex secret, returning the base64url signature segment
///
/// # Errors
/// Returns `JwtError::InvalidSecret` if `secret_hex` is not hex digits
pub fn sign(message: &[u8], secret_hex: &str) -> JwtResult<String> {
    let key = secret_bytes(secret_hex)?;
    hmac_sha256::sign(message, &key)
}
