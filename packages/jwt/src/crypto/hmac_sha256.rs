//! HMAC-SHA256 signing and verification over raw key bytes

use crate::codec::base64_url_encode;
use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Compute the raw HMAC-SHA256 digest of `message`
///
/// # Errors
/// Returns `JwtError::InvalidSecret` if the MAC rejects the key
pub fn digest(message: &[u8], key: &[u8]) -> JwtResult<[u8; 32]> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|_| JwtError::InvalidSecret)?;
    mac.update(message);
    let mut out = [0u8; 32];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

/// Sign `message`, returning the base64url signature segment
///
/// # Errors
/// Returns `JwtError::InvalidSecret` if the MAC rejects the key
pub fn sign(message: &[u8], key: &[u8]) -> JwtResult<String> {
    Ok(base64_url_encode(&digest(message, key)?))
}

/// Check a signature segment against `message` in constant time.
///
/// The comparison is on the encoded text, so only the exact segment this
/// crate would produce is accepted.
///
/// # Errors
/// Returns `JwtError::InvalidSecret` if the MAC rejects the key
pub fn verify(message: &[u8], key: &[u8], signature: &str) -> JwtResult<bool> {
    let expected = sign(message, key)?;
    Ok(expected.as_bytes().ct_eq(signature.as_bytes()).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc4231_case_2() {
        let mac = digest(b"what do ya want for nothing?", b"Jefe").expect("hmac should compute");
        assert_eq!(
            hex::encode(mac),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_empty_key_is_accepted() {
        assert!(sign(b"payload", &[]).is_ok());
    }

    #[test]
    fn test_oversized_key_is_hashed() {
        let long_key = [0x5a_u8; 200];
        let sig = sign(b"payload", &long_key).expect("hmac should compute");
        assert_eq!(sig.len(), 43);
    }

    #[test]
    fn test_verify() {
        let sig = sign(b"header.payload", b"key").expect("hmac should compute");
        assert_eq!(verify(b"header.payload", b"key", &sig), Ok(true));
        assert_eq!(verify(b"header.payload", b"kez", &sig), Ok(false));
        assert_eq!(verify(b"header.payloaD", b"key", &sig), Ok(false));
        assert_eq!(verify(b"header.payload", b"key", &sig[..42]), Ok(false));
        assert_eq!(verify(b"header.payload", b"key", ""), Ok(false));
    }
}
