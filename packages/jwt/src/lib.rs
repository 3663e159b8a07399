//! Compact HS256 JSON Web Tokens
//!
//! Build a [`Token`] from claims, sign it with a hex-encoded shared secret,
//! and verify or decode received tokens against the same secret.
//!
//! The only error the token API raises is [`JwtError::InvalidSecret`], for a
//! secret that is not one or more hex digits. Every problem with the token
//! itself is an ordinary `false`, `None`, or "expired" result:
//!
//! ```
//! use hsjwt::Token;
//!
//! # fn main() -> Result<(), hsjwt::JwtError> {
//! let secret = hsjwt::keys::generate_secret();
//!
//! let token = Token::builder()
//!     .issuer("liao.gg")
//!     .expires_in(chrono::Duration::hours(1))
//!     .build()
//!     .add_claim("username", "kevin")
//!     .sign(&secret)?;
//!
//! assert!(Token::verify(&token, &secret)?);
//! assert!(!Token::expired(&token, &secret)?);
//!
//! let received = Token::from_token(&token, &secret)?.expect("token was just signed");
//! assert_eq!(received.get_claim("username"), Some(&serde_json::json!("kevin")));
//! assert!(!Token::verify("not.a.token", &secret)?);
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod compact;
pub mod config;
pub mod crypto;
mod error;
pub mod keys;
mod token;
mod types;
pub mod verifier;

pub use config::SecretConfig;
pub use error::*;
pub use token::{Token, TokenBuilder};
pub use types::*;
