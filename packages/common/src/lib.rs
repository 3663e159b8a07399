//! Shared infrastructure for the hsjwt workspace
//!
//! Holds the logging bootstrap used by applications embedding the token
//! library, plus the fingerprint helper the library uses to reference tokens
//! in log output without leaking them.

pub mod logging;

pub use logging::Logging;
