//! Logging bootstrap and log-safe fingerprints
//!
//! The token crate emits `tracing` events with the `log` feature enabled, so
//! an `env_logger` backend installed here receives them as ordinary records.
//! Configure levels via the `RUST_LOG` environment variable:
//! - `RUST_LOG=hsjwt=debug` - every rejected token, with its fingerprint
//! - `RUST_LOG=warn` - malformed secrets only

use log::info;
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Length of the hex prefix kept from the SHA-256 digest.
const FINGERPRINT_HEX_LEN: usize = 12;

/// Logging entry points shared by the workspace
pub struct Logging;

impl Logging {
    /// Initialize logging (call once at application startup)
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; later calls are no-ops.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Fingerprint a sensitive string for log output
    ///
    /// Returns `#` followed by the first 12 hex characters of the SHA-256
    /// digest, so the same token can be correlated across log lines without
    /// being reproducible from them.
    #[must_use]
    pub fn fingerprint(value: &str) -> String {
        let digest = Sha256::digest(value.as_bytes());
        let hex = hex::encode(digest);
        format!("#{}", &hex[..FINGERPRINT_HEX_LEN])
    }
}
