//! Secret provisioning from the environment

use crate::error::ConfigError;
use crate::keys::validate_secret;
use std::{env, fmt};
use zeroize::Zeroizing;

/// Environment variable read by [`SecretConfig::from_env`]
pub const DEFAULT_SECRET_VAR: &str = "HSJWT_SECRET";

/// A validated hex signing secret loaded from configuration
#[derive(Clone)]
pub struct SecretConfig {
    secret_hex: Zeroizing<String>,
}

impl SecretConfig {
    /// Load the secret from `HSJWT_SECRET`
    ///
    /// # Errors
    /// Returns `ConfigError` if the variable is unset or not a hex secret
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_var(DEFAULT_SECRET_VAR)
    }

    /// Load the secret from the named environment variable
    ///
    /// # Errors
    /// Returns `ConfigError` if the variable is unset or not a hex secret
    pub fn from_env_var(var: &str) -> Result<Self, ConfigError> {
        Self::from_value(var, env::var(var).ok().map(Zeroizing::new))
    }

    fn from_value(var: &str, value: Option<Zeroizing<String>>) -> Result<Self, ConfigError> {
        let value = value.ok_or_else(|| ConfigError::MissingVar {
            var: var.to_string(),
        })?;
        let secret_hex = value.trim();
        validate_secret(secret_hex).map_err(|source| ConfigError::Secret {
            var: var.to_string(),
            source,
        })?;
        Ok(Self {
            secret_hex: Zeroizing::new(secret_hex.to_string()),
        })
    }

    /// The hex secret, for passing to signing and verification calls
    #[must_use]
    pub fn secret_hex(&self) -> &str {
        &self.secret_hex
    }
}

impl fmt::Debug for SecretConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretConfig").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JwtError;

    fn value(s: &str) -> Option<Zeroizing<String>> {
        Some(Zeroizing::new(s.to_string()))
    }

    #[test]
    fn test_missing_var() {
        let err = SecretConfig::from_env_var("HSJWT_TEST_SECRET_NEVER_SET").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar { var } if var == "HSJWT_TEST_SECRET_NEVER_SET"));
    }

    #[test]
    fn test_loads_and_trims_hex_secret() {
        let config = SecretConfig::from_value("SECRET", value(" ABC123\n")).expect("secret should load");
        assert_eq!(config.secret_hex(), "ABC123");
        assert_eq!(format!("{config:?}"), "SecretConfig { .. }");
    }

    #[test]
    fn test_rejects_non_hex_secret() {
        for bad in ["not-hex", "", "   "] {
            let err = SecretConfig::from_value("SECRET", value(bad)).unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Secret { source: JwtError::InvalidSecret, .. }
            ));
        }
    }
}
