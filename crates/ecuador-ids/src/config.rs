// src/config.rs
//! Loads validator configuration from structured environment variables.

use std::collections::HashMap;

use crate::{error::ConfigError, province::DEFAULT_MAX_PROVINCE_CODE, validator::Validator};

/// Environment variable holding the highest accepted province code.
pub const MAX_PROVINCE_CODE_VAR: &str = "ECUADOR_IDS__MAX_PROVINCE_CODE";

impl Validator {
    /// Constructs a `Validator` from a hashmap of environment variables.
    ///
    /// Reads `ECUADOR_IDS__MAX_PROVINCE_CODE`, falling back to 24 when it is missing or empty.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the variable is not a two digit number.
    ///
    /// # Examples
    /// ```rust
    /// use std::collections::HashMap;
    /// use ecuador_ids::Validator;
    ///
    /// let env = std::env::vars().collect::<HashMap<String, String>>();
    /// # let mut env = env;
    /// # env.insert("ECUADOR_IDS__MAX_PROVINCE_CODE".to_string(), "30".to_string());
    /// let validator = Validator::from_env(&env).expect("Failed to load configuration");
    /// # assert_eq!(validator.max_province_code(), 30);
    /// ```
    pub fn from_env(env: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let max_province_code = match env.get(MAX_PROVINCE_CODE_VAR).filter(|s| !s.is_empty()) {
            None => DEFAULT_MAX_PROVINCE_CODE,
            Some(value) => value
                .parse::<u8>()
                .map_err(|e| e.to_string())
                .and_then(|code| {
                    if code <= 99 {
                        Ok(code)
                    } else {
                        Err("province codes have two digits".to_string())
                    }
                })
                .map_err(|reason| {
                    ConfigError::InvalidEnvVar(MAX_PROVINCE_CODE_VAR, value.clone(), reason)
                })?,
        };

        tracing::debug!(max_province_code, "loaded validator configuration");

        Ok(Self::builder().max_province_code(max_province_code).build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(value: &str) -> HashMap<String, String> {
        HashMap::from([(MAX_PROVINCE_CODE_VAR.to_string(), value.to_string())])
    }

    #[test]
    fn defaults_when_missing() {
        let validator = Validator::from_env(&HashMap::new()).expect("empty env is valid");
        assert_eq!(validator, Validator::default());

        let validator = Validator::from_env(&env("")).expect("empty value is valid");
        assert_eq!(validator.max_province_code(), DEFAULT_MAX_PROVINCE_CODE);
    }

    #[test]
    fn reads_max_province_code() {
        let validator = Validator::from_env(&env("30")).expect("30 is valid");
        assert_eq!(validator.max_province_code(), 30);
    }

    #[test]
    fn rejects_invalid_values() {
        for value in ["abc", "-1", "100", "256"] {
            let error = Validator::from_env(&env(value)).expect_err("should be rejected");
            let ConfigError::InvalidEnvVar(name, found, _) = error;
            assert_eq!(name, MAX_PROVINCE_CODE_VAR);
            assert_eq!(found, value);
        }
    }
}
