//! Application settings loaded from environment variables.

use std::env;

use thiserror::Error;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, MAX_JWT_EXPIRATION_HOURS,
    MIN_JWT_SECRET_LENGTH,
};

/// Configuration loading failures
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET environment variable must be set")]
    MissingSecret,

    #[error("JWT_SECRET must be at least {0} characters long")]
    SecretTooShort(usize),

    #[error("JWT_EXPIRATION_HOURS must be an integer between 1 and {0}")]
    InvalidExpiration(i64),
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    jwt_expiration_hours: i64,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .finish()
    }
}

impl Config {
    /// Build a configuration from explicit values.
    ///
    /// The secret is checked against [`MIN_JWT_SECRET_LENGTH`]; token lifetime
    /// starts at the default and can be changed with [`Config::with_expiration_hours`].
    pub fn new(
        database_url: impl Into<String>,
        jwt_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort(MIN_JWT_SECRET_LENGTH));
        }

        Ok(Self {
            database_url: database_url.into(),
            jwt_secret,
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
        })
    }

    /// Load configuration from environment variables (and `.env` if present).
    ///
    /// There is no fallback signing secret: `JWT_SECRET` must be provided.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::MissingSecret)?;
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let config = Self::new(database_url, jwt_secret)?;

        match env::var("JWT_EXPIRATION_HOURS") {
            Ok(raw) => {
                let hours = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidExpiration(MAX_JWT_EXPIRATION_HOURS))?;
                config.with_expiration_hours(hours)
            }
            Err(_) => Ok(config),
        }
    }

    /// Override the token lifetime, at most [`MAX_JWT_EXPIRATION_HOURS`].
    pub fn with_expiration_hours(mut self, hours: i64) -> Result<Self, ConfigError> {
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) {
            return Err(ConfigError::InvalidExpiration(MAX_JWT_EXPIRATION_HOURS));
        }
        self.jwt_expiration_hours = hours;
        Ok(self)
    }

    /// Token lifetime in hours
    pub fn jwt_expiration_hours(&self) -> i64 {
        self.jwt_expiration_hours
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "a-test-secret-that-is-long-enough-123";

    #[test]
    fn test_new_uses_default_expiration() {
        let config = Config::new("sqlite::memory:", SECRET).unwrap();
        assert_eq!(config.jwt_expiration_hours, DEFAULT_JWT_EXPIRATION_HOURS);
        assert_eq!(config.jwt_secret_bytes(), SECRET.as_bytes());
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::new("sqlite::memory:", "short");
        assert_eq!(
            result.unwrap_err(),
            ConfigError::SecretTooShort(MIN_JWT_SECRET_LENGTH)
        );
    }

    #[test]
    fn test_non_positive_expiration_rejected() {
        let config = Config::new("sqlite::memory:", SECRET).unwrap();
        assert_eq!(
            config.with_expiration_hours(0).unwrap_err(),
            ConfigError::InvalidExpiration(MAX_JWT_EXPIRATION_HOURS)
        );
    }

    #[test]
    fn test_expiration_upper_bound() {
        let config = Config::new("sqlite::memory:", SECRET).unwrap();
        let at_limit = config
            .clone()
            .with_expiration_hours(MAX_JWT_EXPIRATION_HOURS)
            .unwrap();
        assert_eq!(at_limit.jwt_expiration_hours(), MAX_JWT_EXPIRATION_HOURS);

        for hours in [MAX_JWT_EXPIRATION_HOURS + 1, 1_000_000_000_000, i64::MAX / 2] {
            assert_eq!(
                config.clone().with_expiration_hours(hours).unwrap_err(),
                ConfigError::InvalidExpiration(MAX_JWT_EXPIRATION_HOURS)
            );
        }
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = Config::new("sqlite::memory:", SECRET).unwrap();
        let output = format!("{:?}", config);
        assert!(!output.contains(SECRET));
        assert!(output.contains("[REDACTED]"));
    }
}
