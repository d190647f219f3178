use std::{
    env,
    net::{AddrParseError, SocketAddr},
    str::FromStr,
};

use thiserror::Error;

use super::{max_tokens, server_bind_address};

/// Application runtime environment, selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl Environment {
    /// Canonical name used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub environment: Environment,
    /// Largest token sequence accepted by a single compute request.
    pub max_tokens: usize,
}

impl AppConfig {
    /// Reads and validates `APP_ENV`, `APP_BIND_ADDR` and `APP_MAX_TOKENS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::default(),
        };

        Ok(Self {
            bind_addr: server_bind_address()?,
            environment,
            max_tokens: max_tokens()?,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_ENV must be one of 'development', 'production', or 'test' (got {0})")]
    InvalidEnvironment(String),
    #[error("invalid APP_BIND_ADDR value: {0}")]
    BindAddress(#[from] AddrParseError),
    #[error("APP_MAX_TOKENS must be a positive integer (got {0})")]
    MaxTokens(String),
}
