pub mod config;

use std::{env, net::SocketAddr};

pub use config::{AppConfig, ConfigError, Environment};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_MAX_TOKENS: usize = 10_000;

/// Loads environment variables from `.env` when available.
///
/// Missing files are ignored so the function is safe in production builds
/// where dotenv files are not deployed.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

/// Returns the address the HTTP server should bind to.
///
/// Read from `APP_BIND_ADDR`, falling back to [`DEFAULT_BIND_ADDR`].
pub fn server_bind_address() -> Result<SocketAddr, std::net::AddrParseError> {
    let value = env::var("APP_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    value.parse()
}

/// Returns the per-request token ceiling from `APP_MAX_TOKENS`.
pub fn max_tokens() -> Result<usize, ConfigError> {
    let Ok(value) = env::var("APP_MAX_TOKENS") else {
        return Ok(DEFAULT_MAX_TOKENS);
    };
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(ConfigError::MaxTokens(value)),
        Ok(limit) => Ok(limit),
    }
}
