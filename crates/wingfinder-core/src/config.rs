use thiserror::Error;

use crate::app_config::{AppConfig, Environment, ProviderCredentials};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. No variable is strictly
/// required — provider credentials are optional by design.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The core parsing logic is decoupled from the real environment so it can be
/// tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("WINGFINDER_ENV", "development"));
    let bind_addr = parse_addr("WINGFINDER_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("WINGFINDER_LOG_LEVEL", "info");

    let credentials = ProviderCredentials {
        travelpayouts_api_key: lookup("TRAVELPAYOUTS_API_KEY").ok(),
        travelpayouts_marker: lookup("TRAVELPAYOUTS_MARKER").ok(),
        tequila_api_key: lookup("TEQUILA_API_KEY").ok(),
        duffel_api_key: lookup("DUFFEL_API_KEY").ok(),
        amadeus_api_key: lookup("AMADEUS_API_KEY").ok(),
        amadeus_api_secret: lookup("AMADEUS_API_SECRET").ok(),
    };

    let upstream_timeout_secs = parse_u64("WINGFINDER_UPSTREAM_TIMEOUT_SECS", "30")?;
    let upstream_user_agent = or_default("WINGFINDER_UPSTREAM_USER_AGENT", "wingfinder/0.1");
    let rate_limit_max_requests = parse_usize("WINGFINDER_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs = parse_u64("WINGFINDER_RATE_LIMIT_WINDOW_SECS", "60")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        credentials,
        upstream_timeout_secs,
        upstream_user_agent,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
