use crate::app_config::{AppConfig, Environment};
use crate::product::Region;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Use it in tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the defaults describe a local development
/// server talking to the public Open Food Facts mirrors.
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

    let env = parse_environment(&or_default("FOODSCAN_ENV", "development"))?;
    let bind_addr = parse_addr("FOODSCAN_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("FOODSCAN_LOG_LEVEL", "info");

    let source_timeout_secs = parse_u64("FOODSCAN_SOURCE_TIMEOUT_SECS", "5")?;
    if source_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FOODSCAN_SOURCE_TIMEOUT_SECS".to_string(),
            reason: "timeout must be at least 1 second".to_string(),
        });
    }
    let source_user_agent = or_default(
        "FOODSCAN_USER_AGENT",
        "foodscan/0.1 (product-health-lookup)",
    );

    let source_base_urls = Region::ALL
        .iter()
        .map(|&region| {
            let var = base_url_var(region);
            let url = or_default(var, region.default_base_url());
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: "base URL must not be empty".to_string(),
                });
            }
            Ok((region, url))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        source_timeout_secs,
        source_user_agent,
        source_base_urls,
    })
}

fn base_url_var(region: Region) -> &'static str {
    match region {
        Region::Global => "FOODSCAN_OFF_WORLD_URL",
        Region::Us => "FOODSCAN_OFF_US_URL",
        Region::Uk => "FOODSCAN_OFF_UK_URL",
        Region::India => "FOODSCAN_OFF_IN_URL",
    }
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FOODSCAN_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
