use std::net::SocketAddr;

use crate::product::Region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Per-endpoint request timeout for product lookups.
    pub source_timeout_secs: u64,
    pub source_user_agent: String,
    /// Base URL per data source, in lookup priority order.
    pub source_base_urls: Vec<(Region, String)>,
}
