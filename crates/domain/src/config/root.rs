use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

/// Main configuration structure for dnscheck
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Resolution behavior (servers, timeout, retries, fallback)
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Result caching
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnscheck.toml in current directory
    /// 3. /etc/dnscheck/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dnscheck.toml").exists() {
            Self::from_file("dnscheck.toml")?
        } else if std::path::Path::new("/etc/dnscheck/config.toml").exists() {
            Self::from_file("/etc/dnscheck/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(servers) = overrides.servers {
            self.resolver.servers = servers;
        }
        if let Some(timeout) = overrides.timeout_ms {
            self.resolver.timeout_ms = timeout;
        }
        if let Some(retries) = overrides.retry_count {
            self.resolver.retry_count = retries;
        }
        if let Some(fallback) = overrides.fallback_to_system {
            self.resolver.fallback_to_system = fallback;
        }
        if let Some(log_nxdomain) = overrides.log_nxdomain {
            self.resolver.log_nxdomain = log_nxdomain;
        }
        if let Some(strict) = overrides.strict_errors {
            self.resolver.strict_errors = strict;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.retry_count == 0 {
            return Err(ConfigError::Validation(
                "retry_count must be at least 1".to_string(),
            ));
        }

        if self.resolver.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "timeout_ms cannot be 0".to_string(),
            ));
        }

        for server in &self.resolver.servers {
            Self::parse_server(server).map_err(ConfigError::Validation)?;
        }

        Ok(())
    }

    /// Parse a configured server entry. A bare IP gets the default DNS
    /// port appended.
    pub fn parse_server(server: &str) -> Result<SocketAddr, String> {
        if let Ok(addr) = server.parse::<SocketAddr>() {
            return Ok(addr);
        }
        if let Ok(ip) = server.parse::<std::net::IpAddr>() {
            return Ok(SocketAddr::new(ip, 53));
        }
        Err(format!("Invalid server address '{}'", server))
    }

    /// Resolved socket addresses for the configured custom servers.
    pub fn server_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.resolver
            .servers
            .iter()
            .map(|s| Self::parse_server(s).map_err(ConfigError::Validation))
            .collect()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub servers: Option<Vec<String>>,
    pub timeout_ms: Option<u64>,
    pub retry_count: Option<u32>,
    pub fallback_to_system: Option<bool>,
    pub log_nxdomain: Option<bool>,
    pub strict_errors: Option<bool>,
    pub log_level: Option<String>,
}
