//! Server configuration module

use super::{parse_or, ConfigError, Environment};

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Preferred server port
    pub port: u16,

    /// How many consecutive ports to try when the preferred one is taken
    pub port_fallback_attempts: u16,

    /// Worker threads (0 = number of CPU cores)
    pub workers: usize,

    /// Origins accepted by CORS in production
    pub cors_allowed_origins: Vec<String>,

    /// Maximum JSON payload size in bytes
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 5000,
            port_fallback_attempts: 10,
            workers: 0,
            cors_allowed_origins: Vec::new(),
            max_payload_size: 64 * 1024,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_lookup<F>(lookup: &F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("HOST").unwrap_or_else(|| {
            if environment.is_production() {
                String::from("0.0.0.0")
            } else {
                defaults.host.clone()
            }
        });

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port: parse_or(lookup, "PORT", defaults.port)?,
            port_fallback_attempts: parse_or(
                lookup,
                "PORT_FALLBACK_ATTEMPTS",
                defaults.port_fallback_attempts,
            )?,
            workers: parse_or(lookup, "SERVER_WORKERS", defaults.workers)?,
            cors_allowed_origins,
            max_payload_size: parse_or(lookup, "MAX_PAYLOAD_SIZE", defaults.max_payload_size)?,
        })
    }

    /// Ports to try in order, starting at the preferred one
    pub fn candidate_ports(&self) -> impl Iterator<Item = u16> + '_ {
        let attempts = self.port_fallback_attempts.max(1);
        (0..attempts).map_while(move |offset| self.port.checked_add(offset))
    }
}
