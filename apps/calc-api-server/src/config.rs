//! Layered server configuration.
//!
//! Order of precedence (later wins):
//! 1) built-in defaults -> 2) YAML file (if provided) -> 3) env (`APP__*`) -> 4) CLI overrides

use std::net::SocketAddr;
use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment variable prefix; nested keys are separated by `__`,
/// e.g. `APP__SERVER__BIND_ADDR`.
pub const ENV_PREFIX: &str = "APP__";

const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[source] Box<figment::Error>),
    #[error("invalid server.bind_addr '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Answer CORS preflights permissively.
    pub cors_enabled: bool,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8000".to_owned(),
            cors_enabled: false,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Parse `bind_addr`.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBindAddr`] if the address does not parse.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_addr
            .parse()
            .map_err(|source| ConfigError::InvalidBindAddr {
                addr: self.bind_addr.clone(),
                source,
            })
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `info,users=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `APP__*` environment variables.
    ///
    /// # Errors
    /// Returns [`ConfigError::Load`] when a source cannot be parsed or holds unknown keys.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config: Self = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))?;

        config.server.socket_addr()?;
        Ok(config)
    }

    /// Apply `--port` and `-v` on top of the loaded configuration.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidBindAddr`] if the port has to be spliced
    /// into an unparsable address.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>, verbose: u8) -> Result<(), ConfigError> {
        if let Some(port) = port {
            let mut addr = self.server.socket_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }

        match verbose {
            0 => {}
            1 => "info".clone_into(&mut self.logging.level),
            2 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
        Ok(())
    }

    /// Render the effective configuration for `--print-config` and `check`.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
