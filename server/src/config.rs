//! Server configuration module.
//!
//! This module provides configuration loading for the zoo server from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `PORT`: Port to listen on (default: `3001`)
//! - `ZOO_LISTEN_HOST`: Address to bind (default: `0.0.0.0`)
//! - `ZOO_DATA_FILE`: JSON file mirroring the animal collection (default: `./data/animals.json`)
//!
//! # Invariants
//!
//! - `listen_port` is always a valid port number
//! - `data_file` is always a valid path (may not exist yet)

use std::net::IpAddr;
use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind the listener to.
    pub listen_host: IpAddr,
    /// Port to listen on for HTTP requests.
    pub listen_port: u16,
    /// Backing file for the animal collection.
    /// Rewritten in full on every successful insert.
    pub data_file: PathBuf,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 3001;
    /// Default bind address.
    pub const DEFAULT_LISTEN_HOST: &'static str = "0.0.0.0";
    /// Default backing file.
    pub const DEFAULT_DATA_FILE: &'static str = "./data/animals.json";

    const PORT_VAR: &'static str = "PORT";
    const LISTEN_HOST_VAR: &'static str = "ZOO_LISTEN_HOST";
    const DATA_FILE_VAR: &'static str = "ZOO_DATA_FILE";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `PORT` is set but not a valid port number
    /// - `ZOO_LISTEN_HOST` is set but not an IP address
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let listen_port = match lookup(Self::PORT_VAR) {
            Some(value) => parse_port(&value)?,
            None => Self::DEFAULT_PORT,
        };

        let listen_host = lookup(Self::LISTEN_HOST_VAR)
            .unwrap_or_else(|| Self::DEFAULT_LISTEN_HOST.to_string());
        let listen_host = listen_host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                name: Self::LISTEN_HOST_VAR.to_string(),
                message: format!("'{listen_host}' is not a valid IP address"),
            })?;

        let data_file = lookup(Self::DATA_FILE_VAR)
            .map_or_else(|| PathBuf::from(Self::DEFAULT_DATA_FILE), PathBuf::from);

        Ok(Self {
            listen_host,
            listen_port,
            data_file,
        })
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
        name: ServerConfig::PORT_VAR.to_string(),
        message: format!("'{value}' is not a valid port number (must be 0-65535)"),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::Ipv4Addr;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]).unwrap();
        assert_eq!(config.listen_port, 3001);
        assert_eq!(config.listen_host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.data_file, PathBuf::from("./data/animals.json"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("ZOO_LISTEN_HOST", "127.0.0.1"),
            ("ZOO_DATA_FILE", "/tmp/zoo.json"),
        ])
        .unwrap();
        assert_eq!(config.listen_port, 8080);
        assert_eq!(config.listen_host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.data_file, PathBuf::from("/tmp/zoo.json"));
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = load(&[("PORT", ""), ("ZOO_DATA_FILE", "")]).unwrap();
        assert_eq!(config.listen_port, ServerConfig::DEFAULT_PORT);
        assert_eq!(config.data_file, PathBuf::from(ServerConfig::DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_invalid_port() {
        let error = load(&[("PORT", "seventy")]).unwrap_err();
        assert_eq!(
            error.to_string(),
            "invalid value for PORT: 'seventy' is not a valid port number (must be 0-65535)"
        );
        assert!(load(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_invalid_host() {
        let error = load(&[("ZOO_LISTEN_HOST", "localhost")]).unwrap_err();
        assert!(matches!(error, ConfigError::InvalidValue { ref name, .. } if name == "ZOO_LISTEN_HOST"));
    }
}
