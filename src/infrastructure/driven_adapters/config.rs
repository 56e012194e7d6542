//! Application Configuration
//!
//! Loads configuration from files and environment variables.

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer};

use crate::domain::models::network;

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Network this node serves
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    /// Accepts a network name, `network-<id>` or a numeric ID
    #[serde(deserialize_with = "deserialize_network_id")]
    pub id: u32,
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub network: NetworkConfig,
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(true))
            // Merge environment-specific config if it exists
            .add_source(File::with_name(&format!("config/{run_mode}")).required(false))
            // Override with environment variables (e.g., APP__NETWORK__ID=fuji)
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Load configuration from an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

/// Network IDs arrive as integers from TOML and as text from the environment
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNetworkId {
    Numeric(u32),
    Text(String),
}

fn deserialize_network_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNetworkId::deserialize(deserializer)? {
        RawNetworkId::Numeric(id) => Ok(id),
        RawNetworkId::Text(text) => network::network_id(&text).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_network(value: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_toml_str(&format!(
            r#"
[server]
host = "127.0.0.1"
port = 9650

[network]
id = {value}
"#
        ))
    }

    #[test]
    fn test_network_given_by_name() {
        let config = config_with_network(r#""Fuji""#).unwrap();
        assert_eq!(config.network.id, 5);
        assert_eq!(config.server.port, 9650);
    }

    #[test]
    fn test_network_given_by_number() {
        assert_eq!(config_with_network("12345").unwrap().network.id, 12345);
        assert_eq!(config_with_network(r#""1337""#).unwrap().network.id, 1337);
    }

    #[test]
    fn test_network_given_by_synthesized_name() {
        assert_eq!(config_with_network(r#""network-99""#).unwrap().network.id, 99);
    }

    #[test]
    fn test_unparsable_network_is_rejected() {
        let err = config_with_network(r#""avax""#).unwrap_err();
        assert!(err.to_string().contains("failed to parse network name"));

        assert!(config_with_network("4294967296").is_err());
    }
}
