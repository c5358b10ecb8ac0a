//! Raw gateway configuration, as written in the service file.
//!
//! Only the fields the audit reads are modelled; anything else in the
//! file is ignored on deserialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Namespaced component settings (`extra_config`).
pub type ExtraConfig = BTreeMap<String, serde_json::Value>;

/// Root of a gateway configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub version: u32,
    pub name: Option<String>,
    pub port: Option<u16>,
    /// Default timeout for every endpoint, as a duration string ("3s").
    pub timeout: Option<String>,
    pub tls: Option<TlsConfig>,
    pub client_tls: Option<ClientTlsConfig>,
    pub allow_insecure_connections: bool,
    pub use_h2c: bool,
    pub debug_endpoint: bool,
    pub echo_endpoint: bool,
    pub disable_rest: bool,
    pub sequential_start: bool,
    pub plugin: Option<PluginConfig>,
    pub extra_config: ExtraConfig,
    pub endpoints: Vec<EndpointConfig>,
    pub async_agent: Vec<AsyncAgentConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TlsConfig {
    pub disabled: bool,
    pub public_key: Option<String>,
    pub private_key: Option<String>,
    pub enable_mtls: bool,
    pub min_version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientTlsConfig {
    pub allow_insecure_connections: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub folder: Option<String>,
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    pub endpoint: String,
    pub method: Option<String>,
    pub timeout: Option<String>,
    pub output_encoding: Option<String>,
    pub input_headers: Vec<String>,
    pub input_query_strings: Vec<String>,
    pub extra_config: ExtraConfig,
    pub backend: Vec<BackendConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub url_pattern: String,
    pub host: Vec<String>,
    pub method: Option<String>,
    pub encoding: Option<String>,
    pub extra_config: ExtraConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AsyncAgentConfig {
    pub name: String,
    pub extra_config: ExtraConfig,
    pub backend: Vec<BackendConfig>,
}

impl ServiceConfig {
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn from_yaml_str(input: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(input)
    }

    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
