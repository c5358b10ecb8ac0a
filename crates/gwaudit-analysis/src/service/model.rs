//! Normalized service model read by the rule predicates.

use std::collections::BTreeMap;

use serde_json::Value;

/// State of the listener TLS block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TlsState {
    /// No `tls` block at all.
    #[default]
    Absent,
    /// A `tls` block with `disabled: true`.
    Disabled,
    Enabled,
}

/// Namespaced component settings attached to a service, endpoint,
/// backend, or agent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Components(BTreeMap<String, Value>);

impl Components {
    pub fn new(entries: BTreeMap<String, Value>) -> Self {
        Self(entries)
    }

    pub fn has(&self, namespace: &str) -> bool {
        self.0.contains_key(namespace)
    }

    pub fn has_any(&self, namespaces: &[&str]) -> bool {
        namespaces.iter().any(|ns| self.has(ns))
    }

    pub fn get(&self, namespace: &str) -> Option<&Value> {
        self.0.get(namespace)
    }

    /// `true` only when `namespace.key` is the JSON boolean `true`.
    pub fn flag(&self, namespace: &str, key: &str) -> bool {
        self.get(namespace)
            .and_then(|v| v.get(key))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Backend {
    /// Upper-cased HTTP method; inherits the endpoint method when unset.
    pub method: String,
    pub encoding: Option<String>,
    pub components: Components,
    /// Names registered under `plugin/http-client`.
    pub client_plugins: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Endpoint {
    pub path: String,
    /// Upper-cased HTTP method, `GET` when unset.
    pub method: String,
    pub timeout_ms: Option<u64>,
    pub output_encoding: Option<String>,
    pub headers_wildcard: bool,
    pub query_strings_wildcard: bool,
    pub components: Components,
    pub backends: Vec<Backend>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Agent {
    pub name: String,
    pub components: Components,
    pub backends: Vec<Backend>,
}

/// The predicate-facing view of one gateway configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Service {
    pub name: Option<String>,
    pub timeout_ms: Option<u64>,
    pub tls: TlsState,
    pub allow_insecure_connections: bool,
    /// `client_tls.allow_insecure_connections`.
    pub backend_insecure_connections: bool,
    pub use_h2c: bool,
    pub debug_endpoint: bool,
    pub echo_endpoint: bool,
    pub disable_rest: bool,
    pub sequential_start: bool,
    pub components: Components,
    /// Names registered under `plugin/http-server`.
    pub server_plugins: Vec<String>,
    pub endpoints: Vec<Endpoint>,
    pub agents: Vec<Agent>,
}

impl Service {
    /// Every backend, endpoint backends first, then async agent backends.
    pub fn backends(&self) -> impl Iterator<Item = &Backend> {
        self.endpoints
            .iter()
            .flat_map(|e| e.backends.iter())
            .chain(self.agents.iter().flat_map(|a| a.backends.iter()))
    }

    /// `true` when the service or any endpoint declares `namespace`.
    pub fn declares(&self, namespace: &str) -> bool {
        self.components.has(namespace)
            || self.endpoints.iter().any(|e| e.components.has(namespace))
    }

    /// The timeout each endpoint runs with: its own, else the service
    /// default. Without endpoints, only the service timeout.
    pub fn timeouts_ms(&self) -> impl Iterator<Item = u64> + '_ {
        let service = self.timeout_ms;
        let standalone = if self.endpoints.is_empty() { service } else { None };
        standalone
            .into_iter()
            .chain(self.endpoints.iter().filter_map(move |e| e.timeout_ms.or(service)))
    }
}
