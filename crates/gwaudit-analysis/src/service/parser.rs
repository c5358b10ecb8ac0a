//! Projection from the raw gateway file into the service model.
//!
//! The projection is total: values that cannot be interpreted (a malformed
//! duration, a plugin name that is not a string) are treated as absent.

use serde_json::Value;

use super::duration::parse_duration_ms;
use super::model::{Agent, Backend, Components, Endpoint, Service, TlsState};
use super::namespaces::{PLUGIN_HTTP_CLIENT, PLUGIN_HTTP_SERVER};
use super::raw::{BackendConfig, EndpointConfig, ExtraConfig, ServiceConfig};

/// Builds the service model for one audit.
pub fn parse(config: &ServiceConfig) -> Service {
    let components = Components::new(config.extra_config.clone());
    let server_plugins = plugin_names(&config.extra_config, PLUGIN_HTTP_SERVER);

    Service {
        name: config.name.clone().filter(|n| !n.trim().is_empty()),
        timeout_ms: config.timeout.as_deref().and_then(parse_duration_ms),
        tls: match &config.tls {
            None => TlsState::Absent,
            Some(tls) if tls.disabled => TlsState::Disabled,
            Some(_) => TlsState::Enabled,
        },
        allow_insecure_connections: config.allow_insecure_connections,
        backend_insecure_connections: config
            .client_tls
            .as_ref()
            .is_some_and(|c| c.allow_insecure_connections),
        use_h2c: config.use_h2c,
        debug_endpoint: config.debug_endpoint,
        echo_endpoint: config.echo_endpoint,
        disable_rest: config.disable_rest,
        sequential_start: config.sequential_start,
        components,
        server_plugins,
        endpoints: config.endpoints.iter().map(parse_endpoint).collect(),
        agents: config
            .async_agent
            .iter()
            .map(|a| Agent {
                name: a.name.clone(),
                components: Components::new(a.extra_config.clone()),
                backends: a.backend.iter().map(|b| parse_backend(b, "GET")).collect(),
            })
            .collect(),
    }
}

fn parse_endpoint(endpoint: &EndpointConfig) -> Endpoint {
    let method = normalize_method(endpoint.method.as_deref()).unwrap_or_else(|| "GET".to_string());
    Endpoint {
        path: endpoint.endpoint.clone(),
        timeout_ms: endpoint.timeout.as_deref().and_then(parse_duration_ms),
        output_encoding: endpoint.output_encoding.clone(),
        headers_wildcard: endpoint.input_headers.iter().any(|h| h == "*"),
        query_strings_wildcard: endpoint.input_query_strings.iter().any(|q| q == "*"),
        components: Components::new(endpoint.extra_config.clone()),
        backends: endpoint
            .backend
            .iter()
            .map(|b| parse_backend(b, &method))
            .collect(),
        method,
    }
}

fn parse_backend(backend: &BackendConfig, inherited_method: &str) -> Backend {
    Backend {
        method: normalize_method(backend.method.as_deref())
            .unwrap_or_else(|| inherited_method.to_string()),
        encoding: backend.encoding.clone(),
        components: Components::new(backend.extra_config.clone()),
        client_plugins: plugin_names(&backend.extra_config, PLUGIN_HTTP_CLIENT),
    }
}

fn normalize_method(method: Option<&str>) -> Option<String> {
    method
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_ascii_uppercase)
}

/// Reads `extra_config[namespace].name`, which may be a single string or
/// a list of strings.
fn plugin_names(extra: &ExtraConfig, namespace: &str) -> Vec<String> {
    match extra.get(namespace).and_then(|v| v.get("name")) {
        Some(Value::String(name)) => vec![name.clone()],
        Some(Value::Array(names)) => names
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
