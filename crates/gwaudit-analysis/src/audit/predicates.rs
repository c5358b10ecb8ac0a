//! Predicate bodies for the builtin catalog.
//!
//! Every function here is pure and total. Parameterized families
//! (`timeout_exceeds`, `deprecated_*`) return closures so the traversal
//! lives in one place and only the compared value changes per rule.

use crate::service::namespaces::*;
use crate::service::{Service, TlsState};

const WRITE_METHODS: &[&str] = &["POST", "PUT", "PATCH", "DELETE"];
const CATCH_ALL_PATH: &str = "/__catchall";
const NO_OP_ENCODING: &str = "no-op";
const SEQUENTIAL_START_AGENT_LIMIT: usize = 10;

// ---- Section 1: auth ----

pub fn has_basic_auth(s: &Service) -> bool {
    s.declares(AUTH_BASIC)
}

pub fn has_api_keys(s: &Service) -> bool {
    s.declares(AUTH_API_KEYS)
}

pub fn has_no_jwt(s: &Service) -> bool {
    !s.endpoints.iter().any(|e| e.components.has(AUTH_VALIDATOR))
}

// ---- Section 2: service transport & headers ----

pub fn has_insecure_connections(s: &Service) -> bool {
    s.allow_insecure_connections
}

pub fn has_no_tls(s: &Service) -> bool {
    s.tls == TlsState::Absent
}

pub fn has_tls_disabled(s: &Service) -> bool {
    s.tls == TlsState::Disabled
}

pub fn has_no_http_secure(s: &Service) -> bool {
    !s.components.has(SECURITY_HTTP)
}

pub fn has_h2c(s: &Service) -> bool {
    s.use_h2c
}

pub fn has_backend_insecure_connections(s: &Service) -> bool {
    s.backend_insecure_connections
}

pub fn has_no_obfuscated_version_header(s: &Service) -> bool {
    !s.components.flag(ROUTER, "hide_version_header")
}

pub fn has_no_cors(s: &Service) -> bool {
    !s.components.has(SECURITY_CORS)
}

pub fn has_headers_wildcard(s: &Service) -> bool {
    s.endpoints.iter().any(|e| e.headers_wildcard)
}

pub fn has_query_string_wildcard(s: &Service) -> bool {
    s.endpoints.iter().any(|e| e.query_strings_wildcard)
}

/// A `grpc.server` block that declares no services.
pub fn has_empty_grpc_server(s: &Service) -> bool {
    let Some(server) = s.components.get(GRPC).and_then(|g| g.get("server")) else {
        return false;
    };
    server
        .get("services")
        .and_then(|v| v.as_array())
        .map_or(true, |services| services.is_empty())
}

// ---- Section 3: traffic management ----

pub fn has_bot_detector_disabled(s: &Service) -> bool {
    !s.declares(SECURITY_BOT_DETECTOR)
}

pub fn has_no_ratelimit(s: &Service) -> bool {
    !s.declares(RATELIMIT_ROUTER) && !s.backends().any(|b| b.components.has(RATELIMIT_PROXY))
}

pub fn has_no_circuit_breaker(s: &Service) -> bool {
    !s.backends().any(|b| b.components.has(CIRCUIT_BREAKER))
}

/// Fires when any effective endpoint timeout (or the service timeout,
/// when there are no endpoints) is strictly greater than `threshold_ms`.
pub fn timeout_exceeds(threshold_ms: u64) -> impl Fn(&Service) -> bool + Send + Sync {
    move |s| s.timeouts_ms().any(|t| t > threshold_ms)
}

// ---- Section 4: telemetry ----

pub fn has_no_metrics(s: &Service) -> bool {
    !s.components.has_any(METRICS_COMPONENTS)
}

pub fn has_telemetry_missing_name(s: &Service) -> bool {
    s.name.is_none()
}

pub fn has_several_telemetry_components(s: &Service) -> bool {
    METRICS_COMPONENTS
        .iter()
        .filter(|ns| s.components.has(ns))
        .count()
        > 1
}

pub fn has_no_tracing(s: &Service) -> bool {
    !s.components.has_any(TRACING_COMPONENTS)
}

pub fn has_no_logging(s: &Service) -> bool {
    !s.components.has(TELEMETRY_LOGGING)
}

// ---- Section 5: endpoints ----

pub fn has_restful_disabled(s: &Service) -> bool {
    s.disable_rest
}

pub fn has_debug_enabled(s: &Service) -> bool {
    s.debug_endpoint
}

pub fn has_echo_enabled(s: &Service) -> bool {
    s.echo_endpoint
}

pub fn has_endpoint_wildcard(s: &Service) -> bool {
    s.endpoints.iter().any(|e| e.path.contains('*'))
}

pub fn has_endpoint_catch_all(s: &Service) -> bool {
    s.endpoints.iter().any(|e| e.path == CATCH_ALL_PATH)
}

/// An endpoint fanning out to more than one backend with a write method.
pub fn has_multiple_unsafe_methods(s: &Service) -> bool {
    s.endpoints.iter().any(|e| {
        e.backends
            .iter()
            .filter(|b| WRITE_METHODS.contains(&b.method.as_str()))
            .count()
            > 1
    })
}

pub fn has_sequential_proxy(s: &Service) -> bool {
    s.endpoints.iter().any(|e| e.components.flag(PROXY, "sequential"))
}

pub fn has_endpoint_without_backends(s: &Service) -> bool {
    s.endpoints.iter().any(|e| e.backends.is_empty())
}

pub fn has_a_single_backend_per_endpoint(s: &Service) -> bool {
    !s.endpoints.is_empty() && s.endpoints.iter().all(|e| e.backends.len() == 1)
}

pub fn has_all_endpoints_as_noop(s: &Service) -> bool {
    !s.endpoints.is_empty()
        && s
            .endpoints
            .iter()
            .all(|e| e.output_encoding.as_deref() == Some(NO_OP_ENCODING))
}

// ---- Section 6: async agents ----

pub fn has_sequential_start(s: &Service) -> bool {
    s.sequential_start && s.agents.len() > SEQUENTIAL_START_AGENT_LIMIT
}

// ---- Section 7: deprecations ----

pub fn deprecated_server_plugin(name: &'static str) -> impl Fn(&Service) -> bool + Send + Sync {
    move |s| s.server_plugins.iter().any(|p| p == name)
}

pub fn deprecated_client_plugin(name: &'static str) -> impl Fn(&Service) -> bool + Send + Sync {
    move |s| s.backends().any(|b| b.client_plugins.iter().any(|p| p == name))
}

pub fn deprecated_component(namespace: &'static str) -> impl Fn(&Service) -> bool + Send + Sync {
    move |s| s.components.has(namespace)
}
