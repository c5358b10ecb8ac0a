//! `extra_config` namespaces the predicates look for.

pub const AUTH_BASIC: &str = "auth/basic";
pub const AUTH_API_KEYS: &str = "auth/api-keys";
pub const AUTH_VALIDATOR: &str = "auth/validator";

pub const SECURITY_HTTP: &str = "security/http";
pub const SECURITY_CORS: &str = "security/cors";
pub const SECURITY_BOT_DETECTOR: &str = "security/bot-detector";

pub const ROUTER: &str = "router";
pub const GRPC: &str = "grpc";
pub const PROXY: &str = "proxy";

pub const RATELIMIT_ROUTER: &str = "qos/ratelimit/router";
pub const RATELIMIT_PROXY: &str = "qos/ratelimit/proxy";
pub const CIRCUIT_BREAKER: &str = "qos/circuit-breaker";

pub const TELEMETRY_METRICS: &str = "telemetry/metrics";
pub const TELEMETRY_OPENTELEMETRY: &str = "telemetry/opentelemetry";
pub const TELEMETRY_OPENCENSUS: &str = "telemetry/opencensus";
pub const TELEMETRY_NEWRELIC: &str = "telemetry/newrelic";
pub const TELEMETRY_INSTANA: &str = "telemetry/instana";
pub const TELEMETRY_GANALYTICS: &str = "telemetry/ganalytics";
pub const TELEMETRY_LOGGING: &str = "telemetry/logging";

pub const PLUGIN_HTTP_SERVER: &str = "plugin/http-server";
pub const PLUGIN_HTTP_CLIENT: &str = "plugin/http-client";

/// Components that export metrics.
pub const METRICS_COMPONENTS: &[&str] = &[
    TELEMETRY_METRICS,
    TELEMETRY_OPENTELEMETRY,
    TELEMETRY_OPENCENSUS,
    TELEMETRY_NEWRELIC,
];

/// Components that export traces.
pub const TRACING_COMPONENTS: &[&str] = &[
    TELEMETRY_OPENTELEMETRY,
    TELEMETRY_OPENCENSUS,
    TELEMETRY_NEWRELIC,
    TELEMETRY_INSTANA,
];
