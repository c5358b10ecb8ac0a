//! The builtin rule catalog.
//!
//! Declaration order is output order. Sections:
//! 1 security/auth, 2 service transport & headers, 3 traffic management,
//! 4 telemetry, 5 endpoints, 6 async agents, 7 deprecations.

use std::sync::LazyLock;

use super::predicates::*;
use super::rule::Rule;
use super::types::Severity::{Critical, High, Low, Medium};
use crate::service::namespaces::{TELEMETRY_GANALYTICS, TELEMETRY_INSTANA, TELEMETRY_OPENCENSUS};

/// An ordered, read-only set of rules.
#[derive(Debug)]
pub struct Catalog {
    rules: Vec<Rule>,
}

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(builtin_rules()));

impl Catalog {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The process-wide builtin catalog, built on first use.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id() == id)
    }

    /// Rule ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(Rule::id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[rustfmt::skip]
fn builtin_rules() -> Vec<Rule> {
    vec![
        // 1: security
        Rule::new("1.1.1", High, "Implement more secure alternatives than Basic Auth to protect your data.", has_basic_auth),
        Rule::new("1.1.2", Medium, "Implement stateless authorization methods such as JWT to secure your endpoints as opposed to using API keys.", has_api_keys),
        Rule::new("1.2.1", High, "Prioritize using JWT for endpoint authorization to ensure security.", has_no_jwt),

        // 2: service level
        Rule::new("2.1.1", High, "Only allow secure connections (avoid insecure_connections).", has_insecure_connections),
        Rule::new("2.1.2", High, "Enable TLS or use a terminator in front of KrakenD.", has_no_tls),
        Rule::new("2.1.3", Critical, "TLS is configured but its disable flag prevents from using it.", has_tls_disabled),
        Rule::new("2.1.7", High, "Enable HTTP security header checks (security/http).", has_no_http_secure),
        Rule::new("2.1.8", High, "Avoid clear text communication (h2c).", has_h2c),
        Rule::new("2.1.9", Low, "Establish secure connections in internal traffic (avoid insecure_connections internally)", has_backend_insecure_connections),
        Rule::new("2.2.1", Medium, "Hide the version banner in runtime.", has_no_obfuscated_version_header),
        Rule::new("2.2.2", High, "Enable CORS.", has_no_cors),
        Rule::new("2.2.3", High, "Avoid passing all input headers to the backend.", has_headers_wildcard),
        Rule::new("2.2.4", High, "Avoid passing all input query strings to the backend.", has_query_string_wildcard),
        Rule::new("2.2.5", Low, "Avoid exposing gRPC server without services declared.", has_empty_grpc_server),

        // 3: traffic management
        Rule::new("3.1.1", Low, "Enable a bot detector.", has_bot_detector_disabled),
        Rule::new("3.1.2", High, "Implement a rate-limiting strategy and avoid having an All-You-Can-Eat API.", has_no_ratelimit),
        Rule::new("3.1.3", High, "Protect your backends with a circuit breaker.", has_no_circuit_breaker),
        Rule::new("3.3.1", Low, "Set timeouts to below 3 seconds for improved performance.", timeout_exceeds(3_000)),
        Rule::new("3.3.2", Medium, "Set timeouts to below 5 seconds for improved performance.", timeout_exceeds(5_000)),
        Rule::new("3.3.3", High, "Set timeouts to below 30 seconds for improved performance.", timeout_exceeds(30_000)),
        Rule::new("3.3.4", Critical, "Set timeouts to below 1 minute for improved performance.", timeout_exceeds(60_000)),

        // 4: telemetry
        Rule::new("4.1.1", Medium, "Implement a telemetry system for collecting metrics for monitoring and troubleshooting.", has_no_metrics),
        Rule::new("4.1.2", Medium, "Give your configuration a name for easy identification in metric tracking.", has_telemetry_missing_name),
        Rule::new("4.1.3", High, "Avoid duplicating telemetry options to prevent system overload.", has_several_telemetry_components),
        Rule::new("4.2.1", Medium, "Implement a telemetry system for tracing for monitoring and troubleshooting.", has_no_tracing),
        Rule::new("4.3.1", Medium, "Use the improved logging component for better log parsing.", has_no_logging),

        // 5: endpoints
        Rule::new("5.1.1", Low, "Follow a RESTful endpoint structure for improved readability and maintainability.", has_restful_disabled),
        Rule::new("5.1.2", Low, "Disable the /__debug/ endpoint for added security.", has_debug_enabled),
        Rule::new("5.1.3", Low, "Disable the /__echo/ endpoint for added security.", has_echo_enabled),
        Rule::new("5.1.4", Low, "Declare explicit endpoints instead of using wildcards.", has_endpoint_wildcard),
        Rule::new("5.1.5", Medium, "Declare explicit endpoints instead of using /__catchall.", has_endpoint_catch_all),
        Rule::new("5.1.6", Medium, "Avoid using multiple write methods in endpoint definitions.", has_multiple_unsafe_methods),
        Rule::new("5.1.7", Medium, "Avoid using sequential proxy.", has_sequential_proxy),
        Rule::new("5.2.1", Critical, "Ensure all endpoints have at least one backend for proper functionality.", has_endpoint_without_backends),
        Rule::new("5.2.2", Low, "Benefit from the backend for frontend pattern capabilities.", has_a_single_backend_per_endpoint),
        Rule::new("5.2.3", Low, "Avoid coupling clients by overusing no-op encoding.", has_all_endpoints_as_noop),

        // 6: async agents
        Rule::new("6.1.1", Low, "Ensure Async Agents do not start sequentially to avoid overloading the system (+10 agents).", has_sequential_start),

        // 7.1: deprecated plugins, server side then client side
        Rule::new("7.1.1", High, "Do not use deprecated plugin virtualhost. Please visit https://www.krakend.io/docs/enterprise/service-settings/virtual-hosts/#upgrading-from-the-old-plugin-before-v24 to upgrade to the new virtualhost.", deprecated_server_plugin("virtualhost")),
        Rule::new("7.1.2", High, "Do not use deprecated plugin static-filesystem. Please visit https://www.krakend.io/docs/enterprise/endpoints/serve-static-content/#upgrading-from-the-old-plugin-before-v24 to upgrade to the new static-filesystem.", deprecated_server_plugin("static-filesystem")),
        Rule::new("7.1.3", High, "Do not use deprecated plugin basic-auth. Please move your configuration to the namespace auth/basic to use the new component. See: https://www.krakend.io/docs/enterprise/authentication/basic-authentication/ .", deprecated_server_plugin("basic-auth")),
        Rule::new("7.1.4", High, "Do not use deprecated plugin wildcard. Please visit https://www.krakend.io/docs/enterprise/endpoints/wildcard/#upgrading-from-the-old-wildcard-plugin-before-v23 to upgrade to the new Wildcard.", deprecated_server_plugin("wildcard")),
        Rule::new("7.1.5", High, "Do not use deprecated plugin http-proxy. Please visit https://www.krakend.io/docs/enterprise/backends/http-proxy/#migration-from-old-plugin to upgrade to the new options.", deprecated_client_plugin("http-proxy")),
        Rule::new("7.1.6", High, "Do not use deprecated plugin static-filesystem. Please visit https://www.krakend.io/docs/enterprise/endpoints/serve-static-content/#upgrading-from-the-old-plugin-before-v24 to upgrade to the new static-filesystem.", deprecated_client_plugin("static-filesystem")),
        Rule::new("7.1.7", High, "Do not use deprecated plugin no-redirect. Please visit https://www.krakend.io/docs/enterprise/backends/client-redirect/#migration-from-old-plugin to upgrade to the new options.", deprecated_client_plugin("no-redirect")),

        // 7.2: deprecated components
        Rule::new("7.2.1", High, "Do not use deprecated component telemetry/ganalytics.", deprecated_component(TELEMETRY_GANALYTICS)),
        Rule::new("7.2.2", High, "Do not use deprecated component telemetry/instana.", deprecated_component(TELEMETRY_INSTANA)),
        Rule::new("7.2.3", High, "Do not use deprecated component telemetry/opencensus.", deprecated_component(TELEMETRY_OPENCENSUS)),
    ]
}
