use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Upstream provider credentials. Every field is optional: a provider without
/// credentials is a legal configuration and surfaces as a per-provider
/// `MissingCredential` failure at search time, never as fabricated offers.
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    pub travelpayouts_api_key: Option<String>,
    pub travelpayouts_marker: Option<String>,
    pub tequila_api_key: Option<String>,
    pub duffel_api_key: Option<String>,
    pub amadeus_api_key: Option<String>,
    pub amadeus_api_secret: Option<String>,
}

impl ProviderCredentials {
    /// Number of providers with at least a primary credential set; reported
    /// by the health endpoint.
    #[must_use]
    pub fn configured_count(&self) -> usize {
        [
            &self.travelpayouts_api_key,
            &self.tequila_api_key,
            &self.duffel_api_key,
            &self.amadeus_api_key,
        ]
        .iter()
        .filter(|k| k.is_some())
        .count()
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "[redacted]");
        f.debug_struct("ProviderCredentials")
            .field("travelpayouts_api_key", &redact(&self.travelpayouts_api_key))
            .field("travelpayouts_marker", &redact(&self.travelpayouts_marker))
            .field("tequila_api_key", &redact(&self.tequila_api_key))
            .field("duffel_api_key", &redact(&self.duffel_api_key))
            .field("amadeus_api_key", &redact(&self.amadeus_api_key))
            .field("amadeus_api_secret", &redact(&self.amadeus_api_secret))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub credentials: ProviderCredentials,
    pub upstream_timeout_secs: u64,
    pub upstream_user_agent: String,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}
