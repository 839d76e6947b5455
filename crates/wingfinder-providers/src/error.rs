use thiserror::Error;
use wingfinder_core::Provider;

/// Errors attributed to a single upstream provider.
///
/// None of these abort a multi-provider search: transport and configuration
/// failures are collected per provider, and `Normalization` failures drop the
/// single offending record (the batch degrades to "fewer offers found").
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider's credential is absent from the process configuration.
    /// Other providers are unaffected.
    #[error("{provider} credential not configured")]
    MissingCredential { provider: Provider },

    /// The provider has a credential configured but no live transport yet.
    /// Surfaced so a configured key is never silently ignored.
    #[error("no live transport for {provider}")]
    Unsupported { provider: Provider },

    /// Upstream rejected our credential (HTTP 401).
    #[error("{provider} rejected the configured API key")]
    Unauthorized { provider: Provider },

    /// Upstream rate limit hit (HTTP 429).
    #[error("rate limited by {provider}")]
    RateLimited { provider: Provider },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// A single raw record lacked the fields required for a minimally valid
    /// offer. The record is skipped, not propagated as fatal.
    #[error("normalization error for record {id}: {reason}")]
    Normalization { id: String, reason: String },
}

impl ProviderError {
    /// Stable machine-readable code surfaced in API failure reports.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            ProviderError::MissingCredential { .. } => "missing_credential",
            ProviderError::Unsupported { .. } => "unsupported_provider",
            ProviderError::Unauthorized { .. } => "unauthorized",
            ProviderError::RateLimited { .. } => "rate_limited",
            ProviderError::Http(_) => "http_error",
            ProviderError::UnexpectedStatus { .. } => "unexpected_status",
            ProviderError::InvalidBaseUrl { .. } => "invalid_base_url",
            ProviderError::Deserialize { .. } => "invalid_body",
            ProviderError::Normalization { .. } => "normalization_failed",
        }
    }
}
