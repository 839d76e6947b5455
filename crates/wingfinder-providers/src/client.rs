//! HTTP client for the Travelpayouts flight-prices API.
//!
//! Wraps `reqwest` with typed deserialization and provider-attributed error
//! mapping: 401 becomes [`ProviderError::Unauthorized`] and 429 becomes
//! [`ProviderError::RateLimited`], so one provider's credential or quota
//! problem is reportable without touching the rest of a search.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use wingfinder_core::{Provider, SearchContext};

use crate::error::ProviderError;
use crate::types::TravelpayoutsPricesResponse;

const DEFAULT_BASE_URL: &str = "https://api.travelpayouts.com/";

/// Client for Travelpayouts `v1/prices/cheap`.
///
/// Use [`TravelpayoutsClient::new`] for production or
/// [`TravelpayoutsClient::with_base_url`] to point at a mock server in tests.
pub struct TravelpayoutsClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl TravelpayoutsClient {
    /// Creates a client pointed at the production Travelpayouts API.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ProviderError> {
        Self::with_base_url(token, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ProviderError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Ensure exactly one trailing slash so path joins land under the root.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ProviderError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
        })
    }

    /// Fetches one-way cheap fares for the requested route and date.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Unauthorized`] on HTTP 401.
    /// - [`ProviderError::RateLimited`] on HTTP 429.
    /// - [`ProviderError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`ProviderError::Http`] on network failure.
    /// - [`ProviderError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn cheap_prices(
        &self,
        ctx: &SearchContext,
    ) -> Result<TravelpayoutsPricesResponse, ProviderError> {
        let url = self.build_url(ctx);
        let response = self.client.get(url.clone()).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                return Err(ProviderError::Unauthorized {
                    provider: Provider::Travelpayouts,
                })
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(ProviderError::RateLimited {
                    provider: Provider::Travelpayouts,
                })
            }
            status if !status.is_success() => {
                return Err(ProviderError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: url.to_string(),
                })
            }
            _ => {}
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Deserialize {
            context: format!(
                "v1/prices/cheap({}-{})",
                ctx.origin, ctx.destination
            ),
            source: e,
        })
    }

    /// Builds the full request URL with percent-encoded query parameters.
    fn build_url(&self, ctx: &SearchContext) -> Url {
        let mut url = self.base_url.clone();
        url.set_path("v1/prices/cheap");
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("origin", &ctx.origin);
            pairs.append_pair("destination", &ctx.destination);
            pairs.append_pair("depart_date", &ctx.depart_date);
            pairs.append_pair("return_date", "");
            pairs.append_pair("adults", &ctx.adults.to_string());
            pairs.append_pair("children", "0");
            pairs.append_pair("infants", "0");
            pairs.append_pair("currency", "USD");
            pairs.append_pair("locale", "en");
            pairs.append_pair("token", &self.token);
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
