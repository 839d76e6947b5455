//! Multi-provider search aggregation.
//!
//! The transport layer hands in, per provider, either a parsed response body
//! or the error its call produced. Aggregation never aborts on a single
//! provider: failures are attributed and collected, surviving offers get
//! their booking links attached, and an empty offer list with no failures is
//! a successful (if disappointing) search.

use chrono::{DateTime, Utc};
use serde::Serialize;
use wingfinder_core::{Offer, Provider, SearchContext};
use wingfinder_deeplink::{attach_booking_links, DeeplinkRegistry};

use crate::error::ProviderError;
use crate::normalize::{normalize_tequila_batch, normalize_travelpayouts};
use crate::types::{TequilaItinerary, TravelpayoutsPricesResponse};

/// One provider's successfully fetched raw payload, tagged by shape.
/// New providers add a variant here and a normalizer arm below.
#[derive(Debug)]
pub enum ProviderResponse {
    Travelpayouts(TravelpayoutsPricesResponse),
    Tequila(Vec<TequilaItinerary>),
}

impl ProviderResponse {
    #[must_use]
    pub fn provider(&self) -> Provider {
        match self {
            ProviderResponse::Travelpayouts(_) => Provider::Travelpayouts,
            ProviderResponse::Tequila(_) => Provider::Tequila,
        }
    }
}

/// A failure attributed to one provider, in wire-ready form.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderFailure {
    pub provider: Provider,
    pub code: &'static str,
    pub message: String,
}

impl ProviderFailure {
    #[must_use]
    pub fn new(provider: Provider, error: &ProviderError) -> Self {
        Self {
            provider,
            code: error.code(),
            message: error.to_string(),
        }
    }
}

/// Result of aggregating every queried provider.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    /// Offers in provider response order, then normalizer-internal order,
    /// each with `booking_links` fully populated.
    pub offers: Vec<Offer>,
    pub failures: Vec<ProviderFailure>,
    pub providers_queried: usize,
}

impl SearchOutcome {
    /// True when every queried provider failed at the transport level — the
    /// only condition under which callers report a blanket search failure.
    #[must_use]
    pub fn all_providers_failed(&self) -> bool {
        self.providers_queried > 0 && self.failures.len() == self.providers_queried
    }
}

/// Normalizes every supplied provider response and attaches booking links to
/// each surviving offer.
///
/// Per-record normalization failures are skipped inside the normalizers;
/// per-provider transport/configuration failures arrive as the `Err` arm of
/// the input and are collected into `failures`.
#[must_use]
pub fn search_offers(
    responses: Vec<(Provider, Result<ProviderResponse, ProviderError>)>,
    ctx: &SearchContext,
    registry: &DeeplinkRegistry,
    now: DateTime<Utc>,
) -> SearchOutcome {
    let providers_queried = responses.len();
    let mut offers = Vec::new();
    let mut failures = Vec::new();

    for (provider, result) in responses {
        match result {
            Ok(response) => {
                let normalized = match response {
                    ProviderResponse::Travelpayouts(body) => {
                        normalize_travelpayouts(&body, ctx, now)
                    }
                    ProviderResponse::Tequila(itineraries) => {
                        normalize_tequila_batch(itineraries, ctx, now)
                    }
                };
                tracing::debug!(
                    provider = %provider,
                    count = normalized.len(),
                    "normalized provider response"
                );
                offers.extend(
                    normalized
                        .into_iter()
                        .map(|offer| attach_booking_links(registry, offer, ctx.adults)),
                );
            }
            Err(error) => {
                tracing::warn!(provider = %provider, error = %error, "provider search failed");
                failures.push(ProviderFailure::new(provider, &error));
            }
        }
    }

    SearchOutcome {
        offers,
        failures,
        providers_queried,
    }
}
