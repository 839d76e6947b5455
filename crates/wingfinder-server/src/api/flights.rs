//! Flight search and reprice endpoints.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use wingfinder_core::{CabinClass, Offer, Provider, SearchContext, VALID_UNTIL_HORIZON_HOURS};
use wingfinder_deeplink::{attach_booking_links, best_booking_link};
use wingfinder_providers::{
    search_offers, ProviderError, ProviderFailure, ProviderResponse, SearchOutcome,
};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct SearchQuery {
    from: String,
    to: String,
    date: String,
    #[serde(rename = "class")]
    cabin_class: Option<String>,
    adults: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct SearchData {
    offers: Vec<Offer>,
    failures: Vec<ProviderFailure>,
    search_params: SearchContext,
    total_found: usize,
}

/// GET /api/v1/flights/search — fan out to every known provider, aggregate
/// offers, and report per-provider failures alongside whatever offers
/// survived. Only a full transport wipeout becomes an error response.
pub(in crate::api) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchData>>, ApiError> {
    if let Err(reason) = validate_search_query(&query) {
        return Err(ApiError::new(req_id.0, "bad_request", reason));
    }

    let ctx = SearchContext::new(query.from.trim(), query.to.trim(), query.date.trim())
        .with_cabin_class(
            query
                .cabin_class
                .as_deref()
                .map_or(CabinClass::Economy, CabinClass::from_request),
        )
        .with_adults(query.adults.unwrap_or(1));

    tracing::info!(
        from = %ctx.origin,
        to = %ctx.destination,
        date = %ctx.depart_date,
        adults = ctx.adults,
        "flight search"
    );

    let responses = fetch_provider_responses(&state, &ctx).await;
    let outcome = search_offers(responses, &ctx, &state.registry, Utc::now());

    if outcome.all_providers_failed() {
        let failure = &outcome.failures[0];
        return Err(ApiError::new(
            req_id.0,
            blanket_code(failure.code),
            failure.message.clone(),
        ));
    }

    let total_found = outcome.offers.len();
    let SearchOutcome {
        offers, failures, ..
    } = outcome;

    Ok(Json(ApiResponse {
        data: SearchData {
            offers,
            failures,
            search_params: ctx,
            total_found,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

/// Collects one `(provider, result)` pair for every known provider, so a
/// caller can always tell from `failures` why a provider contributed no
/// offers. Travelpayouts is the only upstream with a wired client today;
/// the rest report `missing_credential` until a key is configured, then
/// `unsupported_provider` until their transport lands. A missing credential
/// is an attributed failure, never silently skipped and never replaced with
/// fabricated offers.
async fn fetch_provider_responses(
    state: &AppState,
    ctx: &SearchContext,
) -> Vec<(Provider, Result<ProviderResponse, ProviderError>)> {
    let travelpayouts = match state.travelpayouts_client() {
        None => Err(ProviderError::MissingCredential {
            provider: Provider::Travelpayouts,
        }),
        Some(Err(e)) => Err(e),
        Some(Ok(client)) => client
            .cheap_prices(ctx)
            .await
            .map(ProviderResponse::Travelpayouts),
    };

    let credentials = &state.config.credentials;
    let mut responses = vec![(Provider::Travelpayouts, travelpayouts)];
    for (provider, credential) in [
        (Provider::Tequila, &credentials.tequila_api_key),
        (Provider::Duffel, &credentials.duffel_api_key),
        (Provider::Amadeus, &credentials.amadeus_api_key),
    ] {
        let error = if credential.is_none() {
            ProviderError::MissingCredential { provider }
        } else {
            ProviderError::Unsupported { provider }
        };
        responses.push((provider, Err(error)));
    }
    responses
}

#[derive(Debug, Deserialize)]
pub(in crate::api) struct RepriceRequest {
    offer: Offer,
    adults: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(in crate::api) struct RepriceData {
    id: String,
    status: &'static str,
    current_price: f64,
    currency: String,
    valid_until: String,
    /// Best single outbound link: direct carrier deeplink when the airline
    /// is known, else the primary OTA.
    deeplink_url: Option<String>,
    offer: Offer,
}

/// POST /api/v1/flights/reprice — refresh validity and booking links for an
/// offer the client already holds. The engine keeps no offer store, so the
/// caller resubmits the offer rather than an id.
pub(in crate::api) async fn reprice(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<RepriceRequest>,
) -> Result<Json<ApiResponse<RepriceData>>, ApiError> {
    if let Err(reason) = validate_offer(&request.offer) {
        return Err(ApiError::new(req_id.0, "validation_error", reason));
    }

    let adults = request.adults.unwrap_or(1).max(1);
    let mut offer = request.offer;
    offer.valid_until = (Utc::now() + Duration::hours(VALID_UNTIL_HORIZON_HOURS))
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string();

    let offer = attach_booking_links(&state.registry, offer, adults);
    let deeplink_url = best_booking_link(&state.registry, &offer).map(str::to_owned);

    tracing::info!(id = %offer.id, "repriced offer");

    Ok(Json(ApiResponse {
        data: RepriceData {
            id: offer.id.clone(),
            status: "available",
            current_price: offer.price,
            currency: offer.currency.clone(),
            valid_until: offer.valid_until.clone(),
            deeplink_url,
            offer,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn validate_search_query(query: &SearchQuery) -> Result<(), String> {
    if query.from.trim().is_empty() {
        return Err("missing required parameter: from".to_owned());
    }
    if query.to.trim().is_empty() {
        return Err("missing required parameter: to".to_owned());
    }
    if query.date.trim().is_empty() {
        return Err("missing required parameter: date".to_owned());
    }
    Ok(())
}

fn validate_offer(offer: &Offer) -> Result<(), String> {
    if offer.origin.trim().is_empty() || offer.destination.trim().is_empty() {
        return Err("offer is missing origin or destination".to_owned());
    }
    if offer.price <= 0.0 {
        return Err("offer price must be positive".to_owned());
    }
    if !offer.route_is_bracketed() {
        return Err("offer route must start at origin and end at destination".to_owned());
    }
    Ok(())
}

/// Maps a per-provider failure code onto the response code used when every
/// provider failed. Unauthorized and rate-limit conditions pass through with
/// their own statuses; anything else is a bad gateway.
fn blanket_code(code: &'static str) -> &'static str {
    match code {
        "unauthorized" | "rate_limited" | "missing_credential" => code,
        _ => "upstream_failed",
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use wingfinder_core::{AppConfig, Environment, ProviderCredentials};
    use wingfinder_deeplink::DeeplinkRegistry;

    use super::*;

    fn make_state(credentials: ProviderCredentials) -> AppState {
        AppState {
            config: Arc::new(AppConfig {
                env: Environment::Test,
                bind_addr: "127.0.0.1:0".parse().unwrap(),
                log_level: "info".to_owned(),
                credentials,
                upstream_timeout_secs: 5,
                upstream_user_agent: "wingfinder-test".to_owned(),
                rate_limit_max_requests: 60,
                rate_limit_window_secs: 60,
            }),
            registry: Arc::new(DeeplinkRegistry::builtin()),
        }
    }

    fn make_query() -> SearchQuery {
        SearchQuery {
            from: "NRT".to_owned(),
            to: "PRG".to_owned(),
            date: "2025-08-26".to_owned(),
            cabin_class: None,
            adults: None,
        }
    }

    fn make_offer() -> Offer {
        Offer {
            id: "teq_NRT_PRG_Turkish-Airlines_TK-198".to_owned(),
            origin: "NRT".to_owned(),
            destination: "PRG".to_owned(),
            price: 312.0,
            currency: "USD".to_owned(),
            departure_time: "2025-08-26T14:30:00Z".to_owned(),
            arrival_time: "2025-08-27T08:15:00Z".to_owned(),
            duration_minutes: 1065,
            airline: "Turkish Airlines".to_owned(),
            flight_number: "TK 198".to_owned(),
            aircraft: "Boeing 787-9".to_owned(),
            cabin_class: CabinClass::Economy,
            stops: 1,
            route: vec!["NRT".to_owned(), "IST".to_owned(), "PRG".to_owned()],
            booking_links: BTreeMap::new(),
            provider: Provider::Tequila,
            valid_until: "2025-08-26T12:00:00Z".to_owned(),
        }
    }

    #[test]
    fn search_query_requires_endpoints_and_date() {
        assert!(validate_search_query(&make_query()).is_ok());

        let mut query = make_query();
        query.from = "  ".to_owned();
        assert!(validate_search_query(&query).is_err());

        let mut query = make_query();
        query.date = String::new();
        assert!(validate_search_query(&query).is_err());
    }

    #[test]
    fn reprice_rejects_non_positive_price() {
        let mut offer = make_offer();
        offer.price = 0.0;
        assert!(validate_offer(&offer).is_err());
    }

    #[test]
    fn reprice_rejects_broken_route() {
        let mut offer = make_offer();
        offer.route = vec!["KIX".to_owned(), "PRG".to_owned()];
        assert!(validate_offer(&offer).is_err());
    }

    #[tokio::test]
    async fn fan_out_reports_every_known_provider() {
        let state = make_state(ProviderCredentials::default());
        let ctx = SearchContext::new("NRT", "PRG", "2025-08-26");

        let responses = fetch_provider_responses(&state, &ctx).await;

        let providers: Vec<Provider> = responses.iter().map(|(provider, _)| *provider).collect();
        assert_eq!(
            providers,
            vec![
                Provider::Travelpayouts,
                Provider::Tequila,
                Provider::Duffel,
                Provider::Amadeus,
            ]
        );
        for (provider, result) in &responses {
            assert!(
                matches!(result, Err(ProviderError::MissingCredential { provider: p }) if p == provider),
                "{provider} without a key must report a missing credential"
            );
        }
    }

    #[tokio::test]
    async fn fan_out_flags_configured_provider_without_transport() {
        let state = make_state(ProviderCredentials {
            tequila_api_key: Some("tequila-key".to_owned()),
            ..ProviderCredentials::default()
        });
        let ctx = SearchContext::new("NRT", "PRG", "2025-08-26");

        let responses = fetch_provider_responses(&state, &ctx).await;

        let tequila = responses
            .iter()
            .find(|(provider, _)| *provider == Provider::Tequila)
            .map(|(_, result)| result)
            .unwrap();
        assert!(matches!(
            tequila,
            Err(ProviderError::Unsupported {
                provider: Provider::Tequila
            })
        ));
    }

    #[test]
    fn blanket_code_passes_credential_and_quota_conditions_through() {
        assert_eq!(blanket_code("unauthorized"), "unauthorized");
        assert_eq!(blanket_code("rate_limited"), "rate_limited");
        assert_eq!(blanket_code("missing_credential"), "missing_credential");
        assert_eq!(blanket_code("http_error"), "upstream_failed");
        assert_eq!(blanket_code("invalid_body"), "upstream_failed");
    }
}
