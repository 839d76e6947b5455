//! Normalization from raw provider shapes to [`wingfinder_core::Offer`].
//!
//! Normalizers are pure: the caller supplies `now`, which anchors the
//! 24-hour `valid_until` horizon for records without an upstream expiry.
//! A record missing the fields required for a minimally valid offer (price,
//! identifiable route) is rejected with a reason; batch wrappers log and
//! skip rejects so one malformed record never aborts a response.

use chrono::{DateTime, Duration, Utc};
use wingfinder_core::{CabinClass, Offer, Provider, SearchContext, VALID_UNTIL_HORIZON_HOURS};

use crate::error::ProviderError;
use crate::types::{TequilaItinerary, TravelpayoutsFlight, TravelpayoutsPricesResponse};

/// Marker for descriptive strings the upstream did not supply.
const UNKNOWN: &str = "Unknown";

/// Fixed `valid_until` horizon for offers without an upstream expiry.
fn default_valid_until(now: DateTime<Utc>) -> String {
    (now + Duration::hours(VALID_UNTIL_HORIZON_HOURS))
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

/// Offer-id component: whitespace collapses to `-` so ids stay single-token
/// while remaining stable for the same itinerary across searches.
fn id_component(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Normalizes a full Travelpayouts `prices/cheap` body.
///
/// Takes option `"0"` (the cheapest quote) per route key, the same selection
/// the consuming front end always made. Route keys iterate in sorted order,
/// so offer order is stable for identical input. Unusable records are logged
/// at debug and skipped.
#[must_use]
pub fn normalize_travelpayouts(
    response: &TravelpayoutsPricesResponse,
    ctx: &SearchContext,
    now: DateTime<Utc>,
) -> Vec<Offer> {
    let mut offers = Vec::new();
    for (route_key, options) in &response.data {
        let Some(flight) = options.get("0") else {
            tracing::debug!(route = %route_key, "route entry has no option 0, skipping");
            continue;
        };
        match normalize_travelpayouts_entry(route_key, flight, ctx, now) {
            Ok(offer) => offers.push(offer),
            Err(e) => {
                tracing::debug!(route = %route_key, error = %e, "skipping travelpayouts record");
            }
        }
    }
    offers
}

/// Normalizes one Travelpayouts flight option keyed by `"ORIG-DEST"`.
///
/// The route key is the source of truth for endpoints; the search context
/// supplies the calendar date the upstream clock times are composed with.
/// `prices/cheap` quotes economy fares only, so the cabin class is fixed.
///
/// # Errors
///
/// Returns [`ProviderError::Normalization`] when either half of the route
/// key is absent or empty, or the record has no positive price.
fn normalize_travelpayouts_entry(
    route_key: &str,
    flight: &TravelpayoutsFlight,
    ctx: &SearchContext,
    now: DateTime<Utc>,
) -> Result<Offer, ProviderError> {
    let (origin, destination) = route_key
        .split_once('-')
        .filter(|(origin, destination)| !origin.is_empty() && !destination.is_empty())
        .ok_or_else(|| ProviderError::Normalization {
            id: format!("tp_{route_key}"),
            reason: "route key is missing an endpoint".to_owned(),
        })?;

    let price = flight.price.filter(|p| *p > 0.0).ok_or_else(|| {
        ProviderError::Normalization {
            id: format!("tp_{origin}_{destination}"),
            reason: "missing or non-positive price".to_owned(),
        }
    })?;

    let airline = flight.airline.clone().unwrap_or_else(|| UNKNOWN.to_owned());
    let flight_number = flight
        .flight_number
        .map_or_else(|| UNKNOWN.to_owned(), |n| n.to_string());

    let departure_clock = flight.departure_time.as_deref().unwrap_or("00:00");
    let arrival_clock = flight.arrival_time.as_deref().unwrap_or("00:00");
    let date = &ctx.depart_date;

    Ok(Offer {
        id: format!(
            "tp_{origin}_{destination}_{}_{}",
            id_component(&airline),
            id_component(&flight_number)
        ),
        origin: origin.to_owned(),
        destination: destination.to_owned(),
        price,
        currency: "USD".to_owned(),
        departure_time: format!("{date}T{departure_clock}:00Z"),
        arrival_time: format!("{date}T{arrival_clock}:00Z"),
        duration_minutes: flight.duration.unwrap_or(0),
        airline,
        flight_number,
        aircraft: UNKNOWN.to_owned(),
        cabin_class: CabinClass::Economy,
        stops: flight.transfers.unwrap_or(0),
        route: vec![origin.to_owned(), destination.to_owned()],
        booking_links: std::collections::BTreeMap::new(),
        provider: Provider::Travelpayouts,
        valid_until: default_valid_until(now),
    })
}

/// Normalizes one Tequila itinerary.
///
/// # Errors
///
/// Returns [`ProviderError::Normalization`] when the record has no positive
/// price, an empty endpoint, or a route that does not start at `from` and
/// end at `to`.
pub fn normalize_tequila(
    itinerary: TequilaItinerary,
    ctx: &SearchContext,
    now: DateTime<Utc>,
) -> Result<Offer, ProviderError> {
    if itinerary.from.is_empty() || itinerary.to.is_empty() {
        return Err(ProviderError::Normalization {
            id: "teq".to_owned(),
            reason: "missing origin or destination".to_owned(),
        });
    }

    let price = itinerary.price.filter(|p| *p > 0.0).ok_or_else(|| {
        ProviderError::Normalization {
            id: format!("teq_{}_{}", itinerary.from, itinerary.to),
            reason: "missing or non-positive price".to_owned(),
        }
    })?;

    let route = if itinerary.route.is_empty() {
        vec![itinerary.from.clone(), itinerary.to.clone()]
    } else {
        itinerary.route
    };

    let airline = itinerary.airline.unwrap_or_else(|| UNKNOWN.to_owned());
    let flight_number = itinerary
        .flight_number
        .unwrap_or_else(|| UNKNOWN.to_owned());

    let offer = Offer {
        id: format!(
            "teq_{}_{}_{}_{}",
            itinerary.from,
            itinerary.to,
            id_component(&airline),
            id_component(&flight_number)
        ),
        origin: itinerary.from,
        destination: itinerary.to,
        price,
        currency: itinerary.currency.unwrap_or_else(|| "USD".to_owned()),
        departure_time: itinerary.departure_time,
        arrival_time: itinerary.arrival_time,
        duration_minutes: itinerary.duration_minutes.unwrap_or(0),
        airline,
        flight_number,
        aircraft: itinerary.aircraft.unwrap_or_else(|| UNKNOWN.to_owned()),
        cabin_class: itinerary
            .cabin_class
            .as_deref()
            .map_or(ctx.cabin_class, CabinClass::from_request),
        stops: itinerary.stops.unwrap_or(0),
        route,
        booking_links: std::collections::BTreeMap::new(),
        provider: Provider::Tequila,
        valid_until: itinerary
            .valid_until
            .unwrap_or_else(|| default_valid_until(now)),
    };

    if !offer.route_is_bracketed() {
        return Err(ProviderError::Normalization {
            id: offer.id,
            reason: "route does not start at origin and end at destination".to_owned(),
        });
    }

    Ok(offer)
}

/// Normalizes a batch of Tequila itineraries, skipping (and logging) records
/// that fail. Surviving offers keep upstream order.
#[must_use]
pub fn normalize_tequila_batch(
    itineraries: Vec<TequilaItinerary>,
    ctx: &SearchContext,
    now: DateTime<Utc>,
) -> Vec<Offer> {
    itineraries
        .into_iter()
        .filter_map(|itinerary| match normalize_tequila(itinerary, ctx, now) {
            Ok(offer) => Some(offer),
            Err(e) => {
                tracing::debug!(error = %e, "skipping tequila record");
                None
            }
        })
        .collect()
}
