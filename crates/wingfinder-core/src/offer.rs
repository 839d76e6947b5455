//! Canonical offer model every upstream provider response is normalized into.
//!
//! An [`Offer`] is built once per search response by a provider normalizer,
//! gets its `booking_links` attached by the link aggregator, and is then
//! immutable. Offers carry no persisted identity — they live for the duration
//! of one response only.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Offers without an upstream expiry are advertised as valid for this long.
pub const VALID_UNTIL_HORIZON_HOURS: i64 = 24;

/// Upstream inventory provider that supplied an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Tequila,
    Travelpayouts,
    Duffel,
    Amadeus,
}

impl Provider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Tequila => "tequila",
            Provider::Travelpayouts => "travelpayouts",
            Provider::Duffel => "duffel",
            Provider::Amadeus => "amadeus",
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cabin class of an itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    /// Coarse bucket used for OTA query parameters: everything above economy
    /// collapses to `"business"`. Intentional — the OTAs in the registry only
    /// distinguish two tiers.
    #[must_use]
    pub fn bucket(self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            _ => "business",
        }
    }

    /// Parses a request-supplied class string. Unknown or missing values fall
    /// back to economy rather than rejecting the search.
    #[must_use]
    pub fn from_request(s: &str) -> Self {
        match s {
            "premium_economy" => CabinClass::PremiumEconomy,
            "business" => CabinClass::Business,
            "first" => CabinClass::First,
            _ => CabinClass::Economy,
        }
    }
}

/// One normalized, bookable flight itinerary.
///
/// Timestamps (`departure_time`, `arrival_time`, `valid_until`) are stored as
/// `YYYY-MM-DDTHH:MM:SSZ` strings; arrival is allowed to sort lexically before
/// departure (multi-leg itineraries cross date boundaries).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    /// Provider-prefixed stable identifier, e.g. `tp_NRT_PRG_TK_198`.
    pub id: String,
    /// IATA origin code.
    pub origin: String,
    /// IATA destination code.
    pub destination: String,
    pub price: f64,
    /// ISO-4217 code, e.g. `USD`.
    pub currency: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_minutes: u32,
    /// Carrier display name; lookup key for the direct deeplink table. Not
    /// validated against a closed set — unknown airlines take the OTA
    /// fallback path.
    pub airline: String,
    /// May concatenate segments, e.g. `"TK 198 / TK 1767"`.
    pub flight_number: String,
    pub aircraft: String,
    pub cabin_class: CabinClass,
    /// Count of intermediate layovers, as reported upstream. May disagree
    /// with `route` length when upstream data is degraded; tolerated.
    pub stops: u32,
    /// Ordered location codes; `route[0] == origin`,
    /// `route[last] == destination`.
    pub route: Vec<String>,
    /// Link-kind → fully formed URL. Populated exclusively by the booking
    /// link aggregator, never by a normalizer.
    #[serde(default)]
    pub booking_links: BTreeMap<String, String>,
    pub provider: Provider,
    /// Advisory expiry; passed through, never enforced.
    pub valid_until: String,
}

impl Offer {
    /// Whether the route bracket invariant holds. Normalizers reject records
    /// that fail this; everything downstream may rely on it.
    #[must_use]
    pub fn route_is_bracketed(&self) -> bool {
        self.route.len() >= 2
            && self.route.first().map(String::as_str) == Some(self.origin.as_str())
            && self.route.last().map(String::as_str) == Some(self.destination.as_str())
    }
}
