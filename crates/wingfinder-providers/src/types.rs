//! Raw upstream response shapes, one module section per provider.
//!
//! ## Travelpayouts `v1/prices/cheap`
//!
//! The body keys flight options by a `"ORIG-DEST"` route string, then by a
//! numeric option index (`"0"`, `"1"`, ...). Both maps are modeled as
//! `BTreeMap` so normalization iterates in a stable order and repeated
//! searches produce identically ordered offer lists. Fields inside a flight
//! option are frequently absent in degraded responses; everything except the
//! price tolerates absence via defaults.
//!
//! `flight_number` arrives as a JSON number, not a string; it is stringified
//! during normalization. `departure_time`/`arrival_time` are clock times
//! (`"14:30"`) — the calendar date comes from the search request, and the
//! normalizer composes the full ISO instant.
//!
//! ## Tequila
//!
//! Tequila itineraries arrive already itinerary-shaped: endpoints, price,
//! full ISO timestamps, per-segment concatenated flight numbers, and an
//! ordered route. Absent descriptive strings default to `"Unknown"` during
//! normalization; a missing price or endpoint drops the record.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level body from Travelpayouts `GET /v1/prices/cheap`.
#[derive(Debug, Deserialize)]
pub struct TravelpayoutsPricesResponse {
    #[serde(default)]
    pub success: bool,

    /// `"ORIG-DEST"` route key → option index → flight option.
    #[serde(default)]
    pub data: BTreeMap<String, BTreeMap<String, TravelpayoutsFlight>>,
}

/// One priced flight option from Travelpayouts.
#[derive(Debug, Clone, Deserialize)]
pub struct TravelpayoutsFlight {
    /// Quoted fare. A record without a price is unusable and is skipped.
    #[serde(default)]
    pub price: Option<f64>,

    /// Carrier code, e.g. `"TK"`. Defaults to `"Unknown"` downstream.
    #[serde(default)]
    pub airline: Option<String>,

    /// Numeric flight number, e.g. `198`.
    #[serde(default)]
    pub flight_number: Option<u32>,

    /// Local clock time `"HH:MM"`; date supplied by the search request.
    #[serde(default)]
    pub departure_time: Option<String>,

    /// Local clock time `"HH:MM"`.
    #[serde(default)]
    pub arrival_time: Option<String>,

    /// Total duration in minutes.
    #[serde(default)]
    pub duration: Option<u32>,

    /// Count of intermediate stops.
    #[serde(default)]
    pub transfers: Option<u32>,
}

/// One itinerary from the Tequila (Kiwi) search response.
#[derive(Debug, Clone, Deserialize)]
pub struct TequilaItinerary {
    /// IATA origin code.
    pub from: String,

    /// IATA destination code.
    pub to: String,

    #[serde(default)]
    pub price: Option<f64>,

    /// ISO-4217 code; observed always `"USD"` but defaulted defensively.
    #[serde(default)]
    pub currency: Option<String>,

    /// Full ISO instant, `YYYY-MM-DDTHH:MM:SSZ`.
    pub departure_time: String,

    pub arrival_time: String,

    #[serde(default)]
    pub duration_minutes: Option<u32>,

    /// Carrier display name, e.g. `"Turkish Airlines"`.
    #[serde(default)]
    pub airline: Option<String>,

    /// May concatenate segments: `"TK 198 / TK 1767"`.
    #[serde(default)]
    pub flight_number: Option<String>,

    /// May concatenate segments: `"Boeing 787-9 / Airbus A321"`.
    #[serde(default)]
    pub aircraft: Option<String>,

    /// `economy` / `premium_economy` / `business` / `first`.
    #[serde(default)]
    pub cabin_class: Option<String>,

    #[serde(default)]
    pub stops: Option<u32>,

    /// Ordered location codes including layovers. Empty in degraded
    /// responses; the normalizer then falls back to `[from, to]`.
    #[serde(default)]
    pub route: Vec<String>,

    /// Upstream expiry instant; absent records get the 24-hour horizon.
    #[serde(default)]
    pub valid_until: Option<String>,
}
