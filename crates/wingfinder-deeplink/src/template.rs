//! Placeholder substitution for booking URL templates.
//!
//! [`render`] is a total function: every registered template plus any
//! well-formed [`Offer`] produces a URL string, with no failure path. A
//! malformed template is a registry-authoring defect, not a runtime error.

use serde::Serialize;
use wingfinder_core::Offer;

/// A provider's parameterized booking URL pattern.
///
/// Recognized placeholder tokens: `{origin}`, `{destination}`, `{date}`,
/// `{adults}`, `{cabin_class}`. Templates are free to use any subset;
/// ancillary-service entries may use none at all.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeeplinkTemplate {
    pub template: &'static str,
    /// Carried for callers deciding whether a one-way template is safe to
    /// offer for a round-trip search; substitution itself never branches on
    /// this.
    pub supports_round_trip: bool,
}

/// Substitutes every placeholder occurrence in `template` with values derived
/// from `offer` and the party size.
///
/// Derivation rules, reproduced exactly for affiliate-link compatibility:
/// - `{date}` is the portion of `departure_time` before the first `T`; a
///   timestamp with no `T` is used whole (degraded but non-fatal).
/// - `{cabin_class}` is the two-tier bucket (`economy` / `business`).
/// - Substituted values are not URL-encoded; codes and dates are URL-safe by
///   construction and existing bookmarked links depend on the unescaped form.
#[must_use]
pub fn render(template: &DeeplinkTemplate, offer: &Offer, adults: u32) -> String {
    let date = departure_date(&offer.departure_time);
    template
        .template
        .replace("{origin}", &offer.origin)
        .replace("{destination}", &offer.destination)
        .replace("{date}", date)
        .replace("{adults}", &adults.to_string())
        .replace("{cabin_class}", offer.cabin_class.bucket())
}

/// Calendar-date portion of an ISO instant: everything before the first `T`.
fn departure_date(departure_time: &str) -> &str {
    departure_time
        .split('T')
        .next()
        .unwrap_or(departure_time)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use wingfinder_core::{CabinClass, Provider};

    use super::*;

    fn make_offer(cabin_class: CabinClass) -> Offer {
        Offer {
            id: "teq_NRT_PRG_TK_198".to_owned(),
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
            cabin_class,
            stops: 1,
            route: vec!["NRT".to_owned(), "IST".to_owned(), "PRG".to_owned()],
            booking_links: BTreeMap::new(),
            provider: Provider::Tequila,
            valid_until: "2025-08-27T14:30:00Z".to_owned(),
        }
    }

    #[test]
    fn substitutes_date_from_departure_time() {
        let template = DeeplinkTemplate {
            template: "https://example.com/book?d={date}",
            supports_round_trip: true,
        };
        let url = render(&template, &make_offer(CabinClass::Economy), 1);
        assert_eq!(url, "https://example.com/book?d=2025-08-26");
    }

    #[test]
    fn departure_time_without_t_is_used_whole() {
        let template = DeeplinkTemplate {
            template: "https://example.com/book?d={date}",
            supports_round_trip: true,
        };
        let mut offer = make_offer(CabinClass::Economy);
        offer.departure_time = "2025-08-26".to_owned();
        let url = render(&template, &offer, 1);
        assert_eq!(url, "https://example.com/book?d=2025-08-26");
    }

    #[test]
    fn substitutes_all_placeholders() {
        let template = DeeplinkTemplate {
            template: "https://example.com/{origin}/{destination}/{date}?adults={adults}&cabin={cabin_class}",
            supports_round_trip: true,
        };
        let url = render(&template, &make_offer(CabinClass::Economy), 2);
        assert_eq!(
            url,
            "https://example.com/NRT/PRG/2025-08-26?adults=2&cabin=economy"
        );
    }

    #[test]
    fn substitutes_repeated_placeholder_occurrences() {
        let template = DeeplinkTemplate {
            template: "https://example.com/{origin}-{destination}?from={origin}&to={destination}",
            supports_round_trip: false,
        };
        let url = render(&template, &make_offer(CabinClass::Economy), 1);
        assert_eq!(url, "https://example.com/NRT-PRG?from=NRT&to=PRG");
    }

    #[test]
    fn first_class_buckets_to_business() {
        let template = DeeplinkTemplate {
            template: "https://example.com/book?cabin={cabin_class}",
            supports_round_trip: true,
        };
        let url = render(&template, &make_offer(CabinClass::First), 1);
        assert_eq!(url, "https://example.com/book?cabin=business");
    }

    #[test]
    fn economy_stays_economy() {
        let template = DeeplinkTemplate {
            template: "https://example.com/book?cabin={cabin_class}",
            supports_round_trip: true,
        };
        let url = render(&template, &make_offer(CabinClass::Economy), 1);
        assert_eq!(url, "https://example.com/book?cabin=economy");
    }

    #[test]
    fn placeholder_free_template_passes_through() {
        let template = DeeplinkTemplate {
            template: "https://partner.example/2OPRDOIC?utm_source=wingfinder",
            supports_round_trip: false,
        };
        let url = render(&template, &make_offer(CabinClass::Economy), 3);
        assert_eq!(url, "https://partner.example/2OPRDOIC?utm_source=wingfinder");
    }
}
