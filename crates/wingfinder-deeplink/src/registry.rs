//! Process-wide deeplink template registry.
//!
//! Built once at startup with [`DeeplinkRegistry::builtin`], shared by
//! reference, and never mutated afterward — it may be read from any number of
//! concurrent requests without locking. Carrier lookups are exact-match and
//! case-sensitive; a miss is a normal outcome (the offer falls back to the
//! generic OTA links), not an error.

use std::collections::HashMap;

use crate::template::DeeplinkTemplate;

/// A non-carrier booking or ancillary-service partner with its own template.
#[derive(Debug, Clone, Copy)]
pub struct GenericProvider {
    /// Key under which the rendered URL is stored in `booking_links`.
    pub key: &'static str,
    pub display_name: &'static str,
    pub template: DeeplinkTemplate,
}

/// Static carrier and generic-provider template tables.
pub struct DeeplinkRegistry {
    carriers: HashMap<&'static str, DeeplinkTemplate>,
    generic: Vec<GenericProvider>,
}

impl DeeplinkRegistry {
    /// The built-in table: five direct-booking carriers plus the OTA and
    /// ancillary partners. Generic providers are kept in registration order
    /// so generated link sets are deterministic; the first entry is the
    /// primary OTA fallback.
    #[must_use]
    pub fn builtin() -> Self {
        let carriers = HashMap::from([
            (
                "Ryanair",
                DeeplinkTemplate {
                    template: "https://www.ryanair.com/en/booking/home/{origin}/{destination}/{date}?adults={adults}&utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: true,
                },
            ),
            (
                "Wizz Air",
                DeeplinkTemplate {
                    template: "https://wizzair.com/en-GB/select-flight/from/{origin}/to/{destination}/on/{date}?passengers={adults}&utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: true,
                },
            ),
            (
                "Scoot",
                DeeplinkTemplate {
                    template: "https://www.flyscoot.com/en/book-a-trip/select-flight?origin={origin}&destination={destination}&departure={date}&adults={adults}&utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: true,
                },
            ),
            (
                "Turkish Airlines",
                DeeplinkTemplate {
                    template: "https://www.turkishairlines.com/en-int/flights/booking?origin={origin}&destination={destination}&departureDate={date}&passengerCount={adults}&utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: true,
                },
            ),
            (
                "Qatar Airways",
                DeeplinkTemplate {
                    template: "https://qatarairways.com/booking?origin={origin}&destination={destination}&departureDate={date}&adults={adults}&utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: true,
                },
            ),
        ]);

        let generic = vec![
            GenericProvider {
                key: "expedia",
                display_name: "Expedia",
                template: DeeplinkTemplate {
                    template: "https://www.expedia.com/Flights-Search?trip=oneway&leg1=from:{origin},to:{destination},departure:{date}TANYT&passengers=adults:{adults}&options=cabinclass:{cabin_class}&affcid=AjmUZGx",
                    supports_round_trip: false,
                },
            },
            GenericProvider {
                key: "tripcom",
                display_name: "Trip.com",
                template: DeeplinkTemplate {
                    template: "https://www.trip.com/flights/{origin}-{destination}-tickets/?departure={date}&adult={adults}&cabin={cabin_class}&utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: false,
                },
            },
            GenericProvider {
                key: "insurance",
                display_name: "EKTA Travel Insurance",
                template: DeeplinkTemplate {
                    template: "https://ektatraveling.tpk.lv/2OPRDOIC?utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: false,
                },
            },
            GenericProvider {
                key: "transfer",
                display_name: "GetTransfer - Airport Transfers",
                template: DeeplinkTemplate {
                    template: "https://gettransfer.tpk.lv/oBw5OAO2?utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: false,
                },
            },
            GenericProvider {
                key: "compensation",
                display_name: "Compensair - Flight Compensation",
                template: DeeplinkTemplate {
                    template: "https://compensair.tpk.lv/uR0TXuzc?utm_source=wingfinder&utm_medium=affiliate",
                    supports_round_trip: false,
                },
            },
        ];

        Self { carriers, generic }
    }

    /// Exact-match, case-sensitive lookup against the carrier table.
    #[must_use]
    pub fn carrier_template(&self, airline: &str) -> Option<&DeeplinkTemplate> {
        self.carriers.get(airline)
    }

    /// Generic providers in registration order.
    #[must_use]
    pub fn generic_providers(&self) -> &[GenericProvider] {
        &self.generic
    }

    /// Key of the primary OTA — the de facto fallback when an offer's airline
    /// has no direct template.
    #[must_use]
    pub fn primary_ota_key(&self) -> &'static str {
        self.generic
            .first()
            .map_or("expedia", |provider| provider.key)
    }
}
