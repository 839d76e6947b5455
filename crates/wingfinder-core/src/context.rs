//! Search request context handed to provider normalizers.

use serde::Serialize;

use crate::offer::CabinClass;

/// Values the upstream response does not itself repeat. Some provider shapes
/// report only a delta (price and flight number keyed by route, with the date
/// supplied separately), so normalizers need the original request alongside
/// the raw payload.
#[derive(Debug, Clone, Serialize)]
pub struct SearchContext {
    /// Requested IATA origin code.
    pub origin: String,
    /// Requested IATA destination code.
    pub destination: String,
    /// Travel date, `YYYY-MM-DD`.
    pub depart_date: String,
    pub cabin_class: CabinClass,
    /// Adult passenger count; always at least 1.
    pub adults: u32,
}

impl SearchContext {
    #[must_use]
    pub fn new(origin: &str, destination: &str, depart_date: &str) -> Self {
        Self {
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            depart_date: depart_date.to_owned(),
            cabin_class: CabinClass::Economy,
            adults: 1,
        }
    }

    #[must_use]
    pub fn with_cabin_class(mut self, cabin_class: CabinClass) -> Self {
        self.cabin_class = cabin_class;
        self
    }

    /// Party size; zero is clamped to 1 rather than rejected.
    #[must_use]
    pub fn with_adults(mut self, adults: u32) -> Self {
        self.adults = adults.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_economy_adult() {
        let ctx = SearchContext::new("NRT", "PRG", "2025-08-26");
        assert_eq!(ctx.adults, 1);
        assert_eq!(ctx.cabin_class, CabinClass::Economy);
    }

    #[test]
    fn zero_adults_clamps_to_one() {
        let ctx = SearchContext::new("NRT", "PRG", "2025-08-26").with_adults(0);
        assert_eq!(ctx.adults, 1);
    }
}
