//! Booking link aggregation: direct carrier deeplink plus every generic
//! provider link, attached to a normalized offer.

use wingfinder_core::Offer;

use crate::registry::DeeplinkRegistry;
use crate::template::render;

/// Key under which a direct-carrier deeplink is stored.
pub const DIRECT_LINK_KEY: &str = "direct";

/// Populates `offer.booking_links` from the registry.
///
/// The `direct` key is set when the offer's airline has a carrier template;
/// every generic provider key is set unconditionally, in registration order.
/// The map is rebuilt from scratch, so calling this twice with the same party
/// size yields byte-identical links.
#[must_use]
pub fn attach_booking_links(registry: &DeeplinkRegistry, mut offer: Offer, adults: u32) -> Offer {
    offer.booking_links.clear();

    if let Some(template) = registry.carrier_template(&offer.airline) {
        let url = render(template, &offer, adults);
        offer.booking_links.insert(DIRECT_LINK_KEY.to_owned(), url);
    }

    for provider in registry.generic_providers() {
        let url = render(&provider.template, &offer, adults);
        offer.booking_links.insert(provider.key.to_owned(), url);
    }

    offer
}

/// The single best outbound link: `direct` when the carrier is known,
/// otherwise the primary OTA entry. Encodes the preference order consumers
/// are expected to honor.
#[must_use]
pub fn best_booking_link<'a>(registry: &DeeplinkRegistry, offer: &'a Offer) -> Option<&'a str> {
    offer
        .booking_links
        .get(DIRECT_LINK_KEY)
        .or_else(|| offer.booking_links.get(registry.primary_ota_key()))
        .map(String::as_str)
}
