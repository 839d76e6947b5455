pub mod links;
pub mod registry;
pub mod template;

pub use links::{attach_booking_links, best_booking_link, DIRECT_LINK_KEY};
pub use registry::{DeeplinkRegistry, GenericProvider};
pub use template::{render, DeeplinkTemplate};
