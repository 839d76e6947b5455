pub mod client;
pub mod error;
pub mod normalize;
pub mod search;
pub mod types;

pub use client::TravelpayoutsClient;
pub use error::ProviderError;
pub use normalize::{normalize_tequila, normalize_tequila_batch, normalize_travelpayouts};
pub use search::{search_offers, ProviderFailure, ProviderResponse, SearchOutcome};
pub use types::{TequilaItinerary, TravelpayoutsFlight, TravelpayoutsPricesResponse};
