pub mod app_config;
pub mod config;
pub mod context;
pub mod offer;

pub use app_config::{AppConfig, Environment, ProviderCredentials};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use context::SearchContext;
pub use offer::{CabinClass, Offer, Provider, VALID_UNTIL_HORIZON_HOURS};
