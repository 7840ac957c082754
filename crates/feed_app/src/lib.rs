//! Feed app: the store handle consumers hold, plus configuration and logging setup.
pub mod config;
pub mod logging;
mod store;

pub use config::{AppConfig, ConfigError};
pub use store::FeedStore;
