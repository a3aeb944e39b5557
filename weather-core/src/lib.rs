//! Core library for the `weather` CLI.
//!
//! This crate defines:
//! - Fetch settings (target page, headers, timeout)
//! - The page provider that downloads the weather page
//! - The extractor that turns page markup into a [`WeatherReport`]
//!
//! It is used by `weather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod provider;

pub use config::FetchSettings;
pub use error::WeatherError;
pub use extract::WeatherExtractor;
pub use model::WeatherReport;
pub use provider::{WeatherProvider, yandex::YandexProvider};
