use crate::{WeatherError, WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod yandex;

/// A source of a single current-weather report.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn get_weather(&self) -> Result<WeatherReport, WeatherError>;
}
