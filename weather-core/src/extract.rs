//! Turns the weather page markup into a [`WeatherReport`].
//!
//! Each field is an independent lookup: the first node matching its selector
//! wins, and a selector with no match leaves the field empty. Only a missing
//! temperature fails the extraction.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::{
    error::WeatherError,
    model::{WeatherReport, local_timestamp},
};

pub const TEMPERATURE_SELECTOR: &str = ".temp__value";
pub const CONDITION_SELECTOR: &str = ".link__condition";
pub const TERM_VALUE_SELECTOR: &str = ".term__value";
pub const PRESSURE_SELECTOR: &str = ".term[data-term='pressure'] .term__value";
pub const HUMIDITY_SELECTOR: &str = ".term[data-term='humidity'] .term__value";
pub const WIND_SELECTOR: &str = ".wind-speed";

const DEGREE: char = '°';

/// Selectors for every field, compiled once.
#[derive(Debug, Clone)]
pub struct WeatherExtractor {
    temperature: Selector,
    condition: Selector,
    term_value: Selector,
    pressure: Selector,
    humidity: Selector,
    wind: Selector,
}

impl WeatherExtractor {
    pub fn new() -> Result<Self, WeatherError> {
        Ok(Self {
            temperature: compile(TEMPERATURE_SELECTOR)?,
            condition: compile(CONDITION_SELECTOR)?,
            term_value: compile(TERM_VALUE_SELECTOR)?,
            pressure: compile(PRESSURE_SELECTOR)?,
            humidity: compile(HUMIDITY_SELECTOR)?,
            wind: compile(WIND_SELECTOR)?,
        })
    }

    /// Parse `markup` as a full HTML document and extract from it.
    pub fn extract_str(&self, markup: &str) -> Result<WeatherReport, WeatherError> {
        let document = Html::parse_document(markup);
        self.extract(&document)
    }

    pub fn extract(&self, document: &Html) -> Result<WeatherReport, WeatherError> {
        let field = |selector: &Selector| first_match_text(document, selector).unwrap_or_default();

        let report = WeatherReport {
            temperature: field(&self.temperature),
            condition: field(&self.condition),
            feels_like: self.feels_like(document).unwrap_or_default(),
            pressure: field(&self.pressure),
            humidity: field(&self.humidity),
            wind: field(&self.wind),
            updated_at: local_timestamp(),
        };

        if report.temperature.is_empty() {
            warn!("temperature not found on weather page");
            return Err(WeatherError::Unavailable);
        }

        debug!(?report, "extracted weather report");
        Ok(report)
    }

    /// `.term__value` also matches pressure, humidity and the like, so the
    /// feels-like reading is told apart by its degree sign.
    // TODO: switch to a dedicated feels-like selector once the page exposes
    // one (e.g. a `data-term='feels-like'` container).
    fn feels_like(&self, document: &Html) -> Option<String> {
        document
            .select(&self.term_value)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .find(|text| text.contains(DEGREE))
    }
}

/// Trimmed text of the first node matching `selector`, if any node matches.
pub fn first_match_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

fn compile(selector: &'static str) -> Result<Selector, WeatherError> {
    Selector::parse(selector).map_err(|e| WeatherError::Selector {
        selector,
        message: e.to_string(),
    })
}
