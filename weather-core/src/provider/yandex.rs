use async_trait::async_trait;
use reqwest::{
    Client, Request, StatusCode,
    header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT},
};
use tracing::{debug, instrument, warn};

use crate::{
    config::FetchSettings, error::WeatherError, extract::WeatherExtractor, model::WeatherReport,
};

use super::WeatherProvider;

/// Scrapes the Yandex weather page for Moscow.
#[derive(Debug, Clone)]
pub struct YandexProvider {
    settings: FetchSettings,
    http: Client,
    extractor: WeatherExtractor,
}

impl YandexProvider {
    pub fn new() -> Result<Self, WeatherError> {
        Self::with_settings(FetchSettings::default())
    }

    pub fn with_settings(settings: FetchSettings) -> Result<Self, WeatherError> {
        let http = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(WeatherError::Request)?;

        Ok(Self {
            settings,
            http,
            extractor: WeatherExtractor::new()?,
        })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    fn build_request(&self) -> Result<Request, WeatherError> {
        self.http
            .get(self.settings.url.as_str())
            .header(USER_AGENT, self.settings.user_agent.as_str())
            .header(ACCEPT, self.settings.accept.as_str())
            .header(ACCEPT_LANGUAGE, self.settings.accept_language.as_str())
            .build()
            .map_err(WeatherError::Request)
    }

    /// Download the page and return its markup. Anything but `200 OK` is an error.
    #[instrument(level = "debug", skip(self), fields(url = %self.settings.url), err)]
    pub async fn fetch(&self) -> Result<String, WeatherError> {
        let request = self.build_request()?;

        let res = self.http.execute(request).await.map_err(|e| {
            warn!(error = %e, timeout = e.is_timeout(), "weather request failed");
            WeatherError::Transport(e)
        })?;

        let status = res.status();
        if status != StatusCode::OK {
            warn!(%status, "weather page returned non-OK status");
            return Err(WeatherError::Status(status.as_u16()));
        }

        // the timeout covers the body too; a stall mid-body is still a transport failure
        let body = res.text().await.map_err(|e| {
            if e.is_timeout() || e.is_connect() || e.is_request() {
                warn!(error = %e, timeout = e.is_timeout(), "weather page body read failed");
                WeatherError::Transport(e)
            } else {
                WeatherError::Markup(e.to_string())
            }
        })?;

        debug!(bytes = body.len(), "weather page downloaded");
        Ok(body)
    }
}

#[async_trait]
impl WeatherProvider for YandexProvider {
    async fn get_weather(&self) -> Result<WeatherReport, WeatherError> {
        let markup = self.fetch().await?;
        self.extractor.extract_str(&markup)
    }
}
