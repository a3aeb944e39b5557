use thiserror::Error;

/// Every way getting a report can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("failed to build weather request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to execute weather request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("failed to parse weather page markup: {0}")]
    Markup(String),

    #[error("invalid selector `{selector}`: {message}")]
    Selector { selector: &'static str, message: String },

    #[error("weather data unavailable")]
    Unavailable,
}

impl WeatherError {
    /// True when the request ran out of its fixed time budget.
    pub fn is_timeout(&self) -> bool {
        matches!(self, WeatherError::Transport(e) if e.is_timeout())
    }
}
