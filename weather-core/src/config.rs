use std::time::Duration;

pub const DEFAULT_URL: &str = "https://yandex.ru/pogoda/ru/moscow";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

pub const DEFAULT_ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.8,en-US;q=0.5,en;q=0.3";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the provider needs to issue its single request.
///
/// The defaults are the only values the CLI ever uses; nothing is read from
/// disk or the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    /// Page to download.
    pub url: String,
    pub user_agent: String,
    /// Value of the `Accept` header.
    pub accept: String,
    /// Value of the `Accept-Language` header.
    pub accept_language: String,
    /// Total request timeout, connect through body.
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl FetchSettings {
    /// Same headers and timeout, different page. Used to aim the provider at a local server.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}
