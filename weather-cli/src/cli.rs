use anyhow::Context;
use clap::Parser;
use weather_core::{WeatherProvider, YandexProvider};

use crate::render::render_report;

/// Top-level CLI struct. Takes no arguments beyond `--help` and `--version`.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather in Moscow, scraped from Yandex")]
pub struct Cli {}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let provider =
            YandexProvider::new().context("Failed to initialize weather provider")?;

        let block = show(&provider).await?;
        print!("{block}");

        Ok(())
    }
}

/// Fetch one report from `provider` and render it for the terminal.
async fn show(provider: &dyn WeatherProvider) -> anyhow::Result<String> {
    let report = provider
        .get_weather()
        .await
        .context("Failed to get weather")?;

    Ok(render_report(&report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use weather_core::{WeatherError, WeatherReport};

    #[derive(Debug)]
    struct Fixed(Option<WeatherReport>);

    #[async_trait]
    impl WeatherProvider for Fixed {
        async fn get_weather(&self) -> Result<WeatherReport, WeatherError> {
            self.0.clone().ok_or(WeatherError::Unavailable)
        }
    }

    #[test]
    fn cli_takes_no_arguments() {
        assert!(Cli::try_parse_from(["weather"]).is_ok());
        assert!(Cli::try_parse_from(["weather", "London"]).is_err());
    }

    #[tokio::test]
    async fn show_renders_report() {
        let report = WeatherReport {
            temperature: "+2°".into(),
            condition: "Снег".into(),
            feels_like: String::new(),
            pressure: String::new(),
            humidity: String::new(),
            wind: String::new(),
            updated_at: "2024-12-01 09:00:00".into(),
        };

        let block = show(&Fixed(Some(report))).await.unwrap();

        assert!(block.contains("+2°"));
        assert!(block.contains("Снег"));
    }

    #[tokio::test]
    async fn show_wraps_provider_error() {
        let err = show(&Fixed(None)).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to get weather");
        assert!(format!("{err:#}").contains("weather data unavailable"));
    }
}
