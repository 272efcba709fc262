use anyhow::{Result, bail};
use clap::Parser;

use crate::data::client::{FORECAST_URL, SEARCH_URL};

pub const API_KEY_ENV: &str = "WEATHER_DASH_API_KEY";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "weather-dash",
    about = "Interactive terminal weather dashboard",
    version
)]
pub struct Cli {
    /// City loaded on startup
    #[arg(long, default_value = "London")]
    pub city: String,

    /// weatherapi.com API key; falls back to the WEATHER_DASH_API_KEY
    /// environment variable
    #[arg(long)]
    pub api_key: Option<String>,

    /// Override the forecast endpoint (used by the test suite)
    #[arg(long)]
    pub forecast_url: Option<String>,

    /// Override the city-search endpoint (used by the test suite)
    #[arg(long)]
    pub search_url: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn api_key(&self) -> String {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn forecast_endpoint(&self) -> String {
        self.forecast_url
            .clone()
            .unwrap_or_else(|| FORECAST_URL.to_string())
    }

    #[must_use]
    pub fn search_endpoint(&self) -> String {
        self.search_url
            .clone()
            .unwrap_or_else(|| SEARCH_URL.to_string())
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key().is_empty() {
            bail!("no API key: pass --api-key or set {API_KEY_ENV}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn endpoint_overrides_take_precedence() {
        let cli = Cli::parse_from([
            "weather-dash",
            "--api-key",
            "k",
            "--forecast-url",
            "http://localhost:1234/forecast.json",
        ]);

        assert_eq!(
            cli.forecast_endpoint(),
            "http://localhost:1234/forecast.json"
        );
        assert_eq!(cli.search_endpoint(), SEARCH_URL);
    }

    #[test]
    fn default_city_is_london() {
        let cli = Cli::parse_from(["weather-dash", "--api-key", "k"]);
        assert_eq!(cli.city, "London");
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn missing_api_key_fails_validation() {
        let cli = Cli::parse_from(["weather-dash"]);
        if std::env::var(API_KEY_ENV).is_err() {
            assert!(cli.validate().is_err());
        }
    }
}
