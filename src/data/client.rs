use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::weather::{
    CurrentConditions, DayForecast, ForecastPayload, HourSample, LocationInfo, Suggestion,
    parse_date, parse_datetime,
};

pub const FORECAST_URL: &str = "https://api.weatherapi.com/v1/forecast.json";
pub const SEARCH_URL: &str = "https://api.weatherapi.com/v1/search.json";

/// How a provider round trip can fail. `NotFound` is a data-level error the
/// provider embeds in an otherwise well-formed response; `Network` covers
/// transport and non-success statuses; `Malformed` covers bodies that do not
/// deserialize into the expected shape.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    NotFound(String),
    #[error("network failure: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Thin typed wrapper around the two weatherapi.com endpoints. Owns no state
/// and applies no retry policy.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    api_key: String,
    forecast_url: String,
    search_url: String,
}

impl WeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_urls(api_key, FORECAST_URL, SEARCH_URL)
    }

    pub fn with_base_urls(
        api_key: impl Into<String>,
        forecast_url: impl Into<String>,
        search_url: impl Into<String>,
    ) -> Self {
        Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .expect("reqwest client"),
            api_key: api_key.into(),
            forecast_url: forecast_url.into(),
            search_url: search_url.into(),
        }
    }

    pub async fn forecast(&self, city: &str, days: u8) -> Result<ForecastPayload, ClientError> {
        let days = days.to_string();
        let response = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("days", days.as_str()),
                ("aqi", "no"),
                ("alerts", "yes"),
            ])
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        // A bad city name arrives as an error object in the body, independent
        // of the transport status.
        if let Some(message) = provider_error(&body) {
            return Err(ClientError::NotFound(message));
        }
        if !status.is_success() {
            return Err(ClientError::Network(format!(
                "forecast request returned {status}"
            )));
        }

        let payload: WireForecastResponse = serde_json::from_str(&body)
            .map_err(|err| ClientError::Malformed(err.to_string()))?;
        map_forecast(payload)
    }

    /// City search as typed. A blank query short-circuits without touching
    /// the network.
    pub async fn search(&self, query: &str) -> Result<Vec<Suggestion>, ClientError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .http
            .get(&self.search_url)
            .query(&[("key", self.api_key.as_str()), ("q", query)])
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Network(format!(
                "search request returned {status}"
            )));
        }

        let results: Vec<WireSearchResult> = response
            .json()
            .await
            .map_err(|err| ClientError::Malformed(err.to_string()))?;

        Ok(results
            .into_iter()
            .map(|entry| Suggestion {
                name: entry.name,
                region: entry.region,
                country: entry.country,
            })
            .collect())
    }
}

fn provider_error(body: &str) -> Option<String> {
    serde_json::from_str::<WireErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .map(|error| error.message)
}

fn map_forecast(payload: WireForecastResponse) -> Result<ForecastPayload, ClientError> {
    let localtime = parse_datetime(&payload.location.localtime).ok_or_else(|| {
        ClientError::Malformed(format!(
            "unparsable location localtime {:?}",
            payload.location.localtime
        ))
    })?;

    Ok(ForecastPayload {
        location: LocationInfo {
            name: payload.location.name,
            region: payload.location.region,
            country: payload.location.country,
            localtime,
        },
        current: CurrentConditions {
            temp_c: payload.current.temp_c,
            humidity: payload.current.humidity,
            wind_kph: payload.current.wind_kph,
            condition: payload.current.condition.text,
        },
        days: payload
            .forecast
            .forecastday
            .into_iter()
            .filter_map(map_day)
            .collect(),
    })
}

fn map_day(day: WireForecastDay) -> Option<DayForecast> {
    let date = parse_date(&day.date)?;
    Some(DayForecast {
        date,
        avg_temp_c: day.day.avgtemp_c,
        avg_humidity: day.day.avghumidity,
        uv_index: day.day.uv,
        condition: day.day.condition.text,
        hourly: day.hour.into_iter().filter_map(map_hour).collect(),
    })
}

fn map_hour(hour: WireHour) -> Option<HourSample> {
    let time = parse_datetime(&hour.time)?;
    Some(HourSample {
        time,
        temp_c: hour.temp_c,
        uv_index: hour.uv,
        humidity: hour.humidity,
    })
}

#[derive(Debug, Deserialize)]
struct WireErrorEnvelope {
    error: Option<WireErrorBody>,
}

#[derive(Debug, Deserialize)]
struct WireErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct WireForecastResponse {
    location: WireLocation,
    current: WireCurrent,
    forecast: WireForecast,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WireCondition {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WireCurrent {
    temp_c: f64,
    humidity: f64,
    wind_kph: f64,
    condition: WireCondition,
}

#[derive(Debug, Deserialize)]
struct WireForecast {
    forecastday: Vec<WireForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WireForecastDay {
    date: String,
    day: WireDay,
    hour: Vec<WireHour>,
}

#[derive(Debug, Deserialize)]
struct WireDay {
    avgtemp_c: f64,
    avghumidity: f64,
    uv: f64,
    condition: WireCondition,
}

#[derive(Debug, Deserialize)]
struct WireHour {
    time: String,
    temp_c: f64,
    uv: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WireSearchResult {
    name: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    country: String,
}
