use chrono::{NaiveDate, NaiveDateTime};

/// One of the chartable metrics the user can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temperature,
    UvIndex,
    Humidity,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::UvIndex, Metric::Humidity];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::UvIndex => "UV Index",
            Metric::Humidity => "Humidity",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Metric::Temperature => 0,
            Metric::UvIndex => 1,
            Metric::Humidity => 2,
        }
    }

    #[must_use]
    pub fn next(self) -> Metric {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// A city-search result, in provider order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: String,
    pub region: String,
    pub country: String,
}

impl Suggestion {
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}, {}, {}", self.name, self.region, self.country)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationInfo {
    pub name: String,
    pub region: String,
    pub country: String,
    pub localtime: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub humidity: f64,
    pub wind_kph: f64,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourSample {
    pub time: NaiveDateTime,
    pub temp_c: f64,
    pub uv_index: f64,
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub avg_temp_c: f64,
    pub avg_humidity: f64,
    pub uv_index: f64,
    pub condition: String,
    pub hourly: Vec<HourSample>,
}

/// The full forecast for a committed city. Replaced wholesale on every
/// successful fetch, never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPayload {
    pub location: LocationInfo,
    pub current: CurrentConditions,
    pub days: Vec<DayForecast>,
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").ok()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

#[must_use]
pub fn condition_icon(condition: &str) -> &'static str {
    let lower = condition.to_lowercase();
    if lower.contains("cloud") {
        "☁"
    } else if lower.contains("sun") || lower.contains("clear") {
        "☀"
    } else if lower.contains("rain") {
        "☂"
    } else if lower.contains("snow") {
        "❄"
    } else {
        "☁"
    }
}

/// Header line for the current-conditions panel, e.g.
/// "2:30 PM, Thu, Feb 12, 2026".
#[must_use]
pub fn format_header(localtime: NaiveDateTime) -> String {
    localtime.format("%-I:%M %p, %a, %b %-d, %Y").to_string()
}

/// Forecast-card date label; the first card reads "Today" instead.
#[must_use]
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
