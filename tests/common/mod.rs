#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::{Value, json};
use weather_dash::domain::weather::{
    CurrentConditions, DayForecast, ForecastPayload, HourSample, LocationInfo, parse_datetime,
};

/// Wire-shaped forecast body the way weatherapi.com returns it: three days,
/// each carrying samples at 00/06/12/14/18 local. The 14:00 sample matches
/// the location's local hour so the current-value readout has a target.
pub fn wire_forecast_body(city: &str) -> Value {
    let days = (0..3)
        .map(|idx| {
            json!({
                "date": format!("2026-02-{:02}", 12 + idx),
                "day": {
                    "avgtemp_c": 21.7,
                    "avghumidity": 58.0,
                    "uv": 3.0,
                    "condition": { "text": "Sunny" }
                },
                "hour": ([0, 6, 12, 14, 18].iter().map(|hour| json!({
                    "time": format!("2026-02-{:02} {hour:02}:00", 12 + idx),
                    "temp_c": if *hour == 14 { 18.4 } else { 12.0 + *hour as f64 * 0.5 },
                    "uv": if *hour == 14 { 4.0 } else { 2.0 },
                    "humidity": if *hour == 14 { 60.0 } else { 70.0 }
                })).collect::<Vec<_>>())
            })
        })
        .collect::<Vec<_>>();

    json!({
        "location": {
            "name": city,
            "region": "Ile-de-France",
            "country": "France",
            "localtime": "2026-02-12 14:30"
        },
        "current": {
            "temp_c": 18.4,
            "humidity": 60,
            "wind_kph": 11.2,
            "condition": { "text": "Partly cloudy" }
        },
        "forecast": { "forecastday": days }
    })
}

pub fn wire_not_found_body() -> Value {
    json!({
        "error": {
            "code": 1006,
            "message": "No matching location found."
        }
    })
}

pub fn wire_search_body(count: usize) -> Value {
    let entries = (0..count)
        .map(|idx| {
            json!({
                "id": 2_801_268 + idx,
                "name": format!("London {idx}"),
                "region": "City of London, Greater London",
                "country": "United Kingdom",
                "lat": 51.52,
                "lon": -0.11,
                "url": "london-city-of-london-greater-london-united-kingdom"
            })
        })
        .collect::<Vec<_>>();
    Value::Array(entries)
}

/// Domain-shaped payload for tests that bypass the client.
pub fn payload_with_hours(hours: &[u32]) -> ForecastPayload {
    ForecastPayload {
        location: LocationInfo {
            name: "Paris".to_string(),
            region: "Ile-de-France".to_string(),
            country: "France".to_string(),
            localtime: parse_datetime("2026-02-12 14:30").expect("valid time fixture"),
        },
        current: CurrentConditions {
            temp_c: 18.4,
            humidity: 60.0,
            wind_kph: 11.0,
            condition: "Partly cloudy".to_string(),
        },
        days: vec![DayForecast {
            date: NaiveDate::from_ymd_opt(2026, 2, 12).expect("valid date fixture"),
            avg_temp_c: 21.7,
            avg_humidity: 58.0,
            uv_index: 3.0,
            condition: "Sunny".to_string(),
            hourly: hours
                .iter()
                .map(|&hour| HourSample {
                    time: parse_datetime(&format!("2026-02-12 {hour:02}:00"))
                        .expect("valid time fixture"),
                    temp_c: f64::from(hour),
                    uv_index: f64::from(hour) / 10.0,
                    humidity: 40.0 + f64::from(hour),
                })
                .collect(),
        }],
    }
}
