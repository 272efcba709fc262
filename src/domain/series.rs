use chrono::Timelike;

use crate::domain::weather::{DayForecast, ForecastPayload, HourSample, Metric};

/// Chart sampling points: 6 AM, 12 PM, 6 PM, 12 AM.
pub const TARGET_HOURS: [u32; 4] = [6, 12, 18, 0];

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: &'static str,
    /// Position of the sampled hour within [`TARGET_HOURS`], so gaps stay
    /// visible when an hour is missing from the payload.
    pub slot: usize,
    pub value: f64,
}

#[must_use]
pub fn hour_label(hour: u32) -> &'static str {
    match hour {
        6 => "6 AM",
        12 => "12 PM",
        18 => "6 PM",
        0 => "12 AM",
        _ => "",
    }
}

/// Samples the selected day at the target hours, matching on local
/// hour-of-day. Hours absent from the payload are omitted, never padded.
#[must_use]
pub fn hourly_series(payload: &ForecastPayload, metric: Metric, day: usize) -> Vec<SeriesPoint> {
    let Some(day) = payload.days.get(day) else {
        return Vec::new();
    };

    TARGET_HOURS
        .iter()
        .enumerate()
        .filter_map(|(slot, &target)| {
            day.hourly
                .iter()
                .find(|sample| sample.time.hour() == target)
                .map(|sample| SeriesPoint {
                    label: hour_label(target),
                    slot,
                    value: metric_value(sample, metric),
                })
        })
        .collect()
}

/// The formatted metric value for the hourly sample matching the location's
/// current local hour. Empty when the payload or the matching hour is absent.
#[must_use]
pub fn current_value(payload: Option<&ForecastPayload>, metric: Metric, day: usize) -> String {
    let Some(payload) = payload else {
        return String::new();
    };
    let Some(day) = payload.days.get(day) else {
        return String::new();
    };

    let local_hour = payload.location.localtime.hour();
    day.hourly
        .iter()
        .find(|sample| sample.time.hour() == local_hour)
        .map(|sample| format_metric(metric_value(sample, metric), metric))
        .unwrap_or_default()
}

/// A day's average value for the metric, independent of hour-of-day.
#[must_use]
pub fn day_summary(day: &DayForecast, metric: Metric) -> String {
    let value = match metric {
        Metric::Temperature => day.avg_temp_c,
        Metric::UvIndex => day.uv_index,
        Metric::Humidity => day.avg_humidity,
    };
    format_metric(value, metric)
}

#[must_use]
pub fn metric_value(sample: &HourSample, metric: Metric) -> f64 {
    match metric {
        Metric::Temperature => sample.temp_c,
        Metric::UvIndex => sample.uv_index,
        Metric::Humidity => sample.humidity,
    }
}

#[must_use]
pub fn format_metric(value: f64, metric: Metric) -> String {
    match metric {
        Metric::Temperature => format!("{}°C", value.round() as i64),
        Metric::UvIndex => format!("{value}"),
        Metric::Humidity => format!("{}%", value.round() as i64),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;
    use crate::domain::weather::{CurrentConditions, LocationInfo};

    fn parse_time(value: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").expect("valid time fixture")
    }

    fn sample_at(hour: u32) -> HourSample {
        HourSample {
            time: parse_time(&format!("2026-02-12 {hour:02}:00")),
            temp_c: f64::from(hour),
            uv_index: 2.0,
            humidity: 50.0 + f64::from(hour),
        }
    }

    fn payload_with_hours(hours: &[u32], localtime: &str) -> ForecastPayload {
        ForecastPayload {
            location: LocationInfo {
                name: "Paris".to_string(),
                region: "Ile-de-France".to_string(),
                country: "France".to_string(),
                localtime: parse_time(localtime),
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
                hourly: hours.iter().map(|&h| sample_at(h)).collect(),
            }],
        }
    }

    #[test]
    fn series_omits_missing_target_hours() {
        let payload = payload_with_hours(&[0, 6, 12], "2026-02-12 14:30");
        let series = hourly_series(&payload, Metric::Temperature, 0);

        assert_eq!(series.len(), 3);
        assert!(series.iter().all(|point| point.label != "6 PM"));
    }

    #[test]
    fn series_preserves_target_hour_order() {
        let payload = payload_with_hours(&[0, 6, 12, 18], "2026-02-12 14:30");
        let labels = hourly_series(&payload, Metric::Temperature, 0)
            .into_iter()
            .map(|point| point.label)
            .collect::<Vec<_>>();

        assert_eq!(labels, vec!["6 AM", "12 PM", "6 PM", "12 AM"]);
    }

    #[test]
    fn series_empty_for_out_of_range_day() {
        let payload = payload_with_hours(&[6, 12], "2026-02-12 14:30");
        assert!(hourly_series(&payload, Metric::Humidity, 2).is_empty());
    }

    #[test]
    fn current_value_matches_local_hour() {
        let mut payload = payload_with_hours(&[6, 12, 14, 18], "2026-02-12 14:30");
        payload.days[0].hourly[2].temp_c = 18.4;
        payload.days[0].hourly[2].humidity = 60.0;

        assert_eq!(current_value(Some(&payload), Metric::Temperature, 0), "18°C");
        assert_eq!(current_value(Some(&payload), Metric::Humidity, 0), "60%");
    }

    #[test]
    fn current_value_empty_without_matching_hour() {
        let payload = payload_with_hours(&[6, 12], "2026-02-12 14:30");
        assert_eq!(current_value(Some(&payload), Metric::Temperature, 0), "");
        assert_eq!(current_value(None, Metric::Temperature, 0), "");
    }

    #[test]
    fn day_summary_rounds_temperature() {
        let payload = payload_with_hours(&[6], "2026-02-12 14:30");
        assert_eq!(day_summary(&payload.days[0], Metric::Temperature), "22°C");
        assert_eq!(day_summary(&payload.days[0], Metric::Humidity), "58%");
        assert_eq!(day_summary(&payload.days[0], Metric::UvIndex), "3");
    }

    #[test]
    fn uv_formatting_keeps_fractions() {
        assert_eq!(format_metric(4.0, Metric::UvIndex), "4");
        assert_eq!(format_metric(4.5, Metric::UvIndex), "4.5");
    }
}
