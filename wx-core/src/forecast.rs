//! Wire types for `POST /predict`.
//!
//! Optional fields are resolved here, at the parse boundary: a missing
//! `heat_index` falls back to `temp_avg`, and missing rain/wind levels become 0.
//! Nothing downstream has to deal with absent values.

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of the `/predict` request. `end_date` serialises as `null` when absent.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub city: String,
    pub end_date: Option<String>,
}

/// A forecast day as it arrives on the wire, before defaults are applied.
#[derive(Debug, Deserialize)]
struct WireDay {
    day_name: String,
    heat_index: Option<f64>,
    temp_avg: Option<f64>,
    rain_level: Option<f64>,
    wind_level: Option<f64>,
    date: Option<String>,
    wind_speed: Option<f64>,
}

/// One day of the forecast.
#[derive(Debug, PartialEq, Clone, Deserialize)]
#[serde(try_from = "WireDay")]
pub struct ForecastDay {
    /// Display label, e.g. "T2" or "Mon"
    pub day_name: String,
    /// Feels-like temperature before the city bias is applied
    pub heat_index: f64,
    pub temp_avg: Option<f64>,
    /// Ordinal precipitation severity (0 when absent)
    pub rain_level: f64,
    /// Ordinal wind severity (0 when absent)
    pub wind_level: f64,
    /// Calendar date "YYYY-MM-DD", when the service sends it
    pub date: Option<String>,
    /// Mean wind speed in km/h, when the service sends it
    pub wind_speed: Option<f64>,
}

impl TryFrom<WireDay> for ForecastDay {
    type Error = ForecastError;

    fn try_from(wire: WireDay) -> Result<Self> {
        let heat_index = wire.heat_index.or(wire.temp_avg).ok_or_else(|| {
            ForecastError::Malformed(format!(
                "day '{}' has neither heat_index nor temp_avg",
                wire.day_name
            ))
        })?;
        Ok(ForecastDay {
            day_name: wire.day_name,
            heat_index,
            temp_avg: wire.temp_avg,
            rain_level: wire.rain_level.unwrap_or(0.0),
            wind_level: wire.wind_level.unwrap_or(0.0),
            date: wire.date,
            wind_speed: wire.wind_speed,
        })
    }
}

impl ForecastDay {
    /// A dry, calm day with the given feels-like temperature.
    pub fn new(day_name: &str, heat_index: f64) -> Self {
        ForecastDay {
            day_name: day_name.to_string(),
            heat_index,
            temp_avg: None,
            rain_level: 0.0,
            wind_level: 0.0,
            date: None,
            wind_speed: None,
        }
    }

    pub fn with_levels(mut self, rain_level: f64, wind_level: f64) -> Self {
        self.rain_level = rain_level;
        self.wind_level = wind_level;
        self
    }
}

/// Weather events flagged by the forecast service, in badge display order.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum ForecastEvent {
    Heatwave,
    HotDry,
    Comfortable,
    LongRain,
    HeavyRain,
    Showers,
    UrbanFloodRisk,
    StrongWind,
    Thunderstorm,
    StormRisk,
}

impl ForecastEvent {
    pub const ALL: [ForecastEvent; 10] = [
        ForecastEvent::Heatwave,
        ForecastEvent::HotDry,
        ForecastEvent::Comfortable,
        ForecastEvent::LongRain,
        ForecastEvent::HeavyRain,
        ForecastEvent::Showers,
        ForecastEvent::UrbanFloodRisk,
        ForecastEvent::StrongWind,
        ForecastEvent::Thunderstorm,
        ForecastEvent::StormRisk,
    ];

    /// Key used in the `events` object of the response.
    pub fn key(&self) -> &'static str {
        match self {
            ForecastEvent::StormRisk => "storm_risk",
            ForecastEvent::UrbanFloodRisk => "urban_flood_risk",
            ForecastEvent::LongRain => "long_rain",
            ForecastEvent::HeavyRain => "heavy_rain",
            ForecastEvent::Showers => "showers",
            ForecastEvent::Thunderstorm => "thunderstorm",
            ForecastEvent::StrongWind => "strong_wind",
            ForecastEvent::Heatwave => "heatwave",
            ForecastEvent::HotDry => "hot_dry",
            ForecastEvent::Comfortable => "comfortable",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ForecastEvent::StormRisk => "Storm risk",
            ForecastEvent::UrbanFloodRisk => "Urban flooding",
            ForecastEvent::LongRain => "Prolonged rain",
            ForecastEvent::HeavyRain => "Heavy rain",
            ForecastEvent::Showers => "Showers",
            ForecastEvent::Thunderstorm => "Thunderstorms",
            ForecastEvent::StrongWind => "Strong wind",
            ForecastEvent::Heatwave => "Heatwave",
            ForecastEvent::HotDry => "Hot and dry",
            ForecastEvent::Comfortable => "Comfortable",
        }
    }
}

/// The part of an event entry the viewer reads. Day indices are ignored.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct EventFlag {
    #[serde(default)]
    pub has_event: bool,
}

/// Successful `/predict` response.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Days in chronological (display) order; may be empty
    pub forecast: Vec<ForecastDay>,
    pub summary: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub selected_date: Option<String>,
    #[serde(default)]
    pub horizon_days: Option<u32>,
    #[serde(default)]
    pub events: BTreeMap<String, EventFlag>,
}

impl ForecastResponse {
    pub fn new(forecast: Vec<ForecastDay>, summary: &str) -> Self {
        ForecastResponse {
            forecast,
            summary: summary.to_string(),
            city: None,
            region: None,
            selected_date: None,
            horizon_days: None,
            events: BTreeMap::new(),
        }
    }

    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Events flagged true, in badge order. Unknown keys are ignored.
    pub fn active_events(&self) -> Vec<ForecastEvent> {
        ForecastEvent::ALL
            .into_iter()
            .filter(|e| self.events.get(e.key()).is_some_and(|f| f.has_event))
            .collect()
    }

    /// "City · Region · after YYYY-MM-DD", using whichever parts were sent.
    pub fn headline(&self) -> Option<String> {
        let city = self.city.as_deref()?;
        let mut parts = vec![city.to_string()];
        if let Some(region) = &self.region {
            parts.push(region.clone());
        }
        if let Some(date) = &self.selected_date {
            parts.push(format!("after {}", date));
        }
        Some(parts.join(" · "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trimmed response from the forecast service for Nha Trang
    const RESPONSE: &str = r#"{
        "city": "Nha Trang (Khanh Hoa)",
        "region": "Central",
        "selected_date": "2024-05-01",
        "horizon_days": 7,
        "forecast": [
            {"date": "2024-05-02", "day_name": "T5", "heat_index": 31.2, "temp_avg": 31.2, "wind_speed": 12.5, "rain_level": 0, "wind_level": 1},
            {"date": "2024-05-03", "day_name": "T6", "heat_index": 30.4, "temp_avg": 30.4, "wind_speed": 18.0, "rain_level": 3, "wind_level": 2}
        ],
        "summary": "Storms expected on 2024-05-03.",
        "events": {
            "heatwave": {"has_event": false, "start_idx": -1, "end_idx": -1},
            "storm_risk": {"has_event": true, "days": [1]},
            "strong_wind": {"has_event": true, "days": [1]},
            "not_a_known_event": {"has_event": true}
        }
    }"#;

    #[test]
    fn test_request_serialises_null_end_date() {
        let req = ForecastRequest {
            city: "hanoi".to_string(),
            end_date: None,
        };
        assert_eq!(
            serde_json::to_string(&req).unwrap(),
            r#"{"city":"hanoi","end_date":null}"#
        );
    }

    #[test]
    fn test_parse_full_response() {
        let resp = ForecastResponse::from_json(RESPONSE).unwrap();
        assert_eq!(resp.forecast.len(), 2);
        assert_eq!(resp.forecast[1].day_name, "T6");
        assert_eq!(resp.forecast[1].rain_level, 3.0);
        assert_eq!(resp.forecast[0].wind_speed, Some(12.5));
        assert_eq!(resp.horizon_days, Some(7));
        assert_eq!(
            resp.active_events(),
            vec![ForecastEvent::StrongWind, ForecastEvent::StormRisk]
        );
        assert_eq!(
            resp.headline().unwrap(),
            "Nha Trang (Khanh Hoa) · Central · after 2024-05-01"
        );
    }

    #[test]
    fn test_events_follow_badge_order() {
        let resp = ForecastResponse::from_json(
            r#"{"forecast": [], "summary": "", "events": {
                "storm_risk": {"has_event": true, "days": [2]},
                "heatwave": {"has_event": true, "start_idx": 0, "end_idx": 3},
                "showers": {"has_event": false},
                "comfortable": {"has_event": true}
            }}"#,
        )
        .unwrap();
        let keys: Vec<&str> = resp.active_events().iter().map(|e| e.key()).collect();
        assert_eq!(keys, vec!["heatwave", "comfortable", "storm_risk"]);

        let all: Vec<&str> = ForecastEvent::ALL.iter().map(|e| e.key()).collect();
        assert_eq!(
            all,
            vec![
                "heatwave",
                "hot_dry",
                "comfortable",
                "long_rain",
                "heavy_rain",
                "showers",
                "urban_flood_risk",
                "strong_wind",
                "thunderstorm",
                "storm_risk",
            ]
        );
    }

    #[test]
    fn test_missing_levels_default_to_zero() {
        let resp = ForecastResponse::from_json(
            r#"{"forecast": [{"day_name": "Mon", "heat_index": 30, "rain_level": null}], "summary": "Sunny"}"#,
        )
        .unwrap();
        let day = &resp.forecast[0];
        assert_eq!(day.rain_level, 0.0);
        assert_eq!(day.wind_level, 0.0);
        assert!(resp.active_events().is_empty());
        assert!(resp.headline().is_none());
    }

    #[test]
    fn test_heat_index_falls_back_to_temp_avg() {
        let resp = ForecastResponse::from_json(
            r#"{"forecast": [{"day_name": "Tue", "temp_avg": 27.5}], "summary": ""}"#,
        )
        .unwrap();
        assert_eq!(resp.forecast[0].heat_index, 27.5);
    }

    #[test]
    fn test_day_without_temperature_is_malformed() {
        let err = ForecastResponse::from_json(
            r#"{"forecast": [{"day_name": "Wed"}], "summary": ""}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ForecastError::Malformed(_)));
    }

    #[test]
    fn test_missing_summary_is_malformed() {
        assert!(ForecastResponse::from_json(r#"{"forecast": []}"#).is_err());
        assert!(ForecastResponse::from_json("<html>oops</html>").is_err());
    }
}
