//! Render model: what the list view and the trend chart show for a response.
//!
//! The bias is passed in by the caller; the panel snapshots it when the fetch
//! is issued so every row and tooltip of one response uses the same city.

use crate::city::{find_city, get_bias};
use crate::condition::{classify_condition, wind_label, Condition};
use crate::forecast::ForecastDay;
use serde::Serialize;

/// Format a temperature as shown in the list, e.g. "34.0°C".
pub fn format_temperature(value: f64) -> String {
    format!("{:.1}°C", value)
}

/// Heat index plus the city bias.
pub fn adjusted_temperature(day: &ForecastDay, bias: i32) -> f64 {
    day.heat_index + f64::from(bias)
}

/// One entry of the daily forecast list.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ForecastRow {
    pub day_label: String,
    pub date: Option<String>,
    pub condition: Condition,
    /// Adjusted high temperature in °C
    pub temperature: f64,
    pub rain_level: f64,
    pub wind_level: f64,
}

impl ForecastRow {
    pub fn from_day(day: &ForecastDay, bias: i32) -> Self {
        ForecastRow {
            day_label: day.day_name.clone(),
            date: day.date.clone(),
            condition: classify_condition(day, bias),
            temperature: adjusted_temperature(day, bias),
            rain_level: day.rain_level,
            wind_level: day.wind_level,
        }
    }

    pub fn temperature_text(&self) -> String {
        format_temperature(self.temperature)
    }

    pub fn wind_text(&self) -> &'static str {
        wind_label(self.wind_level)
    }

    /// Tooltip lines shown when hovering this day's point on the chart.
    pub fn tooltip_lines(&self) -> Vec<String> {
        vec![
            format!("Temperature: {}", self.temperature_text()),
            format!("Rain level: {}", self.rain_level),
            format!("Wind: {}", self.wind_text()),
            format!("Condition: {}", self.condition.glyph()),
        ]
    }
}

/// Build list rows in forecast order.
pub fn build_rows(days: &[ForecastDay], bias: i32) -> Vec<ForecastRow> {
    days.iter().map(|d| ForecastRow::from_day(d, bias)).collect()
}

/// Data handed to the chart backend. Serialised as JSON for the JS bridge.
#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct TrendChart {
    /// X-axis labels (day names)
    pub labels: Vec<String>,
    /// Y values: adjusted temperatures
    pub temperatures: Vec<f64>,
    /// Pre-computed tooltip lines, one entry per point
    pub tooltips: Vec<Vec<String>>,
}

impl TrendChart {
    pub fn from_rows(rows: &[ForecastRow]) -> Self {
        TrendChart {
            labels: rows.iter().map(|r| r.day_label.clone()).collect(),
            temperatures: rows.iter().map(|r| r.temperature).collect(),
            tooltips: rows.iter().map(|r| r.tooltip_lines()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Title and unit line above the trend chart for a city code.
/// Unknown codes show the code itself with the default bias.
pub fn trend_caption(city_code: &str) -> (String, String) {
    let label = find_city(city_code).map_or(city_code, |c| c.label);
    (
        format!("Temperature trend · {}", label),
        format!(
            "°C feels-like, includes {:+} °C local bias",
            get_bias(city_code)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_text_has_one_decimal() {
        assert_eq!(format_temperature(34.0), "34.0°C");
        assert_eq!(format_temperature(31.26), "31.3°C");
        assert_eq!(format_temperature(7.0), "7.0°C");
    }

    #[test]
    fn test_row_applies_bias() {
        let day = ForecastDay::new("Mon", 30.0);
        let row = ForecastRow::from_day(&day, 4);
        assert_eq!(row.temperature_text(), "34.0°C");
        assert_eq!(row.condition, Condition::Hot);
        assert_eq!(row.day_label, "Mon");
    }

    #[test]
    fn test_tooltip_lines() {
        let day = ForecastDay::new("T3", 29.0).with_levels(3.0, 2.0);
        let row = ForecastRow::from_day(&day, 2);
        assert_eq!(
            row.tooltip_lines(),
            vec![
                "Temperature: 31.0°C".to_string(),
                "Rain level: 3".to_string(),
                "Wind: moderate".to_string(),
                "Condition: ⛈️".to_string(),
            ]
        );
    }

    #[test]
    fn test_chart_series_follow_rows() {
        let days = vec![ForecastDay::new("T2", 28.0), ForecastDay::new("T3", 30.5)];
        let chart = TrendChart::from_rows(&build_rows(&days, 3));
        assert_eq!(chart.labels, vec!["T2", "T3"]);
        assert_eq!(chart.temperatures, vec![31.0, 33.5]);
        assert_eq!(chart.tooltips.len(), 2);
        assert!(TrendChart::from_rows(&[]).is_empty());
    }

    #[test]
    fn test_trend_caption_names_city_and_bias() {
        let (title, unit) = trend_caption("nhatrang");
        assert_eq!(title, "Temperature trend · Nha Trang (Khanh Hoa)");
        assert_eq!(unit, "°C feels-like, includes +4 °C local bias");

        let (title, unit) = trend_caption("dalat");
        assert_eq!(title, "Temperature trend · Da Lat (Lam Dong)");
        assert!(unit.contains("+1 °C"));
    }

    #[test]
    fn test_trend_caption_unknown_city_uses_default_bias() {
        let (title, unit) = trend_caption("atlantis");
        assert_eq!(title, "Temperature trend · atlantis");
        assert!(unit.contains("+3 °C"));
    }
}
