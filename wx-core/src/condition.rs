use crate::forecast::ForecastDay;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Displayed weather condition for a forecast day.
///
/// `id()` is the stable identifier; `glyph()` is presentation only.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Condition {
    Storm,
    Rain,
    ExtremeHeat,
    Hot,
    Mild,
    Overcast,
    Fog,
}

impl Condition {
    pub fn id(&self) -> &'static str {
        match self {
            Condition::Storm => "storm",
            Condition::Rain => "rain",
            Condition::ExtremeHeat => "extreme_heat",
            Condition::Hot => "hot",
            Condition::Mild => "mild",
            Condition::Overcast => "overcast",
            Condition::Fog => "fog",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Condition::Storm => "⛈️",
            Condition::Rain => "🌧️",
            Condition::ExtremeHeat => "🔥",
            Condition::Hot => "☀️",
            Condition::Mild => "⛅",
            Condition::Overcast => "☁️",
            Condition::Fog => "🌫️",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Classify a day. Rules are checked in order and the first match wins;
/// temperature rules use the biased heat index.
pub fn classify_condition(day: &ForecastDay, bias: i32) -> Condition {
    let t = day.heat_index + f64::from(bias);
    let rain = day.rain_level;
    let wind = day.wind_level;

    if rain >= 3.0 && wind >= 2.0 {
        Condition::Storm
    } else if rain >= 2.0 {
        Condition::Rain
    } else if t >= 37.0 {
        Condition::ExtremeHeat
    } else if t >= 33.0 {
        Condition::Hot
    } else if t >= 26.0 {
        Condition::Mild
    } else if t >= 20.0 {
        Condition::Overcast
    } else {
        Condition::Fog
    }
}

/// Text label for an ordinal wind level.
///
/// Anything that is not 0-3 (including negatives and fractions) is "very strong".
pub fn wind_label(level: f64) -> &'static str {
    if level.fract() != 0.0 {
        return "very strong";
    }
    match level as i64 {
        0 => "weak",
        1 => "light",
        2 => "moderate",
        3 => "strong",
        _ => "very strong",
    }
}
