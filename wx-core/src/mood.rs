use serde::{Deserialize, Serialize};
use std::fmt;

/// Background theme of the page, picked from the local hour.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Mood {
    Morning,
    Noon,
    Sunset,
    Night,
}

impl Mood {
    /// CSS class applied to the app root. Only one is ever applied.
    pub fn css_class(&self) -> &'static str {
        match self {
            Mood::Morning => "mood-morning",
            Mood::Noon => "mood-noon",
            Mood::Sunset => "mood-sunset",
            Mood::Night => "mood-night",
        }
    }

    /// Inline background for the app root.
    pub fn background(&self) -> &'static str {
        match self {
            Mood::Morning => "linear-gradient(180deg, #FFE0B2 0%, #B3E5FC 100%)",
            Mood::Noon => "linear-gradient(180deg, #81D4FA 0%, #E1F5FE 100%)",
            Mood::Sunset => "linear-gradient(180deg, #FF8A65 0%, #7E57C2 100%)",
            Mood::Night => "linear-gradient(180deg, #1A237E 0%, #263238 100%)",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mood::Morning => "morning",
            Mood::Noon => "noon",
            Mood::Sunset => "sunset",
            Mood::Night => "night",
        };
        write!(f, "{}", name)
    }
}

/// [5,11) morning, [11,16) noon, [16,19) sunset, everything else night.
pub fn mood_for_hour(hour: u32) -> Mood {
    match hour {
        5..=10 => Mood::Morning,
        11..=15 => Mood::Noon,
        16..=18 => Mood::Sunset,
        _ => Mood::Night,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_hours() {
        assert_eq!(mood_for_hour(0), Mood::Night);
        assert_eq!(mood_for_hour(4), Mood::Night);
        assert_eq!(mood_for_hour(5), Mood::Morning);
        assert_eq!(mood_for_hour(10), Mood::Morning);
        assert_eq!(mood_for_hour(11), Mood::Noon);
        assert_eq!(mood_for_hour(15), Mood::Noon);
        assert_eq!(mood_for_hour(16), Mood::Sunset);
        assert_eq!(mood_for_hour(18), Mood::Sunset);
        assert_eq!(mood_for_hour(19), Mood::Night);
        assert_eq!(mood_for_hour(23), Mood::Night);
    }

    #[test]
    fn test_partition_sizes() {
        let count = |m: Mood| (0..24).filter(|&h| mood_for_hour(h) == m).count();
        assert_eq!(count(Mood::Morning), 6);
        assert_eq!(count(Mood::Noon), 5);
        assert_eq!(count(Mood::Sunset), 3);
        assert_eq!(count(Mood::Night), 10);
    }
}
