//! Initial state of the viewer when the page loads.

use crate::client::Selection;
use crate::dates;
use crate::mood::{mood_for_hour, Mood};

/// Control values and theme the page starts with.
#[derive(Debug, PartialEq, Clone)]
pub struct Startup {
    /// Default city with the date picker preset to today
    pub selection: Selection,
    pub mood: Mood,
}

impl Startup {
    /// Startup state for a given local date ("YYYY-MM-DD") and hour.
    pub fn at(today: &str, hour: u32) -> Self {
        Startup {
            selection: Selection {
                end_date: Some(today.to_string()),
                ..Selection::default()
            },
            mood: mood_for_hour(hour),
        }
    }

    /// Startup state from the local clock.
    pub fn now() -> Self {
        Self::at(&dates::today(), dates::current_hour())
    }

    /// Value shown in the date picker.
    pub fn date_input(&self) -> String {
        self.selection.end_date.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city::{get_bias, DEFAULT_CITY};

    #[test]
    fn test_starts_on_default_city_and_today() {
        let startup = Startup::at("2024-05-01", 9);
        assert_eq!(startup.selection.city, DEFAULT_CITY);
        assert_eq!(startup.selection.city, "nhatrang");
        assert_eq!(get_bias(&startup.selection.city), 4);
        assert_eq!(startup.date_input(), "2024-05-01");

        // The first fetch sends today's date as the end date
        let req = startup.selection.request();
        assert_eq!(req.city, "nhatrang");
        assert_eq!(req.end_date.as_deref(), Some("2024-05-01"));
    }

    #[test]
    fn test_mood_comes_from_the_hour() {
        assert_eq!(Startup::at("2024-05-01", 7).mood, Mood::Morning);
        assert_eq!(Startup::at("2024-05-01", 12).mood, Mood::Noon);
        assert_eq!(Startup::at("2024-05-01", 17).mood, Mood::Sunset);
        assert_eq!(Startup::at("2024-05-01", 23).mood, Mood::Night);
    }

    #[test]
    fn test_cleared_date_picker_sends_no_end_date() {
        let startup = Startup::at("2024-05-01", 9);
        let cleared = Selection::new(&startup.selection.city, "");
        assert_eq!(cleared.end_date, None);
        assert_eq!(
            serde_json::to_string(&cleared.request()).unwrap(),
            r#"{"city":"nhatrang","end_date":null}"#
        );
    }

    #[test]
    fn test_now_uses_local_clock() {
        let startup = Startup::now();
        assert_eq!(startup.selection.city, DEFAULT_CITY);
        assert!(dates::parse_date(&startup.date_input()).is_ok());
    }
}
