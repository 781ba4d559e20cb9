//! Static tables: cities and moods.

use wx_core::city::{CITIES, DEFAULT_BIAS, DEFAULT_CITY};
use wx_core::dates::current_hour;
use wx_core::mood::mood_for_hour;

/// City list in dropdown order, default city marked with `*`.
pub fn cities_table() -> String {
    let mut out = format!("{:<12} {:<26} {:<8} {:>4}\n", "CODE", "CITY", "REGION", "BIAS");
    for city in CITIES {
        let marker = if city.code == DEFAULT_CITY { "*" } else { "" };
        out.push_str(&format!(
            "{:<12} {:<26} {:<8} {:>+4}\n",
            format!("{}{}", city.code, marker),
            city.label,
            city.region.as_str(),
            city.bias
        ));
    }
    out.push_str(&format!("unknown codes use a bias of {:+}\n", DEFAULT_BIAS));
    out
}

pub fn run_mood(hour: Option<u32>) -> anyhow::Result<()> {
    let hour = hour.unwrap_or_else(current_hour);
    if hour > 23 {
        anyhow::bail!("hour must be between 0 and 23, got {}", hour);
    }
    let mood = mood_for_hour(hour);
    println!("{:02}:00 -> {} ({})", hour, mood, mood.css_class());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cities_table_lists_every_city() {
        let table = cities_table();
        // header + cities + footer
        assert_eq!(table.lines().count(), CITIES.len() + 2);
        assert!(table.contains("nhatrang*"));
        assert!(table.contains("Da Lat (Lam Dong)"));
        assert!(table.contains("+1"));
    }

    #[test]
    fn test_mood_rejects_bad_hour() {
        assert!(run_mood(Some(24)).is_err());
        assert!(run_mood(Some(0)).is_ok());
    }

    #[test]
    fn test_mood_defaults_to_local_hour() {
        assert!(current_hour() < 24);
        assert!(run_mood(None).is_ok());
    }
}
