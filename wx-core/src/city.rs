use serde::{Deserialize, Serialize};

/// Bias applied to cities that are not in the table.
pub const DEFAULT_BIAS: i32 = 3;

/// Code of the city selected when the page loads.
pub const DEFAULT_CITY: &str = "nhatrang";

/// Coarse region of a city, as reported by the forecast service.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    Central,
    South,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::Central => "Central",
            Region::South => "South",
        }
    }
}

/// A city the forecast service knows about.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct City {
    /// Code sent as `city` in the `/predict` request (e.g., "hanoi")
    pub code: &'static str,
    /// Human-readable name shown in the dropdown
    pub label: &'static str,
    pub region: Region,
    /// Degrees added to the forecast heat index to approximate perceived local temperature
    pub bias: i32,
}

const fn city(code: &'static str, label: &'static str, region: Region, bias: i32) -> City {
    City {
        code,
        label,
        region,
        bias,
    }
}

/// All cities, in dropdown display order (north to south).
pub static CITIES: &[City] = &[
    city("hanoi", "Hanoi", Region::North, 2),
    city("haiphong", "Hai Phong", Region::North, 2),
    city("quangninh", "Quang Ninh", Region::North, 2),
    city("thanhhoa", "Thanh Hoa", Region::North, 2),
    city("vinh", "Nghe An (Vinh)", Region::North, 2),
    city("hue", "Hue (Thua Thien Hue)", Region::Central, 2),
    city("danang", "Da Nang", Region::Central, 3),
    city("quangnam", "Quang Nam (Tam Ky)", Region::Central, 3),
    city("quynhon", "Binh Dinh (Quy Nhon)", Region::Central, 3),
    city("nhatrang", "Nha Trang (Khanh Hoa)", Region::Central, 4),
    city("dalat", "Da Lat (Lam Dong)", Region::Central, 1),
    city("buonmethuot", "Buon Ma Thuot (Dak Lak)", Region::Central, 2),
    city("hcmc", "Ho Chi Minh City", Region::South, 4),
    city("cantho", "Can Tho", Region::South, 3),
    city("camau", "Ca Mau", Region::South, 3),
];

/// Look up a city by its exact code.
pub fn find_city(code: &str) -> Option<&'static City> {
    CITIES.iter().find(|c| c.code == code)
}

/// Temperature bias for a city code. Never fails: unknown codes get [`DEFAULT_BIAS`].
pub fn get_bias(code: &str) -> i32 {
    find_city(code).map(|c| c.bias).unwrap_or(DEFAULT_BIAS)
}
