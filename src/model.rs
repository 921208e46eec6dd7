use serde::Serialize;

/// Percentage of capacity that is free, rounded to the nearest integer.
pub type Percentage = u8;

#[derive(Debug, Clone)]
pub struct Api {
    pub api_url: String,
    /// Maximum number of open parkings requested from the parking dataset.
    pub parking_rows: u32,
    pub client: reqwest::Client,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: u32,
    pub name: String,
    pub available_bikes: u32,
    pub available_bikes_percentage: Percentage,
    pub total_bikes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parking {
    /// Same as `name`; upstream record ids change whenever the dataset is refreshed.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub total_capacity: i64,
    pub available_capacity: i64,
    pub available_capacity_percentage: Percentage,
    pub coordinates: Coordinates,
}

/// Colour band of an availability bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Low,
    Medium,
    High,
}

impl Band {
    pub fn from_percentage(percentage: Percentage) -> Band {
        match percentage {
            0..=33 => Band::Low,
            34..=66 => Band::Medium,
            _ => Band::High,
        }
    }
}

/// `available / total` as a rounded percentage.
///
/// The division is not guarded: a zero `total` yields NaN or infinity, which the
/// saturating float-to-int conversion turns into 0 or 255 respectively.
pub fn percentage(available: f64, total: f64) -> Percentage {
    (available / total * 100.0).round() as Percentage
}

/// Same as [`percentage`] but never above 100, for sources that report more free
/// capacity than total capacity.
pub fn clamped_percentage(available: f64, total: f64) -> Percentage {
    percentage(available, total).min(100)
}
