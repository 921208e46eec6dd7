pub mod bike_station;
pub mod parking;

use serde::Deserialize;

/* Opendatasoft records 1.0 search envelope */
#[derive(Debug, Deserialize)]
pub struct Records<F> {
    pub records: Vec<Record<F>>,
}

#[derive(Debug, Deserialize)]
pub struct Record<F> {
    pub recordid: String,
    pub fields: F,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// GeoJSON point, coordinates ordered `[longitude, latitude]`.
#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub coordinates: [f64; 2],
}
