use gent_realtime::model::{Api, Parking, Station};
use prometheus::{Encoder, GaugeVec, TextEncoder};

lazy_static! {
    static ref AVAILABLE_BIKES_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "bike_station_available_bikes",
            "number of bikes available at the station",
        ),
        &["station"],
    )
    .unwrap();
    static ref AVAILABLE_BIKES_PERCENTAGE_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "bike_station_available_bikes_percentage",
            "available bikes as a percentage of all bikes of the station",
        ),
        &["station"],
    )
    .unwrap();
    static ref AVAILABLE_CAPACITY_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "parking_available_capacity",
            "number of free parking spots",
        ),
        &["parking"],
    )
    .unwrap();
    static ref AVAILABLE_CAPACITY_PERCENTAGE_GAUGE: GaugeVec = register_gauge_vec!(
        opts!(
            "parking_available_capacity_percentage",
            "free parking spots as a percentage of total capacity, at most 100",
        ),
        &["parking"],
    )
    .unwrap();
}

/// Replace the exported station values with `stations`.
fn record_stations(stations: &[Station]) {
    AVAILABLE_BIKES_GAUGE.reset();
    AVAILABLE_BIKES_PERCENTAGE_GAUGE.reset();

    for station in stations {
        AVAILABLE_BIKES_GAUGE
            .with_label_values(&[&station.name])
            .set(f64::from(station.available_bikes));
        AVAILABLE_BIKES_PERCENTAGE_GAUGE
            .with_label_values(&[&station.name])
            .set(f64::from(station.available_bikes_percentage));
    }
}

/// Replace the exported parking values with `parkings`; closed parkings drop out.
fn record_parkings(parkings: &[Parking]) {
    AVAILABLE_CAPACITY_GAUGE.reset();
    AVAILABLE_CAPACITY_PERCENTAGE_GAUGE.reset();

    for parking in parkings {
        AVAILABLE_CAPACITY_GAUGE
            .with_label_values(&[&parking.name])
            .set(parking.available_capacity as f64);
        AVAILABLE_CAPACITY_PERCENTAGE_GAUGE
            .with_label_values(&[&parking.name])
            .set(f64::from(parking.available_capacity_percentage));
    }
}

/// Load both datasets from `api`, updating Prometheus exporter registry.
pub async fn collect(api: &Api) -> Result<(), gent_realtime::Error> {
    let stations = gent_realtime::bike_stations(api).await?;
    record_stations(&stations);

    let parkings = gent_realtime::parkings(api).await?;
    record_parkings(&parkings);

    Ok(())
}

/// Read metrics from Prometheus exporter registry.
pub async fn read() -> Result<String, gent_realtime::Error> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder
        .encode(&metric_families, &mut buffer)
        .or(Err(gent_realtime::Error::FormatError))?;
    String::from_utf8(buffer).or(Err(gent_realtime::Error::FormatError))
}
