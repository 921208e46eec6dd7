pub mod api;
pub mod model;
pub mod view;

use api::endpoint;
use api::response::{bike_station, parking, Records};
pub use api::Error;
use model::{Coordinates, Parking, Station};

/// Shape the search result of a single bike station dataset into a `Station`.
pub fn station_from_records(
    station: &endpoint::BikeStation,
    response: Records<bike_station::Fields>,
) -> Result<Station, Error> {
    let record = response
        .records
        .into_iter()
        .next()
        .ok_or(Error::UnexpectedApiResponse)?;

    log::debug!(
        "station {} from dataset {} (record {})",
        station.id,
        station.dataset,
        record.recordid
    );

    let fields = record.fields;
    let total_bikes = fields.bikes_available + fields.bikes_in_use;

    Ok(Station {
        id: station.id,
        name: fields.name,
        available_bikes: fields.bikes_available,
        available_bikes_percentage: model::percentage(
            f64::from(fields.bikes_available),
            f64::from(total_bikes),
        ),
        total_bikes,
    })
}

async fn bike_station(
    api: &model::Api,
    station: &endpoint::BikeStation,
) -> Result<Station, Error> {
    let query = [("dataset", station.dataset.to_string())];

    api::search(api, &query)
        .await
        .map(serde_json::from_value::<Records<bike_station::Fields>>)?
        .map_err(|e| {
            log::warn!("Unexpected response for {}: {}", station.dataset, e);
            Error::UnexpectedApiResponse
        })
        .and_then(|response| station_from_records(station, response))
}

/// Live occupancy of the Gent-Dampoort and Gent-Sint-Pieters stations, in that order.
pub async fn bike_stations(api: &model::Api) -> Result<Vec<Station>, Error> {
    let (dampoort, sint_pieters) = tokio::try_join!(
        bike_station(api, &endpoint::DAMPOORT),
        bike_station(api, &endpoint::SINT_PIETERS)
    )?;

    Ok(vec![dampoort, sint_pieters])
}

/// Shape the parking search result, most available first.
pub fn parkings_from_records(response: Records<parking::Fields>) -> Result<Vec<Parking>, Error> {
    let mut parkings = response
        .records
        .into_iter()
        .map(|record| -> Result<Parking, Error> {
            /* geometry is [longitude, latitude] */
            let [longitude, latitude] = record
                .geometry
                .ok_or(Error::UnexpectedApiResponse)?
                .coordinates;
            let fields = record.fields;

            Ok(Parking {
                id: fields.name.clone(),
                name: fields.name,
                description: fields.description,
                category: fields.categorie,
                total_capacity: fields.totalcapacity,
                available_capacity: fields.availablecapacity,
                available_capacity_percentage: model::clamped_percentage(
                    fields.availablecapacity as f64,
                    fields.totalcapacity as f64,
                ),
                coordinates: Coordinates {
                    latitude,
                    longitude,
                },
            })
        })
        .collect::<Result<Vec<Parking>, Error>>()?;

    parkings.sort_by(|a, b| {
        b.available_capacity_percentage
            .cmp(&a.available_capacity_percentage)
    });

    Ok(parkings)
}

/// Live occupancy of the parkings that are currently open.
pub async fn parkings(api: &model::Api) -> Result<Vec<Parking>, Error> {
    let query = [
        ("dataset", endpoint::PARKINGS.to_string()),
        ("q", String::new()),
        ("refine.isopennow", "1".to_string()),
        ("rows", api.parking_rows.to_string()),
    ];

    api::search(api, &query)
        .await
        .map(serde_json::from_value::<Records<parking::Fields>>)?
        .map_err(|e| {
            log::warn!("Unexpected response for {}: {}", endpoint::PARKINGS, e);
            Error::UnexpectedApiResponse
        })
        .and_then(parkings_from_records)
}

/// First parking with the given `id`. Parkings sharing a name are not told apart.
pub fn find_parking<'a>(parkings: &'a [Parking], id: &str) -> Option<&'a Parking> {
    parkings.iter().find(|parking| parking.id == id)
}
