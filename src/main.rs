#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate rocket;

use config::Config;
use gent_realtime::api;
use gent_realtime::model::{Api, Parking, Station};
use gent_realtime::view;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{Build, Rocket, State};

mod metrics;

const API_URL: &str = "https://data.stad.gent";
const PARKING_ROWS: i64 = 15;

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Settings {
    api_url: String,
    parking_rows: u32,
}

pub fn read_settings() -> Result<Settings, config::ConfigError> {
    let mut settings = Config::default();
    settings
        .set_default("api_url", API_URL)?
        .set_default("parking_rows", PARKING_ROWS)?
        .merge(config::Environment::with_prefix("GR"))?;

    settings.try_into()
}

#[get("/")]
fn index_route() -> Result<RawHtml<String>, api::Error> {
    view::index().map(RawHtml)
}

#[get("/bikes")]
async fn bikes_route(api: &State<Api>) -> Result<RawHtml<String>, api::Error> {
    let stations = gent_realtime::bike_stations(api).await?;
    view::bikes(&stations).map(RawHtml)
}

#[get("/api/bikes")]
async fn bikes_json_route(api: &State<Api>) -> Result<Json<Vec<Station>>, api::Error> {
    gent_realtime::bike_stations(api).await.map(Json)
}

#[get("/parkings")]
async fn parkings_route(api: &State<Api>) -> Result<RawHtml<String>, api::Error> {
    let parkings = gent_realtime::parkings(api).await?;
    view::parkings(&parkings, None).map(RawHtml)
}

/// The list is fetched once and handed to the detail view along with the selected id.
#[get("/parkings/<id>")]
async fn parking_route(id: &str, api: &State<Api>) -> Result<RawHtml<String>, api::Error> {
    let parkings = gent_realtime::parkings(api).await?;
    view::parkings(&parkings, Some(id)).map(RawHtml)
}

#[get("/api/parkings")]
async fn parkings_json_route(api: &State<Api>) -> Result<Json<Vec<Parking>>, api::Error> {
    gent_realtime::parkings(api).await.map(Json)
}

#[get("/metrics")]
async fn metrics_route(api: &State<Api>) -> Result<String, api::Error> {
    metrics::collect(api).await?;
    metrics::read().await
}

fn build(settings: Settings) -> Result<Rocket<Build>, api::Error> {
    log::info!(
        "Using open data portal {} ({} parking rows)",
        settings.api_url,
        settings.parking_rows
    );
    let api = api::api(settings.api_url, settings.parking_rows)?;

    Ok(rocket::build().manage(api).mount(
        "/",
        routes![
            index_route,
            bikes_route,
            bikes_json_route,
            parkings_route,
            parking_route,
            parkings_json_route,
            metrics_route
        ],
    ))
}

#[launch]
fn rocket() -> Rocket<Build> {
    env_logger::init();

    let settings = read_settings().expect("Configuration error");
    build(settings).expect("Unable to build HTTP client")
}
