//! Server-rendered pages.
//!
//! Templates are named `*.html` so minijinja escapes every interpolated value.

use crate::api::endpoint;
use crate::model::{Band, Parking, Percentage, Station};
use crate::Error;
use minijinja::{context, Environment, Value};
use serde::Serialize;

pub const TITLE: &str = "Gent Realtime";
pub const DESCRIPTION: &str = "Realtime Occupation of Blue-bikes and Parking Spots in Gent";

/// How long the "Copied to Clipboard" toast stays up.
pub const TOAST_MILLIS: u32 = 3000;

const DAMPOORT_IMAGE: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/e/ee/Station_Gent-Dampoort_-_Foto_2.JPG/1920px-Station_Gent-Dampoort_-_Foto_2.JPG";
const SINT_PIETERS_IMAGE: &str = "https://visit.gent.be/sites/default/files/styles/photo_large/public/images-article/Sint-Pietersstation_gent1.jpg?itok=D6l-4mP1";

const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../templates/layout.html.jinja")),
    ("macros.html", include_str!("../templates/macros.html.jinja")),
    ("index.html", include_str!("../templates/index.html.jinja")),
    ("bikes.html", include_str!("../templates/bikes.html.jinja")),
    ("parkings.html", include_str!("../templates/parkings.html.jinja")),
    (
        "parking_detail.html",
        include_str!("../templates/parking_detail.html.jinja"),
    ),
    ("error.html", include_str!("../templates/error.html.jinja")),
];

impl Band {
    pub fn css_class(self) -> &'static str {
        match self {
            Band::Low => "bg-red-600 dark:bg-red-500",
            Band::Medium => "bg-yellow-400 dark:bg-yellow-500",
            Band::High => "bg-green-600 dark:bg-green-500",
        }
    }
}

fn band_class(percentage: Percentage) -> String {
    Band::from_percentage(percentage).css_class().to_string()
}

fn encode_uri(text: String) -> String {
    urlencoding::encode(&text).into_owned()
}

fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        env.add_template(name, source)?;
    }
    env.add_filter("band_class", band_class);
    env.add_filter("encode_uri", encode_uri);
    env.add_global("title", TITLE);
    env.add_global("description", DESCRIPTION);
    env.add_global("toast_millis", TOAST_MILLIS);
    Ok(env)
}

fn render_error(name: &str, e: minijinja::Error) -> Error {
    log::warn!("Unable to render {}: {:#}", name, e);
    Error::RenderError(e.to_string())
}

fn render(name: &str, ctx: Value) -> Result<String, Error> {
    let env = environment().map_err(|e| render_error(name, e))?;
    let html = env
        .get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|e| render_error(name, e))?;
    Ok(html)
}

pub fn index() -> Result<String, Error> {
    render("index.html", context! {})
}

#[derive(Serialize)]
struct StationCard<'a> {
    station: &'a Station,
    image: Option<&'static str>,
}

fn station_image(station: &Station) -> Option<&'static str> {
    match station.id {
        id if id == endpoint::DAMPOORT.id => Some(DAMPOORT_IMAGE),
        id if id == endpoint::SINT_PIETERS.id => Some(SINT_PIETERS_IMAGE),
        _ => None,
    }
}

pub fn bikes(stations: &[Station]) -> Result<String, Error> {
    let stations: Vec<StationCard> = stations
        .iter()
        .map(|station| StationCard {
            station,
            image: station_image(station),
        })
        .collect();

    render("bikes.html", context! { stations })
}

/// Detail of the parking with `id`, looked up in the list the caller already loaded.
pub fn parking_detail(parkings: &[Parking], id: &str) -> Result<String, Error> {
    let parking = crate::find_parking(parkings, id);
    render("parking_detail.html", context! { parking })
}

/// Parking list with, when `selected` is set, the detail of that parking next to it.
pub fn parkings(parkings: &[Parking], selected: Option<&str>) -> Result<String, Error> {
    let parking = selected.and_then(|id| crate::find_parking(parkings, id));
    render("parkings.html", context! { parkings, selected, parking })
}

/// Error page. `detail` is shown to the user, so pass only what may be exposed.
pub fn error(heading: &str, detail: Option<&str>) -> Result<String, Error> {
    render("error.html", context! { heading, detail })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::Coordinates;

    fn parking(name: &str, percentage: Percentage) -> Parking {
        Parking {
            id: name.to_string(),
            name: name.to_string(),
            description: format!("Ondergrondse parkeergarage {}", name),
            category: "Parking Garage".to_string(),
            total_capacity: 100,
            available_capacity: i64::from(percentage),
            available_capacity_percentage: percentage,
            coordinates: Coordinates {
                latitude: 51.0570371,
                longitude: 3.7255188,
            },
        }
    }

    fn station(id: u32, name: &str) -> Station {
        Station {
            id,
            name: name.to_string(),
            available_bikes: 5,
            available_bikes_percentage: 25,
            total_bikes: 20,
        }
    }

    #[test]
    fn bar_colour_follows_band() {
        let parkings = vec![
            parking("P01 Vrijdagmarkt", 33),
            parking("P02 Reep", 66),
            parking("P04 Savaanstraat", 67),
        ];
        let low = parking_detail(&parkings, "P01 Vrijdagmarkt").unwrap();
        let medium = parking_detail(&parkings, "P02 Reep").unwrap();
        let high = parking_detail(&parkings, "P04 Savaanstraat").unwrap();
        assert!(low.contains("bg-red-600"));
        assert!(medium.contains("bg-yellow-400"));
        assert!(high.contains("bg-green-600"));
        assert!(!high.contains("bg-red-600"));
    }

    #[test]
    fn bar_width_and_label() {
        let html = bikes(&[station(1, "Station Gent-Dampoort")]).unwrap();
        assert!(html.contains("width: 25%"));
        assert!(html.contains(">5/20<"));
    }

    #[test]
    fn detail_unknown_id_renders_not_found() {
        let parkings = vec![parking("P01 Vrijdagmarkt", 21)];
        let html = parking_detail(&parkings, "P99 Nergens").unwrap();
        assert!(html.contains("Parking Not Found"));
        assert!(!html.contains("<iframe"));
    }

    #[test]
    fn detail_embeds_map_at_coordinates() {
        let parkings = vec![parking("P01 Vrijdagmarkt", 21)];
        let html = parking_detail(&parkings, "P01 Vrijdagmarkt").unwrap();
        assert!(html.contains("Ondergrondse parkeergarage P01 Vrijdagmarkt"));
        assert!(html.contains("Category: Parking Garage"));
        assert!(html.contains("maps.google.com/maps?q=51.0570371,3.7255188"));
        assert!(html.contains("query=P01%20Vrijdagmarkt"));
    }

    #[test]
    fn parkings_without_selection_asks_to_select() {
        let parkings = vec![parking("P01 Vrijdagmarkt", 21)];
        let html = super::parkings(&parkings, None).unwrap();
        assert!(html.contains("Select a Parking to View Details"));
        assert!(html.contains(r#"href="/parkings/P01%20Vrijdagmarkt""#));
        assert!(!html.contains("shadow selectedParking"));
    }

    #[test]
    fn parkings_highlights_selection() {
        let parkings = vec![parking("P01 Vrijdagmarkt", 21), parking("P02 Reep", 80)];
        let html = super::parkings(&parkings, Some("P02 Reep")).unwrap();
        assert_eq!(1, html.matches("shadow selectedParking").count());
        assert!(html.contains("Ondergrondse parkeergarage P02 Reep"));
    }

    #[test]
    fn parkings_unknown_selection_renders_not_found() {
        let parkings = vec![parking("P01 Vrijdagmarkt", 21)];
        let html = super::parkings(&parkings, Some("P99 Nergens")).unwrap();
        assert!(html.contains("Parking Not Found"));
        assert!(html.contains("P01 Vrijdagmarkt"));
    }

    #[test]
    fn bikes_page_has_copy_action_and_toast_timer() {
        let html = bikes(&[station(1, "Station Gent-Dampoort")]).unwrap();
        assert!(html.contains(r#"data-name="Station Gent-Dampoort""#));
        assert!(html.contains("Copy Station Name"));
        assert!(html.contains("setTimeout(dismissToast, 3000)"));
    }

    #[test]
    fn station_images_follow_station_table() {
        let dampoort = station(endpoint::DAMPOORT.id, "Station Gent-Dampoort");
        let sint_pieters = station(endpoint::SINT_PIETERS.id, "Station Gent-St. P.");
        let unknown = station(99, "Station Elders");
        assert_eq!(Some(DAMPOORT_IMAGE), station_image(&dampoort));
        assert_eq!(Some(SINT_PIETERS_IMAGE), station_image(&sint_pieters));
        assert_eq!(None, station_image(&unknown));

        let html = bikes(&[unknown]).unwrap();
        assert!(!html.contains("<img"));
    }

    #[test]
    fn upstream_text_is_escaped() {
        let parkings = vec![parking("<script>alert(1)</script>", 50)];
        let html = super::parkings(&parkings, Some("<script>alert(1)</script>")).unwrap();
        assert!(!html.contains("<script>alert(1)"));
        assert!(html.contains("&lt;script&gt;alert(1)"));
    }

    #[test]
    fn index_page_carries_title_and_description() {
        let html = index().unwrap();
        assert!(html.contains("<title>Gent Realtime</title>"));
        assert!(html.contains(DESCRIPTION));
        assert!(html.contains("Using Gent Open Data Portaal"));
    }

    #[test]
    fn error_page_escapes_detail() {
        let html = error("429 Too Many Requests", Some("<b>slow down</b>")).unwrap();
        assert!(html.contains("429 Too Many Requests"));
        assert!(html.contains("&lt;b&gt;slow down"));
        assert!(!html.contains("<b>"));
    }
}
