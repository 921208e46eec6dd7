use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Fields {
    pub name: String,
    pub description: String,
    pub categorie: String,
    pub totalcapacity: i64,
    pub availablecapacity: i64,
}
