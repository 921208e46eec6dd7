use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Fields {
    pub name: String,
    pub bikes_available: u32,
    pub bikes_in_use: u32,
}
