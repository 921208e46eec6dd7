pub type Endpoint = str;
pub type Dataset = str;

pub const SEARCH: &Endpoint = "/api/records/1.0/search/";

pub const PARKINGS: &Dataset = "bezetting-parkeergarages-real-time";

/// Blue-bike station with a dataset of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BikeStation {
    pub id: u32,
    pub dataset: &'static Dataset,
}

pub const DAMPOORT: BikeStation = BikeStation {
    id: 1,
    dataset: "blue-bike-deelfietsen-gent-dampoort",
};

pub const SINT_PIETERS: BikeStation = BikeStation {
    id: 2,
    dataset: "blue-bike-deelfietsen-gent-sint-pieters-m-hendrikaplein",
};
