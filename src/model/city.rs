use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// Request body for ingesting cities by name
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddCitiesDto {
    /// City names, processed in order
    pub cities: Vec<String>,
}

/// Request body for inserting a city with known coordinates
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddCityDto {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl From<entity::city::Model> for CityDto {
    fn from(city: entity::city::Model) -> Self {
        Self {
            id: city.id,
            name: city.name,
            lat: city.lat,
            lon: city.lon,
        }
    }
}
