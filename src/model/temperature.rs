use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TemperatureDto {
    pub id: i32,
    pub city_id: i32,
    pub date: NaiveDate,
    pub max: f64,
    pub min: f64,
}

/// Request body for recording a single day's temperature for a city
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddTemperatureDto {
    /// Exact, case-sensitive name of an existing city
    pub city_name: String,
    pub date: NaiveDate,
    pub max: f64,
    pub min: f64,
}

impl From<entity::temperature::Model> for TemperatureDto {
    fn from(temperature: entity::temperature::Model) -> Self {
        Self {
            id: temperature.id,
            city_id: temperature.city_id,
            date: temperature.date,
            max: temperature.max,
            min: temperature.min,
        }
    }
}
