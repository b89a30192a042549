//! Temperature records in flight between the backfill and the database.

use chrono::NaiveDate;

/// A day's temperature for a city which has been fetched but not yet persisted
#[derive(Clone, Debug, PartialEq)]
pub struct TemperatureRecord {
    /// City the observation belongs to
    pub city_id: i32,
    /// Day of the observation
    pub date: NaiveDate,
    /// Minimum temperature of the day
    pub min: f64,
    /// Maximum temperature of the day
    pub max: f64,
}
