//! Temperature persistence, single entries and backfill batches.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{city::CityRepository, temperature::TemperatureRepository},
    error::{city::CityError, Error},
    model::{db::TemperatureModel, temperature::TemperatureRecord},
};

/// Stores daily temperatures
pub struct TemperatureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TemperatureService<'a> {
    /// Creates a new instance of [`TemperatureService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a single day's temperature for the city with the exact provided name
    ///
    /// # Returns
    /// - `Ok(TemperatureModel)` - The created entry
    /// - `Err(Error::CityError)` - No city has the provided name
    /// - `Err(Error::DbErr)` - Database query or insert failed
    pub async fn add_temperature(
        &self,
        city_name: &str,
        date: NaiveDate,
        min: f64,
        max: f64,
    ) -> Result<TemperatureModel, Error> {
        let Some(city) = CityRepository::new(self.db).get_by_name(city_name).await? else {
            return Err(CityError::NotFound(city_name.to_string()).into());
        };

        let temperature = TemperatureRepository::new(self.db)
            .create(TemperatureRecord {
                city_id: city.id,
                date,
                min,
                max,
            })
            .await?;

        Ok(temperature)
    }

    /// Persists backfilled records in one batched write
    pub async fn bulk_insert_temperatures(
        &self,
        records: Vec<TemperatureRecord>,
    ) -> Result<Vec<TemperatureModel>, Error> {
        Ok(TemperatureRepository::new(self.db)
            .insert_many(records)
            .await?)
    }
}
