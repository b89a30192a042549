//! City & temperature database insertion utilities.

use chrono::{Days, NaiveDate};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::{city::CityFixtures, provider::factory::mock_temperature},
    model::{CityModel, TemperatureModel},
};

impl<'a> CityFixtures<'a> {
    /// Insert a city into the database.
    ///
    /// Always inserts a new row, even if a city with the same name exists.
    ///
    /// # Returns
    /// - `Ok(CityModel)` - The created city record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_city(
        &self,
        name: &str,
        lat: f64,
        lon: f64,
    ) -> Result<CityModel, TestError> {
        Ok(entity::prelude::City::insert(entity::city::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            lat: ActiveValue::Set(lat),
            lon: ActiveValue::Set(lon),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert `days` consecutive daily temperatures for a city starting at `start`.
    ///
    /// Temperatures are generated with [`mock_temperature`].
    ///
    /// # Returns
    /// - `Ok(Vec<TemperatureModel>)` - The created temperature records in date order
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_temperatures(
        &self,
        city_id: i32,
        start: NaiveDate,
        days: u64,
    ) -> Result<Vec<TemperatureModel>, TestError> {
        let mut temperatures = Vec::new();

        for offset in 0..days {
            let Some(date) = start.checked_add_days(Days::new(offset)) else {
                break;
            };
            let (min, max) = mock_temperature(date);

            let temperature = entity::prelude::Temperature::insert(
                entity::temperature::ActiveModel {
                    city_id: ActiveValue::Set(city_id),
                    date: ActiveValue::Set(date),
                    max: ActiveValue::Set(max),
                    min: ActiveValue::Set(min),
                    ..Default::default()
                },
            )
            .exec_with_returning(&self.setup.db)
            .await?;

            temperatures.push(temperature);
        }

        Ok(temperatures)
    }
}
