//! Idempotent city creation keyed by exact name.

use sea_orm::DatabaseConnection;

use crate::server::{
    client::GeoResolver, data::city::CityRepository, error::Error, model::db::CityModel,
};

/// Outcome of [`CityService::ensure_city`]
#[derive(Clone, Debug, PartialEq)]
pub enum EnsuredCity {
    /// A city with the exact name was already stored, no geocoding was done
    Existing(CityModel),
    /// The city was geocoded and inserted
    Created(CityModel),
}

/// Ensures cities exist, geocoding unknown names
pub struct CityService<'a> {
    db: &'a DatabaseConnection,
    geo_resolver: &'a GeoResolver,
}

impl<'a> CityService<'a> {
    /// Creates a new instance of [`CityService`]
    pub fn new(db: &'a DatabaseConnection, geo_resolver: &'a GeoResolver) -> Self {
        Self { db, geo_resolver }
    }

    /// Get a city by exact name, geocoding & creating it if it doesn't exist
    ///
    /// The existence check and the insert are not isolated from one another; two callers
    /// ensuring the same new name at once can both create a row.
    ///
    /// # Returns
    /// - `Ok(EnsuredCity::Existing)` - City already present, the geocoding provider was not called
    /// - `Ok(EnsuredCity::Created)` - City geocoded & inserted
    /// - `Err(Error::GeoLookupError)` - Name could not be geocoded, no city was created
    /// - `Err(Error::DbErr)` - Database query or insert failed
    pub async fn ensure_city(&self, name: &str) -> Result<EnsuredCity, Error> {
        let city_repo = CityRepository::new(self.db);

        if let Some(city) = city_repo.get_by_name(name).await? {
            return Ok(EnsuredCity::Existing(city));
        }

        let (lat, lon) = self.geo_resolver.resolve(name).await?;

        let city = city_repo.create(name.to_string(), lat, lon).await?;

        Ok(EnsuredCity::Created(city))
    }
}
