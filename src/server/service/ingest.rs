//! Multi-city ingestion.
//!
//! Each requested name is ensured as a city; cities created by the call are backfilled
//! over the configured window and their temperatures bulk inserted. Cities are handled
//! strictly one after another.

use sea_orm::DatabaseConnection;

use crate::server::{
    client::{GeoResolver, TemperatureFetcher},
    config::BackfillWindow,
    error::Error,
    service::{
        backfill::BackfillService,
        city::{CityService, EnsuredCity},
        temperature::TemperatureService,
    },
    util::date::days_in_range,
};

/// What happened to a single city during [`IngestService::ingest_cities`]
#[derive(Clone, Debug, PartialEq)]
pub enum CityIngestion {
    /// The city was already stored and was left untouched
    Existing {
        /// ID of the stored city
        city_id: i32,
    },
    /// The name could not be geocoded, nothing was stored
    GeoLookupFailed,
    /// The city was created and `stored` of `expected` days were persisted
    Backfilled {
        /// ID of the created city
        city_id: i32,
        /// Days persisted
        stored: usize,
        /// Days in the backfill window
        expected: u64,
    },
}

impl CityIngestion {
    /// Whether the city was created but the backfill stopped before the end of the window
    pub fn is_truncated(&self) -> bool {
        match self {
            Self::Backfilled {
                stored, expected, ..
            } => (*stored as u64) < *expected,
            Self::Existing { .. } | Self::GeoLookupFailed => false,
        }
    }
}

/// Ingests cities by name, backfilling the ones it creates
pub struct IngestService<'a> {
    db: &'a DatabaseConnection,
    geo_resolver: &'a GeoResolver,
    temperature_fetcher: &'a TemperatureFetcher,
    window: BackfillWindow,
}

impl<'a> IngestService<'a> {
    /// Creates a new instance of [`IngestService`]
    pub fn new(
        db: &'a DatabaseConnection,
        geo_resolver: &'a GeoResolver,
        temperature_fetcher: &'a TemperatureFetcher,
        window: BackfillWindow,
    ) -> Self {
        Self {
            db,
            geo_resolver,
            temperature_fetcher,
            window,
        }
    }

    /// Ingests each named city in order, one city at a time
    ///
    /// Unknown cities are geocoded, created, backfilled over the configured window and their
    /// temperatures bulk inserted. Known cities are skipped without being backfilled again.
    /// A city which fails to geocode is logged and skipped; a truncated backfill still
    /// persists what was fetched. The city row is committed before its temperatures, so a
    /// failure in between leaves a city without temperatures.
    ///
    /// # Returns
    /// - `Ok(Vec<CityIngestion>)` - One outcome per requested name, in request order
    /// - `Err(Error::DbErr)` - A database operation failed, cities after it were not processed
    pub async fn ingest_cities(&self, names: &[String]) -> Result<Vec<CityIngestion>, Error> {
        let city_service = CityService::new(self.db, self.geo_resolver);
        let backfill_service = BackfillService::new(self.temperature_fetcher);
        let temperature_service = TemperatureService::new(self.db);

        let mut outcomes = Vec::with_capacity(names.len());

        for name in names {
            let city = match city_service.ensure_city(name).await {
                Ok(EnsuredCity::Created(city)) => city,
                Ok(EnsuredCity::Existing(city)) => {
                    tracing::info!(city_id = %city.id, "The {} exists in DB.", name);

                    outcomes.push(CityIngestion::Existing { city_id: city.id });
                    continue;
                }
                Err(Error::GeoLookupError(e)) => {
                    tracing::error!("Skipping {}: {}", name, e);

                    outcomes.push(CityIngestion::GeoLookupFailed);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let records = backfill_service
                .backfill(
                    city.id,
                    city.lat,
                    city.lon,
                    self.window.start,
                    self.window.end,
                )
                .await;

            let stored = temperature_service
                .bulk_insert_temperatures(records)
                .await?
                .len();

            tracing::info!(city_id = %city.id, "The data of {} inserted.", name);

            outcomes.push(CityIngestion::Backfilled {
                city_id: city.id,
                stored,
                expected: days_in_range(self.window.start, self.window.end),
            });
        }

        Ok(outcomes)
    }
}
