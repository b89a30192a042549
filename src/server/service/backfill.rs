//! Day-by-day temperature backfill for a single city.
//!
//! The weather history provider answers one day per request, so a window of N days costs
//! N sequential requests. The first failed day ends the backfill.

use chrono::NaiveDate;

use crate::server::{
    client::TemperatureFetcher,
    model::temperature::TemperatureRecord,
    util::date::{date_range, days_in_range},
};

/// Walks a date window fetching one day at a time
pub struct BackfillService<'a> {
    temperature_fetcher: &'a TemperatureFetcher,
}

impl<'a> BackfillService<'a> {
    /// Creates a new instance of [`BackfillService`]
    pub fn new(temperature_fetcher: &'a TemperatureFetcher) -> Self {
        Self {
            temperature_fetcher,
        }
    }

    /// Fetches one temperature record per day of `[start, end)` for a city
    ///
    /// Days are fetched one request at a time in ascending order. The first failed fetch ends
    /// the backfill: the remaining days are abandoned and the records gathered so far are
    /// returned. A failure is never surfaced as an error, so a failure on the first day looks
    /// the same as an empty range; compare the length against [`days_in_range`] to tell them
    /// apart.
    ///
    /// # Arguments
    /// - `city_id` - ID of the city entry the records belong to
    /// - `latitude` / `longitude` - Coordinates of the city
    /// - `start` - First day to fetch
    /// - `end` - Exclusive end of the range
    ///
    /// # Returns
    /// Records ordered by strictly increasing date, none of them persisted yet
    pub async fn backfill(
        &self,
        city_id: i32,
        latitude: f64,
        longitude: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<TemperatureRecord> {
        let mut records = Vec::new();

        for day in date_range(start, end) {
            let (min, max) = match self.temperature_fetcher.fetch(latitude, longitude, day).await {
                Ok(temperature) => temperature,
                Err(_) => {
                    tracing::warn!(
                        city_id = %city_id,
                        "Backfill stopped at {} after {} of {} days",
                        day,
                        records.len(),
                        days_in_range(start, end)
                    );
                    break;
                }
            };

            tracing::debug!(city_id = %city_id, "Fetched temperature for {}", day);

            records.push(TemperatureRecord {
                city_id,
                date: day,
                min,
                max,
            });
        }

        records
    }
}
