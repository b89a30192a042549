//! Weather history provider client.

use chrono::{Days, NaiveDate};
use serde::Deserialize;

use crate::server::error::weather::TemperatureFetchError;

#[derive(Debug, Deserialize)]
struct DailyHistoryResponse {
    data: Vec<DailyObservation>,
}

#[derive(Debug, Deserialize)]
struct DailyObservation {
    min_temp: f64,
    max_temp: f64,
}

/// Fetches a single day's minimum & maximum temperature from the weather history provider
///
/// The provider only accepts one day per request for the key tier in use, so every call
/// asks for exactly `[day, day + 1)`.
#[derive(Clone, Debug)]
pub struct TemperatureFetcher {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl TemperatureFetcher {
    /// Creates a new instance of [`TemperatureFetcher`]
    pub fn new(http: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Fetches `(min_temp, max_temp)` at the provided coordinates for `day`
    ///
    /// # Returns
    /// - `Ok((f64, f64))` - Minimum & maximum temperature of the day
    /// - `Err(TemperatureFetchError)` - Request failed, non-success status, or malformed payload
    pub async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
        day: NaiveDate,
    ) -> Result<(f64, f64), TemperatureFetchError> {
        let next_day = day
            .checked_add_days(Days::new(1))
            .ok_or_else(|| TemperatureFetchError::Malformed {
                day,
                reason: "day is the last representable date".to_string(),
            })?;

        let result = self.request(latitude, longitude, day, next_day).await;

        if let Err(e) = &result {
            tracing::error!(
                lat = latitude,
                lon = longitude,
                "Error on getting temperature data: {}",
                e
            );
        }

        result
    }

    async fn request(
        &self,
        latitude: f64,
        longitude: f64,
        day: NaiveDate,
        next_day: NaiveDate,
    ) -> Result<(f64, f64), TemperatureFetchError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("start_date", day.to_string()),
                ("end_date", next_day.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|source| TemperatureFetchError::Request { day, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TemperatureFetchError::Status { day, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| TemperatureFetchError::Request { day, source })?;

        let history: DailyHistoryResponse =
            serde_json::from_slice(&body).map_err(|e| TemperatureFetchError::Malformed {
                day,
                reason: e.to_string(),
            })?;

        let observation =
            history
                .data
                .into_iter()
                .next()
                .ok_or_else(|| TemperatureFetchError::Malformed {
                    day,
                    reason: "no observations in data".to_string(),
                })?;

        Ok((observation.min_temp, observation.max_temp))
    }
}
