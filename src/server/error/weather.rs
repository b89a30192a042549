//! Weather history provider errors.
//!
//! A `TemperatureFetchError` never escapes a backfill; it ends the day loop for the city
//! and whatever was fetched before it is still persisted.

use chrono::NaiveDate;
use reqwest::StatusCode;
use thiserror::Error;

/// Errors fetching a single day's temperatures
#[derive(Error, Debug)]
pub enum TemperatureFetchError {
    /// The request could not be sent or the response body could not be read.
    #[error("Temperature request for {day} failed: {source}")]
    Request {
        /// Day requested
        day: NaiveDate,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
    /// Non-success status, also returned by the provider for ranges longer than one day.
    #[error("Weather provider returned status {status} for {day}")]
    Status {
        /// Day requested
        day: NaiveDate,
        /// Status code returned by the provider
        status: StatusCode,
    },
    /// Success status with a payload missing the day's observation.
    #[error("Weather provider returned a malformed payload for {day}: {reason}")]
    Malformed {
        /// Day requested
        day: NaiveDate,
        /// Why the payload was rejected
        reason: String,
    },
}
