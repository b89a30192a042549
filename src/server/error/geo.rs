//! Geocoding provider errors.
//!
//! A `GeoLookupError` aborts ingestion of the affected city entirely: no city row is
//! created and no temperatures are fetched for it.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors resolving a city name to coordinates
#[derive(Error, Debug)]
pub enum GeoLookupError {
    /// The request could not be sent or the response body could not be read.
    #[error("Geocoding request for {city_name:?} failed: {source}")]
    Request {
        /// Name which was being resolved
        city_name: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
    /// The provider answered with a non-success status code.
    #[error("Geocoding provider returned status {status} for {city_name:?}")]
    Status {
        /// Name which was being resolved
        city_name: String,
        /// Status code returned by the provider
        status: StatusCode,
    },
    /// The provider answered successfully but had no match for the address.
    #[error("Geocoding provider returned no results for {0:?}")]
    NoResults(String),
    /// The response body was not the expected JSON shape.
    #[error("Geocoding provider returned a malformed payload for {city_name:?}: {reason}")]
    Malformed {
        /// Name which was being resolved
        city_name: String,
        /// Why the payload was rejected
        reason: String,
    },
}
