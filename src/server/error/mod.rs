//! Error types for the Tempest server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (configuration, city lookup, geocoding provider, weather provider). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic
//! error definitions with automatic `Display` and `Error` trait implementations.
//!
//! Weather provider errors stay inside the backfill loop and are not part of [`Error`].

pub mod city;
pub mod config;
pub mod geo;
pub mod weather;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{city::CityError, config::ConfigError, geo::GeoLookupError},
};

/// Main error type for the Tempest server application.
///
/// Aggregates all domain-specific error types and external library errors into a single
/// unified error type. `#[from]` enables conversion from the underlying errors via `?`,
/// and the `IntoResponse` implementation maps them to HTTP responses.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables, startup only)
/// - City errors (city missing from the database)
/// - Geocoding provider errors (address could not be resolved to coordinates)
/// - External library errors (database, CSV export, I/O)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// City lookup error (named city does not exist).
    #[error(transparent)]
    CityError(#[from] CityError),
    /// Geocoding provider failed to resolve a city name.
    #[error(transparent)]
    GeoLookupError(#[from] GeoLookupError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// CSV serialization error while exporting temperatures.
    #[error(transparent)]
    CsvError(#[from] csv::Error),
    /// I/O error (binding the listener, flushing export buffers).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For cities which don't exist
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CityError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
