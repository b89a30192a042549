//! City lookup errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors looking up a city by name
#[derive(Error, Debug)]
pub enum CityError {
    /// No city has the exact name
    #[error("City {0:?} not found in database")]
    NotFound(String),
}

impl IntoResponse for CityError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(ref name) => {
                tracing::debug!(city_name = %name, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "City not found".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
