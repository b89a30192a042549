//! Manual temperature entry endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        temperature::{AddTemperatureDto, TemperatureDto},
    },
    server::{error::Error, model::app::AppState, service::temperature::TemperatureService},
};

/// OpenAPI tag of the temperature endpoint
pub static TEMPERATURE_TAG: &str = "temperature";

/// Record a day's temperature for an existing city
#[utoipa::path(
    post,
    path = "/api/temperature",
    tag = TEMPERATURE_TAG,
    request_body = AddTemperatureDto,
    responses(
        (status = 200, description = "Temperature stored", body = TemperatureDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_temperature(
    State(state): State<AppState>,
    Json(payload): Json<AddTemperatureDto>,
) -> Result<impl IntoResponse, Error> {
    let temperature = TemperatureService::new(&state.db)
        .add_temperature(&payload.city_name, payload.date, payload.min, payload.max)
        .await?;

    Ok((StatusCode::OK, Json(TemperatureDto::from(temperature))))
}
