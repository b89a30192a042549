//! City ingestion & manual city entry endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        city::{AddCitiesDto, AddCityDto, CityDto},
    },
    server::{
        data::city::CityRepository, error::Error, model::app::AppState,
        service::ingest::{CityIngestion, IngestService},
    },
};

/// OpenAPI tag of the city endpoints
pub static CITY_TAG: &str = "city";

/// Ingest cities by name
///
/// Each unknown city is geocoded, stored, and backfilled with daily temperatures over the
/// configured window. Cities already stored are skipped.
///
/// Responds with success once every city has been visited, including when some cities
/// could not be geocoded or their backfill was cut short by the weather provider; check the
/// logs or exported data to find out about partial results.
#[utoipa::path(
    post,
    path = "/api/cities",
    tag = CITY_TAG,
    request_body = AddCitiesDto,
    responses(
        (status = 200, description = "Every city was visited", body = SuccessDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_cities(
    State(state): State<AppState>,
    Json(payload): Json<AddCitiesDto>,
) -> Result<impl IntoResponse, Error> {
    let ingest_service = IngestService::new(
        &state.db,
        &state.geo_resolver,
        &state.temperature_fetcher,
        state.backfill,
    );

    let outcomes = ingest_service.ingest_cities(&payload.cities).await?;

    let skipped = outcomes
        .iter()
        .filter(|outcome| matches!(outcome, CityIngestion::GeoLookupFailed))
        .count();
    let truncated = outcomes
        .iter()
        .filter(|outcome| outcome.is_truncated())
        .count();

    tracing::debug!(
        requested = outcomes.len(),
        skipped,
        truncated,
        "Ingested cities"
    );

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}

/// Store a city with known coordinates
///
/// No geocoding and no existence check is performed.
#[utoipa::path(
    post,
    path = "/api/city",
    tag = CITY_TAG,
    request_body = AddCityDto,
    responses(
        (status = 200, description = "City stored", body = CityDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_city(
    State(state): State<AppState>,
    Json(payload): Json<AddCityDto>,
) -> Result<impl IntoResponse, Error> {
    let city = CityRepository::new(&state.db)
        .create(payload.name, payload.lat, payload.lon)
        .await?;

    Ok((StatusCode::OK, Json(CityDto::from(city))))
}
