//! Tests for the add_temperature endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use sea_orm::{EntityTrait, PaginatorTrait};
use tempest::{
    model::temperature::AddTemperatureDto, server::controller::temperature::add_temperature,
};

use super::*;

/// Expect 200 with the stored temperature for an existing city
#[tokio::test]
async fn returns_temperature_for_existing_city() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let city = test.city().insert_mock_city("Oslo", 59.91, 10.75).await?;

    let result = add_temperature(
        State(test.into_app_state(window(date(2020, 12, 1), date(2021, 2, 1)))),
        Json(AddTemperatureDto {
            city_name: "Oslo".to_string(),
            date: date(2021, 1, 15),
            max: -1.5,
            min: -9.0,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["city_id"], city.id);
    assert_eq!(body["date"], "2021-01-15");
    assert_eq!(body["max"], -1.5);
    assert_eq!(body["min"], -9.0);

    Ok(())
}

/// Expect 404 City not found when no city has the name
#[tokio::test]
async fn returns_404_for_unknown_city() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_mock_city("Oslo", 59.91, 10.75)
        .build()
        .await?;

    let result = add_temperature(
        State(test.into_app_state(window(date(2020, 12, 1), date(2021, 2, 1)))),
        Json(AddTemperatureDto {
            city_name: "oslo".to_string(),
            date: date(2021, 1, 15),
            max: -1.5,
            min: -9.0,
        }),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "City not found" })
    );

    let temperature_count = entity::prelude::Temperature::find().count(&test.db).await?;
    assert_eq!(temperature_count, 0);

    Ok(())
}
