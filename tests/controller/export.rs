//! Tests for the export endpoint.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use tempest::server::controller::export::export;

use super::*;

/// Expect 200 text/csv with only the header when nothing is stored
#[tokio::test]
async fn returns_header_only_when_empty() -> Result<(), TestError> {
    let test = TestBuilder::new().with_city_tables().build().await?;

    let result = export(State(
        test.into_app_state(window(date(2020, 12, 1), date(2021, 2, 1))),
    ))
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));

    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert_eq!(body, "name,date,min,max,lat,lon\n");

    Ok(())
}

/// Expect one row per stored temperature with its city's name & coordinates
#[tokio::test]
async fn returns_row_per_temperature() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_city_tables().build().await?;
    let city = test.city().insert_mock_city("Oslo", 59.91, 10.75).await?;
    test.city()
        .insert_mock_temperatures(city.id, date(2020, 12, 1), 3)
        .await?;

    let result = export(State(
        test.into_app_state(window(date(2020, 12, 1), date(2021, 2, 1))),
    ))
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "name,date,min,max,lat,lon");
    assert!(lines[1].starts_with("Oslo,2020-12-01,"));
    assert!(lines[3].starts_with("Oslo,2020-12-03,"));
    assert!(lines[1].ends_with(",59.91,10.75"));

    Ok(())
}

/// Expect 500 Internal Server Error when the database tables are missing
#[tokio::test]
async fn returns_500_on_database_error() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = export(State(
        test.into_app_state(window(date(2020, 12, 1), date(2021, 2, 1))),
    ))
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
