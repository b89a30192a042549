//! Tests for the assembled router, sending requests through every layer.

use axum::http::{header, Method, Request, StatusCode};
use sea_orm::{EntityTrait, PaginatorTrait};
use tempest::server::router::routes;
use tower::ServiceExt;

use super::*;

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Expect ingestion, manual insertion & export to work through the router
#[tokio::test]
async fn ingests_and_exports_through_router() -> Result<(), TestError> {
    let start = date(2020, 12, 1);
    let end = date(2020, 12, 3);

    let test = TestBuilder::new()
        .with_city_tables()
        .with_geocode_endpoint("Springfield", 39.8, -89.6, 1)
        .with_temperature_range_endpoints(39.8, -89.6, start, end, 1)
        .build()
        .await?;
    let router = routes().with_state(test.into_app_state(window(start, end)));

    let resp = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/cities",
            serde_json::json!({ "cities": ["Springfield"] }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({ "success": true }));

    let resp = router
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/temperature",
            serde_json::json!({
                "city_name": "Springfield",
                "date": "2021-01-01",
                "min": -4.0,
                "max": 3.5
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = router
        .oneshot(
            Request::builder()
                .uri("/api/export")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("Springfield,2020-12-01,"));
    assert!(lines[2].starts_with("Springfield,2020-12-02,"));
    assert_eq!(lines[3], "Springfield,2021-01-01,-4.0,3.5,39.8,-89.6");

    test.assert_mocks();

    Ok(())
}

/// Expect a city posted with coordinates to be stored without geocoding
#[tokio::test]
async fn adds_city_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_city_tables()
        .with_geocode_endpoint("Oslo", 59.91, 10.75, 0)
        .build()
        .await?;
    let state = test.into_app_state(window(date(2020, 12, 1), date(2021, 2, 1)));
    let router = routes().with_state(state);

    let resp = router
        .oneshot(json_request(
            Method::POST,
            "/api/city",
            serde_json::json!({ "name": "Oslo", "lat": 59.91, "lon": 10.75 }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let city_count = entity::prelude::City::find().count(&test.db).await?;
    assert_eq!(city_count, 1);

    test.assert_mocks();

    Ok(())
}

/// Expect 404 with the error body for a temperature of an unknown city
#[tokio::test]
async fn returns_404_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new().with_city_tables().build().await?;
    let state = test.into_app_state(window(date(2020, 12, 1), date(2021, 2, 1)));
    let router = routes().with_state(state);

    let resp = router
        .oneshot(json_request(
            Method::POST,
            "/api/temperature",
            serde_json::json!({
                "city_name": "Atlantis",
                "date": "2021-01-01",
                "min": 10.0,
                "max": 20.0
            }),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "error": "City not found" })
    );

    Ok(())
}

/// Expect the OpenAPI document to list every route
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = test.into_app_state(window(date(2020, 12, 1), date(2021, 2, 1)));
    let router = routes().with_state(state);

    let resp = router
        .oneshot(
            Request::builder()
                .uri("/api/docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    for path in ["/api/cities", "/api/city", "/api/temperature", "/api/export"] {
        assert!(body["paths"].get(path).is_some(), "missing {}", path);
    }

    Ok(())
}
