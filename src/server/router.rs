//! HTTP routing and OpenAPI documentation configuration.
//!
//! Defines the application's HTTP routes and generates OpenAPI documentation using utoipa.
//! Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/cities` - Ingest cities by name, backfilling temperatures for new ones
/// - `POST /api/city` - Store a city with known coordinates
/// - `POST /api/temperature` - Record a day's temperature for an existing city
/// - `GET /api/export` - Export all temperatures with their city as CSV
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, geo_resolver, temperature_fetcher, backfill };
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Tempest", description = "Tempest API"), tags(
        (name = controller::city::CITY_TAG, description = "City ingestion API routes"),
        (name = controller::temperature::TEMPERATURE_TAG, description = "Temperature API routes"),
        (name = controller::export::EXPORT_TAG, description = "Export API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::city::add_cities))
        .routes(routes!(controller::city::add_city))
        .routes(routes!(controller::temperature::add_temperature))
        .routes(routes!(controller::export::export))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
