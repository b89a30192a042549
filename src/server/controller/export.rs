//! CSV export endpoint.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::api::ErrorDto,
    server::{error::Error, model::app::AppState, service::export::ExportService},
};

/// OpenAPI tag of the export endpoint
pub static EXPORT_TAG: &str = "export";

/// Export all temperatures with their city as CSV
///
/// Columns: `name,date,min,max,lat,lon`
#[utoipa::path(
    get,
    path = "/api/export",
    tag = EXPORT_TAG,
    responses(
        (status = 200, description = "CSV export", content_type = "text/csv", body = String),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let csv = ExportService::new(&state.db).export_csv().await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        csv,
    ))
}
