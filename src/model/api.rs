use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response of operations which only report completion
///
/// Ingestion always answers with `success: true` once every requested city has been
/// visited, even if some cities failed to geocode or had their backfill cut short.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SuccessDto {
    pub success: bool,
}
