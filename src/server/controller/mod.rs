//! HTTP controller endpoints for the Tempest web API.
//!
//! Axum handlers for city ingestion, manual city & temperature entry, and CSV export.
//! Controllers decode requests, call into services, and map results to HTTP responses.
//! Endpoints are documented for OpenAPI with utoipa.

pub mod city;
pub mod export;
pub mod temperature;
