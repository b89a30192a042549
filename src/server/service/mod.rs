//! Service layer for business logic and orchestration.
//!
//! Services coordinate between repositories and the provider clients: idempotent city
//! creation, the day-by-day temperature backfill, multi-city ingestion, and export.

pub mod backfill;
pub mod city;
pub mod export;
pub mod ingest;
pub mod temperature;
