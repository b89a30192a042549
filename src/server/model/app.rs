//! Application state shared with HTTP handlers.

use sea_orm::DatabaseConnection;

use crate::server::{
    client::{GeoResolver, TemperatureFetcher},
    config::BackfillWindow,
};

/// State cloned into every HTTP handler
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Client resolving city names to coordinates
    pub geo_resolver: GeoResolver,
    /// Client fetching a day's temperatures
    pub temperature_fetcher: TemperatureFetcher,
    /// Days backfilled for newly created cities
    pub backfill: BackfillWindow,
}
