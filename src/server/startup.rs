//! Startup helpers for the database connection and provider clients.

use sea_orm::DatabaseConnection;

use crate::server::{
    client::{GeoResolver, TemperatureFetcher},
    config::Config,
    error::Error,
};

/// Build the geocoding & weather history clients sharing one HTTP connection pool
///
/// No request timeout is configured; a hung provider call stalls the ingestion request
/// which issued it.
pub fn build_provider_clients(config: &Config) -> (GeoResolver, TemperatureFetcher) {
    let http = reqwest::Client::new();

    let geo_resolver = GeoResolver::new(
        http.clone(),
        &config.geocode_api_url,
        &config.geocode_api_key,
    );
    let temperature_fetcher = TemperatureFetcher::new(
        http,
        &config.weather_api_url,
        &config.weather_api_key,
    );

    (geo_resolver, temperature_fetcher)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}
