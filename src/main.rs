use tempest::server::{
    config::Config, error::Error, model::app::AppState, router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(e) = run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let (geo_resolver, temperature_fetcher) = startup::build_provider_clients(&config);

    let router = router::routes().with_state(AppState {
        db,
        geo_resolver,
        temperature_fetcher,
        backfill: config.backfill,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!(
        "Starting server on {}, backfilling {} to {}",
        config.bind_address,
        config.backfill.start,
        config.backfill.end
    );

    axum::serve(listener, router).await?;

    Ok(())
}
