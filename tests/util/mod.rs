//! Shared helpers for integration tests.

use chrono::NaiveDate;
use tempest::server::{
    client::{GeoResolver, TemperatureFetcher},
    config::BackfillWindow,
    model::app::AppState,
};
use tempest_test_utils::{
    constant::{TEST_GEOCODE_API_KEY, TEST_WEATHER_API_KEY},
    TestContext,
};

/// Extension trait for TestContext to build provider clients & application state
/// pointed at the mock provider server
pub trait TestContextExt {
    fn geo_resolver(&self) -> GeoResolver;
    fn temperature_fetcher(&self) -> TemperatureFetcher;
    fn into_app_state(&self, backfill: BackfillWindow) -> AppState;
}

impl TestContextExt for TestContext {
    fn geo_resolver(&self) -> GeoResolver {
        GeoResolver::new(
            reqwest::Client::new(),
            self.geocode_url(),
            TEST_GEOCODE_API_KEY,
        )
    }

    fn temperature_fetcher(&self) -> TemperatureFetcher {
        TemperatureFetcher::new(
            reqwest::Client::new(),
            self.weather_url(),
            TEST_WEATHER_API_KEY,
        )
    }

    fn into_app_state(&self, backfill: BackfillWindow) -> AppState {
        AppState {
            db: self.db.clone(),
            geo_resolver: self.geo_resolver(),
            temperature_fetcher: self.temperature_fetcher(),
            backfill,
        }
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Backfill window covering `[start, end)`
pub fn window(start: NaiveDate, end: NaiveDate) -> BackfillWindow {
    BackfillWindow { start, end }
}
