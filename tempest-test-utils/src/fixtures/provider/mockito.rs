//! Provider HTTP mock endpoint creation utilities.
//!
//! Mocks match on the query parameters the provider clients send, so a request for a
//! different city or day will not be served by them.

use chrono::{Days, NaiveDate};
use mockito::{Matcher, Mock};

use crate::{
    constant::{TEST_GEOCODE_API_KEY, TEST_GEOCODE_PATH, TEST_WEATHER_API_KEY, TEST_WEATHER_PATH},
    fixtures::provider::{
        factory::{geocode_body, geocode_body_no_results, temperature_body},
        ProviderFixtures,
    },
};

fn geocode_query(city_name: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("address".into(), city_name.into()),
        Matcher::UrlEncoded("key".into(), TEST_GEOCODE_API_KEY.into()),
    ])
}

fn temperature_query(lat: f64, lon: f64, day: NaiveDate) -> Matcher {
    let next_day = day
        .checked_add_days(Days::new(1))
        .map(|d| d.to_string())
        .unwrap_or_default();

    Matcher::AllOf(vec![
        Matcher::UrlEncoded("lat".into(), lat.to_string()),
        Matcher::UrlEncoded("lon".into(), lon.to_string()),
        Matcher::UrlEncoded("start_date".into(), day.to_string()),
        Matcher::UrlEncoded("end_date".into(), next_day),
        Matcher::UrlEncoded("key".into(), TEST_WEATHER_API_KEY.into()),
    ])
}

impl<'a> ProviderFixtures<'a> {
    /// Create a mock geocoding endpoint resolving `city_name` to `lat`/`lng`.
    ///
    /// # Arguments
    /// - `city_name` - Expected `address` query parameter
    /// - `lat` - Latitude of the single result
    /// - `lng` - Longitude of the single result
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_geocode_endpoint(
        &mut self,
        city_name: &str,
        lat: f64,
        lng: f64,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_GEOCODE_PATH)
            .match_query(geocode_query(city_name))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(geocode_body(lat, lng).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock geocoding endpoint returning no results for `city_name`.
    pub fn create_geocode_endpoint_no_results(
        &mut self,
        city_name: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_GEOCODE_PATH)
            .match_query(geocode_query(city_name))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(geocode_body_no_results().to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock geocoding endpoint that returns an error status code for `city_name`.
    pub fn create_geocode_endpoint_error(
        &mut self,
        city_name: &str,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_GEOCODE_PATH)
            .match_query(geocode_query(city_name))
            .with_status(status_code)
            .expect(expected_requests)
            .create()
    }

    /// Create a mock weather history endpoint for a single day at `lat`/`lon`.
    ///
    /// # Arguments
    /// - `lat` - Expected `lat` query parameter
    /// - `lon` - Expected `lon` query parameter
    /// - `day` - Expected `start_date`, `end_date` is expected to be the following day
    /// - `min` - Returned `min_temp`
    /// - `max` - Returned `max_temp`
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_temperature_endpoint(
        &mut self,
        lat: f64,
        lon: f64,
        day: NaiveDate,
        min: f64,
        max: f64,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_WEATHER_PATH)
            .match_query(temperature_query(lat, lon, day))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(temperature_body(min, max).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock weather history endpoint that returns an error status code for `day`.
    ///
    /// The provider answers `400` when asked for more than one day, `429` when rate limited.
    pub fn create_temperature_endpoint_error(
        &mut self,
        lat: f64,
        lon: f64,
        day: NaiveDate,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_WEATHER_PATH)
            .match_query(temperature_query(lat, lon, day))
            .with_status(status_code)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Only 1 day per request is allowed with this key."}"#)
            .expect(expected_requests)
            .create()
    }
}
