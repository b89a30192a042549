//! Test configuration constants for provider client setup.
//!
//! These values are not real credentials but placeholder values the mock endpoints
//! expect as query parameters.

/// Path of the mock geocoding endpoint on the test server.
pub static TEST_GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Path of the mock daily weather history endpoint on the test server.
pub static TEST_WEATHER_PATH: &str = "/v2.0/history/daily";

/// Mock geocoding API key. Not a real credential.
pub static TEST_GEOCODE_API_KEY: &str = "geocode_api_key";

/// Mock weather history API key. Not a real credential.
pub static TEST_WEATHER_API_KEY: &str = "weather_api_key";
