//! Provider payload factories.
//!
//! Builds JSON bodies shaped like the geocoding and weather history provider responses.

use chrono::{Datelike, NaiveDate};
use serde_json::{json, Value};

/// Deterministic `(min, max)` temperature for a day.
///
/// Varies by day of year so tests can tell which day a stored value came from.
pub fn mock_temperature(day: NaiveDate) -> (f64, f64) {
    let min = -10.0 + (day.ordinal0() % 15) as f64;
    let max = min + 8.5;

    (min, max)
}

/// Geocoding response with a single result at `lat`/`lng`.
pub fn geocode_body(lat: f64, lng: f64) -> Value {
    json!({
        "results": [
            {
                "geometry": {
                    "location": { "lat": lat, "lng": lng }
                }
            }
        ],
        "status": "OK"
    })
}

/// Geocoding response without any results.
pub fn geocode_body_no_results() -> Value {
    json!({
        "results": [],
        "status": "ZERO_RESULTS"
    })
}

/// Daily history response with a single observation.
pub fn temperature_body(min: f64, max: f64) -> Value {
    json!({
        "data": [
            { "min_temp": min, "max_temp": max }
        ]
    })
}
