//! Geocoding provider client.

use serde::Deserialize;

use crate::server::error::geo::GeoLookupError;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

/// Resolves free-text addresses to coordinates using the geocoding provider
#[derive(Clone, Debug)]
pub struct GeoResolver {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeoResolver {
    /// Creates a new instance of [`GeoResolver`]
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `url` - Geocoding endpoint, queried with `address` & `key` parameters
    /// - `api_key` - Provider API key
    pub fn new(http: reqwest::Client, url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolves a city name to a `(latitude, longitude)` pair
    ///
    /// The first result returned by the provider is used.
    ///
    /// # Returns
    /// - `Ok((f64, f64))` - Latitude & longitude of the first result
    /// - `Err(GeoLookupError)` - Request failed, bad status, malformed payload or no results
    pub async fn resolve(&self, city_name: &str) -> Result<(f64, f64), GeoLookupError> {
        let response = self
            .http
            .get(&self.url)
            .query(&[("address", city_name), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| GeoLookupError::Request {
                city_name: city_name.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoLookupError::Status {
                city_name: city_name.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| GeoLookupError::Request {
                city_name: city_name.to_string(),
                source,
            })?;

        let geocode: GeocodeResponse =
            serde_json::from_slice(&body).map_err(|e| GeoLookupError::Malformed {
                city_name: city_name.to_string(),
                reason: e.to_string(),
            })?;

        let location = geocode
            .results
            .into_iter()
            .next()
            .map(|result| result.geometry.location)
            .ok_or_else(|| GeoLookupError::NoResults(city_name.to_string()))?;

        tracing::debug!(
            city_name = %city_name,
            lat = location.lat,
            lon = location.lng,
            "Resolved city coordinates"
        );

        Ok((location.lat, location.lng))
    }
}
