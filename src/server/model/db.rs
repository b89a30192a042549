//! Database model type aliases.
//!
//! Convenient type aliases for SeaORM database entity models used throughout the
//! application, so signatures don't need to reach into the generated `entity` crate.

/// Type alias for city database model.
///
/// # Fields (from `entity::city::Model`)
/// - `id` - Primary key
/// - `name` - City name as requested for ingestion, matched exactly
/// - `lat` - Latitude resolved by the geocoding provider
/// - `lon` - Longitude resolved by the geocoding provider
pub type CityModel = entity::city::Model;

/// Type alias for daily temperature database model.
///
/// # Fields (from `entity::temperature::Model`)
/// - `id` - Primary key
/// - `city_id` - Foreign key to the city the observation belongs to
/// - `date` - Calendar day of the observation
/// - `max` - Maximum temperature of the day
/// - `min` - Minimum temperature of the day
pub type TemperatureModel = entity::temperature::Model;
