//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main tempest crate to ensure consistency across tests.

/// Type alias for city database model.
pub type CityModel = entity::city::Model;

/// Type alias for daily temperature database model.
pub type TemperatureModel = entity::temperature::Model;
