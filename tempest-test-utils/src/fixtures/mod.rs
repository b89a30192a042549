//! Test fixture modules for database and HTTP mock creation.
//!
//! - `city` - City and temperature records
//! - `provider` - Geocoding & weather history mock endpoints and their payloads

pub mod city;
pub mod provider;
