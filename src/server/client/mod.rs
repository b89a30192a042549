//! Clients for the third-party providers the ingestion workflow depends on.
//!
//! Both clients take their endpoint and API key at construction time and share a single
//! `reqwest::Client`. Neither retries; callers decide how to react to failures.

pub mod geo;
pub mod weather;

pub use geo::GeoResolver;
pub use weather::TemperatureFetcher;
