//! Server application core modules.
//!
//! This module contains all server-side functionality for the Tempest application: HTTP
//! routing, configuration, database access, the geocoding & weather history provider
//! clients, and the city ingestion workflow which backfills daily temperatures.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
