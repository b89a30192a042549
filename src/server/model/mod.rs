//! Server application models and type definitions.
//!
//! Contains the application state shared with HTTP handlers, database model type aliases,
//! and the in-flight temperature records produced by backfills.

pub mod app;
pub mod db;
pub mod temperature;
