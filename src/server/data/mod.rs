//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations for cities and their
//! daily temperature observations.

pub mod city;
pub mod temperature;

#[cfg(test)]
mod tests;
