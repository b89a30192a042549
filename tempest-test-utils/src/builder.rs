//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use chrono::{Days, NaiveDate};
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, fixtures::provider::factory::mock_temperature, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixture cities, and mock provider endpoints. Methods can be chained together and
/// finalized with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_city_tables: bool,

    // Database fixtures to insert
    cities: Vec<(String, f64, f64)>, // (name, lat, lon)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    geocode_endpoints: Vec<(String, f64, f64, usize)>, // (city_name, lat, lng, expected_requests)
    geocode_no_results_endpoints: Vec<(String, usize)>,
    geocode_error_endpoints: Vec<(String, usize, usize)>, // (city_name, status, expected_requests)
    // (lat, lon, day, min, max, expected_requests)
    temperature_endpoints: Vec<(f64, f64, NaiveDate, f64, f64, usize)>,
    // (lat, lon, day, status, expected_requests)
    temperature_error_endpoints: Vec<(f64, f64, NaiveDate, usize, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_city_tables: false,
            cities: Vec::new(),
            mock_builders: Vec::new(),
            geocode_endpoints: Vec::new(),
            geocode_no_results_endpoints: Vec::new(),
            geocode_error_endpoints: Vec::new(),
            temperature_endpoints: Vec::new(),
            temperature_error_endpoints: Vec::new(),
        }
    }

    /// Add the city & temperature tables to the test database.
    pub fn with_city_tables(mut self) -> Self {
        self.include_city_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use tempest_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), tempest_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(City)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a city into the database.
    ///
    /// Requires the city table, see [`TestBuilder::with_city_tables`].
    pub fn with_mock_city(mut self, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.cities.push((name.into(), lat, lon));
        self
    }

    /// Add mock geocoding endpoint resolving `city_name` to `lat`/`lng`.
    ///
    /// The mock will verify it was called exactly `expected_requests` times.
    pub fn with_geocode_endpoint(
        mut self,
        city_name: impl Into<String>,
        lat: f64,
        lng: f64,
        expected_requests: usize,
    ) -> Self {
        self.geocode_endpoints
            .push((city_name.into(), lat, lng, expected_requests));
        self
    }

    /// Add mock geocoding endpoint which finds no results for `city_name`.
    pub fn with_geocode_endpoint_no_results(
        mut self,
        city_name: impl Into<String>,
        expected_requests: usize,
    ) -> Self {
        self.geocode_no_results_endpoints
            .push((city_name.into(), expected_requests));
        self
    }

    /// Add mock geocoding endpoint answering `status_code` for `city_name`.
    pub fn with_geocode_endpoint_error(
        mut self,
        city_name: impl Into<String>,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.geocode_error_endpoints
            .push((city_name.into(), status_code, expected_requests));
        self
    }

    /// Add mock weather history endpoint for a single day.
    pub fn with_temperature_endpoint(
        mut self,
        lat: f64,
        lon: f64,
        day: NaiveDate,
        min: f64,
        max: f64,
        expected_requests: usize,
    ) -> Self {
        self.temperature_endpoints
            .push((lat, lon, day, min, max, expected_requests));
        self
    }

    /// Add mock weather history endpoints for every day in `[start, end)`.
    ///
    /// Each day returns [`mock_temperature`] for that day and expects `expected_requests` calls.
    pub fn with_temperature_range_endpoints(
        mut self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
        expected_requests: usize,
    ) -> Self {
        let mut day = start;
        while day < end {
            let (min, max) = mock_temperature(day);
            self.temperature_endpoints
                .push((lat, lon, day, min, max, expected_requests));

            match day.checked_add_days(Days::new(1)) {
                Some(next) => day = next,
                None => break,
            }
        }
        self
    }

    /// Add mock weather history endpoint answering `status_code` for `day`.
    pub fn with_temperature_endpoint_error(
        mut self,
        lat: f64,
        lon: f64,
        day: NaiveDate,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.temperature_error_endpoints
            .push((lat, lon, day, status_code, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// Allows complete customization of mock endpoint behavior by providing direct access
    /// to the mockito ServerGuard. Use this for endpoints not covered by helper methods.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (city tables if specified, then custom tables)
    /// 2. Inserts database fixtures
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then provider shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_city_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::City),
                schema.create_table_from_entity(entity::prelude::Temperature),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (name, lat, lon) in self.cities {
            setup.city().insert_mock_city(&name, lat, lon).await?;
        }

        // 3. Create mock endpoints
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (city_name, lat, lng, expected) in self.geocode_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_geocode_endpoint(&city_name, lat, lng, expected),
            );
        }

        for (city_name, expected) in self.geocode_no_results_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_geocode_endpoint_no_results(&city_name, expected),
            );
        }

        for (city_name, status, expected) in self.geocode_error_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_geocode_endpoint_error(&city_name, status, expected),
            );
        }

        for (lat, lon, day, min, max, expected) in self.temperature_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_temperature_endpoint(lat, lon, day, min, max, expected),
            );
        }

        for (lat, lon, day, status, expected) in self.temperature_error_endpoints {
            mocks.push(
                setup
                    .provider()
                    .create_temperature_endpoint_error(lat, lon, day, status, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
