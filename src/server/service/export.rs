//! CSV export of every stored temperature alongside its city.

use csv::WriterBuilder;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::server::{data::temperature::TemperatureRepository, error::Error};

/// Header row of the CSV export
pub static EXPORT_HEADER: [&str; 6] = ["name", "date", "min", "max", "lat", "lon"];

#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    date: String,
    min: f64,
    max: f64,
    lat: f64,
    lon: f64,
}

/// Renders stored temperatures as CSV
pub struct ExportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExportService<'a> {
    /// Creates a new instance of [`ExportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renders every stored temperature joined with its city as CSV
    ///
    /// Columns follow [`EXPORT_HEADER`]. The header is always written, even without rows.
    /// Rows are ordered by city then date.
    pub async fn export_csv(&self) -> Result<Vec<u8>, Error> {
        let rows = TemperatureRepository::new(self.db)
            .get_all_with_city()
            .await?;

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());

        writer.write_record(EXPORT_HEADER)?;

        for (temperature, city) in &rows {
            // Foreign key guarantees a city, skip rather than fail should one be missing
            let Some(city) = city else {
                continue;
            };

            writer.serialize(ExportRow {
                name: &city.name,
                date: temperature.date.to_string(),
                min: temperature.min,
                max: temperature.max,
                lat: city.lat,
                lon: city.lon,
            })?;
        }

        writer.into_inner().map_err(|e| e.into_error().into())
    }
}
