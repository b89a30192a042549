//! Environment based server configuration.

use std::net::SocketAddr;

use chrono::NaiveDate;

use crate::server::error::config::ConfigError;

/// Geocoding endpoint used when `GEOCODE_API_URL` is unset.
pub static DEFAULT_GEOCODE_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";
/// Weather history endpoint used when `WEATHER_API_URL` is unset.
pub static DEFAULT_WEATHER_API_URL: &str = "https://api.weatherbit.io/v2.0/history/daily";
static DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

const DEFAULT_BACKFILL_START: NaiveDate = ymd(2020, 12, 1);
const DEFAULT_BACKFILL_END: NaiveDate = ymd(2021, 2, 1);

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Range of days fetched for every newly created city, `end` is exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackfillWindow {
    /// First day fetched
    pub start: NaiveDate,
    /// Day after the last day fetched
    pub end: NaiveDate,
}

impl Default for BackfillWindow {
    /// 2020-12-01 (inclusive) through 2021-02-01 (exclusive)
    fn default() -> Self {
        Self {
            start: DEFAULT_BACKFILL_START,
            end: DEFAULT_BACKFILL_END,
        }
    }
}

/// Server configuration, built once at startup
#[derive(Debug)]
pub struct Config {
    /// Database connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Address the HTTP server listens on (`BIND_ADDRESS`)
    pub bind_address: SocketAddr,
    /// Geocoding endpoint (`GEOCODE_API_URL`)
    pub geocode_api_url: String,
    /// Geocoding API key (`GEOCODE_API_KEY`)
    pub geocode_api_key: String,
    /// Weather history endpoint (`WEATHER_API_URL`)
    pub weather_api_url: String,
    /// Weather history API key (`WEATHER_API_KEY`)
    pub weather_api_key: String,
    /// Days backfilled for new cities (`BACKFILL_START`, `BACKFILL_END`)
    pub backfill: BackfillWindow,
}

impl Config {
    /// Builds the configuration from environment variables
    ///
    /// Empty variables are treated as unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable is set and every value parsed
    /// - `Err(ConfigError::MissingEnvVar)` - A required variable is unset or empty
    /// - `Err(ConfigError::InvalidEnvValue)` - A date or bind address could not be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration reading each variable through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };
        let default_window = BackfillWindow::default();

        Ok(Self {
            database_url: env.required("DATABASE_URL")?,
            bind_address: env.parse_or("BIND_ADDRESS", DEFAULT_BIND_ADDRESS, |v| {
                v.parse::<SocketAddr>().map_err(|e| e.to_string())
            })?,
            geocode_api_url: env
                .optional("GEOCODE_API_URL")
                .unwrap_or_else(|| DEFAULT_GEOCODE_API_URL.to_string()),
            geocode_api_key: env.required("GEOCODE_API_KEY")?,
            weather_api_url: env
                .optional("WEATHER_API_URL")
                .unwrap_or_else(|| DEFAULT_WEATHER_API_URL.to_string()),
            weather_api_key: env.required("WEATHER_API_KEY")?,
            backfill: BackfillWindow {
                start: env.parse_date_or("BACKFILL_START", default_window.start)?,
                end: env.parse_date_or("BACKFILL_END", default_window.end)?,
            },
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, var: &str) -> Option<String> {
        (self.lookup)(var).filter(|v| !v.is_empty())
    }

    fn required(&self, var: &str) -> Result<String, ConfigError> {
        self.optional(var)
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    }

    fn parse_or<T, P>(&self, var: &str, default: &str, parse: P) -> Result<T, ConfigError>
    where
        P: FnOnce(&str) -> Result<T, String>,
    {
        let value = self.optional(var).unwrap_or_else(|| default.to_string());

        parse(&value).map_err(|reason| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason,
        })
    }

    fn parse_date_or(&self, var: &str, default: NaiveDate) -> Result<NaiveDate, ConfigError> {
        match self.optional(var) {
            Some(value) => parse_date(var, &value),
            None => Ok(default),
        }
    }
}

/// Parses an ISO `YYYY-MM-DD` date from the value of `var`
pub(crate) fn parse_date(var: &str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: format!("expected a YYYY-MM-DD date, got {:?}: {}", value, e),
    })
}
