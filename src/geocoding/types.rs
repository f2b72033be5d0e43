//! Core types for the geocoding subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A city match returned by the geocoding API.
///
/// Held verbatim from the response. The record is immutable once received
/// and is replaced wholesale by the next search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub id: u64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code (e.g. "DE", "US")
    #[serde(default)]
    pub country_code: Option<String>,
    /// Admin region (state/province)
    #[serde(default)]
    pub admin1: Option<String>,
    /// Admin subregion (county/district)
    #[serde(default)]
    pub admin2: Option<String>,
    #[serde(default)]
    pub population: Option<u64>,
    /// IANA timezone name (e.g. "Europe/Berlin")
    #[serde(default)]
    pub timezone: Option<String>,
    /// Elevation above sea level in meters
    #[serde(default)]
    pub elevation: Option<f64>,
}

impl CityRecord {
    /// "Name, Country" as shown in the result list. Country is omitted
    /// when the record has none.
    pub fn label(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }

    /// Current wall-clock time in the record's timezone. None when the
    /// timezone field is absent or not a recognizable IANA name.
    pub fn local_time(&self) -> Option<String> {
        let tz: chrono_tz::Tz = self.timezone.as_deref()?.parse().ok()?;
        Some(chrono::Utc::now().with_timezone(&tz).format("%H:%M").to_string())
    }
}

/// Geocoding errors. The two user-visible conditions keep the exact
/// wording the page shows inline.
#[derive(Debug)]
pub enum GeocodeError {
    /// Query was empty or whitespace-only. No request is issued.
    EmptyQuery,
    Network(String),
    InvalidResponse(String),
    /// Upstream answered but matched nothing.
    NoResults(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyQuery => write!(f, "Please enter a city name."),
            Self::Network(msg) => write!(f, "Failed to fetch: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid API response: {}", msg),
            Self::NoResults(_) => write!(f, "No cities found."),
        }
    }
}

impl std::error::Error for GeocodeError {}
