//! Geocoding subsystem: the Open-Meteo search client and the city record
//! model it returns.

pub mod client;
pub mod format;
pub mod types;

pub use client::{GeocodingClient, DEFAULT_COUNT};
pub use format::{format_coords, format_elevation, format_population, format_region};
pub use types::{CityRecord, GeocodeError};
