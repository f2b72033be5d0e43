//! Map tile catalog and viewport model.
//!
//! The page renders one of two interchangeable tile stacks: OpenStreetMap
//! street tiles, or Esri satellite imagery with a place-label overlay on
//! top. Switching the stack never moves the camera or touches the
//! selection.

use crate::geocoding::CityRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Initial world view of the page.
pub const WORLD_CENTER: (f64, f64) = (20.0, 0.0);
pub const WORLD_ZOOM: u8 = 2;
/// Zoom applied when the map recenters on a selected city.
pub const CITY_ZOOM: u8 = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileStyle {
    #[default]
    Street,
    Satellite,
}

impl fmt::Display for TileStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Street => write!(f, "street"),
            Self::Satellite => write!(f, "satellite"),
        }
    }
}

impl FromStr for TileStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "street" => Ok(Self::Street),
            "satellite" => Ok(Self::Satellite),
            other => Err(format!(
                "Unknown tile style '{}'. Use 'street' or 'satellite'.",
                other
            )),
        }
    }
}

/// One Leaflet tile source.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TileLayer {
    pub url_template: &'static str,
    pub attribution: &'static str,
    /// Rendered above the base imagery (place labels).
    pub overlay: bool,
}

const STREET_LAYERS: &[TileLayer] = &[TileLayer {
    url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
    attribution: "&copy; OpenStreetMap contributors",
    overlay: false,
}];

const SATELLITE_LAYERS: &[TileLayer] = &[
    TileLayer {
        url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "Tiles &copy; Esri",
        overlay: false,
    },
    TileLayer {
        url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/Reference/World_Boundaries_and_Places/MapServer/tile/{z}/{y}/{x}",
        attribution: "Labels &copy; Esri",
        overlay: true,
    },
];

/// The tile stack for a style, base layer first.
pub fn tile_layers(style: TileStyle) -> &'static [TileLayer] {
    match style {
        TileStyle::Street => STREET_LAYERS,
        TileStyle::Satellite => SATELLITE_LAYERS,
    }
}

/// A map camera position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub lat: f64,
    pub lon: f64,
    pub zoom: u8,
}

impl Viewport {
    pub fn world() -> Self {
        Self {
            lat: WORLD_CENTER.0,
            lon: WORLD_CENTER.1,
            zoom: WORLD_ZOOM,
        }
    }

    pub fn of_city(city: &CityRecord) -> Self {
        Self {
            lat: city.latitude,
            lon: city.longitude,
            zoom: CITY_ZOOM,
        }
    }
}
