//! UrbanEye: city search and map viewer.
//!
//! A typed client for the Open-Meteo geocoding API, the search/selection
//! state flow behind the browser page, a tile layer catalog for the map,
//! and an embedded-asset web server that hosts the whole UI.

pub mod explorer;
pub mod geocoding;
pub mod map;
pub mod server;
