use crate::geocoding::GeocodingClient;

pub struct AppState {
    pub client: GeocodingClient,
}
