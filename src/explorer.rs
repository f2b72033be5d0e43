//! The search/selection flow behind the page.
//!
//! One status value for the results panel, one optional selection for the
//! info card and marker, one tile style for the map. A new search replaces
//! everything; the tile toggle touches nothing else.

use crate::geocoding::{CityRecord, GeocodeError, GeocodingClient};
use crate::map::{TileStyle, Viewport};

/// What the results panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Error(String),
    Results(Vec<CityRecord>),
}

impl Default for SearchStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// The page's state: current search outcome, selected city, tile style.
#[derive(Debug, Default)]
pub struct Explorer {
    status: SearchStatus,
    selected: Option<CityRecord>,
    tile_style: TileStyle,
}

impl Explorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search. Previous results and selection are discarded.
    ///
    /// A blank query sets the inline error and returns false, in which
    /// case no request may be issued.
    pub fn begin_search(&mut self, query: &str) -> bool {
        self.selected = None;
        if query.trim().is_empty() {
            self.status = SearchStatus::Error(GeocodeError::EmptyQuery.to_string());
            return false;
        }
        self.status = SearchStatus::Loading;
        true
    }

    /// Apply the outcome of the geocoding call.
    pub fn finish_search(&mut self, outcome: Result<Vec<CityRecord>, GeocodeError>) {
        self.status = match outcome {
            Ok(results) => SearchStatus::Results(results),
            Err(e) => SearchStatus::Error(e.to_string()),
        };
    }

    /// Run a full search against `client`. Skips the network call when
    /// the query is refused.
    pub fn search(&mut self, client: &GeocodingClient, query: &str, count: u32) {
        if self.begin_search(query) {
            self.finish_search(client.search(query, count));
        }
    }

    /// Select a city from the current results by id. False when there are
    /// no results or the id is not among them.
    pub fn select(&mut self, id: u64) -> bool {
        let SearchStatus::Results(ref results) = self.status else {
            return false;
        };
        match results.iter().find(|c| c.id == id) {
            Some(city) => {
                self.selected = Some(city.clone());
                true
            }
            None => false,
        }
    }

    /// The info card's close button.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Swap the tile source. Status, selection and viewport are untouched.
    pub fn set_tile_style(&mut self, style: TileStyle) {
        self.tile_style = style;
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn results(&self) -> &[CityRecord] {
        match &self.status {
            SearchStatus::Results(r) => r,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<&CityRecord> {
        self.selected.as_ref()
    }

    pub fn tile_style(&self) -> TileStyle {
        self.tile_style
    }

    /// Where the map camera sits: the selected city at city zoom, else
    /// the initial world view.
    pub fn viewport(&self) -> Viewport {
        match &self.selected {
            Some(city) => Viewport::of_city(city),
            None => Viewport::world(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::CITY_ZOOM;

    fn city(id: u64, name: &str, lat: f64, lon: f64) -> CityRecord {
        serde_json::from_str(&format!(
            r#"{{"id": {}, "name": "{}", "latitude": {}, "longitude": {}, "country": "Testland"}}"#,
            id, name, lat, lon
        ))
        .unwrap()
    }

    fn with_results(cities: Vec<CityRecord>) -> Explorer {
        let mut explorer = Explorer::new();
        assert!(explorer.begin_search("test"));
        explorer.finish_search(Ok(cities));
        explorer
    }

    #[test]
    fn test_starts_idle() {
        let explorer = Explorer::new();
        assert_eq!(*explorer.status(), SearchStatus::Idle);
        assert!(explorer.selected().is_none());
        assert_eq!(explorer.tile_style(), TileStyle::Street);
        assert_eq!(explorer.viewport(), Viewport::world());
    }

    #[test]
    fn test_blank_query_sets_error_and_refuses() {
        let mut explorer = Explorer::new();
        assert!(!explorer.begin_search("   "));
        assert_eq!(
            *explorer.status(),
            SearchStatus::Error("Please enter a city name.".into())
        );
    }

    #[test]
    fn test_blank_query_discards_previous_state() {
        let mut explorer = with_results(vec![city(1, "Berlin", 52.5, 13.4)]);
        assert!(explorer.select(1));

        assert!(!explorer.begin_search(""));
        assert!(explorer.selected().is_none());
        assert!(explorer.results().is_empty());
    }

    #[test]
    fn test_successful_search_populates_and_clears_error() {
        let mut explorer = Explorer::new();
        explorer.begin_search("   ");
        assert!(matches!(explorer.status(), SearchStatus::Error(_)));

        assert!(explorer.begin_search("berlin"));
        assert_eq!(*explorer.status(), SearchStatus::Loading);
        explorer.finish_search(Ok(vec![city(1, "Berlin", 52.5, 13.4)]));
        assert_eq!(explorer.results().len(), 1);
        assert_eq!(explorer.results()[0].name, "Berlin");
    }

    #[test]
    fn test_no_results_shows_message() {
        let mut explorer = Explorer::new();
        explorer.begin_search("qqqq");
        explorer.finish_search(Err(GeocodeError::NoResults("qqqq".into())));
        assert_eq!(*explorer.status(), SearchStatus::Error("No cities found.".into()));
    }

    #[test]
    fn test_fetch_failure_shows_message() {
        let mut explorer = Explorer::new();
        explorer.begin_search("berlin");
        explorer.finish_search(Err(GeocodeError::Network("connection refused".into())));
        match explorer.status() {
            SearchStatus::Error(msg) => assert!(msg.starts_with("Failed to fetch:")),
            other => panic!("expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_select_updates_selection_and_viewport() {
        let mut explorer = with_results(vec![
            city(1, "Berlin", 52.5, 13.4),
            city(2, "Bern", 46.9, 7.4),
        ]);

        assert!(explorer.select(2));
        let selected = explorer.selected().unwrap();
        assert_eq!(selected.name, "Bern");

        let vp = explorer.viewport();
        assert!((vp.lat - 46.9).abs() < 1e-9);
        assert!((vp.lon - 7.4).abs() < 1e-9);
        assert_eq!(vp.zoom, CITY_ZOOM);
    }

    #[test]
    fn test_select_unknown_id() {
        let mut explorer = with_results(vec![city(1, "Berlin", 52.5, 13.4)]);
        assert!(!explorer.select(99));
        assert!(explorer.selected().is_none());
    }

    #[test]
    fn test_select_without_results() {
        let mut explorer = Explorer::new();
        assert!(!explorer.select(1));
    }

    #[test]
    fn test_clear_selection_keeps_results() {
        let mut explorer = with_results(vec![city(1, "Berlin", 52.5, 13.4)]);
        explorer.select(1);
        explorer.clear_selection();
        assert!(explorer.selected().is_none());
        assert_eq!(explorer.results().len(), 1);
        assert_eq!(explorer.viewport(), Viewport::world());
    }

    #[test]
    fn test_tile_toggle_preserves_selection_and_viewport() {
        let mut explorer = with_results(vec![city(1, "Berlin", 52.5, 13.4)]);
        explorer.select(1);
        let before = explorer.viewport();

        explorer.set_tile_style(TileStyle::Satellite);
        assert_eq!(explorer.tile_style(), TileStyle::Satellite);
        assert_eq!(explorer.selected().unwrap().id, 1);
        assert_eq!(explorer.viewport(), before);
        assert_eq!(explorer.results().len(), 1);

        explorer.set_tile_style(TileStyle::Street);
        assert_eq!(explorer.selected().unwrap().id, 1);
    }

    #[test]
    fn test_new_search_discards_selection() {
        let mut explorer = with_results(vec![city(1, "Berlin", 52.5, 13.4)]);
        explorer.select(1);

        assert!(explorer.begin_search("paris"));
        assert!(explorer.selected().is_none());
        assert_eq!(*explorer.status(), SearchStatus::Loading);
    }
}
