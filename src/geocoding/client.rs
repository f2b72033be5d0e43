//! HTTP client for the Open-Meteo geocoding search endpoint.

use super::types::{CityRecord, GeocodeError};
use serde::Deserialize;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://geocoding-api.open-meteo.com/v1/search";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = concat!("UrbanEye/", env!("CARGO_PKG_VERSION"));

/// Result limit the page asks for on every search.
pub const DEFAULT_COUNT: u32 = 20;

/// Upstream caps `count` at 100 and rejects 0.
const MAX_COUNT: u32 = 100;

/// The response envelope. A missing `results` list means no matches.
#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Option<Vec<CityRecord>>,
}

/// Client for the geocoding search endpoint.
pub struct GeocodingClient {
    endpoint: String,
    timeout: Duration,
}

impl GeocodingClient {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Point the client at a different endpoint (for testing).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    /// Search for cities matching `query`, returning at most `count`
    /// records verbatim from the API.
    ///
    /// An empty or whitespace-only query fails with `EmptyQuery` before
    /// any network traffic. An upstream answer with no matches is
    /// `NoResults`. Nothing is retried or cached.
    pub fn search(&self, query: &str, count: u32) -> Result<Vec<CityRecord>, GeocodeError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyQuery);
        }

        let url = format!(
            "{}?name={}&count={}",
            self.endpoint,
            urlencode(query),
            count.clamp(1, MAX_COUNT),
        );

        let response = ureq::get(&url)
            .set("User-Agent", USER_AGENT)
            .timeout(self.timeout)
            .call()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let body: SearchResponse = response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        match body.results {
            Some(results) if !results.is_empty() => Ok(results),
            _ => Err(GeocodeError::NoResults(query.to_string())),
        }
    }
}

impl Default for GeocodingClient {
    fn default() -> Self {
        Self::new()
    }
}

// ─── URL encoding (minimal, no extra dep) ───────────────────────

fn urlencode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            _ if b.is_ascii_alphanumeric() => out.push(b as char),
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens here; any attempted request fails immediately.
    fn unroutable_client() -> GeocodingClient {
        let mut client = GeocodingClient::with_endpoint("http://127.0.0.1:1/v1/search");
        client.set_timeout(Duration::from_millis(200));
        client
    }

    #[test]
    fn test_empty_query_no_network_call() {
        // The endpoint is unroutable: if a request were issued the error
        // would be Network, not EmptyQuery.
        let client = unroutable_client();
        assert!(matches!(client.search("", 20), Err(GeocodeError::EmptyQuery)));
        assert!(matches!(client.search("   \t ", 20), Err(GeocodeError::EmptyQuery)));
    }

    #[test]
    fn test_network_error_surfaces() {
        let client = unroutable_client();
        match client.search("Berlin", 20) {
            Err(GeocodeError::Network(_)) => {}
            other => panic!("expected Network error, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_envelope_with_results() {
        let body: SearchResponse = serde_json::from_str(
            r#"{"results": [{"id": 1, "name": "Berlin", "latitude": 52.5, "longitude": 13.4}],
                "generationtime_ms": 0.5}"#,
        )
        .unwrap();
        let results = body.results.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Berlin");
    }

    #[test]
    fn test_envelope_without_results_field() {
        // The API omits `results` entirely when nothing matches.
        let body: SearchResponse =
            serde_json::from_str(r#"{"generationtime_ms": 0.2}"#).unwrap();
        assert!(body.results.is_none());
    }

    #[test]
    fn test_envelope_empty_results_list() {
        let body: SearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert_eq!(body.results.unwrap().len(), 0);
    }

    #[test]
    fn test_urlencode_plain() {
        assert_eq!(urlencode("Berlin"), "Berlin");
        assert_eq!(urlencode("san-francisco_1.0~x"), "san-francisco_1.0~x");
    }

    #[test]
    fn test_urlencode_spaces_and_reserved() {
        assert_eq!(urlencode("New York"), "New%20York");
        assert_eq!(urlencode("a&b=c+d"), "a%26b%3Dc%2Bd");
    }

    #[test]
    fn test_urlencode_multibyte() {
        // UTF-8 bytes are encoded individually.
        assert_eq!(urlencode("São"), "S%C3%A3o");
        assert_eq!(urlencode("Tromsø"), "Troms%C3%B8");
    }
}
