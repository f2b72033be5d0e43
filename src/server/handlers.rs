use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

use crate::geocoding::{CityRecord, GeocodeError, DEFAULT_COUNT};
use crate::map::{self, TileStyle, Viewport, CITY_ZOOM};

use super::state::AppState;
use super::static_files;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── Static file handlers ────────────────────────────────────────

pub async fn index() -> Html<&'static str> {
    Html(static_files::INDEX_HTML)
}

pub async fn style() -> Response {
    (
        [(header::CONTENT_TYPE, "text/css")],
        static_files::STYLE_CSS,
    )
        .into_response()
}

pub async fn script() -> Response {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        static_files::APP_JS,
    )
        .into_response()
}

// ─── GET /api/search ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub count: Option<u32>,
}

#[derive(Serialize)]
pub struct SearchResults {
    pub results: Vec<CityRecord>,
}

pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<SearchResults>, ApiError> {
    let start = Instant::now();

    let query = params.query.as_deref().unwrap_or("").trim();
    if query.is_empty() {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            GeocodeError::EmptyQuery.to_string(),
        ));
    }
    let count = params.count.unwrap_or(DEFAULT_COUNT);

    let results = state.client.search(query, count).map_err(|e| {
        let status = match e {
            GeocodeError::EmptyQuery => StatusCode::BAD_REQUEST,
            GeocodeError::NoResults(_) => StatusCode::NOT_FOUND,
            GeocodeError::Network(_) | GeocodeError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
        };
        api_error(status, e.to_string())
    })?;

    eprintln!(
        "[{}] GET /api/search?query={} -> {} results ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        query,
        results.len(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    Ok(Json(SearchResults { results }))
}

// ─── GET /api/layers ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LayersQuery {
    pub style: Option<String>,
}

/// Tile stack plus the camera constants, so the page and the map model
/// cannot drift apart.
#[derive(Serialize)]
pub struct LayersResponse {
    pub style: TileStyle,
    pub layers: &'static [map::TileLayer],
    pub world: Viewport,
    pub city_zoom: u8,
}

pub async fn layers(Query(params): Query<LayersQuery>) -> Result<Json<LayersResponse>, ApiError> {
    let style = match params.style.as_deref() {
        Some(s) => s
            .parse::<TileStyle>()
            .map_err(|e| api_error(StatusCode::BAD_REQUEST, e))?,
        None => TileStyle::default(),
    };

    Ok(Json(LayersResponse {
        style,
        layers: map::tile_layers(style),
        world: Viewport::world(),
        city_zoom: CITY_ZOOM,
    }))
}
