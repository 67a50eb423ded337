//! JSON API over the catalog and calendar

pub mod params;

use std::sync::Arc;

use axum::{
    Router,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, instrument, warn};

use crate::calendar::MonthGrid;
use crate::catalog::{Catalog, CatalogStats, estimate_stay_cost};
use crate::config::DefaultsConfig;
use crate::models::{Location, Vehicle};
use crate::VanScoutError;

pub use params::{PopularParams, SearchParams, SearchRequest, VanListParams};

/// Shared, read-only handler state
#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub defaults: DefaultsConfig,
}

type SharedState = Arc<AppState>;

/// Handler failure mapped to a status code and `{"error": ...}` body
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<VanScoutError> for ApiError {
    fn from(err: VanScoutError) -> Self {
        match err {
            VanScoutError::Validation { message } => ApiError::BadRequest(message),
            other => ApiError::Internal(other.user_message()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Vehicle plus the price of the searched stay
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableVehicle {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    pub total_price: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub location: String,
    pub location_name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,
    /// Flat estimate at the configured average daily rate
    pub estimated_cost: u32,
    pub vehicles: Vec<AvailableVehicle>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LocationParams {
    pub q: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/vans", get(list_vans))
        .route("/vans/popular", get(popular_vans))
        .route("/vans/{id}", get(get_van))
        .route("/locations", get(list_locations))
        .route("/search", get(search))
        .route("/calendar/{year}/{month}", get(calendar_month))
        .route("/stats", get(stats))
        .with_state(Arc::new(state))
}

#[instrument(skip(state))]
async fn list_vans(
    State(state): State<SharedState>,
    params: Result<Query<VanListParams>, QueryRejection>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let Query(params) = params?;
    let filter = params.into_filter()?;
    let vans: Vec<Vehicle> = state.catalog.filter(&filter).into_iter().cloned().collect();
    debug!("{} vans match", vans.len());
    Ok(Json(vans))
}

#[instrument(skip(state))]
async fn popular_vans(
    State(state): State<SharedState>,
    params: Result<Query<PopularParams>, QueryRejection>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let Query(params) = params?;
    let limit = params.limit_or(state.defaults.popular_limit as usize)?;
    Ok(Json(state.catalog.top_rated(limit).into_iter().cloned().collect()))
}

#[instrument(skip(state))]
async fn get_van(
    State(state): State<SharedState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vehicle>, ApiError> {
    let Path(id) = id?;
    state
        .catalog
        .vehicle_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("No van with id '{id}'")))
}

#[instrument(skip(state))]
async fn list_locations(
    State(state): State<SharedState>,
    params: Result<Query<LocationParams>, QueryRejection>,
) -> Result<Json<Vec<Location>>, ApiError> {
    let Query(params) = params?;
    let term = params.q.unwrap_or_default();
    Ok(Json(state.catalog.search_locations(&term).into_iter().cloned().collect()))
}

#[instrument(skip(state))]
async fn search(
    State(state): State<SharedState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params?;
    let SearchRequest { location, range } = params.into_request()?;
    let days = range.duration_days();

    let vehicles: Vec<AvailableVehicle> = state
        .catalog
        .available_vehicles(range.start, range.end, &location)
        .into_iter()
        .map(|vehicle| AvailableVehicle {
            vehicle: vehicle.clone(),
            total_price: vehicle.stay_price(days),
        })
        .collect();

    let location_name = state.catalog.location_by_id(&location).map(|l| l.name.clone());
    if location_name.is_none() {
        warn!("Search for unknown location '{location}'");
    }
    debug!(
        "{} vans available at {location} from {} to {}",
        vehicles.len(),
        range.start,
        range.end
    );

    Ok(Json(SearchResponse {
        location,
        location_name,
        start_date: range.start,
        end_date: range.end,
        duration_days: days,
        estimated_cost: estimate_stay_cost(days, state.defaults.estimated_daily_rate),
        vehicles,
    }))
}

#[instrument]
async fn calendar_month(
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> Result<Json<MonthGrid>, ApiError> {
    let Path((year, month)) = path?;
    let today = Local::now().date_naive();
    MonthGrid::for_month(year, month, today)
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest(format!("{year}-{month:02} is not a valid month")))
}

async fn stats(State(state): State<SharedState>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}
