//! Job Board API
//!
//! Serves the filtered job feed and accepts new postings over a JSON REST
//! API using Axum.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use common::filter::{FilterSpec, LocationMatch, evaluate};
use common::preferences::{Theme, load_theme, toggle_theme};
use common::{FileStorage, FilterError, JobRecord, JobStore, NewJob, StoreError};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Query parameters for the feed endpoint. Empty or missing means "any".
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
    #[serde(rename = "type")]
    employment_type: Option<String>,
    experience: Option<String>,
    location: Option<String>,
    salary: Option<String>,
}

impl SearchParams {
    fn filter_spec(&self, location_match: LocationMatch) -> Result<FilterSpec, FilterError> {
        let field = |value: &Option<String>| value.clone().unwrap_or_default();
        let spec = FilterSpec::from_inputs(
            &field(&self.q),
            &field(&self.employment_type),
            &field(&self.experience),
            &field(&self.location),
            &field(&self.salary),
        )?;
        Ok(spec.with_location_match(location_match))
    }
}

/// Feed returned by `GET /jobs`
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    query: String,
    total_results: usize,
    featured: Vec<JobRecord>,
    all: Vec<JobRecord>,
}

#[derive(Debug, Serialize)]
struct ThemeResponse {
    theme: Theme,
}

#[derive(Debug, Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Internal(String),
}

impl From<FilterError> for ApiError {
    fn from(e: FilterError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        error!(error = %e, "storage failure");
        ApiError::Internal("failed to save board state".to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// Shared application state. Each request holds the store lock for its
/// whole read-modify-write cycle.
pub struct AppState {
    store: Mutex<JobStore<FileStorage>>,
    location_match: LocationMatch,
}

impl AppState {
    pub fn new(store: JobStore<FileStorage>, location_match: LocationMatch) -> Self {
        AppState {
            store: Mutex::new(store),
            location_match,
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, JobStore<FileStorage>>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::Internal("job store lock poisoned".to_string()))
    }
}

/// Handler for GET /jobs?q=&type=&experience=&location=&salary=
async fn feed_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<FeedResponse>, ApiError> {
    let spec = params.filter_spec(state.location_match)?;
    let jobs = state.store()?.load();
    let feed = evaluate(&jobs, &spec);
    debug!(
        unfiltered = spec.is_unfiltered(),
        matched = feed.all.len(),
        featured = feed.featured.len(),
        salary = %spec.salary.map(|range| range.to_string()).unwrap_or_default(),
        "evaluated feed"
    );

    Ok(Json(FeedResponse {
        query: spec.query.clone(),
        total_results: feed.all.len(),
        featured: feed.featured.into_iter().cloned().collect(),
        all: feed.all.into_iter().cloned().collect(),
    }))
}

/// Handler for POST /jobs
async fn post_job_handler(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<NewJob>,
) -> Result<(StatusCode, Json<JobRecord>), ApiError> {
    let required = [
        ("title", &submission.title),
        ("company", &submission.company),
        ("location", &submission.location),
        ("type", &submission.employment_type),
        ("experience", &submission.experience_level),
    ];
    if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ApiError::BadRequest(format!("{name} is required")));
    }

    let record = state
        .store()?
        .publish(submission, Utc::now().timestamp_millis())?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for POST /jobs/{id}/apply
async fn apply_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let job = state
        .store()?
        .find(id)
        .ok_or_else(|| ApiError::NotFound(format!("no job with id {id}")))?;

    info!(id = job.id, title = %job.title, "application started");
    Ok(Json(MessageResponse {
        message: format!("Attempting to apply for Job ID: {}", job.id),
    }))
}

/// Handler for GET /theme
async fn theme_handler(State(state): State<Arc<AppState>>) -> Result<Json<ThemeResponse>, ApiError> {
    let theme = load_theme(state.store()?.storage());
    Ok(Json(ThemeResponse { theme }))
}

/// Handler for POST /theme/toggle
async fn toggle_theme_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let theme = toggle_theme(state.store()?.storage_mut())?;
    Ok(Json(ThemeResponse { theme }))
}

/// Handler for GET / (root)
async fn root_handler() -> &'static str {
    "💼 Job Board API\n\nEndpoints:\n  GET  /jobs?q=&type=&experience=&location=&salary= - Featured and full job feeds\n  POST /jobs - Publish a job (JSON body)\n  POST /jobs/{id}/apply - Start an application\n  GET  /theme, POST /theme/toggle - Theme preference\n\nExample:\n  curl 'http://127.0.0.1:3000/jobs?q=engineer&salary=50000-70000'\n  curl 'http://127.0.0.1:3000/jobs?salary=150000%2B'  (encode the '+' of open-ended ranges as %2B)"
}

pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/jobs", get(feed_handler).post(post_job_handler))
        .route("/jobs/{id}/apply", post(apply_handler))
        .route("/theme", get(theme_handler))
        .route("/theme/toggle", post(toggle_theme_handler))
        .with_state(state)
}
